//! Canned advice catalog
//!
//! Tips are keyed by (topic, segment). The catalog is built once from
//! configuration and checked for completeness at construction, so a missing
//! cell is a startup error rather than a failed lookup mid-conversation.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::{Segment, Topic};

/// Reply for topics the catalog does not know
pub const CLARIFICATION_MESSAGE: &str = "I'd be happy to help with that! Could you be more specific about what financial topic you'd like advice on?";

/// Immutable topic → segment → tips table
#[derive(Debug, Clone)]
pub struct AdviceCatalog {
    tips: HashMap<Topic, HashMap<Segment, Vec<String>>>,
}

impl AdviceCatalog {
    /// Build a catalog, failing unless every topic has tips for every segment
    pub fn new(tips: HashMap<Topic, HashMap<Segment, Vec<String>>>) -> Result<Self> {
        let catalog = Self { tips };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        for topic in Topic::all() {
            for segment in Segment::all() {
                let present = self
                    .tips
                    .get(topic)
                    .and_then(|by_segment| by_segment.get(segment))
                    .is_some_and(|tips| !tips.is_empty());
                if !present {
                    missing.push(format!("{}.{}", topic, segment));
                }
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "Advice catalog is missing tips for: {}",
                missing.join(", ")
            )))
        }
    }

    /// Look up advice by free-form topic name (case-insensitive).
    ///
    /// Unknown topics get the clarification message instead of an error.
    pub fn get_advice(&self, topic: &str, segment: Segment) -> String {
        match topic.parse::<Topic>() {
            Ok(topic) => self.advice_for(topic, segment),
            Err(_) => {
                tracing::warn!(topic = %topic, "Unknown advice topic, asking for clarification");
                CLARIFICATION_MESSAGE.to_string()
            }
        }
    }

    /// Formatted tips for a known topic: "• " bullets separated by blank lines
    pub fn advice_for(&self, topic: Topic, segment: Segment) -> String {
        let tips = self.tips(topic, segment);
        tracing::debug!(
            topic = topic.as_str(),
            segment = segment.as_str(),
            count = tips.len(),
            "Advice lookup"
        );

        tips.iter()
            .map(|tip| format!("• {}", tip))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Raw tips for a cell
    pub fn tips(&self, topic: Topic, segment: Segment) -> &[String] {
        self.tips
            .get(&topic)
            .and_then(|by_segment| by_segment.get(&segment))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
