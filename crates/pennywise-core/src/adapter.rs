//! Tone and vocabulary adaptation of assistant replies

use crate::models::Segment;

/// Jargon rewrites for the student segment, applied in this order.
///
/// Order matters: a later rule may match text produced by an earlier one
/// ("portfolio" → "collection of investments" is applied after "investment").
const STUDENT_VOCABULARY: &[(&str, &str)] = &[
    ("investment", "saving money"),
    ("portfolio", "collection of investments"),
    ("diversification", "not putting all eggs in one basket"),
    ("asset allocation", "how you split your money"),
];

const ENCOURAGING_PREFIX: &str = "Great question";

/// Rewrites replies for the audience segment
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseAdapter;

impl ResponseAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Adapt a reply. Professional replies pass through untouched.
    pub fn adapt(&self, response: &str, segment: Segment) -> String {
        match segment {
            Segment::Professional => response.to_string(),
            Segment::Student => {
                let simplified = STUDENT_VOCABULARY
                    .iter()
                    .fold(response.to_string(), |text, (term, plain)| {
                        text.replace(term, plain)
                    });

                if simplified.starts_with(ENCOURAGING_PREFIX) {
                    simplified
                } else {
                    format!("{}! {}", ENCOURAGING_PREFIX, simplified)
                }
            }
        }
    }
}
