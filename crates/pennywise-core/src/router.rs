//! Intent routing for chat messages
//!
//! Rules are checked in a fixed order and the first match wins. "budget"
//! appears in both the savings and budgeting rules, so it always routes to
//! savings.

use crate::models::Topic;

/// Keyword rules, in priority order
const RULES: &[(Topic, &[&str])] = &[
    (Topic::Savings, &["budget", "save", "saving"]),
    (Topic::Investing, &["invest", "investment", "stock"]),
    (Topic::Budgeting, &["budget", "spend", "expense"]),
];

/// Where a message should be answered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Canned tips for a topic
    Topic(Topic),
    /// No topic matched; hand off to the generative responder
    Generic,
}

/// Picks a [`Route`] for a chat message
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentRouter;

impl IntentRouter {
    pub fn new() -> Self {
        Self
    }

    pub fn route(&self, text: &str) -> Route {
        let text = text.to_lowercase();

        let route = RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
            .map(|(topic, _)| Route::Topic(*topic))
            .unwrap_or(Route::Generic);

        tracing::debug!(?route, "Routed message");
        route
    }
}
