//! Advisor - ties classification, routing, tips and tone together
//!
//! Flow for a chat message:
//! 1. Classify the user (profile occupation, else message keywords)
//! 2. Route the message to a topic, or to the generative responder
//! 3. Look up tips / ask the responder
//! 4. Adapt the reply for the segment and append it to the transcript

use std::sync::Arc;

use crate::adapter::ResponseAdapter;
use crate::ai::{Responder, StubResponder};
use crate::budget::{BudgetAnalyzer, BudgetSummary};
use crate::catalog::AdviceCatalog;
use crate::classifier::SegmentClassifier;
use crate::config::AdvisorConfig;
use crate::error::Result;
use crate::models::{ChatMessage, ExpenseSet, Segment, Topic, UserProfile};
use crate::router::{IntentRouter, Route};
use crate::session::Session;

/// Stateless component bundle, built once and shared by all sessions
#[derive(Clone)]
pub struct Advisor {
    classifier: SegmentClassifier,
    adapter: ResponseAdapter,
    router: IntentRouter,
    analyzer: BudgetAnalyzer,
    catalog: AdviceCatalog,
    responder: Arc<dyn Responder>,
}

impl Advisor {
    /// Build from configuration, answering generic messages with the stub responder
    pub fn new(config: AdvisorConfig) -> Self {
        let responder = Arc::new(StubResponder::new(&config.responder));
        Self::with_responder(config.catalog, responder)
    }

    /// Build with a custom responder (e.g. a real remote AI client)
    pub fn with_responder(catalog: AdviceCatalog, responder: Arc<dyn Responder>) -> Self {
        Self {
            classifier: SegmentClassifier::new(),
            adapter: ResponseAdapter::new(),
            router: IntentRouter::new(),
            analyzer: BudgetAnalyzer::new(),
            catalog,
            responder,
        }
    }

    pub fn catalog(&self) -> &AdviceCatalog {
        &self.catalog
    }

    pub fn classify(&self, text: &str, profile: &UserProfile) -> Segment {
        self.classifier.classify(text, profile)
    }

    /// Answer a chat message and record both sides in the transcript.
    ///
    /// Blank messages are ignored and return `None`.
    pub async fn handle_message(&self, session: &mut Session, text: &str) -> Result<Option<String>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        session.push(ChatMessage::user(text));

        let segment = self.classifier.classify(text, session.profile());
        let response = match self.router.route(text) {
            Route::Topic(topic) => self.catalog.advice_for(topic, segment),
            Route::Generic => {
                tracing::debug!(responder = self.responder.name(), "Asking responder");
                self.responder
                    .respond(text, session.profile())
                    .await
                    .inspect_err(|e| {
                        tracing::warn!(
                            responder = self.responder.name(),
                            error = %e,
                            "Responder failed"
                        )
                    })?
            }
        };

        let reply = self.adapter.adapt(&response, segment);
        session.push(ChatMessage::assistant(reply.clone()));
        Ok(Some(reply))
    }

    /// Quick-action tips for a topic, appended to the transcript as-is
    /// (no tone adaptation). The segment comes from the profile alone.
    pub fn quick_topic(&self, session: &mut Session, topic: Topic) -> String {
        let segment = self.classifier.classify("", session.profile());
        let tips = self.catalog.advice_for(topic, segment);
        session.push(ChatMessage::assistant(tips.clone()));
        tips
    }

    /// Tips by free-form topic name, outside any session. Unknown names get
    /// the clarification reply.
    pub fn topic_advice(&self, profile: &UserProfile, topic: &str) -> String {
        let segment = self.classifier.classify("", profile);
        self.catalog.get_advice(topic, segment)
    }

    /// Budget report for the session's income. Not added to the transcript.
    pub fn budget_summary(&self, session: &Session, expenses: &ExpenseSet) -> String {
        self.budget_report(session.profile(), expenses)
    }

    /// Budget report for a profile's income
    pub fn budget_report(&self, profile: &UserProfile, expenses: &ExpenseSet) -> String {
        let segment = self.classifier.classify("", profile);
        self.analyzer
            .summarize(profile.monthly_income, expenses, segment)
    }

    /// Budget metrics without rendering
    pub fn analyze_budget(&self, income: f64, expenses: &ExpenseSet) -> BudgetSummary {
        self.analyzer.analyze(income, expenses)
    }
}
