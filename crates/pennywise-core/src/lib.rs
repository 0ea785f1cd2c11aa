//! Pennywise Core Library
//!
//! Rule-based personal finance advisor:
//! - Segment classification (student vs. professional)
//! - Intent routing to canned advice topics
//! - Advice catalog loaded from configuration
//! - Tone adaptation of replies per segment
//! - Budget analysis with a formatted report
//! - Pluggable generative responder (stubbed)

pub mod adapter;
pub mod advisor;
pub mod ai;
pub mod budget;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod session;

pub use adapter::ResponseAdapter;
pub use advisor::Advisor;
pub use ai::{Responder, StubResponder};
pub use budget::{BudgetAnalyzer, BudgetInsight, BudgetSummary, CategoryShare};
pub use catalog::{AdviceCatalog, CLARIFICATION_MESSAGE};
pub use classifier::{SegmentClassifier, SegmentScores};
pub use config::{AdvisorConfig, ResponderConfig};
pub use error::{Error, Result};
pub use models::{
    ChatMessage, ChatRole, ExpenseSet, Occupation, Segment, Topic, UserProfile,
};
pub use router::{IntentRouter, Route};
pub use session::{Session, WELCOME_MESSAGE};
