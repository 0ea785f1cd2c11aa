//! Generative responder abstraction
//!
//! Messages that match no advice topic are answered by a [`Responder`]. The
//! only built-in implementation is [`StubResponder`], which stands in for a
//! remote AI service with canned replies and a fixed delay. A real client
//! implements the same trait and is handed to
//! [`Advisor::with_responder`](crate::Advisor::with_responder); routing code
//! does not change.

mod stub;

pub use stub::StubResponder;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::UserProfile;

/// Capability to answer a free-text message
///
/// Implementations should be Send + Sync so one advisor can serve many sessions.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce a reply for the message. Remote implementations report
    /// failures and timeouts as [`Error::Responder`](crate::Error::Responder).
    async fn respond(&self, text: &str, profile: &UserProfile) -> Result<String>;

    /// Short name for logging
    fn name(&self) -> &str;
}
