//! Canned responder with simulated latency
//!
//! Useful for demos and tests without a remote AI service.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::ResponderConfig;
use crate::error::Result;
use crate::models::UserProfile;

use super::Responder;

/// Placeholder for a remote generative service
#[derive(Debug, Clone)]
pub struct StubResponder {
    delay: Duration,
    greeting: String,
    fallback: String,
}

impl StubResponder {
    pub fn new(config: &ResponderConfig) -> Self {
        Self {
            delay: config.delay,
            greeting: config.greeting.clone(),
            fallback: config.fallback.clone(),
        }
    }

    /// Same replies, different latency
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    // Plain substring match, so "hi" also fires inside "this" or "which"
    fn is_greeting(text: &str) -> bool {
        let text = text.to_lowercase();
        text.contains("hello") || text.contains("hi")
    }
}

impl Default for StubResponder {
    fn default() -> Self {
        Self::new(&ResponderConfig::default())
    }
}

#[async_trait]
impl Responder for StubResponder {
    async fn respond(&self, text: &str, _profile: &UserProfile) -> Result<String> {
        tokio::time::sleep(self.delay).await;

        let reply = if Self::is_greeting(text) {
            &self.greeting
        } else {
            &self.fallback
        };
        Ok(reply.clone())
    }

    fn name(&self) -> &str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn fast_stub() -> StubResponder {
        StubResponder::default().with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_greeting() {
        let stub = fast_stub();
        let reply = stub
            .respond("Hello there", &UserProfile::default())
            .await
            .unwrap();
        assert_eq!(reply, ResponderConfig::default().greeting);
    }

    #[tokio::test]
    async fn test_hi_matches_inside_words() {
        let stub = fast_stub();
        let reply = stub
            .respond("what is this about", &UserProfile::default())
            .await
            .unwrap();
        assert_eq!(reply, ResponderConfig::default().greeting);
    }

    #[tokio::test]
    async fn test_fallback() {
        let stub = fast_stub();
        let reply = stub
            .respond("tell me about loans", &UserProfile::default())
            .await
            .unwrap();
        assert_eq!(reply, ResponderConfig::default().fallback);
    }

    #[tokio::test]
    async fn test_delay_is_applied() {
        let stub = StubResponder::default().with_delay(Duration::from_millis(30));
        let start = Instant::now();
        stub.respond("loans", &UserProfile::default()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(StubResponder::default().delay(), Duration::from_millis(500));
        assert_eq!(StubResponder::default().name(), "stub");
    }
}
