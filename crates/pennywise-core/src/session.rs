//! Per-user conversation state

use crate::models::{ChatMessage, UserProfile};

/// First assistant message of every session
pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI-powered personal finance advisor. I can help you with budgeting, saving, investing, and financial planning. I'll adapt my advice based on whether you're a student or working professional. What would you like to know?";

/// Profile and transcript for one user.
///
/// Sessions are independent values passed into the advisor explicitly, so
/// any number of them can share one [`Advisor`](crate::Advisor).
#[derive(Debug, Clone)]
pub struct Session {
    profile: UserProfile,
    messages: Vec<ChatMessage>,
}

impl Session {
    /// Start a session; the transcript opens with the welcome message
    pub fn new(profile: UserProfile) -> Self {
        tracing::info!(
            occupation = profile.occupation.as_str(),
            "Chat session started"
        );
        Self {
            profile,
            messages: vec![ChatMessage::assistant(WELCOME_MESSAGE)],
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Replace the profile (no history of earlier versions is kept)
    pub fn update_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
    }

    /// Messages in display order
    pub fn history(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub(crate) fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Transcript as pretty JSON
    pub fn export_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(UserProfile::default())
    }
}
