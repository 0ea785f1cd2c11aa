//! Topic tips command

use anyhow::Result;
use pennywise_core::{Advisor, UserProfile};

/// Print tips for a topic. Unknown topics get the clarification reply.
pub fn cmd_advice(advisor: &Advisor, profile: UserProfile, topic: &str) -> Result<()> {
    println!("{}", advice_text(advisor, &profile, topic));
    Ok(())
}

pub fn advice_text(advisor: &Advisor, profile: &UserProfile, topic: &str) -> String {
    advisor.topic_advice(profile, topic)
}
