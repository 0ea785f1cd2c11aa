//! Shared setup and small commands

use std::path::Path;

use anyhow::{Context, Result};
use pennywise_core::config::default_config_path;
use pennywise_core::{Advisor, AdvisorConfig, Occupation, Segment, Topic, UserProfile};

/// Load config and build the advisor
pub fn build_advisor(config_path: Option<&Path>) -> Result<Advisor> {
    let config = AdvisorConfig::load(config_path).context("Failed to load advisor config")?;
    Ok(Advisor::new(config))
}

/// Validate profile flags
pub fn build_profile(occupation: Occupation, age: u32, income: f64) -> Result<UserProfile> {
    UserProfile::new(occupation, age, income).context("Invalid profile")
}

pub fn cmd_classify(advisor: &Advisor, profile: &UserProfile, text: &str) -> Result<()> {
    let segment = advisor.classify(text, profile);
    println!("{}", segment);
    Ok(())
}

pub fn cmd_config_path() -> Result<()> {
    match default_config_path() {
        Some(path) => {
            let state = if path.exists() { "present" } else { "not present" };
            println!("{} ({})", path.display(), state);
        }
        None => println!("No data directory available on this platform"),
    }
    Ok(())
}

pub fn cmd_config_check(config_path: Option<&Path>) -> Result<()> {
    let config = AdvisorConfig::load(config_path).context("Advisor config is invalid")?;

    println!("✓ Advisor config is valid");
    println!("   Responder delay: {} ms", config.responder.delay.as_millis());
    for topic in Topic::all() {
        let counts: Vec<String> = Segment::all()
            .iter()
            .map(|segment| {
                format!(
                    "{} {}",
                    config.catalog.tips(*topic, *segment).len(),
                    segment
                )
            })
            .collect();
        println!("   {:10} {}", topic.as_str(), counts.join(", "));
    }
    Ok(())
}
