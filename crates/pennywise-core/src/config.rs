//! Advisor configuration
//!
//! Holds the tip catalog and the stub responder settings. Config is loaded
//! with a two-layer resolution:
//! 1. Explicit path, or the override in the data dir
//!    (~/.local/share/pennywise/config/advisor.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! An override may set only some keys; anything it leaves out keeps the
//! embedded value. The result is validated before it is returned.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::catalog::AdviceCatalog;
use crate::error::{Error, Result};
use crate::models::{Segment, Topic};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/advisor.toml");

/// Environment variable overriding the responder delay (milliseconds)
pub const DELAY_ENV_VAR: &str = "PENNYWISE_RESPONDER_DELAY_MS";

const DEFAULT_GREETING: &str = "Hello! I'm your personal finance chatbot powered by IBM Watson and Granite AI. I'm here to help you with budgeting, saving, investing, and financial planning. What would you like to know?";
const DEFAULT_FALLBACK: &str = "I understand you're looking for financial guidance. Let me help you with that based on your profile.";

/// Stub responder settings
#[derive(Debug, Clone, PartialEq)]
pub struct ResponderConfig {
    /// Simulated latency before each reply
    pub delay: Duration,
    /// Reply when the message looks like a greeting
    pub greeting: String,
    /// Reply for everything else
    pub fallback: String,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
            greeting: DEFAULT_GREETING.to_string(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub responder: ResponderConfig,
    pub catalog: AdviceCatalog,
}

impl AdvisorConfig {
    /// Embedded defaults only
    pub fn embedded() -> Result<Self> {
        parse_config(DEFAULT_CONFIG, None)
    }

    /// Resolve config: explicit path, then data-dir override, then embedded
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let source = match path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };

        let mut config = match source {
            Some(path) => {
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                let config = parse_config(DEFAULT_CONFIG, Some(&content))?;
                tracing::info!(path = %path.display(), "Loaded advisor config override");
                config
            }
            None => {
                tracing::debug!("Using embedded advisor config");
                Self::embedded()?
            }
        };

        if let Some(delay) = delay_from_env()? {
            config.responder.delay = delay;
        }

        Ok(config)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("pennywise").join("config").join("advisor.toml"))
}

fn delay_from_env() -> Result<Option<Duration>> {
    match std::env::var(DELAY_ENV_VAR) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|e| Error::Config(format!("Invalid {}: {}", DELAY_ENV_VAR, e))),
        Err(_) => Ok(None),
    }
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    responder: Option<RawResponder>,
    advice: Option<HashMap<String, RawTips>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawResponder {
    delay_ms: Option<u64>,
    greeting: Option<String>,
    fallback: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTips {
    student: Option<Vec<String>>,
    professional: Option<Vec<String>>,
}

/// Parse the base config, then layer an override on top
fn parse_config(base: &str, overlay: Option<&str>) -> Result<AdvisorConfig> {
    let mut responder = ResponderConfig::default();
    let mut tips: HashMap<Topic, HashMap<Segment, Vec<String>>> = HashMap::new();

    for content in std::iter::once(base).chain(overlay) {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;
        apply(raw, &mut responder, &mut tips)?;
    }

    Ok(AdvisorConfig {
        responder,
        catalog: AdviceCatalog::new(tips)?,
    })
}

fn apply(
    raw: RawConfig,
    responder: &mut ResponderConfig,
    tips: &mut HashMap<Topic, HashMap<Segment, Vec<String>>>,
) -> Result<()> {
    if let Some(raw_responder) = raw.responder {
        if let Some(delay_ms) = raw_responder.delay_ms {
            responder.delay = Duration::from_millis(delay_ms);
        }
        if let Some(greeting) = raw_responder.greeting {
            responder.greeting = greeting;
        }
        if let Some(fallback) = raw_responder.fallback {
            responder.fallback = fallback;
        }
    }

    for (topic_name, raw_tips) in raw.advice.unwrap_or_default() {
        let topic: Topic = topic_name.parse().map_err(Error::Config)?;
        let by_segment = tips.entry(topic).or_default();

        if let Some(student) = raw_tips.student {
            by_segment.insert(Segment::Student, student);
        }
        if let Some(professional) = raw_tips.professional {
            by_segment.insert(Segment::Professional, professional);
        }
    }

    Ok(())
}
