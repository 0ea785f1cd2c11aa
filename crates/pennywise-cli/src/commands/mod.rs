//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared setup (config, profile) and classify/config commands
//! - `chat` - Interactive chat and one-shot questions
//! - `advice` - Topic tips
//! - `budget` - Budget report

pub mod advice;
pub mod budget;
pub mod chat;
pub mod core;

// Re-export command functions for main.rs
pub use advice::*;
pub use budget::*;
pub use chat::*;
pub use core::*;
