//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pennywise_core::Occupation;

/// Pennywise - Personal finance advice tailored to students and professionals
#[derive(Parser)]
#[command(name = "pennywise")]
#[command(about = "Rule-based personal finance chatbot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Advisor config file (defaults to the data dir override, then built-in)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Your occupation: student, professional, other
    #[arg(long, default_value = "other", global = true)]
    pub occupation: Occupation,

    /// Your age (16-100)
    #[arg(long, default_value = "25", global = true)]
    pub age: u32,

    /// Monthly income in dollars
    #[arg(long, default_value = "3000", global = true)]
    pub income: f64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat
    ///
    /// Type a question and press enter. Slash commands:
    /// /tips <topic>, /budget, /history, /export, /quit
    Chat,

    /// Ask a single question
    Ask {
        /// The question
        text: String,

        /// Print the full transcript as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show tips for a topic (savings, budgeting, investing)
    Advice {
        /// Topic name
        topic: String,
    },

    /// Summarize a monthly budget against your income
    Budget {
        /// Housing/rent
        #[arg(long, default_value = "1000")]
        housing: f64,

        /// Food & groceries
        #[arg(long, default_value = "400")]
        food: f64,

        /// Transportation
        #[arg(long, default_value = "300")]
        transportation: f64,

        /// Entertainment
        #[arg(long, default_value = "200")]
        entertainment: f64,

        /// Utilities
        #[arg(long, default_value = "150")]
        utilities: f64,

        /// Other expenses
        #[arg(long, default_value = "200")]
        other: f64,

        /// Print the computed metrics as JSON instead of the report
        #[arg(long)]
        json: bool,
    },

    /// Show which segment a message would be classified as
    Classify {
        /// Message text
        #[arg(default_value = "")]
        text: String,
    },

    /// Inspect advisor configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the override config path
    Path,
    /// Validate the active config
    Check,
}

/// Monthly expense amounts from the budget form
#[derive(Debug, Clone, Copy)]
pub struct ExpenseArgs {
    pub housing: f64,
    pub food: f64,
    pub transportation: f64,
    pub entertainment: f64,
    pub utilities: f64,
    pub other: f64,
}
