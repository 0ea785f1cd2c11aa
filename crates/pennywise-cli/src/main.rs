//! Pennywise CLI - Personal finance chatbot
//!
//! Usage:
//!   pennywise chat                         Interactive chat
//!   pennywise ask "How do I save?"         One-shot question
//!   pennywise advice investing             Tips for a topic
//!   pennywise budget --housing 1200        Budget report

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn, keeps chat output clean)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config_path = cli.config.as_deref();
    let profile = || commands::build_profile(cli.occupation, cli.age, cli.income);

    match &cli.command {
        Commands::Chat => {
            let advisor = commands::build_advisor(config_path)?;
            let stdin = std::io::stdin();
            commands::cmd_chat(&advisor, profile()?, stdin.lock(), std::io::stdout()).await
        }
        Commands::Ask { text, json } => {
            let advisor = commands::build_advisor(config_path)?;
            commands::cmd_ask(&advisor, profile()?, text, *json).await
        }
        Commands::Advice { topic } => {
            let advisor = commands::build_advisor(config_path)?;
            commands::cmd_advice(&advisor, profile()?, topic)
        }
        Commands::Budget {
            housing,
            food,
            transportation,
            entertainment,
            utilities,
            other,
            json,
        } => {
            let advisor = commands::build_advisor(config_path)?;
            let expenses = ExpenseArgs {
                housing: *housing,
                food: *food,
                transportation: *transportation,
                entertainment: *entertainment,
                utilities: *utilities,
                other: *other,
            };
            commands::cmd_budget(&advisor, profile()?, expenses, *json)
        }
        Commands::Classify { text } => {
            let advisor = commands::build_advisor(config_path)?;
            commands::cmd_classify(&advisor, &profile()?, text)
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::cmd_config_path(),
            ConfigAction::Check => commands::cmd_config_check(config_path),
        },
    }
}
