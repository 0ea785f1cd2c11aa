//! Budget report command

use anyhow::{Context, Result};
use pennywise_core::{Advisor, ExpenseSet, UserProfile};

use crate::cli::ExpenseArgs;

/// Turn the form amounts into an expense set (rejects negatives)
pub fn expense_set(args: ExpenseArgs) -> Result<ExpenseSet> {
    let expenses = ExpenseSet::new()
        .with("Housing", args.housing)
        .and_then(|e| e.with("Food", args.food))
        .and_then(|e| e.with("Transportation", args.transportation))
        .and_then(|e| e.with("Entertainment", args.entertainment))
        .and_then(|e| e.with("Utilities", args.utilities))
        .and_then(|e| e.with("Other", args.other))
        .context("Invalid expense amount")?;
    Ok(expenses)
}

pub fn cmd_budget(
    advisor: &Advisor,
    profile: UserProfile,
    args: ExpenseArgs,
    json: bool,
) -> Result<()> {
    let expenses = expense_set(args)?;

    if json {
        let summary = advisor.analyze_budget(profile.monthly_income, &expenses);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", advisor.budget_report(&profile, &expenses));
    Ok(())
}
