//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::{Cursor, Write};
use std::time::Duration;

use pennywise_core::{
    Advisor, AdvisorConfig, Occupation, Segment, Topic, UserProfile, CLARIFICATION_MESSAGE,
    WELCOME_MESSAGE,
};

use crate::cli::ExpenseArgs;
use crate::commands::{self, ChatInput};

fn test_advisor() -> Advisor {
    let mut config = AdvisorConfig::embedded().unwrap();
    config.responder.delay = Duration::ZERO;
    Advisor::new(config)
}

fn profile(occupation: Occupation) -> UserProfile {
    UserProfile::new(occupation, 25, 3000.0).unwrap()
}

fn default_expenses() -> ExpenseArgs {
    ExpenseArgs {
        housing: 1000.0,
        food: 400.0,
        transportation: 300.0,
        entertainment: 200.0,
        utilities: 150.0,
        other: 200.0,
    }
}

async fn run_chat(occupation: Occupation, input: &str) -> String {
    let advisor = test_advisor();
    let mut out = Vec::new();
    commands::cmd_chat(
        &advisor,
        profile(occupation),
        Cursor::new(input.to_string()),
        &mut out,
    )
    .await
    .unwrap();
    String::from_utf8(out).unwrap()
}

// ========== Chat Input Parsing Tests ==========

#[test]
fn test_parse_plain_message() {
    assert_eq!(
        commands::parse_chat_input("  how do I save?  "),
        ChatInput::Message("how do I save?".to_string())
    );
}

#[test]
fn test_parse_slash_commands() {
    assert_eq!(
        commands::parse_chat_input("/tips investing"),
        ChatInput::Tips("investing".to_string())
    );
    assert_eq!(commands::parse_chat_input("/TIPS"), ChatInput::Tips(String::new()));
    assert_eq!(commands::parse_chat_input("/budget"), ChatInput::Budget);
    assert_eq!(commands::parse_chat_input("/history"), ChatInput::History);
    assert_eq!(commands::parse_chat_input("/export"), ChatInput::Export);
    assert_eq!(commands::parse_chat_input("/exit"), ChatInput::Quit);
    assert_eq!(
        commands::parse_chat_input("/dance now"),
        ChatInput::Unknown("dance".to_string())
    );
}

// ========== Chat Command Tests ==========

#[tokio::test]
async fn test_chat_prints_welcome_and_replies() {
    let output = run_chat(Occupation::Student, "How can I save money?\n/quit\n").await;

    assert!(output.starts_with(WELCOME_MESSAGE));
    assert!(output.contains("Great question! • Start with the 50/30/20 rule"));
}

#[tokio::test]
async fn test_chat_stops_at_quit() {
    let output = run_chat(Occupation::Professional, "/quit\nhow do I invest\n").await;
    assert!(!output.contains("Diversify across asset classes"));
}

#[tokio::test]
async fn test_chat_tips_and_unknown_topic() {
    let output = run_chat(Occupation::Professional, "/tips budgeting\n/tips crypto\n").await;

    assert!(output.contains("• Use zero-based budgeting to optimize every dollar"));
    assert!(output.contains(CLARIFICATION_MESSAGE));
    assert!(!output.contains("Unknown topic"));
}

#[tokio::test]
async fn test_chat_bare_tips_asks_for_clarification() {
    let output = run_chat(Occupation::Student, "/tips\n").await;
    assert_eq!(output.matches(CLARIFICATION_MESSAGE).count(), 1);
}

#[tokio::test]
async fn test_chat_budget_report() {
    let output = run_chat(Occupation::Student, "/budget\n").await;
    assert!(output.contains("📊 **Your Monthly Budget Summary**"));
    assert!(output.contains("📈 **Savings Rate**: 25.0%"));
}

#[tokio::test]
async fn test_chat_history_and_export() {
    let output = run_chat(Occupation::Other, "hello\n/history\n/export\n").await;

    assert!(output.contains("You: hello"));
    assert!(output.contains("Advisor: Great question! Hello! I'm your personal finance chatbot"));
    assert!(output.contains("\"role\": \"user\""));
}

#[tokio::test]
async fn test_chat_ignores_blank_lines() {
    let output = run_chat(Occupation::Other, "\n   \n/history\n").await;
    // only the welcome message is in the history
    assert_eq!(output.matches("Advisor:").count(), 1);
    assert!(!output.contains("You:"));
}

#[tokio::test]
async fn test_cmd_ask() {
    let advisor = test_advisor();
    let result = commands::cmd_ask(&advisor, profile(Occupation::Student), "stock tips", false).await;
    assert!(result.is_ok());

    let result = commands::cmd_ask(&advisor, profile(Occupation::Student), "stock tips", true).await;
    assert!(result.is_ok());
}

// ========== Advice Command Tests ==========

#[test]
fn test_advice_text_known_topic() {
    let advisor = test_advisor();
    let text = commands::advice_text(&advisor, &profile(Occupation::Professional), "Investing");
    assert_eq!(
        text,
        advisor.catalog().advice_for(Topic::Investing, Segment::Professional)
    );
}

#[test]
fn test_advice_text_unknown_topic() {
    let advisor = test_advisor();
    let text = commands::advice_text(&advisor, &profile(Occupation::Student), "retirement");
    assert_eq!(text, CLARIFICATION_MESSAGE);
}

#[test]
fn test_advice_text_is_case_insensitive() {
    let advisor = test_advisor();
    let text = commands::advice_text(&advisor, &profile(Occupation::Other), " SAVINGS ");
    assert_eq!(
        text,
        advisor.catalog().advice_for(Topic::Savings, Segment::Student)
    );
}

#[test]
fn test_cmd_advice() {
    let advisor = test_advisor();
    assert!(commands::cmd_advice(&advisor, profile(Occupation::Other), "savings").is_ok());
}

// ========== Budget Command Tests ==========

#[test]
fn test_expense_set_from_args() {
    let expenses = commands::expense_set(default_expenses()).unwrap();
    assert_eq!(expenses.len(), 6);
    assert_eq!(expenses.total(), 2250.0);
    assert_eq!(expenses.get("Utilities"), Some(150.0));
}

#[test]
fn test_expense_set_rejects_negative() {
    let args = ExpenseArgs {
        food: -10.0,
        ..default_expenses()
    };
    assert!(commands::expense_set(args).is_err());
}

#[test]
fn test_budget_json_matches_advisor() {
    let advisor = test_advisor();
    let expenses = commands::expense_set(default_expenses()).unwrap();
    let summary = advisor.analyze_budget(3000.0, &expenses);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["total_expenses"], 2250.0);
    assert_eq!(json["remaining"], 750.0);
}

#[test]
fn test_cmd_budget() {
    let advisor = test_advisor();
    assert!(
        commands::cmd_budget(&advisor, profile(Occupation::Student), default_expenses(), false)
            .is_ok()
    );
    assert!(
        commands::cmd_budget(&advisor, profile(Occupation::Student), default_expenses(), true)
            .is_ok()
    );
}

// ========== Setup Tests ==========

#[test]
fn test_build_profile_validation() {
    assert!(commands::build_profile(Occupation::Student, 20, 500.0).is_ok());
    assert!(commands::build_profile(Occupation::Student, 12, 500.0).is_err());
    assert!(commands::build_profile(Occupation::Student, 20, -500.0).is_err());
}

#[test]
fn test_cmd_classify() {
    let advisor = test_advisor();
    assert!(commands::cmd_classify(&advisor, &profile(Occupation::Other), "basic").is_ok());
}

#[test]
fn test_config_check_with_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[responder]\ndelay_ms = 10").unwrap();
    assert!(commands::cmd_config_check(Some(file.path())).is_ok());
}

#[test]
fn test_config_check_rejects_bad_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[advice.savings]\nstudent = \"not a list\"").unwrap();
    assert!(commands::cmd_config_check(Some(file.path())).is_err());
    assert!(commands::build_advisor(Some(file.path())).is_err());
}

#[test]
fn test_cmd_config_path() {
    assert!(commands::cmd_config_path().is_ok());
}
