//! Chat commands (interactive loop and one-shot questions)

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use pennywise_core::{Advisor, ChatRole, ExpenseSet, Session, UserProfile};

const CHAT_HELP: &str = "Commands: /tips <savings|budgeting|investing>, /budget, /history, /export, /quit";

/// One line of chat input
#[derive(Debug, PartialEq, Eq)]
pub enum ChatInput {
    Message(String),
    Tips(String),
    Budget,
    History,
    Export,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_chat_input(line: &str) -> ChatInput {
    let line = line.trim();
    let Some(command) = line.strip_prefix('/') else {
        return ChatInput::Message(line.to_string());
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(name, arg)| (name, arg.trim()))
        .unwrap_or((command, ""));

    match name.to_lowercase().as_str() {
        "tips" => ChatInput::Tips(arg.to_string()),
        "budget" => ChatInput::Budget,
        "history" => ChatInput::History,
        "export" => ChatInput::Export,
        "help" => ChatInput::Help,
        "quit" | "exit" => ChatInput::Quit,
        _ => ChatInput::Unknown(name.to_string()),
    }
}

/// Interactive chat until /quit or end of input
pub async fn cmd_chat<R: BufRead, W: Write>(
    advisor: &Advisor,
    profile: UserProfile,
    input: R,
    mut out: W,
) -> Result<()> {
    let mut session = Session::new(profile);

    for message in session.history() {
        writeln!(out, "{}\n", message.content)?;
    }
    writeln!(out, "{}\n", CHAT_HELP)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;

        match parse_chat_input(&line) {
            ChatInput::Message(text) => {
                if let Some(reply) = advisor.handle_message(&mut session, &text).await? {
                    writeln!(out, "{}\n", reply)?;
                }
            }
            ChatInput::Tips(topic) => {
                let tips = match topic.parse() {
                    Ok(topic) => advisor.quick_topic(&mut session, topic),
                    // bare `/tips` lands here too
                    Err(_) => advisor.topic_advice(session.profile(), &topic),
                };
                writeln!(out, "{}\n", tips)?;
            }
            ChatInput::Budget => {
                let report = advisor.budget_summary(&session, &ExpenseSet::default_monthly());
                writeln!(out, "{}\n", report)?;
            }
            ChatInput::History => {
                for message in session.history() {
                    let who = match message.role {
                        ChatRole::User => "You",
                        ChatRole::Assistant => "Advisor",
                    };
                    writeln!(out, "[{}] {}: {}", message.sent_at.format("%H:%M"), who, message.content)?;
                }
                writeln!(out)?;
            }
            ChatInput::Export => writeln!(out, "{}\n", session.export_json()?)?,
            ChatInput::Help => writeln!(out, "{}\n", CHAT_HELP)?,
            ChatInput::Quit => break,
            ChatInput::Unknown(name) => writeln!(out, "Unknown command: /{}\n{}\n", name, CHAT_HELP)?,
        }
        out.flush()?;
    }

    Ok(())
}

/// Ask one question and print the reply (or the whole transcript as JSON)
pub async fn cmd_ask(advisor: &Advisor, profile: UserProfile, text: &str, json: bool) -> Result<()> {
    let mut session = Session::new(profile);
    let reply = advisor.handle_message(&mut session, text).await?;

    if json {
        println!("{}", session.export_json()?);
    } else {
        match reply {
            Some(reply) => println!("{}", reply),
            None => println!("Ask me anything about personal finance..."),
        }
    }
    Ok(())
}
