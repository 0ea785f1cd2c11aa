//! Domain models for Pennywise

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Youngest age the profile form accepts
pub const MIN_AGE: u32 = 16;
/// Oldest age the profile form accepts
pub const MAX_AGE: u32 = 100;

/// Occupation as entered on the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Occupation {
    Student,
    Professional,
    #[default]
    Other,
}

impl Occupation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Professional => "professional",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for Occupation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "professional" => Ok(Self::Professional),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown occupation: {}", s)),
        }
    }
}

impl std::fmt::Display for Occupation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audience segment driving tone and tip selection.
///
/// Always derived from the profile and the current message, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Student,
    Professional,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Professional => "professional",
        }
    }

    /// Get all segments
    pub fn all() -> &'static [Segment] {
        &[Self::Student, Self::Professional]
    }
}

impl std::str::FromStr for Segment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "professional" => Ok(Self::Professional),
            _ => Err(format!("Unknown segment: {}", s)),
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advice topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Savings,
    Budgeting,
    Investing,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Savings => "savings",
            Self::Budgeting => "budgeting",
            Self::Investing => "investing",
        }
    }

    /// Get all topics
    pub fn all() -> &'static [Topic] {
        &[Self::Savings, Self::Budgeting, Self::Investing]
    }
}

impl std::str::FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "savings" => Ok(Self::Savings),
            "budgeting" => Ok(Self::Budgeting),
            "investing" => Ok(Self::Investing),
            _ => Err(format!("Unknown topic: {}", s)),
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Profile fields collected by the UI. One per session, replaced on every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub occupation: Occupation,
    pub age: u32,
    pub monthly_income: f64,
}

impl UserProfile {
    /// Build a validated profile
    pub fn new(occupation: Occupation, age: u32, monthly_income: f64) -> Result<Self> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(Error::InvalidData(format!(
                "Age must be between {} and {}, got {}",
                MIN_AGE, MAX_AGE, age
            )));
        }
        validate_amount("Monthly income", monthly_income)?;
        Ok(Self {
            occupation,
            age,
            monthly_income,
        })
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            occupation: Occupation::Other,
            age: 25,
            monthly_income: 3000.0,
        }
    }
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single transcript entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }
}

/// Monthly expenses by category, kept in entry order (the report lists them that way)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSet {
    entries: Vec<(String, f64)>,
}

impl ExpenseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six categories of the budget form, prefilled with its default amounts
    pub fn default_monthly() -> Self {
        Self {
            entries: vec![
                ("Housing".to_string(), 1000.0),
                ("Food".to_string(), 400.0),
                ("Transportation".to_string(), 300.0),
                ("Entertainment".to_string(), 200.0),
                ("Utilities".to_string(), 150.0),
                ("Other".to_string(), 200.0),
            ],
        }
    }

    /// Set the amount for a category, appending it if new
    pub fn set(&mut self, category: impl Into<String>, amount: f64) -> Result<()> {
        let category = category.into();
        validate_amount(&category, amount)?;

        match self.entries.iter_mut().find(|(name, _)| *name == category) {
            Some(entry) => entry.1 = amount,
            None => self.entries.push((category, amount)),
        }
        Ok(())
    }

    /// Builder form of [`ExpenseSet::set`]
    pub fn with(mut self, category: impl Into<String>, amount: f64) -> Result<Self> {
        self.set(category, amount)?;
        Ok(self)
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_amount(label: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidData(format!(
            "{} must be a non-negative number, got {}",
            label, amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_parsing_is_case_insensitive() {
        assert_eq!("Student".parse::<Occupation>().unwrap(), Occupation::Student);
        assert_eq!("PROFESSIONAL".parse::<Segment>().unwrap(), Segment::Professional);
        assert_eq!("Investing".parse::<Topic>().unwrap(), Topic::Investing);
        assert!("retired".parse::<Occupation>().is_err());
        assert!("saving".parse::<Topic>().is_err());
    }

    #[test]
    fn test_profile_validation() {
        assert!(UserProfile::new(Occupation::Student, 20, 1200.0).is_ok());
        assert!(UserProfile::new(Occupation::Student, 15, 1200.0).is_err());
        assert!(UserProfile::new(Occupation::Other, 101, 1200.0).is_err());
        assert!(UserProfile::new(Occupation::Other, 30, -1.0).is_err());
        assert!(UserProfile::new(Occupation::Other, 30, f64::NAN).is_err());
        assert!(UserProfile::new(Occupation::Other, 30, 0.0).is_ok());
    }

    #[test]
    fn test_expense_set_keeps_entry_order() {
        let mut expenses = ExpenseSet::new();
        expenses.set("Rent", 900.0).unwrap();
        expenses.set("Coffee", 45.0).unwrap();
        expenses.set("Rent", 950.0).unwrap();

        let names: Vec<_> = expenses.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Rent", "Coffee"]);
        assert_eq!(expenses.get("Rent"), Some(950.0));
        assert_eq!(expenses.total(), 995.0);
    }

    #[test]
    fn test_expense_set_rejects_negative() {
        let mut expenses = ExpenseSet::new();
        assert!(expenses.set("Food", -5.0).is_err());
        assert!(expenses.is_empty());
    }

    #[test]
    fn test_default_monthly_expenses() {
        let expenses = ExpenseSet::default_monthly();
        assert_eq!(expenses.len(), 6);
        assert_eq!(expenses.total(), 2250.0);
        assert_eq!(expenses.get("Transportation"), Some(300.0));
    }

    #[test]
    fn test_chat_message_serializes_role_lowercase() {
        let msg = ChatMessage::user("hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hi");
    }
}
