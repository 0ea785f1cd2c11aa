//! Budget analysis and report rendering
//!
//! [`BudgetAnalyzer::analyze`] computes the metrics; [`BudgetAnalyzer::render`]
//! turns them into the markdown-like report the UI shows verbatim
//! ("**bold**" markers, "•" bullets, "$" amounts). Only the headings and the
//! low-savings wording change between segments.

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseSet, Segment};

/// Savings rate (percent) below which the report suggests cutting back
pub const TARGET_SAVINGS_RATE: f64 = 20.0;

/// One expense line of the breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Share of income; 0 when income is 0
    pub percent_of_income: f64,
}

/// Observations appended to the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetInsight {
    /// Savings rate under [`TARGET_SAVINGS_RATE`]
    LowSavingsRate,
    /// Expenses exceed income
    Overspending,
}

impl BudgetInsight {
    pub fn message(&self, segment: Segment) -> &'static str {
        match (self, segment) {
            (Self::LowSavingsRate, Segment::Student) => {
                "• Try to save at least 20% of your income. Look for areas to cut back!"
            }
            (Self::LowSavingsRate, Segment::Professional) => {
                "• Consider optimizing your expense allocation to achieve a 20%+ savings rate."
            }
            (Self::Overspending, _) => {
                "• ⚠️ You're spending more than you earn. Time to review your expenses!"
            }
        }
    }
}

/// Computed monthly budget metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub income: f64,
    pub total_expenses: f64,
    /// Income minus expenses, negative when overspending
    pub remaining: f64,
    /// Percent of income left over; 0 when income is 0
    pub savings_rate: f64,
    pub categories: Vec<CategoryShare>,
    pub insights: Vec<BudgetInsight>,
}

/// Segment-aware budget report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetAnalyzer;

impl BudgetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Compute metrics and render the report in one go
    pub fn summarize(&self, income: f64, expenses: &ExpenseSet, segment: Segment) -> String {
        let summary = self.analyze(income, expenses);
        self.render(&summary, segment)
    }

    pub fn analyze(&self, income: f64, expenses: &ExpenseSet) -> BudgetSummary {
        let total_expenses = expenses.total();
        let remaining = income - total_expenses;
        let savings_rate = percent_of(remaining, income);

        let categories = expenses
            .iter()
            .map(|(category, amount)| CategoryShare {
                category: category.to_string(),
                amount,
                percent_of_income: percent_of(amount, income),
            })
            .collect();

        let mut insights = Vec::new();
        if savings_rate < TARGET_SAVINGS_RATE {
            insights.push(BudgetInsight::LowSavingsRate);
        }
        if remaining < 0.0 {
            insights.push(BudgetInsight::Overspending);
        }

        tracing::debug!(
            income,
            total_expenses,
            remaining,
            savings_rate,
            insights = insights.len(),
            "Budget analyzed"
        );

        BudgetSummary {
            income,
            total_expenses,
            remaining,
            savings_rate,
            categories,
            insights,
        }
    }

    pub fn render(&self, summary: &BudgetSummary, segment: Segment) -> String {
        let (title, income_label, expenses_label, remaining_label, breakdown_label) = match segment
        {
            Segment::Student => (
                "Your Monthly Budget Summary",
                "Income",
                "Total Expenses",
                "Money Left",
                "Expense Breakdown:",
            ),
            Segment::Professional => (
                "Professional Budget Analysis",
                "Monthly Income",
                "Total Expenditures",
                "Net Cash Flow",
                "Detailed Expense Analysis:",
            ),
        };

        let mut report = format!(
            "\n📊 **{}**\n\n💰 **{}**: {}\n💸 **{}**: {}\n💵 **{}**: {}\n📈 **Savings Rate**: {}\n\n**{}**\n",
            title,
            income_label,
            format_currency(summary.income),
            expenses_label,
            format_currency(summary.total_expenses),
            remaining_label,
            format_currency(summary.remaining),
            format_percent(summary.savings_rate),
            breakdown_label,
        );

        for share in &summary.categories {
            report.push_str(&format!(
                "\n• {}: {} ({} of income)",
                share.category,
                format_currency(share.amount),
                format_percent(share.percent_of_income)
            ));
        }

        report.push_str("\n\n**💡 AI Insights:**\n");
        let insights: Vec<&str> = summary
            .insights
            .iter()
            .map(|insight| insight.message(segment))
            .collect();
        report.push_str(&insights.join("\n"));

        report
    }
}

fn percent_of(amount: f64, income: f64) -> f64 {
    if income > 0.0 {
        amount / income * 100.0
    } else {
        0.0
    }
}

/// Format as dollars with thousands separators and two decimals ("$-1,234.50")
pub fn format_currency(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // no "-0.00" for tiny negatives
    let sign = if amount < 0.0 && formatted != "0.00" {
        "-"
    } else {
        ""
    };
    format!("${}{}.{}", sign, grouped, cents)
}

/// Format a percentage with one decimal ("25.0%")
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
