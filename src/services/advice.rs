//! Spending advice derived from the savings rate

use serde::Serialize;
use std::fmt;

use super::analytics::LedgerAnalytics;
use crate::models::Money;

/// One-line advice for the current month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advice {
    /// Saving 30% or more of income
    Excellent { savings_rate: i64 },
    /// Saving 10% or more
    OnTrack { top_category: Option<String> },
    /// Saving something, but under 10%
    Caution { top_category: Option<String> },
    /// Spending more than comes in
    Deficit,
}

impl Advice {
    /// Band the savings rate of `income` against `expense`
    ///
    /// Bands use the exact ratio, so 9.99% is still `Caution`.
    pub fn evaluate(income: Money, expense: Money, top_category: Option<String>) -> Self {
        if !income.is_positive() {
            // no income recorded reads as a 0% rate
            return Self::Caution { top_category };
        }

        let saved = i128::from(income.units()) - i128::from(expense.units());
        let income_units = i128::from(income.units());

        if saved * 100 >= income_units * 30 {
            Self::Excellent {
                savings_rate: super::analytics::savings_rate(income, expense),
            }
        } else if saved * 100 >= income_units * 10 {
            Self::OnTrack { top_category }
        } else if saved >= 0 {
            Self::Caution { top_category }
        } else {
            Self::Deficit
        }
    }

    /// Advice for a whole snapshot
    pub fn for_ledger(analytics: &LedgerAnalytics<'_>) -> Self {
        Self::evaluate(
            analytics.total_income(),
            analytics.total_expense(),
            analytics.top_spending_category().map(|c| c.name),
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Excellent { .. } => "Excellent",
            Self::OnTrack { .. } => "On track",
            Self::Caution { .. } => "Needs attention",
            Self::Deficit => "Deficit",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Excellent { savings_rate } => format!(
                "A {}% savings rate is on pace for your goal. Keep it up!",
                savings_rate
            ),
            Self::OnTrack {
                top_category: Some(name),
            } => format!("Reviewing spending on {} would let you save even more.", name),
            Self::OnTrack { top_category: None } => "Analyzing your spending pattern...".into(),
            Self::Caution {
                top_category: Some(name),
            } => format!(
                "{} takes up most of your spending. Set a budget for it.",
                name
            ),
            Self::Caution { top_category: None } => {
                "Keep an eye on the balance between income and spending.".into()
            }
            Self::Deficit => {
                "Spending exceeds income. Consider reviewing your fixed costs.".into()
            }
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}
