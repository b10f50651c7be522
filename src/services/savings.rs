//! Savings goal tracking

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::money::saturate;
use crate::models::Money;

/// How far along a savings goal is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsTier {
    /// Under 40% of the goal
    Started,
    /// 40% or more
    Halfway,
    /// 70% or more
    Close,
    /// Goal met
    Reached,
}

impl fmt::Display for SavingsTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => write!(f, "started"),
            Self::Halfway => write!(f, "halfway"),
            Self::Close => write!(f, "close"),
            Self::Reached => write!(f, "reached"),
        }
    }
}

/// A savings target together with the monthly cash flow feeding it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub current_savings: Money,
    pub target_amount: Money,
    pub monthly_income: Money,
    pub monthly_expense: Money,
}

impl SavingsGoal {
    pub fn new(
        current_savings: Money,
        target_amount: Money,
        monthly_income: Money,
        monthly_expense: Money,
    ) -> Self {
        Self {
            current_savings,
            target_amount,
            monthly_income,
            monthly_expense,
        }
    }

    /// Progress towards the goal, capped at 100. Zero when there is no target.
    pub fn progress_percent(&self) -> i64 {
        self.current_savings
            .ratio_percent(self.target_amount)
            .map_or(0, |pct| pct.min(100))
    }

    pub fn is_achieved(&self) -> bool {
        self.target_amount.is_positive() && self.current_savings >= self.target_amount
    }

    /// Amount still missing, never negative
    pub fn remaining(&self) -> Money {
        Money::from_units(saturate(self.shortfall().max(0)))
    }

    pub fn monthly_savings(&self) -> Money {
        Money::from_units(saturate(self.monthly_surplus()))
    }

    /// Whole months until the goal is met at the current saving pace
    ///
    /// `None` when nothing is saved each month, `Some(0)` when already met.
    pub fn estimated_months(&self) -> Option<i64> {
        let per_month = self.monthly_surplus();
        if per_month <= 0 {
            return None;
        }
        let remaining = self.shortfall();
        if remaining <= 0 {
            return Some(0);
        }
        Some(saturate((remaining + per_month - 1) / per_month))
    }

    fn shortfall(&self) -> i128 {
        i128::from(self.target_amount.units()) - i128::from(self.current_savings.units())
    }

    fn monthly_surplus(&self) -> i128 {
        i128::from(self.monthly_income.units()) - i128::from(self.monthly_expense.units())
    }

    pub fn tier(&self) -> SavingsTier {
        if !self.target_amount.is_positive() {
            return SavingsTier::Started;
        }
        let current = i128::from(self.current_savings.units()) * 100;
        let target = i128::from(self.target_amount.units());
        if current >= target * 100 {
            SavingsTier::Reached
        } else if current >= target * 70 {
            SavingsTier::Close
        } else if current >= target * 40 {
            SavingsTier::Halfway
        } else {
            SavingsTier::Started
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(current: i64, target: i64, income: i64, expense: i64) -> SavingsGoal {
        SavingsGoal::new(
            Money::from_units(current),
            Money::from_units(target),
            Money::from_units(income),
            Money::from_units(expense),
        )
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(goal(250_000, 1_000_000, 0, 0).progress_percent(), 25);
        assert_eq!(goal(1_500_000, 1_000_000, 0, 0).progress_percent(), 100);
        assert_eq!(goal(500, 0, 0, 0).progress_percent(), 0);
    }

    #[test]
    fn test_estimated_months() {
        // 750000 remaining at 60000 a month is 12.5 months
        assert_eq!(goal(250_000, 1_000_000, 300_000, 240_000).estimated_months(), Some(13));
        assert_eq!(goal(400_000, 1_000_000, 300_000, 240_000).estimated_months(), Some(10));
        assert_eq!(goal(1_000_000, 1_000_000, 300_000, 240_000).estimated_months(), Some(0));
        assert_eq!(goal(0, 1_000_000, 200_000, 200_000).estimated_months(), None);
        assert_eq!(goal(0, 1_000_000, 200_000, 250_000).estimated_months(), None);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(goal(100, 1000, 0, 0).tier(), SavingsTier::Started);
        assert_eq!(goal(400, 1000, 0, 0).tier(), SavingsTier::Halfway);
        assert_eq!(goal(699, 1000, 0, 0).tier(), SavingsTier::Halfway);
        assert_eq!(goal(700, 1000, 0, 0).tier(), SavingsTier::Close);
        assert_eq!(goal(1000, 1000, 0, 0).tier(), SavingsTier::Reached);
        assert!(goal(1000, 1000, 0, 0).is_achieved());
        assert!(!goal(10, 0, 0, 0).is_achieved());
    }

    #[test]
    fn test_extreme_amounts_do_not_overflow() {
        assert_eq!(goal(0, i64::MAX, i64::MAX, 0).estimated_months(), Some(1));
        assert_eq!(goal(0, i64::MAX, 1, 0).estimated_months(), Some(i64::MAX));
        assert_eq!(goal(i64::MIN, i64::MAX, 1, 0).estimated_months(), Some(i64::MAX));
        assert_eq!(goal(i64::MIN, i64::MAX, 0, 0).remaining().units(), i64::MAX);
        assert_eq!(goal(0, 0, i64::MAX, i64::MIN).monthly_savings().units(), i64::MAX);
        assert_eq!(goal(0, 0, i64::MIN, i64::MAX).estimated_months(), None);
    }

    #[test]
    fn test_remaining() {
        assert_eq!(goal(300, 1000, 0, 0).remaining().units(), 700);
        assert_eq!(goal(3000, 1000, 0, 0).remaining().units(), 0);
    }
}
