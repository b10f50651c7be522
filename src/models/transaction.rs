//! Transaction model
//!
//! Income and expense entries as fetched from the hosted backend. Amounts are
//! always stored positive; the direction lives in `transaction_type`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    pub category_id: Option<CategoryId>,

    pub amount: Money,

    pub date: NaiveDate,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    pub fn new(
        transaction_type: TransactionType,
        category_id: Option<CategoryId>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            category_id,
            amount,
            date,
            description: String::new(),
            transaction_type,
        }
    }

    pub fn income(amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionType::Income, None, amount, date)
    }

    pub fn expense(category_id: CategoryId, amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionType::Expense, Some(category_id), amount, date)
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Whether this is an expense booked against `category_id`
    pub fn is_expense_in(&self, category_id: CategoryId) -> bool {
        self.is_expense() && self.category_id == Some(category_id)
    }

    pub fn falls_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// `YYYY-MM` key for monthly grouping
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.amount.is_positive() {
            return Err(format!(
                "Transaction amount must be positive, got {}",
                self.amount
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.transaction_type,
            self.amount
        )
    }
}
