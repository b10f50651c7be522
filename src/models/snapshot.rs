//! Ledger snapshot
//!
//! The categories and transactions the backend returns for one user, read in
//! one piece. Analytics run over a snapshot; nothing is ever written back.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::category::Category;
use super::transaction::Transaction;
use crate::error::{PlannerError, PlannerResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl LedgerSnapshot {
    pub fn new(categories: Vec<Category>, transactions: Vec<Transaction>) -> Self {
        Self {
            categories,
            transactions,
        }
    }

    /// Parse and validate a snapshot from JSON
    pub fn from_json_str(json: &str) -> PlannerResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read a snapshot file
    pub fn load(path: &Path) -> PlannerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlannerError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let snapshot = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            categories = snapshot.categories.len(),
            transactions = snapshot.transactions.len(),
            "loaded ledger snapshot"
        );
        Ok(snapshot)
    }

    pub fn validate(&self) -> PlannerResult<()> {
        for category in &self.categories {
            category
                .validate()
                .map_err(|e| PlannerError::Validation(e.to_string()))?;
        }
        for txn in &self.transactions {
            txn.validate().map_err(PlannerError::Validation)?;
        }
        Ok(())
    }

    /// Copy of this snapshot restricted to one calendar month
    pub fn for_month(&self, year: i32, month: u32) -> Self {
        Self {
            categories: self.categories.clone(),
            transactions: self
                .transactions
                .iter()
                .filter(|t| t.falls_in_month(year, month))
                .cloned()
                .collect(),
        }
    }
}
