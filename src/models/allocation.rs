//! Allocation table model
//!
//! Maps named spending categories to a classification and a fixed share of
//! monthly income. The built-in table encodes the 50/30/20 rule.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{PlannerError, PlannerResult};

/// How a category's spending is classified for planning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Recurring, largely non-discretionary spending
    Fixed,
    /// Discretionary, fluctuating spending
    Variable,
    /// Income set aside rather than spent
    Savings,
}

impl Classification {
    pub const ALL: [Classification; 3] = [Self::Fixed, Self::Variable, Self::Savings];
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Variable => write!(f, "variable"),
            Self::Savings => write!(f, "savings"),
        }
    }
}

/// One row of the allocation table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub category_name: String,
    pub classification: Classification,
    /// Share of monthly income, 0-100
    pub percentage: u32,
}

impl AllocationEntry {
    pub fn new(
        category_name: impl Into<String>,
        classification: Classification,
        percentage: u32,
    ) -> Self {
        Self {
            category_name: category_name.into(),
            classification,
            percentage,
        }
    }

    pub fn fixed(category_name: impl Into<String>, percentage: u32) -> Self {
        Self::new(category_name, Classification::Fixed, percentage)
    }

    pub fn variable(category_name: impl Into<String>, percentage: u32) -> Self {
        Self::new(category_name, Classification::Variable, percentage)
    }

    pub fn savings(category_name: impl Into<String>, percentage: u32) -> Self {
        Self::new(category_name, Classification::Savings, percentage)
    }

    /// Validate a single entry
    pub fn validate(&self) -> PlannerResult<()> {
        if self.category_name.trim().is_empty() {
            return Err(PlannerError::Validation(
                "Allocation category name cannot be empty".into(),
            ));
        }
        if self.percentage > 100 {
            return Err(PlannerError::Validation(format!(
                "Allocation for '{}' is {}%, must be 0-100",
                self.category_name, self.percentage
            )));
        }
        Ok(())
    }
}

static DEFAULT_TABLE: Lazy<AllocationTable> = Lazy::new(|| AllocationTable {
    entries: vec![
        // fixed 50%
        AllocationEntry::fixed("家賃", 30),
        AllocationEntry::fixed("光熱費", 5),
        AllocationEntry::fixed("通信費", 5),
        AllocationEntry::fixed("保険", 10),
        // variable 30%
        AllocationEntry::variable("食費", 15),
        AllocationEntry::variable("交通費", 5),
        AllocationEntry::variable("娯楽", 5),
        AllocationEntry::variable("買い物", 3),
        AllocationEntry::variable("その他", 2),
        // savings 20%
        AllocationEntry::savings("貯蓄", 20),
    ],
    index: HashMap::new(),
}
.reindexed());

/// Ordered, name-indexed set of allocation entries
///
/// Iteration always follows insertion order; the index is only used for
/// lookups by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationTable {
    entries: Vec<AllocationEntry>,
    index: HashMap<String, usize>,
}

impl AllocationTable {
    fn reindexed(mut self) -> Self {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.category_name.clone(), i))
            .collect();
        self
    }

    /// The built-in 50/30/20 table shared by the whole process
    pub fn default_table() -> &'static AllocationTable {
        &DEFAULT_TABLE
    }

    /// Build a custom table
    ///
    /// Rejects empty names, percentages above 100, and duplicate names. The
    /// percentage total is not checked here; see [`AllocationTable::check_total`].
    pub fn new(entries: Vec<AllocationEntry>) -> PlannerResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if index.insert(entry.category_name.clone(), i).is_some() {
                return Err(PlannerError::Validation(format!(
                    "Duplicate allocation category: {}",
                    entry.category_name
                )));
            }
        }
        Ok(Self { entries, index })
    }

    /// Find the entry for a category name
    pub fn lookup(&self, category_name: &str) -> Option<&AllocationEntry> {
        self.index.get(category_name).map(|&i| &self.entries[i])
    }

    /// Iterate entries in table order
    pub fn iter(&self) -> impl Iterator<Item = &AllocationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all percentages
    pub fn total_percentage(&self) -> u32 {
        self.entries.iter().map(|e| e.percentage).sum()
    }

    /// Sum of percentages for one classification
    pub fn percentage_for(&self, classification: Classification) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.classification == classification)
            .map(|e| e.percentage)
            .sum()
    }

    /// Check that the table exhausts exactly 100% of income
    ///
    /// Advisory only: plan calculation works on any table.
    pub fn check_total(&self) -> PlannerResult<()> {
        let total = self.total_percentage();
        if total != 100 {
            return Err(PlannerError::AllocationTotal { total });
        }
        Ok(())
    }
}

impl Default for AllocationTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl<'a> IntoIterator for &'a AllocationTable {
    type Item = &'a AllocationEntry;
    type IntoIter = std::slice::Iter<'a, AllocationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
