//! Core data models for kakeibo-plan
//!
//! The allocation table and the values derived from it (plans, progress
//! bands), plus the ledger data supplied by the backend.

pub mod allocation;
pub mod category;
pub mod ids;
pub mod money;
pub mod plan;
pub mod progress;
pub mod snapshot;
pub mod transaction;

pub use allocation::{AllocationEntry, AllocationTable, Classification};
pub use category::{Category, CategoryType, CategoryValidationError};
pub use ids::{CategoryId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use plan::{BudgetPlan, BudgetRecommendation};
pub use progress::ProgressStatus;
pub use snapshot::LedgerSnapshot;
pub use transaction::{Transaction, TransactionType};
