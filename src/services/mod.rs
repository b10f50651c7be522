//! Service layer for kakeibo-plan
//!
//! Pure planning and evaluation logic on top of the models. Nothing here does
//! I/O or holds state between calls.

pub mod advice;
pub mod analytics;
pub mod planner;
pub mod progress;
pub mod savings;

pub use advice::Advice;
pub use analytics::{
    savings_rate, BudgetSummary, CategoryProgress, CategorySpending, LedgerAnalytics, MonthlyStats,
};
pub use planner::{calculate_plan, recommended_budget, BudgetPlanner};
pub use progress::{calculate_progress, progress_status};
pub use savings::{SavingsGoal, SavingsTier};
