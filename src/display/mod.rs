//! Display formatting for terminal output
//!
//! Currency rendering plus table views for plans and ledger analytics.

pub mod currency;
pub mod plan;
pub mod summary;

pub use currency::{format_currency, CurrencyFormat};
pub use plan::{format_allocation_table, format_plan};
pub use summary::{
    format_budget_summary, format_category_progress, format_monthly_stats, format_savings_goal,
    format_spending_breakdown,
};
