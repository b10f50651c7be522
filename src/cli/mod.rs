//! CLI command handlers
//!
//! Bridges clap argument parsing with the planning services and display
//! formatting.

pub mod currency;
pub mod ledger;
pub mod plan;

pub use currency::{handle_format_command, handle_progress_command, FormatArgs, ProgressArgs};
pub use ledger::{handle_savings_command, handle_summary_command, SavingsArgs, SummaryArgs};
pub use plan::{
    handle_allocations_command, handle_plan_command, handle_recommend_command, PlanArgs,
    RecommendArgs,
};

use crate::error::{PlannerError, PlannerResult};
use crate::models::Money;

/// Parse a money argument, reporting the offending value on failure
pub(crate) fn parse_money_arg(name: &str, value: &str) -> PlannerResult<Money> {
    Money::parse(value)
        .map_err(|e| PlannerError::Validation(format!("Invalid {}: {}", name, e)))
}

/// Money argument, or the configured fallback when it was not given
pub(crate) fn money_or(name: &str, value: Option<&str>, fallback: Money) -> PlannerResult<Money> {
    value.map_or(Ok(fallback), |v| parse_money_arg(name, v))
}
