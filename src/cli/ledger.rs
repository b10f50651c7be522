//! Ledger CLI commands
//!
//! `summary` reads a ledger snapshot exported from the backend; `savings`
//! evaluates a savings goal from figures given on the command line.

use chrono::{Datelike, NaiveDate};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use super::{money_or, parse_money_arg};
use crate::config::settings::Settings;
use crate::display::{
    format_budget_summary, format_category_progress, format_monthly_stats, format_savings_goal,
    format_spending_breakdown,
};
use crate::error::{PlannerError, PlannerResult};
use crate::models::LedgerSnapshot;
use crate::services::{
    Advice, BudgetPlanner, BudgetSummary, CategoryProgress, CategorySpending, LedgerAnalytics,
    MonthlyStats, SavingsGoal,
};

#[derive(Args)]
pub struct SummaryArgs {
    /// Ledger snapshot JSON file ({"categories": [...], "transactions": [...]})
    pub file: PathBuf,

    /// Restrict to one month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Output format: table or json
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Replace category targets with the plan for the configured income
    #[arg(long)]
    pub apply_plan: bool,
}

#[derive(Args)]
pub struct SavingsArgs {
    /// Amount saved so far
    #[arg(long)]
    pub current: String,

    /// Savings goal
    #[arg(long)]
    pub target: String,

    /// Monthly income; defaults to the configured target income
    #[arg(long)]
    pub income: Option<String>,

    /// Monthly spending
    #[arg(long)]
    pub expense: String,
}

/// Everything `summary --format json` prints
#[derive(Serialize)]
struct SummaryReport {
    month: Option<String>,
    summary: BudgetSummary,
    savings_rate: i64,
    categories: Vec<CategoryProgress>,
    spending: Vec<CategorySpending>,
    monthly: Vec<MonthlyStats>,
    advice: Advice,
    advice_message: String,
}

/// Parse `YYYY-MM` into (year, month)
pub(crate) fn parse_month(value: &str) -> PlannerResult<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").map_err(
        |_| PlannerError::Validation(format!("Invalid month '{}', expected YYYY-MM", value)),
    )?;
    Ok((date.year(), date.month()))
}

/// Handle the summary command
pub fn handle_summary_command(settings: &Settings, args: SummaryArgs) -> PlannerResult<()> {
    let mut snapshot = LedgerSnapshot::load(&args.file)?;
    if args.apply_plan {
        let table = settings.allocation_table()?;
        let plan = BudgetPlanner::new(&table).calculate_plan(settings.target_income);
        let updated = plan.apply_to_categories(&mut snapshot.categories);
        debug!(updated, "applied plan targets to categories");
    }
    let snapshot = match args.month.as_deref() {
        Some(month) => {
            let (year, month) = parse_month(month)?;
            snapshot.for_month(year, month)
        }
        None => snapshot,
    };

    let analytics = LedgerAnalytics::new(&snapshot);
    let summary = analytics.budget_summary(settings.target_income);
    let advice = Advice::for_ledger(&analytics);
    let currency = &settings.currency;

    if args.format.eq_ignore_ascii_case("json") {
        let report = SummaryReport {
            month: args.month.clone(),
            summary,
            savings_rate: analytics.savings_rate(),
            categories: analytics.category_progress(),
            spending: analytics.spending_breakdown(),
            monthly: analytics.monthly_stats(),
            advice_message: advice.message(),
            advice,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    if !args.format.eq_ignore_ascii_case("table") {
        return Err(PlannerError::Validation(format!(
            "Unknown summary format '{}', expected table or json",
            args.format
        )));
    }

    match &args.month {
        Some(month) => println!("Ledger summary for {}", month),
        None => println!("Ledger summary"),
    }
    println!("{}", "=".repeat(40));
    print!("{}", format_budget_summary(&summary, currency));
    println!("{:<16} {:>13}%", "Savings rate", analytics.savings_rate());
    println!();

    println!("Categories");
    println!("{}", format_category_progress(&analytics.category_progress(), currency));
    let overspent = analytics.overspent();
    if !overspent.is_empty() {
        let names: Vec<&str> = overspent.iter().map(|p| p.name.as_str()).collect();
        println!("Over budget: {}", names.join(", "));
    }
    println!();

    println!("Spending breakdown");
    println!("{}", format_spending_breakdown(&analytics.spending_breakdown(), currency));
    println!();

    if args.month.is_none() {
        println!("By month");
        println!("{}", format_monthly_stats(&analytics.monthly_stats(), currency));
        println!();
    }

    println!("{}", advice);
    Ok(())
}

/// Handle the savings command
pub fn handle_savings_command(settings: &Settings, args: SavingsArgs) -> PlannerResult<()> {
    let goal = SavingsGoal::new(
        parse_money_arg("current savings", &args.current)?,
        parse_money_arg("savings target", &args.target)?,
        money_or("income", args.income.as_deref(), settings.target_income)?,
        parse_money_arg("expense", &args.expense)?,
    );

    print!("{}", format_savings_goal(&goal, &settings.currency));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-03").unwrap(), (2025, 3));
        assert_eq!(parse_month(" 2024-12 ").unwrap(), (2024, 12));
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("March").is_err());
    }
}
