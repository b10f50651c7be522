//! Plan CLI commands
//!
//! `plan`, `recommend`, and `allocations`.

use clap::Args;
use std::io::Write;
use tracing::warn;

use super::money_or;
use crate::config::settings::Settings;
use crate::display::{format_allocation_table, format_plan};
use crate::error::{PlannerError, PlannerResult};
use crate::export::{export_plan, ExportFormat};
use crate::models::AllocationTable;
use crate::services::BudgetPlanner;

#[derive(Args)]
pub struct PlanArgs {
    /// Monthly income (e.g. "300000" or "300,000"); defaults to the configured target income
    #[arg(allow_negative_numbers = true)]
    pub income: Option<String>,

    /// Output format: table, json, yaml, or csv
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

#[derive(Args)]
pub struct RecommendArgs {
    /// Category name as it appears in the allocation table; lists every
    /// spending target when omitted
    pub category: Option<String>,

    /// Monthly income; defaults to the configured target income
    #[arg(allow_negative_numbers = true)]
    pub income: Option<String>,
}

/// Load the configured table and warn if it does not cover 100% of income
fn load_table(settings: &Settings) -> PlannerResult<AllocationTable> {
    let table = settings.allocation_table()?;
    if let Err(err) = table.check_total() {
        warn!(total = table.total_percentage(), "{}", err);
    }
    Ok(table)
}

/// Handle the plan command
pub fn handle_plan_command(settings: &Settings, args: PlanArgs) -> PlannerResult<()> {
    let income = money_or("income", args.income.as_deref(), settings.target_income)?;
    let table = load_table(settings)?;
    let plan = BudgetPlanner::new(&table).calculate_plan(income);

    if args.format.eq_ignore_ascii_case("table") {
        print!("{}", format_plan(&plan, &settings.currency));
        return Ok(());
    }

    let format: ExportFormat = args.format.parse()?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    export_plan(&plan, format, &mut handle)?;
    handle
        .flush()
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    Ok(())
}

/// Handle the recommend command
pub fn handle_recommend_command(settings: &Settings, args: RecommendArgs) -> PlannerResult<()> {
    let income = money_or("income", args.income.as_deref(), settings.target_income)?;
    let table = load_table(settings)?;
    let planner = BudgetPlanner::new(&table);

    let Some(category) = args.category.as_deref() else {
        let plan = planner.calculate_plan(income);
        for (name, amount) in plan.category_targets() {
            println!("{}: {}", name, settings.currency.format(amount));
        }
        return Ok(());
    };

    let entry = table
        .lookup(category)
        .ok_or_else(|| PlannerError::allocation_not_found(category))?;
    let amount = planner
        .recommended_budget(category, income)
        .unwrap_or_default();

    println!(
        "{} ({}, {}%): {}",
        entry.category_name,
        entry.classification,
        entry.percentage,
        settings.currency.format(amount)
    );
    Ok(())
}

/// Handle the allocations command
pub fn handle_allocations_command(settings: &Settings) -> PlannerResult<()> {
    let table = load_table(settings)?;
    print!("{}", format_allocation_table(&table));
    Ok(())
}
