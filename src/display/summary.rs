//! Ledger summary display formatting
//!
//! Formats analytics results for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::currency::CurrencyFormat;
use crate::services::{BudgetSummary, CategoryProgress, CategorySpending, MonthlyStats, SavingsGoal};

#[derive(Tabled)]
struct ProgressRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Type")]
    category_type: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct SpendingRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Surplus")]
    surplus: String,
}

fn render<T: Tabled>(rows: Vec<T>, numeric_from: usize) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(numeric_from..)).with(Alignment::right()));
    table.to_string()
}

/// Ten-cell bar for a 0-100 percentage
fn progress_bar(percent: i64) -> String {
    let filled = usize::try_from(percent / 10).unwrap_or(0).min(10);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}

/// Format the dashboard summary block
pub fn format_budget_summary(summary: &BudgetSummary, currency: &CurrencyFormat) -> String {
    let lines = [
        ("Income", summary.total_income),
        ("Fixed costs", summary.fixed_costs),
        ("Disposable", summary.disposable_income),
        ("Variable spent", summary.variable_spent),
        ("Remaining", summary.remaining),
    ];

    let mut output = String::new();
    for (label, amount) in lines {
        output.push_str(&format!("{:<16} {:>14}\n", label, currency.format(amount)));
    }
    output
}

/// Format per-category progress against targets
pub fn format_category_progress(rows: &[CategoryProgress], currency: &CurrencyFormat) -> String {
    if rows.is_empty() {
        return "No categories found.".to_string();
    }

    let rows = rows
        .iter()
        .map(|p| ProgressRow {
            name: p.name.clone(),
            category_type: p.category_type.to_string(),
            spent: currency.format(p.spent),
            target: if p.target.is_positive() {
                currency.format(p.target)
            } else {
                "-".to_string()
            },
            progress: p
                .progress
                .map(|pct| format!("{}% {}", pct, progress_bar(p.bar_percent())))
                .unwrap_or_else(|| "-".to_string()),
            status: p
                .status
                .map(|s| format!("{} {}", s.indicator(), s))
                .unwrap_or_default(),
        })
        .collect();

    render(rows, 2)
}

/// Format the spending breakdown, largest first
pub fn format_spending_breakdown(rows: &[CategorySpending], currency: &CurrencyFormat) -> String {
    if rows.is_empty() {
        return "No spending recorded.".to_string();
    }

    let rows = rows
        .iter()
        .map(|s| SpendingRow {
            name: s.name.clone(),
            spent: currency.format(s.spent),
            share: format!("{}%", s.share),
        })
        .collect();

    render(rows, 1)
}

pub fn format_monthly_stats(stats: &[MonthlyStats], currency: &CurrencyFormat) -> String {
    if stats.is_empty() {
        return "No transactions recorded.".to_string();
    }

    let rows = stats
        .iter()
        .map(|s| MonthRow {
            month: s.month.clone(),
            income: currency.format(s.income),
            expense: currency.format(s.expense),
            surplus: currency.format(s.surplus),
        })
        .collect();

    render(rows, 1)
}

/// Format a savings goal with its progress bar and time estimate
pub fn format_savings_goal(goal: &SavingsGoal, currency: &CurrencyFormat) -> String {
    let pct = goal.progress_percent();
    let filled = usize::try_from(pct / 5).unwrap_or(0);
    let bar = format!("[{}{}]", "#".repeat(filled), ".".repeat(20 - filled));

    let mut output = format!(
        "Savings goal: {} / {}\n{} {}% ({})\n",
        currency.format(goal.current_savings),
        currency.format(goal.target_amount),
        bar,
        pct,
        goal.tier()
    );

    output.push_str(&format!(
        "Saving {} per month\n",
        currency.format(goal.monthly_savings())
    ));

    let estimate = match goal.estimated_months() {
        _ if goal.is_achieved() => "Goal reached. Congratulations!".to_string(),
        Some(0) => "Nothing left to save.".to_string(),
        Some(months) => format!("About {} more month(s) to reach the goal.", months),
        None => "Increase your monthly savings to make progress.".to_string(),
    };
    output.push_str(&estimate);
    output.push('\n');
    output
}
