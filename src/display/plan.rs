//! Budget plan display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::currency::CurrencyFormat;
use crate::models::{AllocationTable, BudgetPlan, Classification};

#[derive(Tabled)]
struct RecommendationRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    classification: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    classification: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Render a plan as a table followed by classification subtotals
pub fn format_plan(plan: &BudgetPlan, currency: &CurrencyFormat) -> String {
    let rows = plan.recommendations.iter().map(|r| RecommendationRow {
        category: r.category_name.clone(),
        classification: r.classification.to_string(),
        share: format!("{}%", r.percentage),
        amount: currency.format(r.amount),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()));

    let mut output = format!(
        "Budget plan for monthly income {}\n\n",
        currency.format(plan.monthly_income)
    );
    output.push_str(&table.to_string());
    output.push_str("\n\n");

    for classification in Classification::ALL {
        let label = match classification {
            Classification::Fixed => "Fixed costs",
            Classification::Variable => "Variable costs",
            Classification::Savings => "Savings target",
        };
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            label,
            currency.format(plan.total_for(classification))
        ));
    }

    let unallocated = plan.unallocated();
    if !unallocated.is_zero() {
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            "Unallocated",
            currency.format(unallocated)
        ));
    }

    output
}

/// Render the allocation table with per-classification shares
pub fn format_allocation_table(table: &AllocationTable) -> String {
    if table.is_empty() {
        return "No allocations configured.".to_string();
    }

    let rows = table.iter().map(|e| AllocationRow {
        category: e.category_name.clone(),
        classification: e.classification.to_string(),
        share: format!("{}%", e.percentage),
    });

    let mut rendered = Table::new(rows);
    rendered.with(Style::psql());

    let mut output = rendered.to_string();
    output.push_str("\n\n");
    output.push_str(&format!(
        "fixed {}% / variable {}% / savings {}% (total {}%)\n",
        table.percentage_for(Classification::Fixed),
        table.percentage_for(Classification::Variable),
        table.percentage_for(Classification::Savings),
        table.total_percentage()
    ));
    output
}
