//! CSV export

use serde::Serialize;
use std::io::Write;

use crate::error::PlannerResult;
use crate::models::{BudgetPlan, Classification};

#[derive(Serialize)]
struct CsvRow<'a> {
    category: &'a str,
    classification: Classification,
    percentage: u32,
    amount: i64,
}

/// Export plan recommendations, one row each, in table order
pub fn export_plan_csv<W: Write>(plan: &BudgetPlan, writer: &mut W) -> PlannerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for r in &plan.recommendations {
        csv_writer.serialize(CsvRow {
            category: &r.category_name,
            classification: r.classification,
            percentage: r.percentage,
            amount: r.amount.units(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
