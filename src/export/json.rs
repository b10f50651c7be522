//! JSON export
//!
//! Wraps the plan with a schema version and generation metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::models::BudgetPlan;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported plan document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanExport {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub app_version: String,
    pub plan: BudgetPlan,
}

impl PlanExport {
    pub fn new(plan: &BudgetPlan) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            plan: plan.clone(),
        }
    }
}

/// Export a plan as pretty-printed JSON
pub fn export_plan_json<W: Write>(plan: &BudgetPlan, writer: &mut W) -> PlannerResult<()> {
    let export = PlanExport::new(plan);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PlannerError::Export(e.to_string()))?;
    Ok(())
}
