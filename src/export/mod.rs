//! Plan export
//!
//! Writes a budget plan in machine-readable formats:
//! - JSON: the plan with export metadata
//! - YAML: the same document, human-readable
//! - CSV: one row per recommendation (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{PlannerError, PlannerResult};
use crate::models::BudgetPlan;

pub use self::csv::export_plan_csv;
pub use json::{export_plan_json, PlanExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_plan_yaml;

/// Output format for plan export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(PlannerError::Validation(format!(
                "Unknown export format '{}', expected json, yaml, or csv",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Write `plan` to `writer` in the chosen format
pub fn export_plan<W: Write>(
    plan: &BudgetPlan,
    format: ExportFormat,
    writer: &mut W,
) -> PlannerResult<()> {
    match format {
        ExportFormat::Json => export_plan_json(plan, writer),
        ExportFormat::Yaml => export_plan_yaml(plan, writer),
        ExportFormat::Csv => export_plan_csv(plan, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
