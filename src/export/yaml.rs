//! YAML export

use std::io::Write;

use super::json::PlanExport;
use crate::error::{PlannerError, PlannerResult};
use crate::models::BudgetPlan;

/// Export a plan as YAML with a short header comment
pub fn export_plan_yaml<W: Write>(plan: &BudgetPlan, writer: &mut W) -> PlannerResult<()> {
    let export = PlanExport::new(plan);

    writeln!(writer, "# kakeibo budget plan").map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.generated_at)
        .map_err(|e| PlannerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::EXPORT_SCHEMA_VERSION;
    use crate::models::Money;
    use crate::services::calculate_plan;

    #[test]
    fn test_yaml_export() {
        let plan = calculate_plan(Money::from_units(250_000));
        let mut buffer = Vec::new();
        export_plan_yaml(&plan, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# kakeibo budget plan"));
        assert!(text.contains("savings_target: 50000"));

        let parsed: PlanExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.plan, plan);
    }
}
