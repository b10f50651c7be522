//! User settings for kakeibo-plan
//!
//! Holds the target monthly income, the currency format, and an optional
//! custom allocation table.

use serde::{Deserialize, Serialize};

use super::paths::PlannerPaths;
use crate::display::currency::CurrencyFormat;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{AllocationEntry, AllocationTable, Money};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Monthly income the plan is built from
    #[serde(default = "default_target_income")]
    pub target_income: Money,

    /// Day of the month salary arrives (1-31)
    #[serde(default = "default_salary_day")]
    pub salary_day: u8,

    #[serde(default)]
    pub currency: CurrencyFormat,

    /// Replaces the built-in 50/30/20 table when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocations: Option<Vec<AllocationEntry>>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_target_income() -> Money {
    Money::from_units(300_000)
}

fn default_salary_day() -> u8 {
    25
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            target_income: default_target_income(),
            salary_day: default_salary_day(),
            currency: CurrencyFormat::default(),
            allocations: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &PlannerPaths) -> PlannerResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PlannerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PlannerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PlannerPaths) -> PlannerResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PlannerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> PlannerResult<()> {
        if !(1..=31).contains(&self.salary_day) {
            return Err(PlannerError::Config(format!(
                "salary_day must be 1-31, got {}",
                self.salary_day
            )));
        }
        if self.target_income.is_negative() {
            return Err(PlannerError::Config(format!(
                "target_income cannot be negative, got {}",
                self.target_income.units()
            )));
        }
        Ok(())
    }

    /// The allocation table to plan with
    ///
    /// A configured table is validated for names and ranges but not for its
    /// percentage total.
    pub fn allocation_table(&self) -> PlannerResult<AllocationTable> {
        match &self.allocations {
            Some(entries) => AllocationTable::new(entries.clone())
                .map_err(|e| PlannerError::Config(format!("Invalid allocations: {}", e))),
            None => Ok(AllocationTable::default_table().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.target_income.units(), 300_000);
        assert_eq!(settings.salary_day, 25);
        assert_eq!(settings.currency.currency_code, "JPY");
        assert!(settings.allocations.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.target_income = Money::from_units(420_000);
        settings.allocations = Some(vec![
            AllocationEntry::fixed("家賃", 35),
            AllocationEntry::savings("貯蓄", 15),
        ]);
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);

        let table = loaded.allocation_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.total_percentage(), 50);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"target_income": 250000}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.target_income.units(), 250_000);
        assert_eq!(loaded.salary_day, 25);
        assert_eq!(loaded.currency, CurrencyFormat::default());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"salary_day": 40}"#).unwrap();
        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(PlannerError::Config(_))
        ));

        std::fs::write(paths.settings_file(), "not json").unwrap();
        assert!(Settings::load_or_create(&paths).is_err());
    }

    #[test]
    fn test_duplicate_allocations_rejected() {
        let settings = Settings {
            allocations: Some(vec![
                AllocationEntry::fixed("家賃", 30),
                AllocationEntry::fixed("家賃", 20),
            ]),
            ..Settings::default()
        };
        assert!(settings.allocation_table().is_err());
    }

    #[test]
    fn test_default_table_when_unset() {
        let table = Settings::default().allocation_table().unwrap();
        assert_eq!(&table, AllocationTable::default_table());
    }
}
