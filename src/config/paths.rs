//! Path management for kakeibo-plan
//!
//! ## Path Resolution Order
//!
//! 1. `KAKEIBO_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/kakeibo` on Linux, `~/Library/Application Support/kakeibo`
//!    on macOS, `%APPDATA%\kakeibo\config` on Windows)

use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::PlannerError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "KAKEIBO_DATA_DIR";

/// Manages the paths used by kakeibo-plan
#[derive(Debug, Clone)]
pub struct PlannerPaths {
    base_dir: PathBuf,
}

impl PlannerPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PlannerError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "kakeibo")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    PlannerError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Use a specific base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn ensure_directories(&self) -> Result<(), PlannerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PlannerError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Whether `kakeibo init` has written a settings file
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
