//! Custom error types for kakeibo-plan
//!
//! The planning engine itself is total and never fails; these errors come from
//! configuration, ledger snapshot parsing, and export.

use thiserror::Error;

/// The main error type for kakeibo-plan operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Allocation percentages do not add up to a whole income
    #[error("Allocation percentages sum to {total}%, expected 100%")]
    AllocationTotal { total: u32 },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PlannerError {
    /// Create a "not found" error for allocation entries
    pub fn allocation_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Allocation",
            identifier: identifier.into(),
        }
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for PlannerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for PlannerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for kakeibo-plan operations
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlannerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = PlannerError::allocation_not_found("ペット");
        assert_eq!(err.to_string(), "Allocation not found: ペット");
        assert!(matches!(
            err,
            PlannerError::NotFound {
                entity_type: "Allocation",
                ..
            }
        ));
    }

    #[test]
    fn test_allocation_total_error() {
        let err = PlannerError::AllocationTotal { total: 95 };
        assert_eq!(
            err.to_string(),
            "Allocation percentages sum to 95%, expected 100%"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PlannerError = io_err.into();
        assert!(matches!(err, PlannerError::Io(_)));
    }
}
