//! Progress status model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-band classification of spending against a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    /// Below 70% of target
    Safe,
    /// 70% up to, but not including, 100%
    Warning,
    /// At or over target
    Danger,
}

impl ProgressStatus {
    /// Percentage at which a category moves into `Warning`
    pub const WARNING_THRESHOLD: i64 = 70;
    /// Percentage at which a category moves into `Danger`
    pub const DANGER_THRESHOLD: i64 = 100;

    pub fn from_percentage(percentage: i64) -> Self {
        if percentage < Self::WARNING_THRESHOLD {
            Self::Safe
        } else if percentage < Self::DANGER_THRESHOLD {
            Self::Warning
        } else {
            Self::Danger
        }
    }

    /// Short marker for terminal output
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Safe => "ok",
            Self::Warning => "!",
            Self::Danger => "!!",
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "safe"),
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
        }
    }
}
