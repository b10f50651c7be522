//! Progress evaluation
//!
//! Compares spending with a target and places the result in a status band.

use crate::models::{Money, ProgressStatus};

/// Percentage of `target` already spent
///
/// Returns 0 when `target` is zero or negative. The value is not capped, so
/// overspending shows up as more than 100.
pub fn calculate_progress(spent: Money, target: Money) -> i64 {
    spent.ratio_percent(target).unwrap_or(0)
}

/// Status band for a progress percentage
pub fn progress_status(percentage: i64) -> ProgressStatus {
    ProgressStatus::from_percentage(percentage)
}

/// Progress and status together, or `None` when there is no usable target
pub fn evaluate(spent: Money, target: Money) -> Option<(i64, ProgressStatus)> {
    if !target.is_positive() {
        return None;
    }
    let percentage = calculate_progress(spent, target);
    Some((percentage, progress_status(percentage)))
}
