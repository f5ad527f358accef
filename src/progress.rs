use crate::models::{Progress, WeekendStatus, WeekendSummary};
use crate::status;

/// Length of the main curriculum. Fixed so the bonus weekend or a partially
/// seeded store never changes the denominator.
pub const TOTAL_WEEKENDS: usize = 10;

pub fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// Counts completed main weekends against the fixed program length.
pub fn aggregate(weekends: &[WeekendSummary]) -> Progress {
    let completed = weekends
        .iter()
        .filter(|weekend| !weekend.is_bonus_weekend())
        .filter(|weekend| {
            status::derive_status(&weekend.work_items) == WeekendStatus::Completed
        })
        .count();

    Progress {
        completed,
        total: TOTAL_WEEKENDS,
        percent: percent(completed, TOTAL_WEEKENDS),
    }
}
