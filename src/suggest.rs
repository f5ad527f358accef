use crate::models::{Category, WeekendStatus, WeekendSummary};
use crate::status;

/// Picks the weekend to work on next.
///
/// The bonus weekend is never suggested. Weekends already in progress win over
/// everything else, lowest number first. Otherwise the first untouched weekend
/// of the earliest category in program order is suggested, so automation work is
/// never recommended while foundation work is still open. Returns `None` once
/// every main weekend is completed.
pub fn suggest_next(weekends: &[WeekendSummary]) -> Option<&WeekendSummary> {
    let with_status: Vec<(&WeekendSummary, WeekendStatus)> = weekends
        .iter()
        .filter(|weekend| !weekend.is_bonus_weekend())
        .map(|weekend| (weekend, status::derive_status(&weekend.work_items)))
        .collect();

    if with_status
        .iter()
        .all(|(_, status)| *status == WeekendStatus::Completed)
    {
        return None;
    }

    let in_progress = with_status
        .iter()
        .filter(|(_, status)| *status == WeekendStatus::InProgress)
        .map(|(weekend, _)| *weekend)
        .min_by_key(|weekend| weekend.number);
    if in_progress.is_some() {
        return in_progress;
    }

    Category::PROGRAM_ORDER.into_iter().find_map(|category| {
        with_status
            .iter()
            .filter(|(weekend, status)| {
                weekend.category == category && *status == WeekendStatus::NotStarted
            })
            .map(|(weekend, _)| *weekend)
            .min_by_key(|weekend| weekend.number)
    })
}
