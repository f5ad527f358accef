use chrono::{DateTime, Utc};

use crate::models::{ItemFlags, WeekendStatus};

/// Completed and total counts of core (non-advanced) items.
pub fn core_counts(items: &[ItemFlags]) -> (usize, usize) {
    items
        .iter()
        .filter(|item| !item.is_advanced)
        .fold((0, 0), |(done, total), item| {
            (done + usize::from(item.is_completed), total + 1)
        })
}

/// Derives a weekend's status from its work items. Advanced items are ignored,
/// and a weekend without core items is never completed.
pub fn derive_status(items: &[ItemFlags]) -> WeekendStatus {
    match core_counts(items) {
        (_, 0) => WeekendStatus::NotStarted,
        (done, total) if done == total => WeekendStatus::Completed,
        (done, _) if done > 0 => WeekendStatus::InProgress,
        _ => WeekendStatus::NotStarted,
    }
}

/// Weekend completion after a toggle has been applied to `items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleTransition {
    pub completed_at: Option<DateTime<Utc>>,
    /// The weekend was not completed before and is now.
    pub just_completed: bool,
}

/// Re-derives `completed_at` once `items` reflect the latest toggle. An
/// existing timestamp is kept while the weekend stays completed.
pub fn toggle_transition(
    items: &[ItemFlags],
    previous: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> ToggleTransition {
    let completed_at = match derive_status(items) {
        WeekendStatus::Completed => Some(previous.unwrap_or(now)),
        _ => None,
    };
    ToggleTransition {
        completed_at,
        just_completed: completed_at.is_some() && previous.is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn core(is_completed: bool) -> ItemFlags {
        ItemFlags {
            is_completed,
            is_advanced: false,
        }
    }

    fn advanced(is_completed: bool) -> ItemFlags {
        ItemFlags {
            is_completed,
            is_advanced: true,
        }
    }

    #[test]
    fn empty_list_is_not_started() {
        assert_eq!(derive_status(&[]), WeekendStatus::NotStarted);
    }

    #[test]
    fn advanced_only_weekend_is_never_completed() {
        assert_eq!(
            derive_status(&[advanced(true), advanced(true)]),
            WeekendStatus::NotStarted
        );
        assert_eq!(derive_status(&[advanced(false)]), WeekendStatus::NotStarted);
    }

    #[test]
    fn all_core_done_is_completed_even_with_open_advanced() {
        let items = [core(true), core(true), advanced(false)];
        assert_eq!(derive_status(&items), WeekendStatus::Completed);
    }

    #[test]
    fn partial_core_is_in_progress() {
        let items = [core(true), core(false), core(false), core(false)];
        assert_eq!(derive_status(&items), WeekendStatus::InProgress);
    }

    #[test]
    fn advanced_progress_does_not_start_a_weekend() {
        let items = [core(false), core(false), advanced(true)];
        assert_eq!(derive_status(&items), WeekendStatus::NotStarted);
    }

    #[test]
    fn status_matches_core_counts_for_every_split() {
        for total in 1..=6 {
            for done in 0..=total {
                let items: Vec<ItemFlags> = (0..total).map(|i| core(i < done)).collect();
                let expected = if done == total {
                    WeekendStatus::Completed
                } else if done > 0 {
                    WeekendStatus::InProgress
                } else {
                    WeekendStatus::NotStarted
                };
                assert_eq!(derive_status(&items), expected, "{done}/{total}");
                assert_eq!(core_counts(&items), (done, total));
            }
        }
    }

    #[test]
    fn finishing_last_core_item_stamps_completion() {
        let now = Utc.with_ymd_and_hms(2026, 2, 7, 18, 0, 0).unwrap();
        let items = [core(true), core(true), advanced(false)];
        assert_eq!(
            toggle_transition(&items, None, now),
            ToggleTransition {
                completed_at: Some(now),
                just_completed: true,
            }
        );
    }

    #[test]
    fn reopening_a_core_item_clears_completion() {
        let earlier = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 2, 7, 18, 0, 0).unwrap();
        let items = [core(true), core(false)];
        assert_eq!(
            toggle_transition(&items, Some(earlier), now),
            ToggleTransition {
                completed_at: None,
                just_completed: false,
            }
        );
    }

    #[test]
    fn advanced_toggle_on_finished_weekend_keeps_original_time() {
        let earlier = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 2, 7, 18, 0, 0).unwrap();
        let items = [core(true), advanced(true)];
        assert_eq!(
            toggle_transition(&items, Some(earlier), now),
            ToggleTransition {
                completed_at: Some(earlier),
                just_completed: false,
            }
        );
    }

    #[test]
    fn partial_progress_is_not_a_completion() {
        let now = Utc.with_ymd_and_hms(2026, 2, 7, 18, 0, 0).unwrap();
        let transition = toggle_transition(&[core(true), core(false)], None, now);
        assert_eq!(transition.completed_at, None);
        assert!(!transition.just_completed);
    }

    #[test]
    fn advanced_only_weekend_never_gets_a_completion_time() {
        let now = Utc.with_ymd_and_hms(2026, 2, 7, 18, 0, 0).unwrap();
        let transition = toggle_transition(&[advanced(true)], None, now);
        assert_eq!(transition.completed_at, None);
        assert!(!transition.just_completed);
    }

    #[test]
    fn core_counts_skip_advanced_items() {
        let items = [core(true), advanced(true), core(false), advanced(false)];
        assert_eq!(core_counts(&items), (1, 2));
    }
}
