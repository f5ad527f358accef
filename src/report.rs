use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::dashboard::{Dashboard, WeekendCard};
use crate::models::{Criterion, WeekendDetail, WeekendStatus};
use crate::status;
use crate::trends::TrendRow;

fn status_marker(status: WeekendStatus) -> &'static str {
    match status {
        WeekendStatus::Completed => "[x]",
        WeekendStatus::InProgress => "[~]",
        WeekendStatus::NotStarted => "[ ]",
    }
}

fn core_summary(card: &WeekendCard) -> String {
    if card.core_total == 0 {
        String::new()
    } else {
        format!(" ({}/{} core items)", card.core_completed, card.core_total)
    }
}

fn fmt_score(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

pub fn render_overview(dashboard: &Dashboard) -> String {
    let mut output = String::new();
    let progress = &dashboard.progress;

    let _ = writeln!(output, "Weekend Tracker");
    let _ = writeln!(
        output,
        "Overall progress: {}/{} weekends · {}%",
        progress.completed, progress.total, progress.percent
    );

    match &dashboard.suggested {
        Some(next) => {
            let _ = writeln!(
                output,
                "Up next: Weekend {}: {} (id {})",
                next.number, next.name, next.id
            );
        }
        None => {
            let _ = writeln!(output, "Every weekend is complete. Nothing left to suggest.");
        }
    }

    for section in &dashboard.sections {
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", section.label);
        for card in &section.weekends {
            let _ = writeln!(
                output,
                "  {} Weekend {}: {} [{}]{} id {}",
                status_marker(card.status),
                card.number,
                card.name,
                card.status.label(),
                core_summary(card),
                card.id
            );
        }
    }

    output
}

pub fn render_weekend(weekend: &WeekendDetail) -> String {
    let mut output = String::new();
    let flags: Vec<_> = weekend.work_items.iter().map(|item| item.flags()).collect();
    let status = status::derive_status(&flags);

    let _ = writeln!(output, "Weekend {}: {}", weekend.number, weekend.name);
    let _ = writeln!(
        output,
        "{} · {}",
        weekend.category.label(),
        status.label()
    );
    if let Some(completed_at) = weekend.completed_at {
        let _ = writeln!(output, "Completed {}", completed_at.format("%Y-%m-%d %H:%M UTC"));
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "Deliverable: {}", weekend.deliverable);
    let _ = writeln!(output, "Why it matters: {}", weekend.why_it_matters);

    for (heading, advanced) in [("Core work", false), ("Advanced (optional)", true)] {
        let items: Vec<_> = weekend
            .work_items
            .iter()
            .filter(|item| item.is_advanced == advanced)
            .collect();
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(output);
        let _ = writeln!(output, "{heading}");
        for item in items {
            let _ = writeln!(
                output,
                "  [{}] {} (item {})",
                if item.is_completed { "x" } else { " " },
                item.title,
                item.id
            );
        }
    }

    if !weekend.done_criteria.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "Done when");
        for criterion in &weekend.done_criteria {
            let _ = writeln!(
                output,
                "  [{}] {}",
                if criterion.is_met { "x" } else { " " },
                criterion.description
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "Scorecard");
    for criterion in Criterion::ALL {
        let rating = weekend
            .ratings
            .iter()
            .find(|rating| rating.criterion == criterion.as_str())
            .and_then(|rating| rating.rating);
        let value = match (rating, criterion.is_binary()) {
            (None, _) => "not rated".to_string(),
            (Some(0), true) => "No".to_string(),
            (Some(_), true) => "Yes".to_string(),
            (Some(value), false) => format!("{value}/5"),
        };
        let _ = writeln!(output, "  {}: {}", criterion.label(), value);
    }
    if let Some(notes) = weekend.scorecard_notes.as_deref().filter(|n| !n.is_empty()) {
        let _ = writeln!(output, "  Notes: {notes}");
    }

    if let Some(notes) = weekend.notes.as_deref().filter(|n| !n.is_empty()) {
        let _ = writeln!(output);
        let _ = writeln!(output, "Notes");
        let _ = writeln!(output, "{notes}");
    }

    output
}

pub fn render_trends(rows: &[TrendRow]) -> String {
    let mut output = String::new();

    if rows.is_empty() {
        let _ = writeln!(output, "No ratings recorded yet.");
        return output;
    }

    let _ = writeln!(output, "Score trends (average rating, 0-5)");
    for row in rows {
        let _ = writeln!(
            output,
            "- {} {}: outcome {} · time saved {} · repeatability {}",
            row.weekend_label,
            row.weekend_name,
            fmt_score(row.outcome_quality),
            fmt_score(row.time_saved),
            fmt_score(row.repeatability)
        );
    }
    output
}

/// Markdown progress report.
pub fn build_report(
    dashboard: &Dashboard,
    trends: &[TrendRow],
    generated_at: DateTime<Utc>,
) -> String {
    let mut output = String::new();
    let progress = &dashboard.progress;

    let _ = writeln!(output, "# Weekend Tracker Report");
    let _ = writeln!(output, "Generated {}", generated_at.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Progress");
    let _ = writeln!(
        output,
        "{} of {} weekends completed ({}%).",
        progress.completed, progress.total, progress.percent
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Up Next");
    match &dashboard.suggested {
        Some(next) => {
            let _ = writeln!(output, "Weekend {}: {}", next.number, next.name);
        }
        None => {
            let _ = writeln!(output, "All weekends completed.");
        }
    }

    for section in &dashboard.sections {
        let _ = writeln!(output);
        let _ = writeln!(output, "## {}", section.label);
        let _ = writeln!(output, "| Weekend | Name | Status | Core items |");
        let _ = writeln!(output, "|---|---|---|---|");
        for card in &section.weekends {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {}/{} |",
                card.number,
                card.name,
                card.status.label(),
                card.core_completed,
                card.core_total
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Score Trends");
    if trends.is_empty() {
        let _ = writeln!(output, "No ratings recorded yet.");
    } else {
        let _ = writeln!(output, "| Weekend | Outcome Quality | Time Saved | Repeatability |");
        let _ = writeln!(output, "|---|---|---|---|");
        for row in trends {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} |",
                row.weekend_label,
                fmt_score(row.outcome_quality),
                fmt_score(row.time_saved),
                fmt_score(row.repeatability)
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::models::{
        Category, DoneCriterion, ItemFlags, ScorecardRating, WeekendSummary, WorkItem,
    };

    fn summary(number: i32, category: Category, done: &[bool]) -> WeekendSummary {
        WeekendSummary {
            id: number,
            number,
            name: format!("Weekend {number}"),
            deliverable: String::new(),
            category,
            is_bonus: category == Category::Bonus,
            work_items: done
                .iter()
                .map(|&is_completed| ItemFlags {
                    is_completed,
                    is_advanced: false,
                })
                .collect(),
        }
    }

    fn detail() -> WeekendDetail {
        WeekendDetail {
            id: 4,
            number: 4,
            name: "The Analysis Project".to_string(),
            deliverable: "A cleaned dataset".to_string(),
            why_it_matters: "Data is messy".to_string(),
            category: Category::CoreProjects,
            is_bonus: false,
            notes: Some("Used my bank export.".to_string()),
            scorecard_notes: None,
            completed_at: None,
            work_items: vec![
                WorkItem {
                    id: 30,
                    title: "Collect".to_string(),
                    is_advanced: false,
                    is_completed: true,
                    sort_order: 1,
                },
                WorkItem {
                    id: 31,
                    title: "Upload".to_string(),
                    is_advanced: false,
                    is_completed: false,
                    sort_order: 2,
                },
                WorkItem {
                    id: 32,
                    title: "Live data".to_string(),
                    is_advanced: true,
                    is_completed: false,
                    sort_order: 3,
                },
            ],
            done_criteria: vec![
                DoneCriterion {
                    id: 4,
                    description: "Name the top 3 drivers".to_string(),
                    is_met: false,
                    sort_order: 1,
                },
                DoneCriterion {
                    id: 5,
                    description: "Chart exported".to_string(),
                    is_met: true,
                    sort_order: 2,
                },
            ],
            ratings: vec![
                ScorecardRating {
                    criterion: "outcome_quality".to_string(),
                    rating: Some(4),
                    comment: None,
                },
                ScorecardRating {
                    criterion: "use_again".to_string(),
                    rating: Some(1),
                    comment: None,
                },
            ],
        }
    }

    #[test]
    fn overview_shows_progress_and_suggestion() {
        let dashboard = Dashboard::build(&[
            summary(1, Category::Foundation, &[true]),
            summary(2, Category::Foundation, &[false, false]),
        ]);
        let text = render_overview(&dashboard);
        assert!(text.contains("Overall progress: 1/10 weekends · 10%"));
        assert!(text.contains("Up next: Weekend 2: Weekend 2 (id 2)"));
        assert!(text.contains("[x] Weekend 1: Weekend 1 [Completed] (1/1 core items)"));
        assert!(text.contains("[ ] Weekend 2: Weekend 2 [Not Started] (0/2 core items)"));
    }

    #[test]
    fn overview_when_everything_is_done() {
        let dashboard = Dashboard::build(&[summary(1, Category::Foundation, &[true])]);
        assert!(render_overview(&dashboard).contains("Nothing left to suggest"));
    }

    #[test]
    fn weekend_detail_splits_core_and_advanced() {
        let text = render_weekend(&detail());
        assert!(text.contains("Core Projects · In Progress"));
        assert!(text.contains("  [x] Collect (item 30)"));
        assert!(text.contains("Advanced (optional)\n  [ ] Live data (item 32)"));
        assert!(text.contains("Done when\n  [ ] Name the top 3 drivers\n  [x] Chart exported"));
        assert!(text.contains("Outcome Quality: 4/5"));
        assert!(text.contains("Time Saved: not rated"));
        assert!(text.contains("Would Use Again: Yes"));
        assert!(text.contains("Used my bank export."));
    }

    #[test]
    fn report_includes_tables() {
        let dashboard = Dashboard::build(&[
            summary(1, Category::Foundation, &[true, false]),
            summary(11, Category::Bonus, &[false]),
        ]);
        let trends = vec![TrendRow {
            weekend_number: 1,
            weekend_label: "Wk 1".to_string(),
            weekend_name: "Weekend 1".to_string(),
            outcome_quality: Some(4.5),
            time_saved: None,
            repeatability: Some(3.0),
        }];
        let generated_at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let report = build_report(&dashboard, &trends, generated_at);

        assert!(report.contains("Generated 2026-03-01 09:30 UTC"));
        assert!(report.contains("0 of 10 weekends completed (0%)."));
        assert!(report.contains("Weekend 1: Weekend 1"));
        assert!(report.contains("| 1 | Weekend 1 | In Progress | 1/2 |"));
        assert!(report.contains("## Bonus"));
        assert!(report.contains("| Wk 1 | 4.5 | - | 3.0 |"));
    }

    #[test]
    fn empty_trends_render_placeholder() {
        assert_eq!(render_trends(&[]), "No ratings recorded yet.\n");
    }
}
