use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Criterion, ScoreTrend};

/// One chart row: the averaged scale criteria for a single weekend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    pub weekend_number: i32,
    pub weekend_label: String,
    pub weekend_name: String,
    pub outcome_quality: Option<f64>,
    pub time_saved: Option<f64>,
    pub repeatability: Option<f64>,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Pivots per-criterion averages into one row per weekend, ordered by number.
/// `use_again` and unrecognised criteria are skipped.
pub fn chart_rows(trends: &[ScoreTrend]) -> Vec<TrendRow> {
    let mut rows: BTreeMap<i32, TrendRow> = BTreeMap::new();

    for trend in trends {
        let criterion = match trend.criterion.parse::<Criterion>() {
            Ok(criterion) if !criterion.is_binary() => criterion,
            _ => continue,
        };

        let row = rows.entry(trend.weekend_number).or_insert_with(|| TrendRow {
            weekend_number: trend.weekend_number,
            weekend_label: format!("Wk {}", trend.weekend_number),
            weekend_name: trend.weekend_name.clone(),
            outcome_quality: None,
            time_saved: None,
            repeatability: None,
        });

        let value = Some(round_tenth(trend.avg_rating));
        match criterion {
            Criterion::OutcomeQuality => row.outcome_quality = value,
            Criterion::TimeSaved => row.time_saved = value,
            Criterion::Repeatability => row.repeatability = value,
            Criterion::UseAgain => {}
        }
    }

    rows.into_values().collect()
}
