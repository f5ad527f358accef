use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ValidationError;

/// Curriculum category, in program order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Foundation,
    CoreProjects,
    Automation,
    SystemAndBuild,
    Bonus,
}

impl Category {
    /// Main categories in the order new work should be started.
    pub const PROGRAM_ORDER: [Category; 4] = [
        Category::Foundation,
        Category::CoreProjects,
        Category::Automation,
        Category::SystemAndBuild,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Foundation => "foundation",
            Category::CoreProjects => "core_projects",
            Category::Automation => "automation",
            Category::SystemAndBuild => "system_and_build",
            Category::Bonus => "bonus",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Foundation => "Foundation",
            Category::CoreProjects => "Core Projects",
            Category::Automation => "Automation",
            Category::SystemAndBuild => "System & Build",
            Category::Bonus => "Bonus",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "foundation" => Ok(Category::Foundation),
            "core_projects" => Ok(Category::CoreProjects),
            "automation" => Ok(Category::Automation),
            "system_and_build" => Ok(Category::SystemAndBuild),
            "bonus" => Ok(Category::Bonus),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendStatus {
    Completed,
    InProgress,
    NotStarted,
}

impl WeekendStatus {
    pub fn label(self) -> &'static str {
        match self {
            WeekendStatus::Completed => "Completed",
            WeekendStatus::InProgress => "In Progress",
            WeekendStatus::NotStarted => "Not Started",
        }
    }
}

/// Scorecard dimension a weekend can be rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    OutcomeQuality,
    TimeSaved,
    Repeatability,
    UseAgain,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::OutcomeQuality,
        Criterion::TimeSaved,
        Criterion::Repeatability,
        Criterion::UseAgain,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::OutcomeQuality => "outcome_quality",
            Criterion::TimeSaved => "time_saved",
            Criterion::Repeatability => "repeatability",
            Criterion::UseAgain => "use_again",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Criterion::OutcomeQuality => "Outcome Quality",
            Criterion::TimeSaved => "Time Saved",
            Criterion::Repeatability => "Repeatability",
            Criterion::UseAgain => "Would Use Again",
        }
    }

    /// `use_again` is a yes/no answer stored on the 0-5 scale.
    pub fn is_binary(self) -> bool {
        matches!(self, Criterion::UseAgain)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownCriterion(value.to_string()))
    }
}

/// Completion flags of a work item, all the status deriver needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemFlags {
    pub is_completed: bool,
    pub is_advanced: bool,
}

/// A weekend as fetched for the overview: identity plus item flags.
#[derive(Debug, Clone, Serialize)]
pub struct WeekendSummary {
    pub id: i32,
    pub number: i32,
    pub name: String,
    pub deliverable: String,
    pub category: Category,
    pub is_bonus: bool,
    pub work_items: Vec<ItemFlags>,
}

impl WeekendSummary {
    /// Either marker places a weekend outside the main sequence.
    pub fn is_bonus_weekend(&self) -> bool {
        self.is_bonus || self.category == Category::Bonus
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkItem {
    pub id: i32,
    pub title: String,
    pub is_advanced: bool,
    pub is_completed: bool,
    pub sort_order: i32,
}

impl WorkItem {
    pub fn flags(&self) -> ItemFlags {
        ItemFlags {
            is_completed: self.is_completed,
            is_advanced: self.is_advanced,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DoneCriterion {
    pub id: i32,
    pub description: String,
    pub is_met: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScorecardRating {
    pub criterion: String,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekendDetail {
    pub id: i32,
    pub number: i32,
    pub name: String,
    pub deliverable: String,
    pub why_it_matters: String,
    pub category: Category,
    pub is_bonus: bool,
    pub notes: Option<String>,
    pub scorecard_notes: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub work_items: Vec<WorkItem>,
    pub done_criteria: Vec<DoneCriterion>,
    pub ratings: Vec<ScorecardRating>,
}

/// Result of flipping a work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub weekend_id: i32,
    pub weekend_number: i32,
    pub is_completed: bool,
    pub weekend_completed: bool,
    /// The toggle moved the weekend from not completed to completed.
    pub just_completed: bool,
}

/// Overall progress across the main curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

/// Reference to the weekend the user should pick up next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedWeekend {
    pub id: i32,
    pub number: i32,
    pub name: String,
}

/// Average rating for one weekend and criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTrend {
    pub weekend_number: i32,
    pub weekend_name: String,
    pub criterion: String,
    pub avg_rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_sort_in_program_order() {
        let mut categories = vec![
            Category::Bonus,
            Category::Automation,
            Category::Foundation,
            Category::SystemAndBuild,
            Category::CoreProjects,
        ];
        categories.sort();
        assert_eq!(&categories[..4], &Category::PROGRAM_ORDER);
        assert_eq!(categories[4], Category::Bonus);
    }

    #[test]
    fn category_parses_storage_names() {
        for category in Category::PROGRAM_ORDER {
            assert_eq!(category.as_str().parse::<Category>().ok(), Some(category));
        }
        assert!("weekend".parse::<Category>().is_err());
    }

    #[test]
    fn criterion_rejects_unknown_names() {
        assert_eq!(
            "time_saved".parse::<Criterion>().ok(),
            Some(Criterion::TimeSaved)
        );
        let err = "vibes".parse::<Criterion>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownCriterion("vibes".to_string()));
    }

    #[test]
    fn either_marker_makes_a_bonus_weekend() {
        let mut weekend = WeekendSummary {
            id: 11,
            number: 11,
            name: "Bonus".to_string(),
            deliverable: String::new(),
            category: Category::Bonus,
            is_bonus: false,
            work_items: Vec::new(),
        };
        assert!(weekend.is_bonus_weekend());

        weekend.category = Category::Foundation;
        assert!(!weekend.is_bonus_weekend());

        weekend.is_bonus = true;
        assert!(weekend.is_bonus_weekend());
    }

    #[test]
    fn only_use_again_is_binary() {
        let binary: Vec<_> = Criterion::ALL.into_iter().filter(|c| c.is_binary()).collect();
        assert_eq!(binary, vec![Criterion::UseAgain]);
    }
}
