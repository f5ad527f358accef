use serde::Serialize;

use crate::models::{Category, Progress, SuggestedWeekend, WeekendStatus, WeekendSummary};
use crate::{progress, status, suggest};

#[derive(Debug, Clone, Serialize)]
pub struct WeekendCard {
    pub id: i32,
    pub number: i32,
    pub name: String,
    pub deliverable: String,
    pub status: WeekendStatus,
    pub core_completed: usize,
    pub core_total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySection {
    pub category: Category,
    pub label: &'static str,
    pub weekends: Vec<WeekendCard>,
}

/// Everything the overview needs, derived from one snapshot of the store.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub progress: Progress,
    pub suggested: Option<SuggestedWeekend>,
    pub sections: Vec<CategorySection>,
}

impl Dashboard {
    pub fn build(weekends: &[WeekendSummary]) -> Self {
        let progress = progress::aggregate(weekends);
        let suggested = suggest::suggest_next(weekends).map(|weekend| SuggestedWeekend {
            id: weekend.id,
            number: weekend.number,
            name: weekend.name.clone(),
        });

        let mut sections: Vec<CategorySection> = Category::PROGRAM_ORDER
            .into_iter()
            .filter_map(|category| {
                let cards: Vec<WeekendCard> = weekends
                    .iter()
                    .filter(|weekend| !weekend.is_bonus_weekend() && weekend.category == category)
                    .map(card)
                    .collect();
                section(category, cards)
            })
            .collect();

        let bonus: Vec<WeekendCard> = weekends
            .iter()
            .filter(|weekend| weekend.is_bonus_weekend())
            .map(card)
            .collect();
        sections.extend(section(Category::Bonus, bonus));

        Self {
            progress,
            suggested,
            sections,
        }
    }
}

fn section(category: Category, weekends: Vec<WeekendCard>) -> Option<CategorySection> {
    if weekends.is_empty() {
        return None;
    }
    Some(CategorySection {
        category,
        label: category.label(),
        weekends,
    })
}

fn card(weekend: &WeekendSummary) -> WeekendCard {
    let (core_completed, core_total) = status::core_counts(&weekend.work_items);
    WeekendCard {
        id: weekend.id,
        number: weekend.number,
        name: weekend.name.clone(),
        deliverable: weekend.deliverable.clone(),
        status: status::derive_status(&weekend.work_items),
        core_completed,
        core_total,
    }
}
