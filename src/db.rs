use std::collections::HashMap;

use anyhow::Context;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgExecutor;
use sqlx::{PgPool, Postgres, Row, Transaction};
use tracing::{debug, info, warn};

use crate::curriculum::CURRICULUM;
use crate::models::{
    Category, Criterion, DoneCriterion, ItemFlags, ScoreTrend, ScorecardRating, ToggleOutcome,
    WeekendDetail, WeekendSummary, WorkItem,
};
use crate::{status, validate};

pub async fn init_db(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Replaces everything in the store with the fixed curriculum. Identities
/// restart, so weekend ids line up with weekend numbers.
pub async fn seed(pool: &PgPool) -> anyhow::Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        TRUNCATE weekend_tracker.scorecard_ratings,
                 weekend_tracker.done_criteria,
                 weekend_tracker.work_items,
                 weekend_tracker.weekends
        RESTART IDENTITY CASCADE
        "#,
    )
    .execute(&mut *tx)
    .await?;

    for weekend in CURRICULUM.iter() {
        let weekend_id: i32 = sqlx::query(
            r#"
            INSERT INTO weekend_tracker.weekends
            (number, name, deliverable, why_it_matters, category, is_bonus)
            VALUES ($1, $2, $3, $4, $5::weekend_tracker.weekend_category, $6)
            RETURNING id
            "#,
        )
        .bind(weekend.number)
        .bind(weekend.name)
        .bind(weekend.deliverable)
        .bind(weekend.why_it_matters)
        .bind(weekend.category.as_str())
        .bind(weekend.is_bonus)
        .fetch_one(&mut *tx)
        .await?
        .get("id");

        let items = weekend
            .core_items
            .iter()
            .map(|title| (*title, false))
            .chain(weekend.advanced_items.iter().map(|title| (*title, true)));

        for (index, (title, is_advanced)) in items.enumerate() {
            sqlx::query(
                r#"
                INSERT INTO weekend_tracker.work_items
                (weekend_id, title, is_advanced, sort_order)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(weekend_id)
            .bind(title)
            .bind(is_advanced)
            .bind(index as i32 + 1)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query(
            r#"
            INSERT INTO weekend_tracker.done_criteria (weekend_id, description, sort_order)
            VALUES ($1, $2, 1)
            "#,
        )
        .bind(weekend_id)
        .bind(weekend.done_criterion)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    info!(weekends = CURRICULUM.len(), "curriculum seeded");
    Ok(())
}

/// Opens a read-only transaction whose queries all see one snapshot.
async fn begin_snapshot(pool: &PgPool) -> anyhow::Result<Transaction<'static, Postgres>> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}

/// All weekends ordered by number, each carrying only the completion flags
/// of its work items. Both queries read the same snapshot.
pub async fn fetch_all_weekends_with_item_flags(
    pool: &PgPool,
) -> anyhow::Result<Vec<WeekendSummary>> {
    let mut tx = begin_snapshot(pool).await?;

    let item_rows = sqlx::query(
        "SELECT weekend_id, is_completed, is_advanced \
         FROM weekend_tracker.work_items \
         ORDER BY weekend_id, sort_order",
    )
    .fetch_all(&mut *tx)
    .await?;

    let mut items_by_weekend: HashMap<i32, Vec<ItemFlags>> = HashMap::new();
    for row in item_rows {
        items_by_weekend
            .entry(row.get("weekend_id"))
            .or_default()
            .push(ItemFlags {
                is_completed: row.get("is_completed"),
                is_advanced: row.get("is_advanced"),
            });
    }

    let weekend_rows = sqlx::query(
        "SELECT id, number, name, deliverable, category::text AS category, is_bonus \
         FROM weekend_tracker.weekends \
         ORDER BY number ASC",
    )
    .fetch_all(&mut *tx)
    .await?;

    let mut weekends = Vec::with_capacity(weekend_rows.len());
    for row in weekend_rows {
        let id: i32 = row.get("id");
        weekends.push(WeekendSummary {
            id,
            number: row.get("number"),
            name: row.get("name"),
            deliverable: row.get("deliverable"),
            category: row.get::<String, _>("category").parse::<Category>()?,
            is_bonus: row.get("is_bonus"),
            work_items: items_by_weekend.remove(&id).unwrap_or_default(),
        });
    }

    tx.commit().await?;
    debug!(count = weekends.len(), "fetched weekends");
    Ok(weekends)
}

pub async fn fetch_weekend_detail(
    pool: &PgPool,
    weekend_id: i32,
) -> anyhow::Result<Option<WeekendDetail>> {
    let mut tx = begin_snapshot(pool).await?;

    let Some(row) = sqlx::query(
        r#"
        SELECT id, number, name, deliverable, why_it_matters, category::text AS category,
               is_bonus, notes, scorecard_notes, completed_at
        FROM weekend_tracker.weekends
        WHERE id = $1
        "#,
    )
    .bind(weekend_id)
    .fetch_optional(&mut *tx)
    .await?
    else {
        tx.rollback().await?;
        return Ok(None);
    };

    let work_items = sqlx::query(
        "SELECT id, title, is_advanced, is_completed, sort_order \
         FROM weekend_tracker.work_items WHERE weekend_id = $1 \
         ORDER BY sort_order, id",
    )
    .bind(weekend_id)
    .fetch_all(&mut *tx)
    .await?
    .into_iter()
    .map(|item| WorkItem {
        id: item.get("id"),
        title: item.get("title"),
        is_advanced: item.get("is_advanced"),
        is_completed: item.get("is_completed"),
        sort_order: item.get("sort_order"),
    })
    .collect();

    let done_criteria = sqlx::query(
        "SELECT id, description, is_met, sort_order \
         FROM weekend_tracker.done_criteria WHERE weekend_id = $1 \
         ORDER BY sort_order, id",
    )
    .bind(weekend_id)
    .fetch_all(&mut *tx)
    .await?
    .into_iter()
    .map(|criterion| DoneCriterion {
        id: criterion.get("id"),
        description: criterion.get("description"),
        is_met: criterion.get("is_met"),
        sort_order: criterion.get("sort_order"),
    })
    .collect();

    let ratings = sqlx::query(
        "SELECT criterion, rating, comment \
         FROM weekend_tracker.scorecard_ratings WHERE weekend_id = $1 \
         ORDER BY criterion",
    )
    .bind(weekend_id)
    .fetch_all(&mut *tx)
    .await?
    .into_iter()
    .map(|rating| ScorecardRating {
        criterion: rating.get("criterion"),
        rating: rating.get("rating"),
        comment: rating.get("comment"),
    })
    .collect();

    tx.commit().await?;

    Ok(Some(WeekendDetail {
        id: row.get("id"),
        number: row.get("number"),
        name: row.get("name"),
        deliverable: row.get("deliverable"),
        why_it_matters: row.get("why_it_matters"),
        category: row.get::<String, _>("category").parse::<Category>()?,
        is_bonus: row.get("is_bonus"),
        notes: row.get("notes"),
        scorecard_notes: row.get("scorecard_notes"),
        completed_at: row.get("completed_at"),
        work_items,
        done_criteria,
        ratings,
    }))
}

/// Flips a work item and re-derives its weekend's `completed_at` in one
/// transaction. The weekend row is locked first so concurrent toggles on the
/// same weekend serialise. Returns `None` when the item does not exist.
pub async fn toggle_work_item_completion(
    pool: &PgPool,
    item_id: i32,
) -> anyhow::Result<Option<ToggleOutcome>> {
    let mut tx = pool.begin().await?;

    let Some(weekend) = sqlx::query(
        r#"
        SELECT w.id, w.number, w.completed_at
        FROM weekend_tracker.weekends w
        JOIN weekend_tracker.work_items i ON i.weekend_id = w.id
        WHERE i.id = $1
        FOR UPDATE OF w
        "#,
    )
    .bind(item_id)
    .fetch_optional(&mut *tx)
    .await?
    else {
        tx.rollback().await?;
        warn!(item_id, "toggle ignored, work item does not exist");
        return Ok(None);
    };

    let weekend_id: i32 = weekend.get("id");
    let weekend_number: i32 = weekend.get("number");
    let previous_completed_at: Option<DateTime<Utc>> = weekend.get("completed_at");

    let is_completed: bool = sqlx::query(
        r#"
        UPDATE weekend_tracker.work_items
        SET is_completed = NOT is_completed, updated_at = now()
        WHERE id = $1
        RETURNING is_completed
        "#,
    )
    .bind(item_id)
    .fetch_one(&mut *tx)
    .await?
    .get("is_completed");

    let items: Vec<ItemFlags> = sqlx::query(
        "SELECT is_completed, is_advanced FROM weekend_tracker.work_items WHERE weekend_id = $1",
    )
    .bind(weekend_id)
    .fetch_all(&mut *tx)
    .await?
    .into_iter()
    .map(|row| ItemFlags {
        is_completed: row.get("is_completed"),
        is_advanced: row.get("is_advanced"),
    })
    .collect();

    let transition = status::toggle_transition(&items, previous_completed_at, Utc::now());
    let weekend_completed = transition.completed_at.is_some();
    set_weekend_completed_at(&mut *tx, weekend_id, transition.completed_at).await?;

    tx.commit().await?;

    let outcome = ToggleOutcome {
        weekend_id,
        weekend_number,
        is_completed,
        weekend_completed,
        just_completed: transition.just_completed,
    };
    info!(
        item_id,
        weekend_id,
        is_completed,
        weekend_completed,
        "work item toggled"
    );
    Ok(Some(outcome))
}

pub async fn set_weekend_completed_at<'e, E>(
    executor: E,
    weekend_id: i32,
    completed_at: Option<DateTime<Utc>>,
) -> anyhow::Result<bool>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE weekend_tracker.weekends SET completed_at = $2, updated_at = now() WHERE id = $1",
    )
    .bind(weekend_id)
    .bind(completed_at)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Inserts or replaces the rating for `(weekend, criterion)`. Returns `false`
/// when the weekend does not exist.
pub async fn upsert_scorecard_rating<'e, E>(
    executor: E,
    weekend_id: i32,
    criterion: Criterion,
    rating: i32,
) -> anyhow::Result<bool>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO weekend_tracker.scorecard_ratings (weekend_id, criterion, rating)
        SELECT w.id, $2, $3 FROM weekend_tracker.weekends w WHERE w.id = $1
        ON CONFLICT (weekend_id, criterion) DO UPDATE
        SET rating = EXCLUDED.rating, updated_at = now()
        "#,
    )
    .bind(weekend_id)
    .bind(criterion.as_str())
    .bind(rating)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn set_weekend_notes(pool: &PgPool, weekend_id: i32, text: &str) -> anyhow::Result<bool> {
    let result = sqlx::query(
        "UPDATE weekend_tracker.weekends SET notes = $2, updated_at = now() WHERE id = $1",
    )
    .bind(weekend_id)
    .bind(text)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn set_weekend_scorecard_notes(
    pool: &PgPool,
    weekend_id: i32,
    text: &str,
) -> anyhow::Result<bool> {
    let result = sqlx::query(
        "UPDATE weekend_tracker.weekends
         SET scorecard_notes = $2, updated_at = now()
         WHERE id = $1",
    )
    .bind(weekend_id)
    .bind(text)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Average rating per weekend and criterion, ordered by weekend number.
pub async fn fetch_score_trends(pool: &PgPool) -> anyhow::Result<Vec<ScoreTrend>> {
    let rows = sqlx::query(
        r#"
        SELECT w.number, w.name, r.criterion, AVG(r.rating)::float8 AS avg_rating
        FROM weekend_tracker.scorecard_ratings r
        JOIN weekend_tracker.weekends w ON w.id = r.weekend_id
        WHERE r.rating IS NOT NULL
        GROUP BY w.number, w.name, r.criterion
        ORDER BY w.number, r.criterion
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| ScoreTrend {
            weekend_number: row.get("number"),
            weekend_name: row.get("name"),
            criterion: row.get("criterion"),
            avg_rating: row.get("avg_rating"),
        })
        .collect())
}

/// Imports scorecard ratings from a CSV with columns
/// `weekend_number,criterion,rating`. All rows are applied in one transaction;
/// any invalid row aborts the import.
pub async fn import_ratings_csv(
    pool: &PgPool,
    csv_path: &std::path::Path,
) -> anyhow::Result<usize> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        weekend_number: i64,
        criterion: String,
        rating: i64,
    }

    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let mut tx = pool.begin().await?;
    let mut applied = 0usize;

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let line = index + 2;
        let row = result.with_context(|| format!("malformed row at line {line}"))?;
        let number = validate::id("weekend number", row.weekend_number)
            .with_context(|| format!("invalid row at line {line}"))?;
        let criterion = validate::criterion(&row.criterion)
            .with_context(|| format!("invalid row at line {line}"))?;
        let rating = validate::rating(row.rating)
            .with_context(|| format!("invalid row at line {line}"))?;

        let weekend_id: i32 =
            sqlx::query("SELECT id FROM weekend_tracker.weekends WHERE number = $1")
                .bind(number)
                .fetch_optional(&mut *tx)
                .await?
                .map(|row| row.get("id"))
                .with_context(|| format!("weekend {number} at line {line} does not exist"))?;

        if upsert_scorecard_rating(&mut *tx, weekend_id, criterion, rating).await? {
            applied += 1;
        }
    }

    tx.commit().await?;
    info!(applied, path = %csv_path.display(), "ratings imported");
    Ok(applied)
}
