//! Validated entry points for every write. Input is checked before any
//! statement runs; storage failures propagate unchanged.

use sqlx::PgPool;
use tracing::info;

use crate::db;
use crate::models::{Criterion, ToggleOutcome};
use crate::validate;

pub async fn toggle_work_item(
    pool: &PgPool,
    item_id: i64,
) -> anyhow::Result<Option<ToggleOutcome>> {
    let item_id = validate::id("item id", item_id)?;
    db::toggle_work_item_completion(pool, item_id).await
}

pub async fn save_notes(pool: &PgPool, weekend_id: i64, notes: &str) -> anyhow::Result<bool> {
    let weekend_id = validate::id("weekend id", weekend_id)?;
    let notes = validate::notes("notes", notes)?;
    let updated = db::set_weekend_notes(pool, weekend_id, notes).await?;
    if updated {
        info!(weekend_id, chars = notes.chars().count(), "notes saved");
    }
    Ok(updated)
}

pub async fn save_scorecard_notes(
    pool: &PgPool,
    weekend_id: i64,
    notes: &str,
) -> anyhow::Result<bool> {
    let weekend_id = validate::id("weekend id", weekend_id)?;
    let notes = validate::notes("scorecard notes", notes)?;
    let updated = db::set_weekend_scorecard_notes(pool, weekend_id, notes).await?;
    if updated {
        info!(weekend_id, chars = notes.chars().count(), "scorecard notes saved");
    }
    Ok(updated)
}

pub async fn save_rating(
    pool: &PgPool,
    weekend_id: i64,
    criterion: &str,
    rating: i64,
) -> anyhow::Result<Option<Criterion>> {
    let weekend_id = validate::id("weekend id", weekend_id)?;
    let criterion = validate::criterion(criterion)?;
    let rating = validate::rating(rating)?;

    if !db::upsert_scorecard_rating(pool, weekend_id, criterion, rating).await? {
        return Ok(None);
    }
    info!(weekend_id, %criterion, rating, "rating saved");
    Ok(Some(criterion))
}
