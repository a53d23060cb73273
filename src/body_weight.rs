//! Body weight log

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::BodyWeightEntry;

/// Entries shown by `recent_body_weights`
pub const RECENT_BODY_WEIGHTS: i64 = 20;

pub async fn add_body_weight(pool: &SqlitePool, date: NaiveDate, value: f64) -> Result<i64, String> {
  if !value.is_finite() || value <= 0.0 {
    return Err(format!("Body weight must be positive, got {}", value));
  }

  let result = sqlx::query("INSERT INTO body_weight_records (date, value) VALUES (?, ?)")
    .bind(date)
    .bind(value)
    .execute(pool)
    .await
    .map_err(|e| format!("Failed to add body weight: {}", e))?;

  Ok(result.last_insert_rowid())
}

/// Most recent entries, oldest first for charting
pub async fn recent_body_weights(pool: &SqlitePool) -> Result<Vec<BodyWeightEntry>, String> {
  let mut entries = sqlx::query_as::<_, BodyWeightEntry>(
    "SELECT id, date, value FROM body_weight_records ORDER BY date DESC, id DESC LIMIT ?",
  )
  .bind(RECENT_BODY_WEIGHTS)
  .fetch_all(pool)
  .await
  .map_err(|e| format!("Failed to load body weights: {}", e))?;

  entries.reverse();
  Ok(entries)
}
