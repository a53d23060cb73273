//! Workout record store and history statistics

use chrono::{Datelike, Duration, NaiveDate};
use sqlx::SqlitePool;

use crate::models::{NewRecord, PerformanceRecord, StoredRecord};

const RECORD_COLUMNS: &str = "id, exercise, date, weight, reps, sets, memo";

/// ---------------------------------------------------------------------------
/// Database Operations
/// ---------------------------------------------------------------------------

/// Validate and insert a record, returning its id
pub async fn add_record(pool: &SqlitePool, record: &NewRecord) -> Result<i64, String> {
  let exercise = record.exercise.trim();
  if exercise.is_empty() {
    return Err("Exercise name is required".to_string());
  }
  if !record.weight.is_finite() || record.weight <= 0.0 {
    return Err(format!("Weight must be positive, got {}", record.weight));
  }
  if record.reps == Some(0) || record.sets == Some(0) {
    return Err("Reps and sets must be at least 1".to_string());
  }

  let result = sqlx::query(
    r#"
    INSERT INTO workout_records (exercise, date, weight, reps, sets, memo)
    VALUES (?, ?, ?, ?, ?, ?)
    "#,
  )
  .bind(exercise)
  .bind(record.date)
  .bind(record.weight)
  .bind(record.reps.map(i64::from))
  .bind(record.sets.map(i64::from))
  .bind(record.memo.trim())
  .execute(pool)
  .await
  .map_err(|e| format!("Failed to add record: {}", e))?;

  tracing::info!(exercise, date = %record.date, weight = record.weight, "Recorded workout");

  Ok(result.last_insert_rowid())
}

/// Records for one exercise, newest first. Same-day entries keep insertion
/// recency (later insert first).
pub async fn list_records(
  pool: &SqlitePool,
  exercise: &str,
  limit: Option<i64>,
) -> Result<Vec<StoredRecord>, String> {
  let sql = format!(
    "SELECT {} FROM workout_records WHERE exercise = ? ORDER BY date DESC, id DESC LIMIT ?",
    RECORD_COLUMNS
  );
  sqlx::query_as::<_, StoredRecord>(&sql)
    .bind(exercise)
    .bind(limit.unwrap_or(-1))
    .fetch_all(pool)
    .await
    .map_err(|e| format!("Failed to load records: {}", e))
}

/// Engine-ready history for one exercise, newest first
pub async fn load_history(
  pool: &SqlitePool,
  exercise: &str,
  limit: Option<i64>,
) -> Result<Vec<PerformanceRecord>, String> {
  let records = list_records(pool, exercise, limit).await?;
  Ok(records.iter().map(StoredRecord::to_performance).collect())
}

/// Every record logged on one day, across exercises
pub async fn records_on(pool: &SqlitePool, date: NaiveDate) -> Result<Vec<StoredRecord>, String> {
  let sql = format!(
    "SELECT {} FROM workout_records WHERE date = ? ORDER BY exercise, id",
    RECORD_COLUMNS
  );
  sqlx::query_as::<_, StoredRecord>(&sql)
    .bind(date)
    .fetch_all(pool)
    .await
    .map_err(|e| format!("Failed to load records for {}: {}", date, e))
}

pub async fn exercise_names(pool: &SqlitePool) -> Result<Vec<String>, String> {
  sqlx::query_scalar("SELECT DISTINCT exercise FROM workout_records ORDER BY exercise")
    .fetch_all(pool)
    .await
    .map_err(|e| format!("Failed to load exercise names: {}", e))
}

/// Distinct days with at least one record in `[start, end]`
pub async fn workout_days_between(
  pool: &SqlitePool,
  start: NaiveDate,
  end: NaiveDate,
) -> Result<i64, String> {
  sqlx::query_scalar("SELECT COUNT(DISTINCT date) FROM workout_records WHERE date >= ? AND date <= ?")
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
    .map_err(|e| format!("Failed to count workout days: {}", e))
}

/// Workout days in the Monday-to-Sunday week containing `today`
pub async fn workout_days_in_week(pool: &SqlitePool, today: NaiveDate) -> Result<i64, String> {
  let (monday, sunday) = week_bounds(today);
  workout_days_between(pool, monday, sunday).await
}

pub async fn workout_days_in_month(pool: &SqlitePool, year: i32, month: u32) -> Result<i64, String> {
  let (first, last) =
    month_bounds(year, month).ok_or_else(|| format!("Invalid month: {}-{}", year, month))?;
  workout_days_between(pool, first, last).await
}

/// Records that raised the exercise's running best weight, newest first,
/// keeping the most recent `limit` of them
pub async fn max_update_records(
  pool: &SqlitePool,
  exercise: &str,
  limit: Option<usize>,
) -> Result<Vec<StoredRecord>, String> {
  let mut records = list_records(pool, exercise, None).await?;
  records.reverse();
  Ok(max_updates(&records, limit))
}

/// ---------------------------------------------------------------------------
/// Pure Helpers
/// ---------------------------------------------------------------------------

/// `records` must be oldest first
pub fn max_updates(records: &[StoredRecord], limit: Option<usize>) -> Vec<StoredRecord> {
  let mut best = f64::NEG_INFINITY;
  let mut updates: Vec<StoredRecord> = Vec::new();

  for record in records {
    if record.weight.is_finite() && record.weight > best {
      best = record.weight;
      updates.push(record.clone());
    }
  }

  if let Some(limit) = limit {
    let skip = updates.len().saturating_sub(limit);
    updates.drain(..skip);
  }
  updates.reverse();
  updates
}

pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
  let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
  (monday, monday + Duration::days(6))
}

pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
  let first = NaiveDate::from_ymd_opt(year, month, 1)?;
  let next = if month == 12 {
    NaiveDate::from_ymd_opt(year + 1, 1, 1)?
  } else {
    NaiveDate::from_ymd_opt(year, month + 1, 1)?
  };
  Some((first, next - Duration::days(1)))
}
