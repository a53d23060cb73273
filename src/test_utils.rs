//! Test utilities and helpers for integration and unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock data factories
//! - Helper assertions

use crate::config::Config;
use crate::db::AppState;
use crate::models::PerformanceRecord;
use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;
use std::path::PathBuf;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Config with the remote trainer disabled
pub fn test_config() -> Config {
  Config {
    db_path: PathBuf::from(":memory:"),
    openai_api_key: None,
    openai_base_url: "http://localhost".to_string(),
    model: "gpt-4o-mini".to_string(),
    use_ai: true,
  }
}

/// App state over a fresh in-memory database
pub async fn setup_test_state() -> AppState {
  AppState {
    db: setup_test_db().await,
    config: test_config(),
  }
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Seed workout records for one exercise.
/// Each tuple is (date, weight, reps, sets, memo). Returns the row ids.
pub async fn seed_test_records(
  pool: &SqlitePool,
  exercise: &str,
  rows: &[(NaiveDate, f64, Option<i64>, Option<i64>, &str)],
) -> Vec<i64> {
  let mut ids = Vec::new();

  for (date, weight, reps, sets, memo) in rows {
    let result = sqlx::query(
      r#"
      INSERT INTO workout_records (exercise, date, weight, reps, sets, memo)
      VALUES (?1, ?2, ?3, ?4, ?5, ?6)
      "#,
    )
    .bind(exercise)
    .bind(date)
    .bind(weight)
    .bind(reps)
    .bind(sets)
    .bind(memo)
    .execute(pool)
    .await
    .expect("Failed to insert test record");

    ids.push(result.last_insert_rowid());
  }

  ids
}

/// Seed a squat history with a rising trend: 100 -> 102.5 -> 105
pub async fn seed_squat_progression(pool: &SqlitePool) -> Vec<i64> {
  seed_test_records(
    pool,
    "Squat",
    &[
      (date(2026, 3, 2), 100.0, Some(5), Some(3), ""),
      (date(2026, 3, 5), 102.5, Some(5), Some(3), ""),
      (date(2026, 3, 9), 105.0, Some(5), Some(3), "solid depth"),
    ],
  )
  .await
}

/// Seed a plan item for a date, returning its id
pub async fn seed_test_plan_item(pool: &SqlitePool, plan_date: NaiveDate, title: &str) -> i64 {
  sqlx::query("INSERT INTO plan_items (plan_date, title) VALUES (?1, ?2)")
    .bind(plan_date)
    .bind(title)
    .execute(pool)
    .await
    .expect("Failed to insert plan item")
    .last_insert_rowid()
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Fixed reference day so engine tests never depend on the clock
pub fn base_date() -> NaiveDate {
  date(2026, 3, 10)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Record dated `days_ago` days before `base_date()`
pub fn mock_record(days_ago: i64, weight: f64, reps: u32, sets: u32, memo: &str) -> PerformanceRecord {
  PerformanceRecord::new(base_date() - Duration::days(days_ago), weight, reps, sets, memo)
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('workout_records', 'plan_items', 'body_weight_records', 'lift_targets', 'streak_goal', 'plan_sets', 'exercise_library')"
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 7, "Expected 7 tables, got {}", tables.len());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_records_returns_correct_count() {
    let pool = setup_test_db().await;

    let ids = seed_squat_progression(&pool).await;
    assert_eq!(ids.len(), 3);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workout_records")
      .fetch_one(&pool)
      .await
      .expect("Failed to count records");

    assert_eq!(count, 3);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_record_dates_count_back() {
    let record = mock_record(3, 60.0, 5, 3, "");
    assert_eq!(record.date, date(2026, 3, 7));
    assert_eq!(record.weight, 60.0);
  }
}
