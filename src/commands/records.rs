//! Commands for logging workouts and reading history

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::db::AppState;
use crate::models::{NewRecord, StoredRecord};
use crate::records;

/// Max update records listed per exercise in the stats view
const STATS_MAX_UPDATES: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseStats {
  pub exercise: String,
  /// Newest first; the head is the current best
  pub max_updates: Vec<StoredRecord>,
}

impl ExerciseStats {
  pub fn best_weight(&self) -> Option<f64> {
    self.max_updates.first().map(|r| r.weight)
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStats {
  pub today: NaiveDate,
  pub week_days: i64,
  pub month_days: i64,
  pub exercises: Vec<ExerciseStats>,
}

/// Log one workout record
pub async fn record_workout(state: &AppState, record: NewRecord) -> Result<i64, String> {
  records::add_record(&state.db, &record).await
}

/// History for an exercise, newest first
pub async fn get_history(
  state: &AppState,
  exercise: &str,
  limit: Option<i64>,
) -> Result<Vec<StoredRecord>, String> {
  records::list_records(&state.db, exercise, limit).await
}

/// Everything logged on one day
pub async fn get_day(state: &AppState, date: NaiveDate) -> Result<Vec<StoredRecord>, String> {
  records::records_on(&state.db, date).await
}

/// Workout day counts plus the personal-best trail of every exercise
pub async fn get_stats(state: &AppState, today: NaiveDate) -> Result<TrainingStats, String> {
  let week_days = records::workout_days_in_week(&state.db, today).await?;
  let month_days = records::workout_days_in_month(&state.db, today.year(), today.month()).await?;

  let mut exercises = Vec::new();
  for exercise in records::exercise_names(&state.db).await? {
    let max_updates = records::max_update_records(&state.db, &exercise, Some(STATS_MAX_UPDATES)).await?;
    exercises.push(ExerciseStats { exercise, max_updates });
  }

  Ok(TrainingStats {
    today,
    week_days,
    month_days,
    exercises,
  })
}
