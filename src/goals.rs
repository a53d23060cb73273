//! Lift targets and workout streak goals

use chrono::{Datelike, NaiveDate};
use sqlx::SqlitePool;

use crate::models::{LiftTarget, StreakGoal, StreakProgress};
use crate::records;

/// ---------------------------------------------------------------------------
/// Lift Targets
/// ---------------------------------------------------------------------------

/// Create or replace the target weight for an exercise
pub async fn set_lift_target(pool: &SqlitePool, exercise: &str, target_weight: f64) -> Result<(), String> {
  let exercise = exercise.trim();
  if exercise.is_empty() {
    return Err("Exercise name is required".to_string());
  }
  if !target_weight.is_finite() || target_weight <= 0.0 {
    return Err(format!("Target weight must be positive, got {}", target_weight));
  }

  sqlx::query(
    r#"
    INSERT INTO lift_targets (exercise, target_weight, updated_at)
    VALUES (?, ?, CURRENT_TIMESTAMP)
    ON CONFLICT(exercise) DO UPDATE SET
      target_weight = excluded.target_weight,
      updated_at = CURRENT_TIMESTAMP
    "#,
  )
  .bind(exercise)
  .bind(target_weight)
  .execute(pool)
  .await
  .map_err(|e| format!("Failed to set lift target: {}", e))?;

  Ok(())
}

pub async fn list_lift_targets(pool: &SqlitePool) -> Result<Vec<LiftTarget>, String> {
  sqlx::query_as::<_, LiftTarget>("SELECT exercise, target_weight FROM lift_targets ORDER BY exercise")
    .fetch_all(pool)
    .await
    .map_err(|e| format!("Failed to load lift targets: {}", e))
}

/// ---------------------------------------------------------------------------
/// Streak Goal
/// ---------------------------------------------------------------------------

/// Replace the streak goal. `None` clears a target.
pub async fn set_streak_goal(pool: &SqlitePool, goal: &StreakGoal) -> Result<(), String> {
  if let Some(weekly) = goal.weekly_target {
    if !(1..=7).contains(&weekly) {
      return Err(format!("Weekly target must be between 1 and 7, got {}", weekly));
    }
  }
  if let Some(monthly) = goal.monthly_target {
    if !(1..=31).contains(&monthly) {
      return Err(format!("Monthly target must be between 1 and 31, got {}", monthly));
    }
  }

  sqlx::query(
    r#"
    INSERT INTO streak_goal (id, weekly_target, monthly_target, updated_at)
    VALUES (1, ?, ?, CURRENT_TIMESTAMP)
    ON CONFLICT(id) DO UPDATE SET
      weekly_target = excluded.weekly_target,
      monthly_target = excluded.monthly_target,
      updated_at = CURRENT_TIMESTAMP
    "#,
  )
  .bind(goal.weekly_target)
  .bind(goal.monthly_target)
  .execute(pool)
  .await
  .map_err(|e| format!("Failed to set streak goal: {}", e))?;

  Ok(())
}

pub async fn get_streak_goal(pool: &SqlitePool) -> Result<StreakGoal, String> {
  let goal = sqlx::query_as::<_, StreakGoal>(
    "SELECT weekly_target, monthly_target FROM streak_goal WHERE id = 1",
  )
  .fetch_optional(pool)
  .await
  .map_err(|e| format!("Failed to load streak goal: {}", e))?;

  Ok(goal.unwrap_or_default())
}

/// Workout days this week and month measured against the streak goal
pub async fn streak_progress(pool: &SqlitePool, today: NaiveDate) -> Result<StreakProgress, String> {
  let week_days = records::workout_days_in_week(pool, today).await?;
  let month_days = records::workout_days_in_month(pool, today.year(), today.month()).await?;
  let goal = get_streak_goal(pool).await?;

  Ok(StreakProgress {
    today,
    week_days,
    month_days,
    goal,
  })
}
