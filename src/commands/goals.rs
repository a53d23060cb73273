//! Commands for lift targets, streak goals and body weight

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::body_weight;
use crate::db::AppState;
use crate::goals;
use crate::models::{BodyWeightEntry, LiftTarget, StreakGoal, StreakProgress};

/// Everything the goal overview shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalOverview {
  pub lift_targets: Vec<LiftTarget>,
  pub streak: StreakProgress,
}

pub async fn set_lift_target(state: &AppState, exercise: &str, target_weight: f64) -> Result<(), String> {
  goals::set_lift_target(&state.db, exercise, target_weight).await
}

pub async fn set_streak_goal(
  state: &AppState,
  weekly_target: Option<i64>,
  monthly_target: Option<i64>,
) -> Result<(), String> {
  let goal = StreakGoal {
    weekly_target,
    monthly_target,
  };
  goals::set_streak_goal(&state.db, &goal).await
}

pub async fn get_goal_overview(state: &AppState, today: NaiveDate) -> Result<GoalOverview, String> {
  Ok(GoalOverview {
    lift_targets: goals::list_lift_targets(&state.db).await?,
    streak: goals::streak_progress(&state.db, today).await?,
  })
}

pub async fn log_body_weight(state: &AppState, date: NaiveDate, value: f64) -> Result<i64, String> {
  body_weight::add_body_weight(&state.db, date, value).await
}

pub async fn get_body_weights(state: &AppState) -> Result<Vec<BodyWeightEntry>, String> {
  body_weight::recent_body_weights(&state.db).await
}
