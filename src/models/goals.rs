use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LiftTarget {
  pub exercise: String,
  pub target_weight: f64,
}

/// Target number of distinct workout days
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StreakGoal {
  pub weekly_target: Option<i64>,
  pub monthly_target: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakProgress {
  pub today: NaiveDate,
  pub week_days: i64,
  pub month_days: i64,
  pub goal: StreakGoal,
}

impl StreakProgress {
  pub fn weekly_met(&self) -> Option<bool> {
    self.goal.weekly_target.map(|target| self.week_days >= target)
  }

  pub fn monthly_met(&self) -> Option<bool> {
    self.goal.monthly_target.map(|target| self.month_days >= target)
  }
}
