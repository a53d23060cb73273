use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One exercise scheduled for a day
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlanItem {
  pub id: i64,
  pub plan_date: NaiveDate,
  pub title: String,
  /// Free-text set description, e.g. "70kg · 6 reps"
  pub meta: String,
  pub done: bool,
  /// Planned set rows in position order
  #[sqlx(skip)]
  #[serde(default)]
  pub sets: Vec<PlannedSet>,
}

impl PlanItem {
  /// (checked, total) planned sets
  pub fn set_progress(&self) -> (usize, usize) {
    let checked = self.sets.iter().filter(|s| s.done).count();
    (checked, self.sets.len())
  }
}

/// A planned set row; weight or reps may be left open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlannedSet {
  pub id: i64,
  pub plan_item_id: i64,
  /// 1-based order within the plan item
  pub position: i64,
  pub weight: Option<f64>,
  pub reps: Option<i64>,
  pub done: bool,
}

impl std::fmt::Display for PlannedSet {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let weight = self.weight.map(|w| format!("{} kg", w)).unwrap_or_else(|| "weight?".to_string());
    let reps = self.reps.map(|r| format!("{} reps", r)).unwrap_or_else(|| "reps?".to_string());
    write!(f, "Set {}: {} · {}", self.position, weight, reps)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn planned(position: i64, weight: Option<f64>, reps: Option<i64>, done: bool) -> PlannedSet {
    PlannedSet {
      id: position,
      plan_item_id: 1,
      position,
      weight,
      reps,
      done,
    }
  }

  #[test]
  fn test_planned_set_display_marks_open_fields() {
    assert_eq!(planned(1, Some(70.0), Some(6), false).to_string(), "Set 1: 70 kg · 6 reps");
    assert_eq!(planned(2, None, Some(8), false).to_string(), "Set 2: weight? · 8 reps");
  }

  #[test]
  fn test_set_progress() {
    let item = PlanItem {
      id: 1,
      plan_date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
      title: "Squat".to_string(),
      meta: String::new(),
      done: false,
      sets: vec![planned(1, Some(100.0), Some(5), true), planned(2, Some(100.0), Some(5), false)],
    };
    assert_eq!(item.set_progress(), (1, 2));
  }
}
