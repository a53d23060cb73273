use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BodyWeightEntry {
  pub id: i64,
  pub date: NaiveDate,
  /// kg
  pub value: f64,
}
