//! Commands for the daily plan

use chrono::NaiveDate;

use crate::db::AppState;
use crate::models::PlanItem;
use crate::plan;

pub async fn add_plan_item(
  state: &AppState,
  date: NaiveDate,
  title: &str,
  meta: &str,
) -> Result<i64, String> {
  plan::add_plan_item(&state.db, date, title, meta).await
}

pub async fn get_plan(state: &AppState, date: NaiveDate) -> Result<Vec<PlanItem>, String> {
  plan::list_plan(&state.db, date).await
}

pub async fn mark_plan_item(state: &AppState, id: i64, done: bool) -> Result<(), String> {
  plan::set_plan_item_done(&state.db, id, done).await
}

pub async fn remove_plan_item(state: &AppState, id: i64) -> Result<(), String> {
  plan::remove_plan_item(&state.db, id).await
}

pub async fn add_plan_set(
  state: &AppState,
  plan_item_id: i64,
  weight: Option<f64>,
  reps: Option<u32>,
) -> Result<i64, String> {
  plan::add_plan_set(&state.db, plan_item_id, weight, reps).await
}

pub async fn toggle_plan_set(state: &AppState, id: i64) -> Result<bool, String> {
  plan::toggle_plan_set(&state.db, id).await
}

pub async fn remove_plan_set(state: &AppState, id: i64) -> Result<(), String> {
  plan::remove_plan_set(&state.db, id).await
}
