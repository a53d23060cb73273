//! Daily plan store
//!
//! A plan item is one exercise scheduled for a day. Each item may carry
//! planned set rows that are checked off individually.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::{PlanItem, PlannedSet};

const PLANNED_SET_COLUMNS: &str = "ps.id, ps.plan_item_id, ps.position, ps.weight, ps.reps, ps.done";

/// ---------------------------------------------------------------------------
/// Plan Items
/// ---------------------------------------------------------------------------

pub async fn add_plan_item(
  pool: &SqlitePool,
  plan_date: NaiveDate,
  title: &str,
  meta: &str,
) -> Result<i64, String> {
  let title = title.trim();
  if title.is_empty() {
    return Err("Plan item title is required".to_string());
  }

  let result = sqlx::query("INSERT INTO plan_items (plan_date, title, meta) VALUES (?, ?, ?)")
    .bind(plan_date)
    .bind(title)
    .bind(meta.trim())
    .execute(pool)
    .await
    .map_err(|e| format!("Failed to add plan item: {}", e))?;

  Ok(result.last_insert_rowid())
}

/// Items for one day in the order they were planned, each with its sets
pub async fn list_plan(pool: &SqlitePool, plan_date: NaiveDate) -> Result<Vec<PlanItem>, String> {
  let mut items = sqlx::query_as::<_, PlanItem>(
    "SELECT id, plan_date, title, meta, done FROM plan_items WHERE plan_date = ? ORDER BY id",
  )
  .bind(plan_date)
  .fetch_all(pool)
  .await
  .map_err(|e| format!("Failed to load plan for {}: {}", plan_date, e))?;

  let sql = format!(
    r#"
    SELECT {} FROM plan_sets ps
    JOIN plan_items pi ON pi.id = ps.plan_item_id
    WHERE pi.plan_date = ?
    ORDER BY ps.plan_item_id, ps.position
    "#,
    PLANNED_SET_COLUMNS
  );
  let sets = sqlx::query_as::<_, PlannedSet>(&sql)
    .bind(plan_date)
    .fetch_all(pool)
    .await
    .map_err(|e| format!("Failed to load planned sets for {}: {}", plan_date, e))?;

  for set in sets {
    if let Some(item) = items.iter_mut().find(|item| item.id == set.plan_item_id) {
      item.sets.push(set);
    }
  }

  Ok(items)
}

pub async fn set_plan_item_done(pool: &SqlitePool, id: i64, done: bool) -> Result<(), String> {
  let result = sqlx::query("UPDATE plan_items SET done = ? WHERE id = ?")
    .bind(done)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| format!("Failed to update plan item: {}", e))?;

  if result.rows_affected() == 0 {
    return Err(format!("Plan item {} not found", id));
  }
  Ok(())
}

/// Remove an item together with its planned sets
pub async fn remove_plan_item(pool: &SqlitePool, id: i64) -> Result<(), String> {
  let mut tx = pool
    .begin()
    .await
    .map_err(|e| format!("Failed to remove plan item: {}", e))?;

  sqlx::query("DELETE FROM plan_sets WHERE plan_item_id = ?")
    .bind(id)
    .execute(&mut *tx)
    .await
    .map_err(|e| format!("Failed to remove planned sets: {}", e))?;

  let result = sqlx::query("DELETE FROM plan_items WHERE id = ?")
    .bind(id)
    .execute(&mut *tx)
    .await
    .map_err(|e| format!("Failed to remove plan item: {}", e))?;

  if result.rows_affected() == 0 {
    return Err(format!("Plan item {} not found", id));
  }

  tx.commit()
    .await
    .map_err(|e| format!("Failed to remove plan item: {}", e))
}

/// ---------------------------------------------------------------------------
/// Planned Sets
/// ---------------------------------------------------------------------------

/// Append a set row to a plan item, returning its id. A row needs at least
/// a weight or a rep count.
pub async fn add_plan_set(
  pool: &SqlitePool,
  plan_item_id: i64,
  weight: Option<f64>,
  reps: Option<u32>,
) -> Result<i64, String> {
  if weight.is_none() && reps.is_none() {
    return Err("A planned set needs a weight or reps".to_string());
  }
  if let Some(w) = weight {
    if !w.is_finite() || w <= 0.0 {
      return Err(format!("Weight must be positive, got {}", w));
    }
  }
  if reps == Some(0) {
    return Err("Reps must be at least 1".to_string());
  }

  let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plan_items WHERE id = ?")
    .bind(plan_item_id)
    .fetch_one(pool)
    .await
    .map_err(|e| format!("Failed to add planned set: {}", e))?;
  if exists == 0 {
    return Err(format!("Plan item {} not found", plan_item_id));
  }

  let result = sqlx::query(
    r#"
    INSERT INTO plan_sets (plan_item_id, position, weight, reps)
    SELECT ?, COALESCE(MAX(position), 0) + 1, ?, ?
    FROM plan_sets WHERE plan_item_id = ?
    "#,
  )
  .bind(plan_item_id)
  .bind(weight)
  .bind(reps.map(i64::from))
  .bind(plan_item_id)
  .execute(pool)
  .await
  .map_err(|e| format!("Failed to add planned set: {}", e))?;

  Ok(result.last_insert_rowid())
}

/// Sets of one plan item in position order
pub async fn list_plan_sets(pool: &SqlitePool, plan_item_id: i64) -> Result<Vec<PlannedSet>, String> {
  let sql = format!(
    "SELECT {} FROM plan_sets ps WHERE ps.plan_item_id = ? ORDER BY ps.position",
    PLANNED_SET_COLUMNS
  );
  sqlx::query_as::<_, PlannedSet>(&sql)
    .bind(plan_item_id)
    .fetch_all(pool)
    .await
    .map_err(|e| format!("Failed to load planned sets: {}", e))
}

/// Flip the checked state of a set row, returning the new state
pub async fn toggle_plan_set(pool: &SqlitePool, id: i64) -> Result<bool, String> {
  let done: Option<bool> =
    sqlx::query_scalar("UPDATE plan_sets SET done = NOT done WHERE id = ? RETURNING done")
      .bind(id)
      .fetch_optional(pool)
      .await
      .map_err(|e| format!("Failed to update planned set: {}", e))?;

  done.ok_or_else(|| format!("Planned set {} not found", id))
}

/// Remove one set row. Remaining rows keep their positions.
pub async fn remove_plan_set(pool: &SqlitePool, id: i64) -> Result<(), String> {
  let result = sqlx::query("DELETE FROM plan_sets WHERE id = ?")
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| format!("Failed to remove planned set: {}", e))?;

  if result.rows_affected() == 0 {
    return Err(format!("Planned set {} not found", id));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{date, seed_test_plan_item, setup_test_db, teardown_test_db};

  #[tokio::test]
  async fn test_add_and_list_plan() {
    let pool = setup_test_db().await;
    let day = date(2026, 3, 10);

    add_plan_item(&pool, day, "Squat", "100kg · 5 reps").await.unwrap();
    add_plan_item(&pool, day, " Bench Press ", "").await.unwrap();
    add_plan_item(&pool, date(2026, 3, 11), "Deadlift", "").await.unwrap();

    let items = list_plan(&pool, day).await.expect("Should list plan");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Squat");
    assert_eq!(items[0].meta, "100kg · 5 reps");
    assert_eq!(items[1].title, "Bench Press");
    assert!(!items[0].done);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_empty_title_rejected() {
    let pool = setup_test_db().await;
    let err = add_plan_item(&pool, date(2026, 3, 10), "   ", "").await.unwrap_err();
    assert!(err.contains("title is required"));
    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_mark_done_and_remove() {
    let pool = setup_test_db().await;
    let day = date(2026, 3, 10);
    let id = seed_test_plan_item(&pool, day, "Squat").await;

    set_plan_item_done(&pool, id, true).await.expect("Should mark done");
    assert!(list_plan(&pool, day).await.unwrap()[0].done);

    set_plan_item_done(&pool, id, false).await.unwrap();
    assert!(!list_plan(&pool, day).await.unwrap()[0].done);

    remove_plan_item(&pool, id).await.expect("Should remove");
    assert!(list_plan(&pool, day).await.unwrap().is_empty());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_missing_item_reports_not_found() {
    let pool = setup_test_db().await;
    assert!(set_plan_item_done(&pool, 42, true).await.unwrap_err().contains("not found"));
    assert!(remove_plan_item(&pool, 42).await.unwrap_err().contains("not found"));
    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_planned_sets_round_trip() {
    let pool = setup_test_db().await;
    let day = date(2026, 3, 10);
    let item = seed_test_plan_item(&pool, day, "Squat").await;

    let first = add_plan_set(&pool, item, Some(100.0), Some(5)).await.expect("Should add set");
    add_plan_set(&pool, item, Some(100.0), None).await.expect("Should add set");
    add_plan_set(&pool, item, None, Some(8)).await.expect("Should add set");

    let sets = list_plan_sets(&pool, item).await.unwrap();
    let positions: Vec<i64> = sets.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(sets[0].id, first);
    assert_eq!(sets[1].reps, None);
    assert_eq!(sets[2].weight, None);
    assert!(sets.iter().all(|s| !s.done));

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_toggle_plan_set() {
    let pool = setup_test_db().await;
    let item = seed_test_plan_item(&pool, date(2026, 3, 10), "Squat").await;
    let id = add_plan_set(&pool, item, Some(100.0), Some(5)).await.unwrap();

    assert!(toggle_plan_set(&pool, id).await.unwrap());
    assert!(list_plan_sets(&pool, item).await.unwrap()[0].done);
    assert!(!toggle_plan_set(&pool, id).await.unwrap());

    assert!(toggle_plan_set(&pool, 999).await.unwrap_err().contains("not found"));

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_remove_plan_set_keeps_positions() {
    let pool = setup_test_db().await;
    let item = seed_test_plan_item(&pool, date(2026, 3, 10), "Squat").await;
    add_plan_set(&pool, item, Some(60.0), Some(5)).await.unwrap();
    let middle = add_plan_set(&pool, item, Some(80.0), Some(5)).await.unwrap();
    add_plan_set(&pool, item, Some(100.0), Some(5)).await.unwrap();

    remove_plan_set(&pool, middle).await.expect("Should remove set");
    add_plan_set(&pool, item, Some(100.0), Some(5)).await.unwrap();

    let positions: Vec<i64> = list_plan_sets(&pool, item).await.unwrap().iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![1, 3, 4]);
    assert!(remove_plan_set(&pool, middle).await.unwrap_err().contains("not found"));

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_plan_set_validation() {
    let pool = setup_test_db().await;
    let item = seed_test_plan_item(&pool, date(2026, 3, 10), "Squat").await;

    assert!(add_plan_set(&pool, item, None, None).await.unwrap_err().contains("weight or reps"));
    assert!(add_plan_set(&pool, item, Some(-5.0), Some(5)).await.is_err());
    assert!(add_plan_set(&pool, item, Some(60.0), Some(0)).await.is_err());
    assert!(add_plan_set(&pool, 999, Some(60.0), Some(5)).await.unwrap_err().contains("not found"));

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_list_plan_attaches_sets_per_item() {
    let pool = setup_test_db().await;
    let day = date(2026, 3, 10);
    let squat = seed_test_plan_item(&pool, day, "Squat").await;
    let bench = seed_test_plan_item(&pool, day, "Bench Press").await;
    let other_day = seed_test_plan_item(&pool, date(2026, 3, 11), "Deadlift").await;

    add_plan_set(&pool, squat, Some(100.0), Some(5)).await.unwrap();
    add_plan_set(&pool, squat, Some(100.0), Some(5)).await.unwrap();
    let bench_set = add_plan_set(&pool, bench, Some(70.0), Some(6)).await.unwrap();
    add_plan_set(&pool, other_day, Some(140.0), Some(3)).await.unwrap();
    toggle_plan_set(&pool, bench_set).await.unwrap();

    let items = list_plan(&pool, day).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].sets.len(), 2);
    assert_eq!(items[1].sets.len(), 1);
    assert_eq!(items[1].set_progress(), (1, 1));

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_remove_plan_item_drops_its_sets() {
    let pool = setup_test_db().await;
    let item = seed_test_plan_item(&pool, date(2026, 3, 10), "Squat").await;
    add_plan_set(&pool, item, Some(100.0), Some(5)).await.unwrap();

    remove_plan_item(&pool, item).await.expect("Should remove");

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plan_sets")
      .fetch_one(&pool)
      .await
      .unwrap();
    assert_eq!(remaining, 0);

    teardown_test_db(pool).await;
  }
}
