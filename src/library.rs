//! Exercise library store
//!
//! Saved exercises grouped by body part. Grouping and filtering are pure so
//! the same view can be built from any slice of entries.

use sqlx::SqlitePool;

use crate::models::{LibraryEntry, LibraryGroup};

/// ---------------------------------------------------------------------------
/// Store
/// ---------------------------------------------------------------------------

pub async fn add_entry(pool: &SqlitePool, name: &str, body_part: &str) -> Result<i64, String> {
  let name = name.trim();
  let body_part = body_part.trim();
  if name.is_empty() {
    return Err("Exercise name is required".to_string());
  }
  if body_part.is_empty() {
    return Err("Body part is required".to_string());
  }

  let result = sqlx::query("INSERT INTO exercise_library (name, body_part) VALUES (?, ?)")
    .bind(name)
    .bind(body_part)
    .execute(pool)
    .await
    .map_err(|e| format!("Failed to add library entry: {}", e))?;

  Ok(result.last_insert_rowid())
}

/// All entries, newest first
pub async fn list_entries(pool: &SqlitePool) -> Result<Vec<LibraryEntry>, String> {
  sqlx::query_as::<_, LibraryEntry>(
    "SELECT id, name, body_part, favorite FROM exercise_library ORDER BY id DESC",
  )
  .fetch_all(pool)
  .await
  .map_err(|e| format!("Failed to load library: {}", e))
}

/// Flip the favorite flag, returning the new state
pub async fn toggle_favorite(pool: &SqlitePool, id: i64) -> Result<bool, String> {
  let favorite: Option<bool> =
    sqlx::query_scalar("UPDATE exercise_library SET favorite = NOT favorite WHERE id = ? RETURNING favorite")
      .bind(id)
      .fetch_optional(pool)
      .await
      .map_err(|e| format!("Failed to update library entry: {}", e))?;

  favorite.ok_or_else(|| format!("Library entry {} not found", id))
}

pub async fn remove_entry(pool: &SqlitePool, id: i64) -> Result<(), String> {
  let result = sqlx::query("DELETE FROM exercise_library WHERE id = ?")
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| format!("Failed to remove library entry: {}", e))?;

  if result.rows_affected() == 0 {
    return Err(format!("Library entry {} not found", id));
  }
  Ok(())
}

/// Grouped and filtered view of the whole library
pub async fn grouped_library(
  pool: &SqlitePool,
  query: &str,
  favorites_only: bool,
) -> Result<Vec<LibraryGroup>, String> {
  let entries = list_entries(pool).await?;
  Ok(filter_groups(group_entries(&entries), query, favorites_only))
}

/// ---------------------------------------------------------------------------
/// Grouping
/// ---------------------------------------------------------------------------

/// Group entries by body part. Groups appear in the order their body part is
/// first seen and items keep their input order.
pub fn group_entries(entries: &[LibraryEntry]) -> Vec<LibraryGroup> {
  let mut groups: Vec<LibraryGroup> = Vec::new();
  for entry in entries {
    match groups.iter_mut().find(|g| g.body_part == entry.body_part) {
      Some(group) => group.items.push(entry.clone()),
      None => groups.push(LibraryGroup {
        body_part: entry.body_part.clone(),
        items: vec![entry.clone()],
      }),
    }
  }
  groups
}

/// Apply the favorites filter, then the text query. A group whose body part
/// matches the query is kept whole; otherwise only items whose name matches
/// survive. Empty groups are dropped at each step.
pub fn filter_groups(groups: Vec<LibraryGroup>, query: &str, favorites_only: bool) -> Vec<LibraryGroup> {
  let query = query.trim().to_lowercase();

  groups
    .into_iter()
    .filter_map(|mut group| {
      if favorites_only {
        group.items.retain(|item| item.favorite);
        if group.items.is_empty() {
          return None;
        }
      }

      if query.is_empty() || group.body_part.to_lowercase().contains(&query) {
        return Some(group);
      }

      group.items.retain(|item| item.name.to_lowercase().contains(&query));
      (!group.items.is_empty()).then_some(group)
    })
    .collect()
}
