//! Commands for the exercise library

use crate::db::AppState;
use crate::library;
use crate::models::LibraryGroup;

pub async fn add_library_entry(state: &AppState, name: &str, body_part: &str) -> Result<i64, String> {
  library::add_entry(&state.db, name, body_part).await
}

pub async fn toggle_library_favorite(state: &AppState, id: i64) -> Result<bool, String> {
  library::toggle_favorite(&state.db, id).await
}

pub async fn remove_library_entry(state: &AppState, id: i64) -> Result<(), String> {
  library::remove_entry(&state.db, id).await
}

pub async fn get_library(state: &AppState, query: &str, favorites_only: bool) -> Result<Vec<LibraryGroup>, String> {
  library::grouped_library(&state.db, query, favorites_only).await
}
