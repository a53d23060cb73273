//! Trainer service: picks between the remote trainer and the local engine
//!
//! The remote suggestion is used whole when it succeeds. Any remote failure
//! falls back to the local engine for that exercise only.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::llm::{TrainerClient, PROMPT_RECORD_LIMIT};
use crate::models::{PerformanceRecord, Suggestion};
use crate::plan;
use crate::progression::{self, Recommendation};
use crate::records;

/// Local engine suggestion, `None` without history
pub fn local_suggestion(exercise: &str, history: &[PerformanceRecord]) -> Option<Suggestion> {
  progression::recommend(history).map(|rec| Suggestion::from_recommendation(exercise, &rec))
}

/// Full local recommendation for one exercise, `None` without history
pub async fn recommend_exercise(pool: &SqlitePool, exercise: &str) -> Result<Option<Recommendation>, String> {
  let history = records::load_history(pool, exercise, None).await?;
  Ok(progression::recommend(&history))
}

/// Suggest the next session for one exercise. Passing no client keeps the
/// suggestion local.
pub async fn suggest_for_exercise(
  pool: &SqlitePool,
  client: Option<&TrainerClient>,
  exercise: &str,
) -> Result<Option<Suggestion>, String> {
  let history = records::load_history(pool, exercise, Some(PROMPT_RECORD_LIMIT as i64)).await?;
  if history.is_empty() {
    tracing::debug!(exercise, "No history, nothing to suggest");
    return Ok(None);
  }

  if let Some(client) = client {
    match client.suggest(exercise, &history).await {
      Ok(suggestion) => return Ok(Some(suggestion)),
      Err(e) => {
        tracing::warn!(exercise, error = %e, "Remote trainer failed, using local engine");
      }
    }
  }

  Ok(local_suggestion(exercise, &history))
}

/// One suggestion per distinct planned exercise on `date` that has history
pub async fn suggest_for_plan(
  pool: &SqlitePool,
  client: Option<&TrainerClient>,
  date: NaiveDate,
) -> Result<Vec<Suggestion>, String> {
  let items = plan::list_plan(pool, date).await?;

  let mut titles: Vec<&str> = Vec::new();
  for item in &items {
    if !titles.contains(&item.title.as_str()) {
      titles.push(&item.title);
    }
  }

  let mut suggestions = Vec::new();
  for title in titles {
    match suggest_for_exercise(pool, client, title).await {
      Ok(Some(suggestion)) => suggestions.push(suggestion),
      Ok(None) => {}
      Err(e) => tracing::warn!(exercise = title, error = %e, "Skipping suggestion"),
    }
  }

  tracing::info!(%date, count = suggestions.len(), "Built plan suggestions");

  Ok(suggestions)
}
