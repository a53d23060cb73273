//! Commands for recommendations, suggestions and plate math

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::db::AppState;
use crate::llm::TrainerClient;
use crate::models::{parse_records, RawRecord, Suggestion};
use crate::plates::{self, PlateCombo};
use crate::progression::{self, Recommendation};
use crate::trainer;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateRanking {
  pub main: PlateCombo,
  /// Best warm-up candidate first
  pub ranked: Vec<PlateCombo>,
}

/// Remote client when enabled by configuration and not opted out
pub fn trainer_client(config: &Config, local_only: bool) -> Option<TrainerClient> {
  if local_only || !config.remote_enabled() {
    return None;
  }
  TrainerClient::from_config(config).ok()
}

/// Local engine recommendation from stored history
pub async fn recommend(state: &AppState, exercise: &str) -> Result<Option<Recommendation>, String> {
  trainer::recommend_exercise(&state.db, exercise).await
}

/// Local engine recommendation from a JSON array of raw records
pub fn recommend_from_json(json: &str) -> Result<Option<Recommendation>, String> {
  let raws: Vec<RawRecord> =
    serde_json::from_str(json).map_err(|e| format!("Failed to parse records: {}", e))?;
  let records = parse_records(&raws);
  Ok(progression::recommend(&records))
}

pub async fn suggest(
  state: &AppState,
  exercise: &str,
  local_only: bool,
) -> Result<Option<Suggestion>, String> {
  let client = trainer_client(&state.config, local_only);
  trainer::suggest_for_exercise(&state.db, client.as_ref(), exercise).await
}

pub async fn suggest_plan(
  state: &AppState,
  date: NaiveDate,
  local_only: bool,
) -> Result<Vec<Suggestion>, String> {
  let client = trainer_client(&state.config, local_only);
  trainer::suggest_for_plan(&state.db, client.as_ref(), date).await
}

/// Rank warm-up candidates by plate changes from the main weight
pub fn rank_plates(main_weight: f64, candidates: &[f64]) -> PlateRanking {
  PlateRanking {
    main: plates::plate_combo(main_weight),
    ranked: plates::rank_candidates(main_weight, candidates)
      .into_iter()
      .map(plates::plate_combo)
      .collect(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{seed_squat_progression, setup_test_state, test_config};

  #[test]
  fn test_trainer_client_gating() {
    let mut config = test_config();
    assert!(trainer_client(&config, false).is_none());

    config.openai_api_key = Some("sk-test".to_string());
    assert!(trainer_client(&config, false).is_some());
    assert!(trainer_client(&config, true).is_none());

    config.use_ai = false;
    assert!(trainer_client(&config, false).is_none());
  }

  #[test]
  fn test_recommend_from_json() {
    let json = r#"[
      {"date": "2026-03-09", "weight": "100", "reps": 5, "sets": "3"},
      {"weight": 200}
    ]"#;
    let rec = recommend_from_json(json).unwrap().expect("Should recommend");
    assert_eq!(rec.tiers.strength.weight, 95.0);

    assert!(recommend_from_json("[]").unwrap().is_none());
    assert!(recommend_from_json("not json").is_err());
  }

  #[tokio::test]
  async fn test_suggest_local_only() {
    let state = setup_test_state().await;
    seed_squat_progression(&state.db).await;

    let suggestion = suggest(&state, "Squat", true).await.unwrap();
    assert!(suggestion.is_some());
    assert!(recommend(&state, "Squat").await.unwrap().is_some());
  }

  #[test]
  fn test_rank_plates() {
    let ranking = rank_plates(70.0, &[50.0, 60.0, 65.0]);
    assert_eq!(ranking.main.total_weight, 70.0);
    let order: Vec<f64> = ranking.ranked.iter().map(|c| c.total_weight).collect();
    assert_eq!(order, vec![60.0, 50.0, 65.0]);
  }
}
