//! Next-session suggestion shared by the remote trainer and the local engine
//!
//! Serialized in camelCase so either source can be consumed interchangeably.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progression::{Focus, Recommendation, TierLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum SuggestionSource {
  #[default]
  Remote,
  Local,
}

impl std::fmt::Display for SuggestionSource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Remote => write!(f, "remote"),
      Self::Local => write!(f, "local"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSet {
  pub title: String,
  pub weight: f64,
  pub reps: u32,
  pub sets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
  pub exercise_name: String,
  pub short_message: Vec<String>,
  pub plan_sets: Vec<PlanSet>,
  pub next_weight: Option<f64>,
  pub next_reps: Option<u32>,
  pub next_sets: Option<u32>,
  pub reasoning: String,
  pub timestamp: DateTime<Utc>,
  #[serde(default)]
  pub source: SuggestionSource,
}

impl Suggestion {
  /// Express a local recommendation in the suggestion shape.
  /// The main (strength) tier is the headline next weight.
  pub fn from_recommendation(exercise_name: &str, rec: &Recommendation) -> Self {
    let plan_sets = rec
      .tiers
      .iter()
      .map(|tier| PlanSet {
        title: match tier.label {
          TierLabel::Neural if tier.paused => format!("{} (paused)", tier.label),
          _ => tier.label.to_string(),
        },
        weight: tier.weight,
        reps: tier.reps,
        sets: tier.sets,
      })
      .collect();

    let main = &rec.tiers.strength;
    let short_message = match rec.focus {
      Focus::Balanced => vec![
        format!("Estimated max {} kg.", rec.estimated_one_rep_max),
        format!("Main work: {} kg x {} for {} sets.", main.weight, main.reps, main.sets),
      ],
      Focus::FormCorrection => vec![
        "Depth first today.".to_string(),
        "Pause the heavy singles and own the bottom position.".to_string(),
      ],
      Focus::Recovery => vec![
        "Recent volume is high.".to_string(),
        "Skip the heavy work and keep the bar moving.".to_string(),
      ],
    };

    Self {
      exercise_name: exercise_name.to_string(),
      short_message,
      plan_sets,
      next_weight: Some(main.weight),
      next_reps: Some(main.reps),
      next_sets: Some(main.sets),
      reasoning: rec.rationale.join(" "),
      timestamp: Utc::now(),
      source: SuggestionSource::Local,
    }
  }
}
