//! Remote trainer integration
//!
//! Talks to an OpenAI-compatible chat completions endpoint and turns the
//! model's JSON answer into a `Suggestion`. The reply is treated as untrusted
//! input: missing or oddly typed fields degrade instead of failing the call.

use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use crate::models::{LooseNumber, PerformanceRecord, PlanSet, Suggestion, SuggestionSource};

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 300;
/// Most recent records included in the prompt
pub const PROMPT_RECORD_LIMIT: usize = 5;

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum TrainerError {
  #[error("API key not configured")]
  MissingApiKey,

  #[error("Request failed: {0}")]
  Request(String),

  #[error("API error: {0}")]
  Api(String),

  #[error("Parse error: {0}")]
  Parse(String),
}

impl Serialize for TrainerError {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Chat Completions Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
  model: &'a str,
  messages: Vec<ChatMessage<'a>>,
  temperature: f32,
  max_tokens: u32,
  response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
  role: &'a str,
  content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
  #[serde(rename = "type")]
  format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
  choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
  message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
  content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
  error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
  message: String,
}

/// Suggestion as the model writes it, every field optional and loosely typed
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RemoteSuggestion {
  short_message: Value,
  plan_sets: Value,
  next_weight: Value,
  next_reps: Value,
  next_sets: Value,
  reasoning: Value,
}

impl RemoteSuggestion {
  fn into_suggestion(self, exercise_name: &str) -> Suggestion {
    let short_message = match self.short_message {
      Value::Array(lines) => lines
        .iter()
        .filter_map(|line| line.as_str().map(str::to_string))
        .collect(),
      _ => Vec::new(),
    };

    let plan_sets = match self.plan_sets {
      Value::Array(items) => items.iter().filter_map(plan_set).collect(),
      _ => Vec::new(),
    };

    Suggestion {
      exercise_name: exercise_name.to_string(),
      short_message,
      plan_sets,
      next_weight: loose(&self.next_weight).and_then(|n| n.as_f64()),
      next_reps: loose(&self.next_reps).and_then(|n| n.as_count()),
      next_sets: loose(&self.next_sets).and_then(|n| n.as_count()),
      reasoning: self.reasoning.as_str().unwrap_or_default().to_string(),
      timestamp: Utc::now(),
      source: SuggestionSource::Remote,
    }
  }
}

fn loose(value: &Value) -> Option<LooseNumber> {
  serde_json::from_value(value.clone()).ok()
}

/// A plan set is kept only when every field is usable
fn plan_set(item: &Value) -> Option<PlanSet> {
  Some(PlanSet {
    title: item.get("title")?.as_str()?.to_string(),
    weight: loose(item.get("weight")?)?.as_f64()?,
    reps: loose(item.get("reps")?)?.as_count()?,
    sets: loose(item.get("sets")?)?.as_count()?,
  })
}

/// ---------------------------------------------------------------------------
/// Trainer Client
/// ---------------------------------------------------------------------------

pub struct TrainerClient {
  client: Client,
  api_key: String,
  base_url: String,
  model: String,
}

impl TrainerClient {
  pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, model: impl Into<String>) -> Self {
    Self {
      client: Client::new(),
      api_key: api_key.into(),
      base_url: base_url.into().trim_end_matches('/').to_string(),
      model: model.into(),
    }
  }

  /// Build a client from configuration, failing when no API key is set
  pub fn from_config(config: &Config) -> Result<Self, TrainerError> {
    let api_key = config.openai_api_key.clone().ok_or(TrainerError::MissingApiKey)?;
    Ok(Self::new(api_key, config.openai_base_url.clone(), config.model.clone()))
  }

  /// Call the model with a system prompt and user message, returning the
  /// content of the first choice
  pub async fn complete(
    &self,
    system_prompt: &str,
    user_message: &str,
    max_tokens: u32,
  ) -> Result<String, TrainerError> {
    let request = ChatRequest {
      model: &self.model,
      messages: vec![
        ChatMessage {
          role: "system",
          content: system_prompt,
        },
        ChatMessage {
          role: "user",
          content: user_message,
        },
      ],
      temperature: TEMPERATURE,
      max_tokens,
      response_format: ResponseFormat {
        format_type: "json_object",
      },
    };

    let response = self
      .client
      .post(format!("{}/chat/completions", self.base_url))
      .bearer_auth(&self.api_key)
      .json(&request)
      .send()
      .await
      .map_err(|e| TrainerError::Request(e.to_string()))?;

    let status = response.status();
    let body = response
      .text()
      .await
      .map_err(|e| TrainerError::Request(e.to_string()))?;

    if !status.is_success() {
      if let Ok(error_resp) = serde_json::from_str::<ApiErrorResponse>(&body) {
        return Err(TrainerError::Api(error_resp.error.message));
      }
      return Err(TrainerError::Api(format!("HTTP {}: {}", status, body)));
    }

    let chat_response: ChatResponse =
      serde_json::from_str(&body).map_err(|e| TrainerError::Parse(e.to_string()))?;

    chat_response
      .choices
      .into_iter()
      .next()
      .and_then(|c| c.message.content)
      .ok_or_else(|| TrainerError::Parse("No content in response".to_string()))
  }

  /// Ask for the next session of one exercise. `records` must be newest
  /// first; only the most recent few are sent.
  pub async fn suggest(
    &self,
    exercise_name: &str,
    records: &[PerformanceRecord],
  ) -> Result<Suggestion, TrainerError> {
    let system_prompt = include_str!("prompts/trainer_system.txt");

    let recent = &records[..records.len().min(PROMPT_RECORD_LIMIT)];
    let history =
      serde_json::to_string_pretty(recent).map_err(|e| TrainerError::Parse(e.to_string()))?;

    let user_message = format!(
      r#"Exercise: {}
Recent records (newest first):
{}

From these records, propose the weight, reps and sets to try next session.
Use the estimated 1RM and %1RM, the role of each rep range, and volume control.
Pick weights so plates (1.25, 2.5, 5, 10, 20 kg) change as little as possible between groups.
shortMessage has two lines. planSets must include these three groups:
"Neural" - neural warm-up (light, 1-3 reps, 1-3 sets)
"Strength" - main work (near the target weight, 3-5 reps, 3-5 sets)
"Volume" - volume work (light, 6-10 reps, 2-3 sets, may reuse the Neural weight)"#,
      exercise_name, history
    );

    let response_text = self.complete(system_prompt, &user_message, MAX_TOKENS).await?;

    let json_str = extract_json(&response_text)?;
    let remote: RemoteSuggestion = serde_json::from_str(&json_str)
      .map_err(|e| TrainerError::Parse(format!("{}: {}", e, json_str)))?;

    tracing::info!(exercise = exercise_name, "Received remote suggestion");

    Ok(remote.into_suggestion(exercise_name))
  }
}

/// Extract JSON from the model's reply (handles markdown code blocks)
fn extract_json(text: &str) -> Result<String, TrainerError> {
  if text.trim().starts_with('{') {
    return Ok(text.trim().to_string());
  }

  if let Some(start) = text.find("```json") {
    let start = start + 7;
    if let Some(end) = text[start..].find("```") {
      return Ok(text[start..start + end].trim().to_string());
    }
  }

  if let Some(start) = text.find("```") {
    let start = start + 3;
    let content_start = text[start..]
      .find('\n')
      .map(|i| start + i + 1)
      .unwrap_or(start);
    if let Some(end) = text[content_start..].find("```") {
      return Ok(text[content_start..content_start + end].trim().to_string());
    }
  }

  // Last resort: first { to last }
  if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
    if start < end {
      return Ok(text[start..=end].to_string());
    }
  }

  Err(TrainerError::Parse("Could not extract JSON from response".to_string()))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
