//! Environment-driven configuration
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file by `dotenvy` before `Config::from_env` runs.

use std::env;
use std::path::PathBuf;

use url::Url;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DB_FILE_NAME: &str = "lift-log.db";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Invalid base URL {value}: {reason}")]
  InvalidBaseUrl { value: String, reason: String },

  #[error("Invalid value for {name}: {value} (expected true/false)")]
  InvalidFlag { name: String, value: String },
}

/// ---------------------------------------------------------------------------
/// Config
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
  pub db_path: PathBuf,
  pub openai_api_key: Option<String>,
  pub openai_base_url: String,
  pub model: String,
  /// Ask the remote trainer before falling back to the local engine
  pub use_ai: bool,
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    let db_path = env::var("LIFT_LOG_DB")
      .ok()
      .filter(|v| !v.trim().is_empty())
      .map(PathBuf::from)
      .unwrap_or_else(default_db_path);

    let openai_api_key = env::var("OPENAI_API_KEY")
      .ok()
      .map(|v| v.trim().to_string())
      .filter(|v| !v.is_empty());

    let openai_base_url = env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    Url::parse(&openai_base_url).map_err(|e| ConfigError::InvalidBaseUrl {
      value: openai_base_url.clone(),
      reason: e.to_string(),
    })?;

    let model = env::var("LIFT_LOG_MODEL")
      .ok()
      .filter(|v| !v.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let use_ai = match env::var("LIFT_LOG_USE_AI") {
      Ok(value) => parse_flag("LIFT_LOG_USE_AI", &value)?,
      Err(_) => true,
    };

    Ok(Self {
      db_path,
      openai_api_key,
      openai_base_url: openai_base_url.trim_end_matches('/').to_string(),
      model,
      use_ai,
    })
  }

  /// Remote suggestions need both the switch and a key
  pub fn remote_enabled(&self) -> bool {
    self.use_ai && self.openai_api_key.is_some()
  }
}

/// Platform data directory, falling back to the working directory
pub fn default_db_path() -> PathBuf {
  directories::ProjectDirs::from("com", "liftlog", "lift-log")
    .map(|dirs| dirs.data_dir().to_path_buf())
    .unwrap_or_else(|| PathBuf::from("."))
    .join(DB_FILE_NAME)
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" => Ok(false),
    _ => Err(ConfigError::InvalidFlag {
      name: name.to_string(),
      value: value.to_string(),
    }),
  }
}
