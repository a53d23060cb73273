pub mod body_weight;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod goals;
pub mod library;
pub mod llm;
pub mod models;
pub mod plan;
pub mod plates;
pub mod progression;
pub mod records;
pub mod trainer;

#[cfg(test)]
pub mod test_utils;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;
use config::Config;
use db::AppState;

/// Log to stderr so command output on stdout stays clean
pub fn init_tracing() {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
  if !cli.needs_store() {
    return cli::dispatch_offline(cli.command, cli.json);
  }

  let config = Config::from_env().context("invalid configuration")?;

  let db = db::initialize_db(&config.db_path)
    .await
    .map_err(|e| anyhow::anyhow!(e))
    .with_context(|| format!("failed to open database at {}", config.db_path.display()))?;

  if config.use_ai && config.openai_api_key.is_none() {
    tracing::debug!("OPENAI_API_KEY not set, suggestions stay local");
  }

  let state = AppState { db, config };
  let result = cli::dispatch(&state, cli).await;
  state.db.close().await;
  result
}
