use clap::Parser;

use lift_log::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let cli = Cli::parse();
  lift_log::init_tracing();

  tracing::debug!("Starting lift-log v{}", env!("CARGO_PKG_VERSION"));

  lift_log::run(cli).await
}
