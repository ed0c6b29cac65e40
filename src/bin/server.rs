use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use trivia_api::config::Settings;
use trivia_api::db::{self, run_migrations, SqliteRepository};
use trivia_api::server::app::{run_server, AppState};
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Settings file, defaults to ./trivia.{toml,yaml,json} when present
    #[clap(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    let pool = db::establish_connection(&settings.database)
        .await
        .context("Failed to connect to the database")?;
    if settings.database.migrate {
        tracing::info!("Running db migrations...");
        run_migrations(&pool).await?;
    }

    let state = AppState::new(SqliteRepository::new(pool));
    run_server(&settings.application, state).await
}
