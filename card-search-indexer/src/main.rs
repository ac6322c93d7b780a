//! Card Search Indexer Main Entry Point
//!
//! Runs one full reindex from MySQL into Meilisearch and exits: zero on
//! success, non-zero when the run recorded an error. Intended to be
//! invoked by an administrative trigger or directly on the server.

use std::process::ExitCode;

use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use card_search_indexer::{run_full_reindex, Settings};
use card_search_shared::Game;

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("card_search_indexer=info,card_search_repository=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    info!(
        service_version = env!("CARGO_PKG_VERSION"),
        "Starting full card reindex"
    );

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let summary = run_full_reindex(&settings).await;

    match summary.error {
        Some(ref err) => {
            error!(
                error = %err,
                total = summary.total,
                "Reindex failed"
            );
            ExitCode::FAILURE
        }
        None => {
            info!(
                mtg = summary.count_for(Game::Mtg),
                op = summary.count_for(Game::OnePiece),
                pk = summary.count_for(Game::Pokemon),
                total = summary.total,
                "Reindex finished successfully"
            );
            ExitCode::SUCCESS
        }
    }
}
