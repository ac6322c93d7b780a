//! Orchestrator for the reindex pipeline.
//!
//! Sequences translation resolution, extraction, document building, and
//! batch loading across all supported games, then configures the index.

use std::sync::Arc;

use futures::stream::TryStreamExt;
use tracing::{error, info, instrument};

use card_search_shared::{Game, ReindexSummary};
use card_search_repository::{PrintSource, SearchIndexProvider};

use crate::config::{Dependencies, Settings};
use crate::errors::ReindexError;
use crate::loader::BatchLoader;
use crate::processor;

/// Orchestrator driving one full reindex run.
///
/// Games run sequentially in fixed order: batches share one search-engine
/// connection, so interleaving games would not reduce wall-clock time
/// materially versus batching overhead. The first error skips all
/// remaining work, and the relational source is released on every exit
/// path.
pub struct ReindexOrchestrator {
    source: Arc<dyn PrintSource>,
    provider: Arc<dyn SearchIndexProvider>,
    batch_size: usize,
}

impl ReindexOrchestrator {
    /// Create a new orchestrator with the given collaborators.
    pub fn new(
        source: Arc<dyn PrintSource>,
        provider: Arc<dyn SearchIndexProvider>,
        batch_size: usize,
    ) -> Self {
        Self {
            source,
            provider,
            batch_size,
        }
    }

    /// Run the full reindex and return the per-run summary.
    ///
    /// Never returns an error: any failure is folded into the summary's
    /// `error` field alongside whichever per-game counts completed before
    /// it. Counts already flushed when a later step fails stay persisted;
    /// there is no rollback, and re-running is the recovery path.
    #[instrument(skip(self))]
    pub async fn run(&self) -> ReindexSummary {
        let mut summary = ReindexSummary::new();

        if let Err(e) = self.run_inner(&mut summary).await {
            error!(error = %e, "Reindex failed");
            summary.error = Some(e.to_string());
        }

        // Release the relational connection on every exit path.
        self.source.close().await;

        if summary.error.is_none() {
            info!(
                mtg = summary.count_for(Game::Mtg),
                op = summary.count_for(Game::OnePiece),
                pk = summary.count_for(Game::Pokemon),
                total = summary.total,
                "Reindex complete"
            );
        }
        summary
    }

    async fn run_inner(&self, summary: &mut ReindexSummary) -> Result<(), ReindexError> {
        self.provider.ensure_index_exists().await?;

        for game in Game::ALL {
            let count = self.index_game(game).await?;
            summary.record(game, count);
        }

        // Configured once after all games: doing it per game would only
        // churn index settings without changing correctness.
        self.provider.configure_attributes().await?;
        Ok(())
    }

    /// Index all prints of one game; returns the documents flushed.
    async fn index_game(&self, game: Game) -> Result<u64, ReindexError> {
        info!(game = %game, "Indexing game");
        let translations = self.source.load_translations(game).await?;

        let mut loader = BatchLoader::new(Arc::clone(&self.provider), self.batch_size);
        let mut rows = self.source.stream_prints(game);
        while let Some(row) = rows.try_next().await? {
            let document = processor::build_print_document(game, &row, &translations);
            loader.push(document).await?;
        }

        let count = loader.finish().await?;
        info!(game = %game, count = count, "Game indexed");
        Ok(count)
    }
}

/// Run a full reindex from the given settings.
///
/// This is the single operation the pipeline exposes: connect both
/// external collaborators, rebuild the index, and return the summary. A
/// connection failure yields a zero-count summary carrying the error.
pub async fn run_full_reindex(settings: &Settings) -> ReindexSummary {
    let deps = match Dependencies::new(settings).await {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to connect to MySQL or Meilisearch");
            return ReindexSummary::failed(e.to_string());
        }
    };

    ReindexOrchestrator::new(deps.source, deps.provider, settings.batch_size)
        .run()
        .await
}
