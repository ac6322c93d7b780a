//! Print source trait definition.
//!
//! This module defines the abstract interface for the relational print
//! catalog, allowing the orchestrator to run against any backend (MySQL in
//! production, in-memory mocks in tests).

use async_trait::async_trait;
use futures::stream::BoxStream;

use card_search_shared::{Game, TranslationMap};

use crate::errors::SourceError;
use crate::types::PrintRow;

/// Abstracts the relational store holding prints, sets, and translations.
///
/// The source is opened once per reindex run, used read-only, and must be
/// released with [`close`](PrintSource::close) on every exit path.
#[async_trait]
pub trait PrintSource: Send + Sync {
    /// Load all name-variant translations for one game.
    ///
    /// Implementations must build the map with a fixed number of bulk
    /// queries per game, not one query per entity. A translation source
    /// that does not yet expose the expected schema yields an empty map
    /// rather than failing the run.
    ///
    /// # Returns
    ///
    /// * `Ok(TranslationMap)` - Entity id → ordered, de-duplicated variants
    /// * `Err(SourceError)` - If the store is unreachable
    async fn load_translations(&self, game: Game) -> Result<TranslationMap, SourceError>;

    /// Stream raw print rows for one game, ordered by print id ascending.
    ///
    /// The stream is lazy and forward-only; the ordering exists solely to
    /// make batch output deterministic. Any query error mid-stream is
    /// yielded as an `Err` item and aborts the game's extraction.
    fn stream_prints(&self, game: Game) -> BoxStream<'_, Result<PrintRow, SourceError>>;

    /// Release the underlying connection.
    ///
    /// Called on every exit path of a reindex run, including early-error
    /// paths. Must be safe to call after a failed query.
    async fn close(&self);
}
