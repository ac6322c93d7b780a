//! Error types for the reindex pipeline.

use thiserror::Error;

use card_search_repository::{SearchIndexError, SourceError};

/// Errors that can occur during a reindex run.
///
/// Nothing here is retried automatically: the orchestrator folds the first
/// error into the run summary and the caller re-triggers a full run, which
/// is safe because document upserts are idempotent.
#[derive(Debug, Error)]
pub enum ReindexError {
    /// Configuration error (missing or invalid environment variable).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from the relational print source.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Error from the search index.
    #[error("Search index error: {0}")]
    SearchIndex(#[from] SearchIndexError),
}

impl ReindexError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
