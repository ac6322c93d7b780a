//! Search index error types.
//!
//! This module defines the unified error type for all search index
//! operations, regardless of the backend implementation.

use thiserror::Error;

/// Unified errors from search index operations.
///
/// Used by the `SearchIndexProvider` trait for all search index operations.
/// Variants map to the pipeline's error taxonomy: connection errors are
/// fatal with zero counts, document add errors abort the current game, and
/// settings errors fail the run after documents have been persisted.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Failed to reach or construct a client for the search index backend.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to create the search index.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// A batch document upsert was rejected.
    #[error("Document add error: {0}")]
    DocumentAddError(String),

    /// Failed to apply index settings.
    #[error("Settings error: {0}")]
    SettingsError(String),

    /// Failed to serialize documents for the backend.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SearchIndexError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create a document add error.
    pub fn document_add(msg: impl Into<String>) -> Self {
        Self::DocumentAddError(msg.into())
    }

    /// Create a settings error.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::SettingsError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }
}
