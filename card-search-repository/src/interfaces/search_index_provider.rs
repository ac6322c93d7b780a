//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations.

use async_trait::async_trait;

use card_search_shared::PrintDocument;

use crate::errors::SearchIndexError;

/// Abstracts the underlying search index implementation.
///
/// Implementations are injected into the batch loader and orchestrator to
/// enable dependency injection and easy testing with mock implementations.
///
/// # Note on Document Creation
///
/// There is no separate create-document operation: `add_documents` is an
/// upsert keyed on the document's `id` field. Because ids are stable across
/// reindex runs, re-running the pipeline overwrites documents in place and
/// no delete/cleanup phase is needed for stable prints.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Ensure the search index exists, creating it if necessary.
    ///
    /// Called once at the start of a reindex run, before any document
    /// operation. A lookup failure of any kind triggers creation; creating
    /// an index that already exists is itself treated as an error by the
    /// backend and surfaces normally.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index is ready for use
    /// * `Err(SearchIndexError)` - If the index cannot be created
    async fn ensure_index_exists(&self) -> Result<(), SearchIndexError>;

    /// Upsert a batch of print documents by id.
    ///
    /// Each call is one network round trip; the batch loader sizes batches
    /// before calling. An empty slice is a no-op.
    ///
    /// # Arguments
    ///
    /// * `documents` - The documents to insert or overwrite
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the batch was accepted by the backend
    /// * `Err(SearchIndexError)` - If the batch was rejected
    async fn add_documents(&self, documents: &[PrintDocument]) -> Result<(), SearchIndexError>;

    /// Declare searchable and filterable attributes on the index.
    ///
    /// Called once per run, after all games have been loaded. Searchable
    /// attribute order controls relevance: primary-name matches rank above
    /// localized-keyword matches, which rank above set-name matches.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the settings were accepted
    /// * `Err(SearchIndexError)` - If applying the settings failed
    async fn configure_attributes(&self) -> Result<(), SearchIndexError>;
}
