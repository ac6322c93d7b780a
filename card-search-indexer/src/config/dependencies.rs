//! Dependency initialization and wiring for the reindex pipeline.

use std::sync::Arc;

use tracing::info;

use card_search_repository::meilisearch::IndexConfig;
use card_search_repository::{
    MeilisearchProvider, MySqlPrintSource, PrintSource, SearchIndexProvider,
};

use crate::config::Settings;
use crate::errors::ReindexError;

/// Container for the pipeline's connected external collaborators.
pub struct Dependencies {
    /// The relational print catalog.
    pub source: Arc<dyn PrintSource>,
    /// The search index.
    pub provider: Arc<dyn SearchIndexProvider>,
}

impl Dependencies {
    /// Connect both external collaborators from the given settings.
    ///
    /// The search provider is constructed first: it performs no I/O, so a
    /// malformed URL is caught before a connection pool is opened and
    /// nothing is left to clean up on that path.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Both collaborators ready for a run
    /// * `Err(ReindexError)` - If either connection cannot be established
    pub async fn new(settings: &Settings) -> Result<Self, ReindexError> {
        let provider = MeilisearchProvider::new(
            &settings.meilisearch_url,
            &settings.meilisearch_master_key,
            IndexConfig::new(settings.index_name.clone()),
        )?;

        let source = MySqlPrintSource::connect(
            &settings.mysql_host,
            settings.mysql_port,
            &settings.mysql_user,
            &settings.mysql_password,
            &settings.mysql_database,
        )
        .await?;

        info!(
            index = %settings.index_name,
            batch_size = settings.batch_size,
            "Dependencies initialized"
        );

        Ok(Self {
            source: Arc::new(source),
            provider: Arc::new(provider),
        })
    }
}
