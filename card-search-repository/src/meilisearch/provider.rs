//! Meilisearch provider implementation.
//!
//! This module provides the concrete implementation of
//! `SearchIndexProvider` over the Meilisearch REST API. Write operations in
//! Meilisearch are asynchronous server-side tasks; an accepted (2xx)
//! response means the batch was enqueued, which is the durability level the
//! reindex pipeline relies on.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, info};
use url::Url;

use card_search_shared::PrintDocument;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::meilisearch::index_config::{
    IndexConfig, FILTERABLE_ATTRIBUTES, PRIMARY_KEY, SEARCHABLE_ATTRIBUTES,
};

/// Meilisearch provider implementation.
///
/// The client is stateless from the pipeline's perspective: no remote
/// index state is cached beyond what each call observes.
///
/// # Example
///
/// ```ignore
/// use card_search_repository::meilisearch::IndexConfig;
///
/// let provider = MeilisearchProvider::new(
///     "http://localhost:7700",
///     "master-key",
///     IndexConfig::new("cards"),
/// )?;
/// provider.ensure_index_exists().await?;
/// provider.add_documents(&documents).await?;
/// ```
pub struct MeilisearchProvider {
    http: Client,
    base_url: String,
    api_key: String,
    index: IndexConfig,
}

impl MeilisearchProvider {
    /// Create a new provider for the given Meilisearch instance.
    ///
    /// # Arguments
    ///
    /// * `url` - The Meilisearch server URL (e.g. "http://localhost:7700")
    /// * `api_key` - Master or admin API key, sent as a bearer token
    /// * `index` - The index configuration
    ///
    /// # Returns
    ///
    /// * `Ok(MeilisearchProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If the URL is invalid or the HTTP client
    ///   cannot be constructed
    pub fn new(url: &str, api_key: &str, index: IndexConfig) -> Result<Self, SearchIndexError> {
        Url::parse(url).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let http = Client::builder()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        info!(url = %url, index = %index.name, "Created Meilisearch provider");

        Ok(Self {
            http,
            base_url: url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            index,
        })
    }

    /// Route under the configured index, e.g. `index_route("/documents")`.
    fn index_route(&self, suffix: &str) -> String {
        format!("{}/indexes/{}{}", self.base_url, self.index.name, suffix)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.http.request(method, url).bearer_auth(&self.api_key)
    }

    /// PUT one settings sub-route with a JSON body.
    async fn put_setting<T>(&self, suffix: &str, body: &T) -> Result<(), SearchIndexError>
    where
        T: Serialize + ?Sized,
    {
        let response = self
            .request(Method::PUT, self.index_route(suffix))
            .json(body)
            .send()
            .await
            .map_err(|e| SearchIndexError::settings(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, route = suffix, "Settings update failed");
            return Err(SearchIndexError::settings(format!(
                "Settings update {} failed with status {}: {}",
                suffix, status, error_body
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SearchIndexProvider for MeilisearchProvider {
    /// Look up the index by uid and create it when the lookup does not
    /// succeed.
    ///
    /// A lookup failure other than "not found" is deliberately not
    /// distinguished from "not found": both fall through to create, and a
    /// duplicate create is rejected by the backend, which surfaces here.
    async fn ensure_index_exists(&self) -> Result<(), SearchIndexError> {
        let lookup = self
            .request(Method::GET, self.index_route(""))
            .send()
            .await;

        if matches!(&lookup, Ok(response) if response.status().is_success()) {
            debug!(index = %self.index.name, "Search index already exists");
            return Ok(());
        }

        let body = json!({ "uid": self.index.name, "primaryKey": PRIMARY_KEY });
        let response = self
            .request(Method::POST, format!("{}/indexes", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchIndexError::index_creation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index creation failed");
            return Err(SearchIndexError::index_creation(format!(
                "Index creation failed with status {}: {}",
                status, error_body
            )));
        }

        info!(index = %self.index.name, primary_key = PRIMARY_KEY, "Created search index");
        Ok(())
    }

    /// Upsert a batch of documents keyed on the primary key.
    async fn add_documents(&self, documents: &[PrintDocument]) -> Result<(), SearchIndexError> {
        if documents.is_empty() {
            return Ok(());
        }

        let response = self
            .request(Method::POST, self.index_route("/documents"))
            .json(documents)
            .send()
            .await
            .map_err(|e| SearchIndexError::document_add(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                body = %error_body,
                count = documents.len(),
                "Document batch rejected"
            );
            return Err(SearchIndexError::document_add(format!(
                "Document batch of {} rejected with status {}: {}",
                documents.len(),
                status,
                error_body
            )));
        }

        debug!(count = documents.len(), "Upserted document batch");
        Ok(())
    }

    /// Apply searchable and filterable attributes to the index.
    async fn configure_attributes(&self) -> Result<(), SearchIndexError> {
        self.put_setting("/settings/searchable-attributes", &SEARCHABLE_ATTRIBUTES)
            .await?;
        self.put_setting("/settings/filterable-attributes", &FILTERABLE_ATTRIBUTES)
            .await?;

        info!(
            index = %self.index.name,
            searchable = ?SEARCHABLE_ATTRIBUTES,
            filterable = ?FILTERABLE_ATTRIBUTES,
            "Configured index attributes"
        );
        Ok(())
    }
}
