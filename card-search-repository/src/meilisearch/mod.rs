//! Meilisearch implementation of the search index provider.
//!
//! This module provides a concrete implementation of `SearchIndexProvider`
//! speaking the Meilisearch REST API.

mod index_config;
mod provider;

pub use index_config::IndexConfig;
pub use provider::MeilisearchProvider;
