//! # Card Search Repository
//!
//! This crate provides traits and implementations for the two external
//! collaborators of the reindex pipeline: the relational print catalog
//! (MySQL) and the search index (Meilisearch). It includes definitions for
//! errors, interfaces, and the concrete backend implementations.

pub mod errors;
pub mod interfaces;
pub mod meilisearch;
pub mod mysql;
pub mod types;

pub use errors::{SearchIndexError, SourceError};
pub use interfaces::{PrintSource, SearchIndexProvider};
pub use meilisearch::MeilisearchProvider;
pub use mysql::MySqlPrintSource;
pub use types::PrintRow;
