//! Error types for the card search repository.
//!
//! One error type per backend: `SourceError` for the relational store and
//! `SearchIndexError` for the search index.

mod search_index_error;
mod source_error;

pub use search_index_error::SearchIndexError;
pub use source_error::SourceError;
