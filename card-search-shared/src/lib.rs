//! # Card Search Shared
//!
//! This crate defines shared data structures and types used across the card
//! search reindex pipeline. It includes the supported game identifiers, the
//! search document produced per print, and the per-run summary.

pub mod types;

pub use types::game::Game;
pub use types::print_document::PrintDocument;
pub use types::reindex_summary::ReindexSummary;
pub use types::TranslationMap;
