//! Core data structures used across the reindex pipeline.

use std::collections::HashMap;

pub mod game;
pub mod print_document;
pub mod reindex_summary;

pub use game::Game;
pub use print_document::PrintDocument;
pub use reindex_summary::ReindexSummary;

/// Entity id → ordered, de-duplicated display-name variants for one game.
///
/// Built once per game by the translation resolver with a single bulk query.
/// Variant order is first-seen; empty or whitespace-only variants are never
/// stored.
pub type TranslationMap = HashMap<String, Vec<String>>;
