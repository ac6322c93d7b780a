//! # Card Search Indexer
//!
//! Full reindex pipeline for the card search index: extracts card prints
//! from the relational catalog and loads them into Meilisearch, one
//! normalized document per print with cross-language name variants folded
//! in.
//!
//! ## Architecture
//!
//! Every run is a full rebuild following the Resolver-Builder-Loader
//! pattern, sequenced per game:
//!
//! 1. **Translation resolver**: bulk-loads name variants per entity
//! 2. **Processor**: builds one search document per raw print row
//! 3. **Loader**: flushes documents to the index in fixed-size batches
//! 4. **Orchestrator**: sequences the games, configures the index,
//!    aggregates counts and errors, and releases the source
//!
//! Document ids are stable across runs and the index upserts by id, so
//! re-running the pipeline is idempotent and the recommended recovery for
//! any failed run.
//!
//! ## Modules
//!
//! - [`config`]: Environment configuration and dependency wiring
//! - [`processor`]: Builds search documents from raw rows
//! - [`loader`]: Batches documents into the search index
//! - [`orchestrator`]: Coordinates the full reindex
//! - [`errors`]: Error types for the pipeline

pub mod config;
pub mod errors;
pub mod loader;
pub mod orchestrator;
pub mod processor;

pub use config::{Dependencies, Settings};
pub use errors::ReindexError;
pub use orchestrator::{run_full_reindex, ReindexOrchestrator};
