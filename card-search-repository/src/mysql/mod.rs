//! MySQL implementation of the print source.
//!
//! This module provides a concrete implementation of `PrintSource` backed
//! by a `sqlx` MySQL pool, plus the per-game extraction queries.

mod queries;
mod source;

pub use source::MySqlPrintSource;
