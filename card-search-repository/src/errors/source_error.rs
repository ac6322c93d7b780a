//! Relational source error types.

use thiserror::Error;

/// Errors from the relational print source.
///
/// Used by the `PrintSource` trait for connection, translation, and print
/// extraction failures. Database-level errors are wrapped as-is; the
/// `Connection` and `Query` variants let test doubles and connection
/// helpers raise errors without a live `sqlx::Error`.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Error raised by the database driver.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failed to establish a connection to the relational store.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A query failed or was interrupted mid-stream.
    #[error("Query error: {0}")]
    Query(String),
}

impl SourceError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }
}
