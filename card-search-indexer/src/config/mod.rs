//! Configuration for the reindex pipeline.
//!
//! Settings are read from the environment once at process start and passed
//! by reference from then on; there is no process-wide settings singleton.

mod dependencies;

use std::env;
use std::str::FromStr;

use crate::errors::ReindexError;

pub use dependencies::Dependencies;

/// Default MySQL port.
const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Default search index name.
const DEFAULT_INDEX_NAME: &str = "cards";

/// Default number of documents per upsert batch.
const DEFAULT_BATCH_SIZE: usize = 5000;

/// Process configuration, read once from the environment.
///
/// # Environment Variables
///
/// - `MYSQL_HOST` (required): MySQL host
/// - `MYSQL_PORT`: MySQL port (default: 3306)
/// - `MYSQL_USER` (required): MySQL user
/// - `MYSQL_PASSWORD` (required): MySQL password
/// - `MYSQL_DATABASE` (required): MySQL database name
/// - `MEILISEARCH_URL` (required): Meilisearch URL (e.g. http://localhost:7700)
/// - `MEILISEARCH_MASTER_KEY` (required): Meilisearch master key
/// - `MEILISEARCH_INDEX_NAME`: Index name (default: "cards")
/// - `INDEXER_BATCH_SIZE`: Documents per batch (default: 5000)
///
/// Missing required variables fail fast at startup rather than surfacing
/// mid-run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub mysql_host: String,
    pub mysql_port: u16,
    pub mysql_user: String,
    pub mysql_password: String,
    pub mysql_database: String,
    pub meilisearch_url: String,
    pub meilisearch_master_key: String,
    pub index_name: String,
    pub batch_size: usize,
}

impl Settings {
    /// Read settings from the environment.
    pub fn from_env() -> Result<Self, ReindexError> {
        Ok(Self {
            mysql_host: required("MYSQL_HOST")?,
            mysql_port: parsed_or("MYSQL_PORT", DEFAULT_MYSQL_PORT)?,
            mysql_user: required("MYSQL_USER")?,
            mysql_password: required("MYSQL_PASSWORD")?,
            mysql_database: required("MYSQL_DATABASE")?,
            meilisearch_url: required("MEILISEARCH_URL")?,
            meilisearch_master_key: required("MEILISEARCH_MASTER_KEY")?,
            index_name: env::var("MEILISEARCH_INDEX_NAME")
                .unwrap_or_else(|_| DEFAULT_INDEX_NAME.to_string()),
            batch_size: parsed_or("INDEXER_BATCH_SIZE", DEFAULT_BATCH_SIZE)?,
        })
    }
}

/// Read a required environment variable.
fn required(name: &str) -> Result<String, ReindexError> {
    env::var(name)
        .map_err(|_| ReindexError::config(format!("missing required environment variable {name}")))
}

/// Read an optional environment variable, parsing it when present.
///
/// An unset variable falls back to the default; a set-but-unparsable value
/// is a configuration error rather than a silent fallback.
fn parsed_or<T: FromStr>(name: &str, default: T) -> Result<T, ReindexError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ReindexError::config(format!("invalid value for {name}: {value}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_missing_variable_is_a_config_error() {
        let result = required("CARD_SEARCH_TEST_UNSET_VARIABLE");
        assert!(matches!(result, Err(ReindexError::ConfigError(_))));
    }

    #[test]
    fn test_parsed_or_defaults_when_unset() {
        let value: usize = parsed_or("CARD_SEARCH_TEST_UNSET_BATCH", 5000).unwrap();
        assert_eq!(value, 5000);
    }

    #[test]
    fn test_parsed_or_rejects_garbage() {
        env::set_var("CARD_SEARCH_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16, _> = parsed_or("CARD_SEARCH_TEST_BAD_PORT", 3306);
        env::remove_var("CARD_SEARCH_TEST_BAD_PORT");
        assert!(matches!(result, Err(ReindexError::ConfigError(_))));
    }

    #[test]
    fn test_parsed_or_accepts_valid_value() {
        env::set_var("CARD_SEARCH_TEST_GOOD_PORT", "3307");
        let value: u16 = parsed_or("CARD_SEARCH_TEST_GOOD_PORT", 3306).unwrap();
        env::remove_var("CARD_SEARCH_TEST_GOOD_PORT");
        assert_eq!(value, 3307);
    }
}
