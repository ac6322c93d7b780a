//! MySQL print source implementation.
//!
//! Provides read-only access to the print catalog with connection pooling
//! and lazy, cursor-style row streaming.

use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::{info, warn};

use card_search_shared::{Game, TranslationMap};

use crate::errors::SourceError;
use crate::interfaces::PrintSource;
use crate::mysql::queries;
use crate::types::PrintRow;

/// MySQL implementation of the print source.
///
/// The pool is opened once per reindex run and used read-only. Card names
/// contain full Unicode, so connections are forced to `utf8mb4`.
pub struct MySqlPrintSource {
    pool: MySqlPool,
}

impl MySqlPrintSource {
    /// Connect to the relational store.
    ///
    /// # Arguments
    ///
    /// * `host`, `port`, `user`, `password`, `database` - Connection
    ///   parameters from the process configuration
    ///
    /// # Returns
    ///
    /// * `Ok(MySqlPrintSource)` - A connected source
    /// * `Err(SourceError)` - If the store is unreachable or rejects the
    ///   credentials
    pub async fn connect(
        host: &str,
        port: u16,
        user: &str,
        password: &str,
        database: &str,
    ) -> Result<Self, SourceError> {
        let options = MySqlConnectOptions::new()
            .host(host)
            .port(port)
            .username(user)
            .password(password)
            .database(database)
            .charset("utf8mb4");

        let pool = MySqlPoolOptions::new()
            .max_connections(2)
            .connect_with(options)
            .await?;

        info!(host = %host, port = port, database = %database, "Connected to MySQL");
        Ok(Self { pool })
    }

    /// Create a source from an existing pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrintSource for MySqlPrintSource {
    /// Load all translations for one game from `card_translations`.
    ///
    /// One bulk query per game. A database-level failure (the translation
    /// table or an expected column not deployed yet) degrades to an empty
    /// map so one lagging source cannot fail the whole run; connection
    /// level failures still propagate.
    async fn load_translations(&self, game: Game) -> Result<TranslationMap, SourceError> {
        let rows = sqlx::query_as::<_, (Option<String>, Option<String>)>(queries::TRANSLATIONS_QUERY)
            .bind(game.slug())
            .fetch_all(&self.pool)
            .await;

        match rows {
            Ok(rows) => {
                let translations = collect_translations(rows);
                info!(
                    game = %game,
                    entities = translations.len(),
                    "Loaded translations"
                );
                Ok(translations)
            }
            Err(error) if is_schema_error(&error) => {
                warn!(
                    game = %game,
                    error = %error,
                    "Translation source unavailable, continuing without translations"
                );
                Ok(TranslationMap::new())
            }
            Err(error) => Err(error.into()),
        }
    }

    fn stream_prints(&self, game: Game) -> BoxStream<'_, Result<PrintRow, SourceError>> {
        sqlx::query_as::<_, PrintRow>(queries::prints_query(game))
            .fetch(&self.pool)
            .map_err(SourceError::from)
            .boxed()
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// Fold translation rows into the entity → variants map.
///
/// First-seen order wins; duplicates and blank values are dropped. Kept
/// separate from the query so the fold is testable without a database.
fn collect_translations(rows: Vec<(Option<String>, Option<String>)>) -> TranslationMap {
    let mut translations = TranslationMap::new();
    for (entity_id, translated_name) in rows {
        let entity_id = entity_id.as_deref().unwrap_or("").trim();
        let translated_name = translated_name.as_deref().unwrap_or("").trim();
        if entity_id.is_empty() || translated_name.is_empty() {
            continue;
        }
        let variants = translations.entry(entity_id.to_string()).or_default();
        if !variants.iter().any(|v| v == translated_name) {
            variants.push(translated_name.to_string());
        }
    }
    translations
}

/// Whether an error points at schema evolution (missing table or column)
/// rather than a broken connection.
fn is_schema_error(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Database(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(entity: &str, name: &str) -> (Option<String>, Option<String>) {
        (Some(entity.to_string()), Some(name.to_string()))
    }

    #[test]
    fn test_collect_translations_groups_by_entity() {
        let map = collect_translations(vec![
            row("X", "Palla di Fuoco"),
            row("X", "Boule de Feu"),
            row("Y", "Contropiede"),
        ]);
        assert_eq!(
            map.get("X").unwrap(),
            &vec!["Palla di Fuoco".to_string(), "Boule de Feu".to_string()]
        );
        assert_eq!(map.get("Y").unwrap(), &vec!["Contropiede".to_string()]);
    }

    #[test]
    fn test_collect_translations_preserves_first_seen_order() {
        let map = collect_translations(vec![
            row("X", "Uno"),
            row("X", "Due"),
            row("X", "Uno"),
            row("X", "Tre"),
        ]);
        assert_eq!(
            map.get("X").unwrap(),
            &vec!["Uno".to_string(), "Due".to_string(), "Tre".to_string()]
        );
    }

    #[test]
    fn test_collect_translations_drops_blank_values() {
        let map = collect_translations(vec![
            (None, Some("Orphan".to_string())),
            (Some("  ".to_string()), Some("Blank entity".to_string())),
            (Some("X".to_string()), None),
            (Some("X".to_string()), Some("   ".to_string())),
            row("X", "  Palla di Fuoco  "),
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("X").unwrap(), &vec!["Palla di Fuoco".to_string()]);
    }

    #[test]
    fn test_schema_errors_are_recoverable() {
        assert!(is_schema_error(&sqlx::Error::ColumnNotFound(
            "translated_name".to_string()
        )));
        assert!(!is_schema_error(&sqlx::Error::PoolClosed));
    }
}
