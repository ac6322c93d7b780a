//! Index configuration for the card search index.
//!
//! This module declares which document fields the engine tokenizes for
//! full-text search and which are usable in exact-match filter clauses.

/// Primary key field of the card index; upserts are keyed on it.
pub const PRIMARY_KEY: &str = "id";

/// Searchable attributes in priority order.
///
/// Order directly controls relevance: a hit on the printed name ranks
/// above a hit on a localized keyword, which ranks above a hit on the set
/// name.
pub const SEARCHABLE_ATTRIBUTES: [&str; 3] = ["name", "keywords_localized", "set_name"];

/// Attributes usable in filter clauses.
pub const FILTERABLE_ATTRIBUTES: [&str; 2] = ["game_slug", "set_name"];

/// Configuration for the card search index.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// The index uid all operations address.
    pub name: String,
}

impl IndexConfig {
    /// Create a new index configuration.
    ///
    /// # Arguments
    ///
    /// * `name` - The index uid
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_name_ranks_first() {
        assert_eq!(
            SEARCHABLE_ATTRIBUTES,
            ["name", "keywords_localized", "set_name"]
        );
    }

    #[test]
    fn test_filterable_attributes() {
        assert_eq!(FILTERABLE_ATTRIBUTES, ["game_slug", "set_name"]);
    }

    #[test]
    fn test_primary_key_matches_document_id_field() {
        assert_eq!(PRIMARY_KEY, "id");
    }
}
