//! Print document type for the search index.
//!
//! This module defines the document structure that is persisted in the
//! search engine, one document per physical card print.

use serde::{Deserialize, Serialize};

/// Document representation of one card print in the search index.
///
/// # Fields
///
/// - `id`: Globally unique document id (`"<game prefix>_<print id>"`)
/// - `name`: Printed display name (primary search field)
/// - `set_name`: Name of the set the print belongs to
/// - `game_slug`: Short game identifier, used for filtering
/// - `image`: Artwork path or URL, empty string when absent
/// - `keywords_localized`: Ordered name variants across languages; the
///   printed name is always first, the list is de-duplicated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrintDocument {
    pub id: String,
    pub name: String,
    pub set_name: String,
    pub game_slug: String,
    pub image: String,
    pub keywords_localized: Vec<String>,
}
