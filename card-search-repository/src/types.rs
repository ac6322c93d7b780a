//! Raw row types produced by the relational source.

/// One raw print row as extracted from the relational store.
///
/// Each game has a distinct join shape, but the per-game SQL normalizes the
/// columns to this one logical shape via aliases, so the rest of the
/// pipeline is game-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PrintRow {
    /// Store-local print id; only unique within one game.
    pub print_id: u64,
    /// Stable identifier of the underlying card concept.
    ///
    /// `None` or empty for games where entity linkage is optional; such
    /// rows simply match no translations.
    pub entity_id: Option<String>,
    /// Display name as printed. May be blank in the store; the document
    /// builder substitutes a placeholder.
    pub printed_name: String,
    /// Path or URL to the artwork, when present.
    pub image_path: Option<String>,
    /// Name of the owning set.
    pub set_name: String,
    /// Game slug as recorded in the store (coalesced to the game default
    /// in SQL).
    pub game_slug: String,
}
