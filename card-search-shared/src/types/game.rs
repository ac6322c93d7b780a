//! Supported card games.
//!
//! The set of games is fixed; every game carries a short slug used both as
//! the filterable `game_slug` document field and as the document id prefix.

use std::fmt;

/// One of the supported card games.
///
/// Print ids are only unique within a game, so the game's id prefix is
/// folded into every document id to keep ids globally unique across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Game {
    /// Magic: The Gathering. Entity id is the oracle id.
    Mtg,
    /// One Piece Card Game. Entity id is the card id.
    OnePiece,
    /// Pokémon TCG. Entity id is the card id.
    Pokemon,
}

impl Game {
    /// All supported games, in the fixed order the reindex processes them.
    pub const ALL: [Game; 3] = [Game::Mtg, Game::OnePiece, Game::Pokemon];

    /// Short identifier for the game (`mtg`, `op`, `pk`).
    pub fn slug(self) -> &'static str {
        match self {
            Game::Mtg => "mtg",
            Game::OnePiece => "op",
            Game::Pokemon => "pk",
        }
    }

    /// Prefix used when building document ids for this game.
    pub fn id_prefix(self) -> &'static str {
        self.slug()
    }

    /// Build the globally unique document id for a print of this game.
    ///
    /// The id is a pure function of `(game, print_id)` and is stable across
    /// reindex runs, which is what makes re-running the pipeline idempotent:
    /// the search engine upserts by id and overwrites in place.
    pub fn document_id(self, print_id: u64) -> String {
        format!("{}_{}", self.id_prefix(), print_id)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs() {
        assert_eq!(Game::Mtg.slug(), "mtg");
        assert_eq!(Game::OnePiece.slug(), "op");
        assert_eq!(Game::Pokemon.slug(), "pk");
    }

    #[test]
    fn test_fixed_order() {
        assert_eq!(Game::ALL, [Game::Mtg, Game::OnePiece, Game::Pokemon]);
    }

    #[test]
    fn test_document_id() {
        assert_eq!(Game::Mtg.document_id(10), "mtg_10");
        assert_eq!(Game::Pokemon.document_id(0), "pk_0");
    }

    #[test]
    fn test_document_ids_unique_across_games() {
        // The same per-game print id must never collide across games.
        let ids: Vec<String> = Game::ALL.iter().map(|g| g.document_id(7)).collect();
        assert_eq!(ids, vec!["mtg_7", "op_7", "pk_7"]);
    }
}
