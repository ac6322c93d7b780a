//! Per-game extraction SQL.
//!
//! Each game stores prints in its own tables with its own column names, but
//! every query below aliases its output to the one logical row shape
//! consumed by the pipeline: `(print_id, entity_id, printed_name,
//! image_path, set_name, game_slug)`. Ordering by print id keeps batch
//! output deterministic; it carries no semantic meaning.

use card_search_shared::Game;

/// Bulk translation lookup for one game, parameterized by game slug.
///
/// Runs once per game so translation resolution stays O(games) rather than
/// O(prints).
pub(crate) const TRANSLATIONS_QUERY: &str = "\
    SELECT entity_id, translated_name
    FROM card_translations
    WHERE game_slug = ? AND translated_name IS NOT NULL AND translated_name != ''";

/// MTG prints. Entity linkage is mandatory: rows without an oracle id are
/// excluded in the WHERE clause.
const MTG_PRINTS_QUERY: &str = "\
    SELECT
        cp.id AS print_id,
        cp.oracle_id AS entity_id,
        COALESCE(c.name, '') AS printed_name,
        cp.image_path,
        COALESCE(s.name, '') AS set_name,
        COALESCE(g.slug, 'mtg') AS game_slug
    FROM cards_prints cp
    INNER JOIN cards c ON c.oracle_id = cp.oracle_id
    INNER JOIN sets s ON s.id = cp.set_id
    INNER JOIN games g ON g.id = s.game_id
    WHERE cp.oracle_id IS NOT NULL
    ORDER BY cp.id";

/// One Piece prints. An empty card id is tolerated and simply matches no
/// translations.
const OP_PRINTS_QUERY: &str = "\
    SELECT
        op.id AS print_id,
        op.card_id AS entity_id,
        COALESCE(oc.name_en, '') AS printed_name,
        op.image_path,
        COALESCE(s.name, '') AS set_name,
        COALESCE(g.slug, 'op') AS game_slug
    FROM op_prints op
    INNER JOIN op_cards oc ON oc.card_id = op.card_id
    INNER JOIN sets s ON s.id = op.set_id
    INNER JOIN games g ON g.id = s.game_id
    ORDER BY op.id";

/// Pokémon prints. The only game storing artwork as a URL column; aliased
/// to `image_path` so the distinction stays behind the adapter boundary.
const PK_PRINTS_QUERY: &str = "\
    SELECT
        pp.id AS print_id,
        pp.card_id AS entity_id,
        COALESCE(pc.name_en, '') AS printed_name,
        pp.image_url AS image_path,
        COALESCE(s.name, '') AS set_name,
        COALESCE(g.slug, 'pk') AS game_slug
    FROM pk_prints pp
    INNER JOIN pk_cards pc ON pc.card_id = pp.card_id
    INNER JOIN sets s ON s.id = pp.set_id
    INNER JOIN games g ON g.id = s.game_id
    ORDER BY pp.id";

/// The extraction query for one game.
pub(crate) fn prints_query(game: Game) -> &'static str {
    match game {
        Game::Mtg => MTG_PRINTS_QUERY,
        Game::OnePiece => OP_PRINTS_QUERY,
        Game::Pokemon => PK_PRINTS_QUERY,
    }
}
