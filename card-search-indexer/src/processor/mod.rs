//! Processor for the reindex pipeline.
//!
//! Transforms raw print rows into `PrintDocument` structures for indexing.
//! Everything here is pure and deterministic: identical inputs always
//! produce identical documents, which is what makes a reindex run
//! idempotent.

use card_search_shared::{Game, PrintDocument, TranslationMap};
use card_search_repository::PrintRow;

/// Placeholder display name for prints whose stored name is blank.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Build the search document for one raw print row.
///
/// The document id is derived from `(game, print_id)` and is globally
/// unique across games. Rows without an entity id simply match no
/// translations.
pub fn build_print_document(
    game: Game,
    row: &PrintRow,
    translations: &TranslationMap,
) -> PrintDocument {
    let name = {
        let trimmed = row.printed_name.trim();
        if trimmed.is_empty() {
            UNKNOWN_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    };

    // A missing entity id matches no translations, even if the map were
    // ever to carry an empty-string key.
    let entity_id = row.entity_id.as_deref().unwrap_or("").trim();
    let variants = if entity_id.is_empty() {
        None
    } else {
        translations.get(entity_id)
    };
    let keywords_localized = build_localized_keywords(&name, variants);

    let game_slug = {
        let trimmed = row.game_slug.trim();
        if trimmed.is_empty() {
            game.slug().to_string()
        } else {
            trimmed.to_string()
        }
    };

    PrintDocument {
        id: game.document_id(row.print_id),
        name,
        set_name: row.set_name.trim().to_string(),
        game_slug,
        image: row.image_path.as_deref().unwrap_or("").trim().to_string(),
        keywords_localized,
    }
}

/// Merge the printed name and its translation variants into one keyword
/// list: printed name first, then variants, duplicates dropped, order
/// preserved.
pub fn build_localized_keywords(name: &str, variants: Option<&Vec<String>>) -> Vec<String> {
    let mut keywords = vec![name.to_string()];
    if let Some(variants) = variants {
        for variant in variants {
            if !variant.is_empty() && !keywords.iter().any(|k| k == variant) {
                keywords.push(variant.clone());
            }
        }
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(print_id: u64, entity_id: &str, printed_name: &str) -> PrintRow {
        PrintRow {
            print_id,
            entity_id: Some(entity_id.to_string()),
            printed_name: printed_name.to_string(),
            image_path: None,
            set_name: "Core Set".to_string(),
            game_slug: "mtg".to_string(),
        }
    }

    #[test]
    fn test_fireball_scenario() {
        let mut translations = TranslationMap::new();
        translations.insert("X".to_string(), vec!["Palla di Fuoco".to_string()]);

        let doc = build_print_document(Game::Mtg, &row(10, "X", "Fireball"), &translations);

        assert_eq!(doc.id, "mtg_10");
        assert_eq!(doc.name, "Fireball");
        assert_eq!(doc.set_name, "Core Set");
        assert_eq!(doc.game_slug, "mtg");
        assert_eq!(doc.image, "");
        assert_eq!(doc.keywords_localized, vec!["Fireball", "Palla di Fuoco"]);
    }

    #[test]
    fn test_keywords_without_translations_is_just_the_name() {
        let doc = build_print_document(Game::Mtg, &row(1, "X", "Fireball"), &TranslationMap::new());
        assert_eq!(doc.keywords_localized, vec!["Fireball"]);
    }

    #[test]
    fn test_keywords_deduplicate_and_preserve_order() {
        let mut translations = TranslationMap::new();
        translations.insert(
            "X".to_string(),
            vec![
                "Palla di Fuoco".to_string(),
                "Fireball".to_string(),
                "Boule de Feu".to_string(),
                "Palla di Fuoco".to_string(),
            ],
        );

        let doc = build_print_document(Game::Mtg, &row(1, "X", "Fireball"), &translations);
        assert_eq!(
            doc.keywords_localized,
            vec!["Fireball", "Palla di Fuoco", "Boule de Feu"]
        );
    }

    #[test]
    fn test_blank_name_falls_back_to_placeholder() {
        let doc = build_print_document(Game::Mtg, &row(1, "X", "   "), &TranslationMap::new());
        assert_eq!(doc.name, UNKNOWN_NAME);
        assert_eq!(doc.keywords_localized, vec![UNKNOWN_NAME]);
    }

    #[test]
    fn test_missing_entity_id_matches_no_translations() {
        // An absent entity id never picks up variants, even under a bogus
        // empty-string key in the map.
        let mut translations = TranslationMap::new();
        translations.insert("".to_string(), vec!["should not appear".to_string()]);

        let mut no_entity = row(1, "", "Buggy");
        no_entity.entity_id = None;
        let doc = build_print_document(Game::OnePiece, &no_entity, &translations);
        assert_eq!(doc.keywords_localized, vec!["Buggy"]);

        let blank_entity = row(2, "   ", "Buggy");
        let doc = build_print_document(Game::OnePiece, &blank_entity, &translations);
        assert_eq!(doc.keywords_localized, vec!["Buggy"]);
    }

    #[test]
    fn test_same_print_id_yields_distinct_ids_per_game() {
        let translations = TranslationMap::new();
        let a = build_print_document(Game::Mtg, &row(7, "X", "Seven"), &translations);
        let b = build_print_document(Game::OnePiece, &row(7, "X", "Seven"), &translations);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_building_twice_is_deterministic() {
        let mut translations = TranslationMap::new();
        translations.insert("X".to_string(), vec!["Palla di Fuoco".to_string()]);
        let input = row(10, "X", "Fireball");

        let first = build_print_document(Game::Mtg, &input, &translations);
        let second = build_print_document(Game::Mtg, &input, &translations);
        assert_eq!(first, second);
    }

    #[test]
    fn test_blank_game_slug_falls_back_to_game_default() {
        let mut blank_slug = row(1, "X", "Fireball");
        blank_slug.game_slug = "  ".to_string();

        let doc = build_print_document(Game::Pokemon, &blank_slug, &TranslationMap::new());
        assert_eq!(doc.game_slug, "pk");
    }

    #[test]
    fn test_image_is_trimmed_and_defaults_to_empty() {
        let mut with_image = row(1, "X", "Fireball");
        with_image.image_path = Some("  /images/fireball.jpg ".to_string());

        let doc = build_print_document(Game::Mtg, &with_image, &TranslationMap::new());
        assert_eq!(doc.image, "/images/fireball.jpg");
    }
}
