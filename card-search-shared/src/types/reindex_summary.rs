//! Per-run reindex summary.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::game::Game;

/// Summary of one full reindex run.
///
/// All games start at a zero count; games completed before a failure keep
/// the count they reached. A non-`None` error means the run produced a
/// partial or zero result and should be re-triggered by the caller.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReindexSummary {
    /// Documents indexed per game, keyed by game slug.
    pub per_game: BTreeMap<String, u64>,
    /// Total documents indexed across all games.
    pub total: u64,
    /// Human-readable error if the run failed.
    pub error: Option<String>,
}

impl ReindexSummary {
    /// Create an empty summary with every game at zero.
    pub fn new() -> Self {
        let per_game = Game::ALL
            .iter()
            .map(|game| (game.slug().to_string(), 0))
            .collect();
        Self {
            per_game,
            total: 0,
            error: None,
        }
    }

    /// Create a zero-count summary carrying a run-level error.
    pub fn failed(error: impl Into<String>) -> Self {
        let mut summary = Self::new();
        summary.error = Some(error.into());
        summary
    }

    /// Record the completed document count for one game.
    pub fn record(&mut self, game: Game, count: u64) {
        self.per_game.insert(game.slug().to_string(), count);
        self.total += count;
    }

    /// Document count recorded for one game.
    pub fn count_for(&self, game: Game) -> u64 {
        self.per_game.get(game.slug()).copied().unwrap_or(0)
    }
}

impl Default for ReindexSummary {
    fn default() -> Self {
        Self::new()
    }
}
