//! History invariant: the move log and the board agree.

use super::super::DotsGame;
use super::Invariant;
use rand::Rng;
use std::collections::HashSet;

/// Invariant: every logged edge is drawn, no edge is logged twice, and no
/// edge is drawn without being logged.
pub struct HistoryConsistentInvariant;

impl<R: Rng> Invariant<DotsGame<R>> for HistoryConsistentInvariant {
    fn holds(game: &DotsGame<R>) -> bool {
        let board = game.board();
        let mut seen = HashSet::new();
        let logged_and_drawn = game
            .history()
            .iter()
            .all(|record| board.edge_drawn(record.edge) && seen.insert(record.edge));

        logged_and_drawn && seen.len() == board.drawn_edge_count()
    }

    fn description() -> &'static str {
        "Move history matches the drawn edges"
    }
}
