//! Score invariant: scores are the owned-cell counts.

use super::super::{DotsGame, Mover};
use super::Invariant;
use rand::Rng;

/// Invariant: each side's score equals the cells it owns, and the total
/// never exceeds the number of cells.
pub struct ScoreConsistentInvariant;

impl<R: Rng> Invariant<DotsGame<R>> for ScoreConsistentInvariant {
    fn holds(game: &DotsGame<R>) -> bool {
        let board = game.board();
        let scores = game.scores();
        scores.player == board.owned_by(Mover::Player)
            && scores.computer == board.owned_by(Mover::Computer)
            && scores.total() <= board.cell_count()
    }

    fn description() -> &'static str {
        "Scores match owned cells and never exceed the cell count"
    }
}
