//! Terminal invariant: the game is finished exactly when every cell is owned.

use super::super::DotsGame;
use super::Invariant;
use rand::Rng;

/// Invariant: `player + computer == cells` if and only if the phase is
/// `Finished`.
pub struct TerminalWhenFullInvariant;

impl<R: Rng> Invariant<DotsGame<R>> for TerminalWhenFullInvariant {
    fn holds(game: &DotsGame<R>) -> bool {
        let full = game.scores().total() == game.board().cell_count();
        full == game.phase().is_finished()
    }

    fn description() -> &'static str {
        "Game is finished exactly when every cell is owned"
    }
}
