//! Boundary invariant: last-row and last-column vertices never own a cell.

use super::super::DotsGame;
use super::Invariant;
use rand::Rng;

/// Invariant: only primary corners carry an owner.
///
/// A vertex on row R or column C has no cell to its lower right, so an
/// owner stored there can only come from corrupted bookkeeping.
pub struct BoundaryUnownedInvariant;

impl<R: Rng> Invariant<DotsGame<R>> for BoundaryUnownedInvariant {
    fn holds(game: &DotsGame<R>) -> bool {
        let board = game.board();
        board
            .vertices()
            .filter(|v| v.row == board.rows() || v.col == board.cols())
            .all(|v| board.owner_at(v).is_none())
    }

    fn description() -> &'static str {
        "Boundary vertices never own a cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DotsGame, Mover, Vertex};

    #[test]
    fn test_new_game_holds() {
        let game = DotsGame::seeded(4, 5, 0).unwrap();
        assert!(BoundaryUnownedInvariant::holds(&game));
    }

    #[test]
    fn test_finished_game_holds() {
        let mut game = DotsGame::seeded(3, 4, 11).unwrap();
        crate::game::tests::play_out(&mut game);
        assert!(game.is_game_over());
        assert!(BoundaryUnownedInvariant::holds(&game));
    }

    #[test]
    fn test_owner_on_last_row_violates() {
        let mut game = DotsGame::seeded(3, 3, 0).unwrap();
        game.board.force_owner(Vertex::new(3, 1), Mover::Player);
        assert!(!BoundaryUnownedInvariant::holds(&game));
    }

    #[test]
    fn test_owner_on_last_column_violates() {
        let mut game = DotsGame::seeded(3, 3, 0).unwrap();
        game.board.force_owner(Vertex::new(1, 3), Mover::Computer);
        assert!(!BoundaryUnownedInvariant::holds(&game));
    }
}
