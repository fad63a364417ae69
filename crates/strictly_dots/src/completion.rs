//! Cell completion detection.

use super::action::MoveError;
use super::board::Board;
use super::{Cell, Mover, Scores};
use tracing::{debug, instrument};

/// Finds cells closed by the last edge and awards them.
pub struct CompletionDetector;

impl CompletionDetector {
    /// Scans every unowned cell, awards each complete one to `mover` and
    /// credits the score.
    ///
    /// The whole board is scanned rather than the cells next to the last
    /// edge, so a shared edge closing two cells is caught in one call.
    /// Returns the cells captured, in row-major order.
    #[instrument(skip(board, scores), fields(mover = %mover))]
    pub fn detect_and_assign(
        board: &mut Board,
        scores: &mut Scores,
        mover: Mover,
    ) -> Result<Vec<Cell>, MoveError> {
        let completed: Vec<Cell> = board
            .cells()
            .filter(|cell| board.cell_owner(*cell).is_none())
            .filter(|cell| {
                board
                    .cell_edges(*cell)
                    .is_ok_and(|edges| edges.is_complete())
            })
            .collect();

        for cell in &completed {
            board.set_cell_owner(*cell, mover)?;
            scores.increment(mover);
            debug!(cell = %cell, "Cell captured");
        }

        Ok(completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Edge;

    fn draw_all(board: &mut Board, edges: &[Edge]) {
        for edge in edges {
            board.draw_edge(*edge).unwrap();
        }
    }

    #[test]
    fn test_nothing_completed_on_empty_board() {
        let mut board = Board::new(3, 3).unwrap();
        let mut scores = Scores::default();
        let cells = CompletionDetector::detect_and_assign(&mut board, &mut scores, Mover::Player);
        assert_eq!(cells, Ok(vec![]));
        assert_eq!(scores.total(), 0);
    }

    #[test]
    fn test_single_cell_completed() {
        let mut board = Board::new(2, 2).unwrap();
        let mut scores = Scores::default();
        draw_all(
            &mut board,
            &[
                Edge::horizontal(1, 1),
                Edge::vertical(1, 1),
                Edge::horizontal(2, 1),
                Edge::vertical(1, 2),
            ],
        );

        let cells =
            CompletionDetector::detect_and_assign(&mut board, &mut scores, Mover::Computer).unwrap();
        assert_eq!(cells, vec![Cell::new(1, 1)]);
        assert_eq!(board.cell_owner(Cell::new(1, 1)), Some(Mover::Computer));
        assert_eq!(scores.computer, 1);
    }

    #[test]
    fn test_owned_cells_not_reassigned() {
        let mut board = Board::new(2, 2).unwrap();
        let mut scores = Scores::default();
        draw_all(
            &mut board,
            &[
                Edge::horizontal(1, 1),
                Edge::vertical(1, 1),
                Edge::horizontal(2, 1),
                Edge::vertical(1, 2),
            ],
        );
        CompletionDetector::detect_and_assign(&mut board, &mut scores, Mover::Player).unwrap();

        let again =
            CompletionDetector::detect_and_assign(&mut board, &mut scores, Mover::Computer).unwrap();
        assert!(again.is_empty());
        assert_eq!(board.cell_owner(Cell::new(1, 1)), Some(Mover::Player));
        assert_eq!(scores, Scores { player: 1, computer: 0 });
    }

    #[test]
    fn test_shared_edge_closes_two_cells() {
        let mut board = Board::new(2, 3).unwrap();
        let mut scores = Scores::default();
        draw_all(
            &mut board,
            &[
                Edge::horizontal(1, 1),
                Edge::horizontal(1, 2),
                Edge::horizontal(2, 1),
                Edge::horizontal(2, 2),
                Edge::vertical(1, 1),
                Edge::vertical(1, 3),
            ],
        );
        let none =
            CompletionDetector::detect_and_assign(&mut board, &mut scores, Mover::Player).unwrap();
        assert!(none.is_empty());

        board.draw_edge(Edge::vertical(1, 2)).unwrap();
        let cells =
            CompletionDetector::detect_and_assign(&mut board, &mut scores, Mover::Player).unwrap();
        assert_eq!(cells, vec![Cell::new(1, 1), Cell::new(1, 2)]);
        assert_eq!(scores.player, 2);
    }
}
