//! Tests for the computer's move choice and the completion scan.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_dots::{Board, Cell, CompletionDetector, Edge, MovePlanner, Mover, Scores, Tier};

fn board_with(rows: usize, cols: usize, edges: &[Edge]) -> Board {
    let mut board = Board::new(rows, cols).unwrap();
    for edge in edges {
        board.draw_edge(*edge).unwrap();
    }
    board
}

#[test]
fn test_capture_beats_fresh_cell() {
    // (1, 1) has three sides; (2, 2) has none.
    let board = board_with(
        3,
        3,
        &[
            Edge::horizontal(1, 1),
            Edge::vertical(1, 1),
            Edge::horizontal(2, 1),
        ],
    );

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = MovePlanner::plan(&board, &mut rng).unwrap();
        assert_eq!(plan.tier, Tier::CompleteNow);
        assert_eq!(plan.cell, Cell::new(1, 1));
        assert_eq!(plan.edge, Edge::vertical(1, 2));
    }
}

#[test]
fn test_planner_leaves_board_alone() {
    let board = board_with(4, 4, &[Edge::horizontal(2, 2)]);
    let before = board.clone();
    let mut rng = StdRng::seed_from_u64(3);
    let plan = MovePlanner::plan(&board, &mut rng).unwrap();

    assert_eq!(board, before);
    assert!(!board.edge_drawn(plan.edge));
    assert!(board.fits(plan.edge));
}

#[test]
fn test_shared_edge_closes_both_cells() {
    let mut board = board_with(
        3,
        3,
        &[
            Edge::horizontal(1, 1),
            Edge::vertical(1, 1),
            Edge::horizontal(2, 1),
            Edge::horizontal(1, 2),
            Edge::horizontal(2, 2),
            Edge::vertical(1, 3),
        ],
    );
    let mut scores = Scores::default();
    assert_eq!(
        CompletionDetector::detect_and_assign(&mut board, &mut scores, Mover::Player),
        Ok(vec![])
    );

    board.draw_edge(Edge::vertical(1, 2)).unwrap();
    let closed =
        CompletionDetector::detect_and_assign(&mut board, &mut scores, Mover::Player).unwrap();

    assert_eq!(closed, vec![Cell::new(1, 1), Cell::new(1, 2)]);
    assert_eq!(scores.player, 2);
    assert_eq!(board.owned_by(Mover::Player), 2);
    assert_eq!(board.cell_owner(Cell::new(2, 1)), None);
}
