//! Contract-based validation for dots and boxes.
//!
//! Contracts define correctness through preconditions and postconditions.
//! Preconditions run before anything is mutated, so a rejected move leaves
//! the game untouched.

use super::action::{EdgeSelection, MoveError};
use super::board::Board;
use super::invariants::{DotsInvariants, InvariantSet};
use super::{DotsGame, Edge, Mover, Phase};
use rand::Rng;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What the precondition establishes about the action.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Edge Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: both picked vertices are on the board.
pub struct VerticesOnBoard;

impl VerticesOnBoard {
    /// Checks the precondition.
    #[instrument(skip(board))]
    pub fn check(selection: &EdgeSelection, board: &Board) -> Result<(), MoveError> {
        for vertex in [selection.first, selection.second] {
            if !board.contains(vertex) {
                return Err(MoveError::VertexOutOfBounds(vertex));
            }
        }
        Ok(())
    }
}

/// Precondition: the two picks are different vertices.
pub struct DistinctVertices;

impl DistinctVertices {
    /// Checks the precondition.
    #[instrument]
    pub fn check(selection: &EdgeSelection) -> Result<(), MoveError> {
        if selection.first == selection.second {
            Err(MoveError::SameVertex(selection.first))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the picks are grid neighbours. Yields the normalized edge.
pub struct AdjacentVertices;

impl AdjacentVertices {
    /// Checks the precondition.
    #[instrument]
    pub fn check(selection: &EdgeSelection) -> Result<Edge, MoveError> {
        Edge::between(selection.first, selection.second)
            .ok_or(MoveError::NotAdjacent(selection.first, selection.second))
    }
}

/// Precondition: the edge is not on the board yet.
pub struct EdgeUndrawn;

impl EdgeUndrawn {
    /// Checks the precondition.
    #[instrument(skip(board))]
    pub fn check(edge: Edge, board: &Board) -> Result<(), MoveError> {
        if board.edge_drawn(edge) {
            Err(MoveError::EdgeAlreadyDrawn(edge))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a human edge.
///
/// Checks run in order: on board, distinct, adjacent, undrawn. The result
/// is the same edge whichever vertex was picked first.
pub struct MoveValidator;

impl MoveValidator {
    /// Validates a pair of picks and normalizes it into an edge.
    #[instrument(skip(board))]
    pub fn validate(selection: &EdgeSelection, board: &Board) -> Result<Edge, MoveError> {
        VerticesOnBoard::check(selection, board)?;
        DistinctVertices::check(selection)?;
        let edge = AdjacentVertices::check(selection)?;
        EdgeUndrawn::check(edge, board)?;
        Ok(edge)
    }
}

// ─────────────────────────────────────────────────────────────
//  Phase Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not finished.
pub struct GameRunning;

impl GameRunning {
    /// Checks the precondition.
    #[instrument]
    pub fn check(phase: Phase) -> Result<(), MoveError> {
        match phase {
            Phase::Finished => Err(MoveError::GameAlreadyOver),
            Phase::InProgress(_) => Ok(()),
        }
    }
}

/// Precondition: it is `mover`'s turn.
pub struct MoversTurn;

impl MoversTurn {
    /// Checks the precondition.
    #[instrument]
    pub fn check(phase: Phase, mover: Mover) -> Result<(), MoveError> {
        match phase {
            Phase::InProgress(current) if current == mover => Ok(()),
            Phase::InProgress(_) => Err(MoveError::WrongMover(mover)),
            Phase::Finished => Err(MoveError::GameAlreadyOver),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contracts (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Marker action for "the computer takes its turn".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerTurn;

/// Contract for human moves.
///
/// Preconditions: game running, player's turn, legal edge.
/// Postconditions: all game invariants.
pub struct HumanMoveContract;

impl<R: Rng> Contract<DotsGame<R>, EdgeSelection> for HumanMoveContract {
    type Checked = Edge;

    fn pre(game: &DotsGame<R>, selection: &EdgeSelection) -> Result<Edge, MoveError> {
        GameRunning::check(game.phase())?;
        MoversTurn::check(game.phase(), Mover::Player)?;
        MoveValidator::validate(selection, game.board())
    }

    fn post(after: &DotsGame<R>) -> Result<(), MoveError> {
        check_invariants(after)
    }
}

/// Contract for computer moves.
///
/// Preconditions: game running, computer's turn.
/// Postconditions: all game invariants.
pub struct ComputerMoveContract;

impl<R: Rng> Contract<DotsGame<R>, ComputerTurn> for ComputerMoveContract {
    type Checked = ();

    fn pre(game: &DotsGame<R>, _action: &ComputerTurn) -> Result<(), MoveError> {
        GameRunning::check(game.phase())?;
        MoversTurn::check(game.phase(), Mover::Computer)
    }

    fn post(after: &DotsGame<R>) -> Result<(), MoveError> {
        check_invariants(after)
    }
}

fn check_invariants<R: Rng>(game: &DotsGame<R>) -> Result<(), MoveError> {
    DotsInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}
