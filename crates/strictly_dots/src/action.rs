//! First-class action types for dots and boxes.
//!
//! A human move starts life as two picked vertices. It only becomes an
//! [`Edge`] once the validator has accepted and normalized it.

use super::{Cell, Edge, Mover, Vertex};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Two vertices picked by the human player, in pick order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeSelection {
    /// First vertex picked.
    pub first: Vertex,
    /// Second vertex picked.
    pub second: Vertex,
}

impl EdgeSelection {
    /// Creates a selection from two picks.
    #[instrument]
    pub fn new(first: Vertex, second: Vertex) -> Self {
        Self { first, second }
    }

    /// The same pair with the picks swapped.
    pub fn reversed(self) -> Self {
        Self::new(self.second, self.first)
    }
}

impl std::fmt::Display for EdgeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.first, self.second)
    }
}

/// A committed edge and who drew it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Side that drew the edge.
    pub mover: Mover,
    /// The edge drawn.
    pub edge: Edge,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} drew {}", self.mover, self.edge)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A board needs at least two rows and two columns.
    #[display("Board must be at least 2x2 vertices, got {rows}x{cols}")]
    InvalidDimensions {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// A picked vertex is not on the board.
    #[display("Vertex {_0} is not on the board")]
    VertexOutOfBounds(Vertex),

    /// The same vertex was picked twice.
    #[display("Vertex {_0} was picked twice")]
    SameVertex(Vertex),

    /// The picked vertices are not grid neighbours.
    #[display("Vertices {_0} and {_1} are not adjacent")]
    NotAdjacent(Vertex, Vertex),

    /// The edge is already on the board.
    #[display("Edge {_0} is already drawn")]
    EdgeAlreadyDrawn(Edge),

    /// The edge would leave the grid.
    #[display("Edge {_0} leaves the board")]
    EdgeOutOfRange(Edge),

    /// The coordinate is not the primary corner of any cell.
    #[display("{_0} is not on the board")]
    CellOutOfRange(Cell),

    /// Ownership was assigned twice.
    #[display("{_0} is already owned")]
    CellAlreadyOwned(Cell),

    /// The computer was asked to move with no cell left to play.
    #[display("No move available for the computer")]
    NoMoveAvailable,

    /// The game is already over.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// It's the other side's turn.
    #[display("It's not {_0}'s turn")]
    WrongMover(Mover),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Whether the caller can reject the move and keep playing.
    ///
    /// Everything else signals corrupted orchestration and must abort
    /// move processing.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MoveError::InvalidDimensions { .. }
                | MoveError::VertexOutOfBounds(_)
                | MoveError::SameVertex(_)
                | MoveError::NotAdjacent(..)
                | MoveError::EdgeAlreadyDrawn(_)
                | MoveError::GameAlreadyOver
                | MoveError::WrongMover(_)
        )
    }
}
