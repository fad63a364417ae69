//! Strictly Dots - dots-and-boxes game logic
//!
//! Players take turns drawing edges between neighbouring grid vertices.
//! Drawing the fourth side of a cell captures it and earns another turn.
//! The computer opponent plays a four-tier greedy strategy with random
//! tie-breaking.
//!
//! # Architecture
//!
//! - **Board**: vertex grid, edge flags and cell ownership
//! - **Contracts**: move validation as composable preconditions
//! - **Completion**: full-board scan for captured cells
//! - **Planner**: the computer's tiered move choice
//! - **Game**: turn order, scoring and terminal detection
//!
//! # Example
//!
//! ```
//! use strictly_dots::{DotsGame, Mover, Vertex};
//!
//! let mut game = DotsGame::seeded(3, 3, 42)?;
//! let outcome = game.submit_human_move(Vertex::new(1, 1), Vertex::new(1, 2))?;
//! assert!(!outcome.turn_retained);
//! assert_eq!(game.mover(), Some(Mover::Computer));
//!
//! let reply = game.submit_computer_move()?;
//! println!("computer drew {}", reply.edge_drawn());
//! # Ok::<(), strictly_dots::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod completion;
mod contracts;
mod game;
pub mod invariants;
mod phases;
mod planner;
mod selection;
mod types;

pub use action::{EdgeSelection, MoveError, MoveRecord};
pub use board::{Board, CellEdges};
pub use completion::CompletionDetector;
pub use contracts::{
    AdjacentVertices, ComputerMoveContract, ComputerTurn, Contract, DistinctVertices, EdgeUndrawn,
    GameRunning, HumanMoveContract, MoveValidator, MoversTurn, VerticesOnBoard,
};
pub use game::{ComputerMove, DEFAULT_COLS, DEFAULT_ROWS, DotsGame, MoveOutcome};
pub use phases::{Outcome, Phase};
pub use planner::{MovePlanner, PlannedMove, Tier, TierBuckets, TierSummary};
pub use selection::VertexPicker;
pub use types::{Cell, CellSide, Direction, Edge, Mover, Scores, Vertex};
