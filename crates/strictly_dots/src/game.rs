//! Turn order, scoring and terminal detection.

use super::action::{EdgeSelection, MoveError, MoveRecord};
use super::board::Board;
use super::completion::CompletionDetector;
use super::contracts::{ComputerMoveContract, ComputerTurn, Contract, HumanMoveContract};
use super::phases::{Outcome, Phase};
use super::planner::{MovePlanner, Tier, TierSummary};
use super::{Cell, Direction, Edge, Mover, Scores, Vertex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default vertex rows.
pub const DEFAULT_ROWS: usize = 7;
/// Default vertex columns.
pub const DEFAULT_COLS: usize = 10;

/// What a committed move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Side that moved.
    pub mover: Mover,
    /// Edge drawn.
    pub edge: Edge,
    /// Cells captured by this move.
    pub completed_cells: Vec<Cell>,
    /// Whether the mover moves again.
    pub turn_retained: bool,
    /// Whether this move ended the game.
    pub finished: bool,
}

/// A computer move with the planner's reasoning attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerMove {
    /// What the move did.
    pub outcome: MoveOutcome,
    /// Tier the move came from.
    pub tier: Tier,
    /// Candidate counts at planning time.
    pub summary: TierSummary,
}

impl ComputerMove {
    /// The edge the computer drew.
    pub fn edge_drawn(&self) -> Edge {
        self.outcome.edge
    }
}

/// A dots-and-boxes game between the player and the computer.
///
/// Owns the board, scores, phase, history and the random source used for
/// the computer's tie-breaks. Moves either fully apply or leave the game
/// untouched.
#[derive(Debug, Clone)]
pub struct DotsGame<R: Rng = StdRng> {
    pub(crate) board: Board,
    pub(crate) scores: Scores,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<MoveRecord>,
    rng: R,
}

impl DotsGame<StdRng> {
    /// Starts a game with an OS-seeded random source.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, MoveError> {
        Self::with_rng(rows, cols, StdRng::from_os_rng())
    }

    /// Starts a game whose computer moves are reproducible.
    #[instrument]
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> Result<Self, MoveError> {
        Self::with_rng(rows, cols, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DotsGame<R> {
    /// Starts a game with the given random source. The player moves first.
    #[instrument(skip(rng))]
    pub fn with_rng(rows: usize, cols: usize, rng: R) -> Result<Self, MoveError> {
        let board = Board::new(rows, cols)?;
        info!(rows, cols, cells = board.cell_count(), "New game");
        Ok(Self {
            board,
            scores: Scores::default(),
            phase: Phase::InProgress(Mover::Player),
            history: Vec::new(),
            rng,
        })
    }

    /// Clears the board and scores for a new game of the same size.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.clear();
        self.scores = Scores::default();
        self.phase = Phase::InProgress(Mover::Player);
        self.history.clear();
        info!("Game restarted");
    }

    /// Draws the edge between two picked vertices for the player.
    ///
    /// A capture keeps the turn with the player; otherwise the computer
    /// moves next.
    #[instrument(skip_all, fields(first = %first, second = %second))]
    pub fn submit_human_move(
        &mut self,
        first: Vertex,
        second: Vertex,
    ) -> Result<MoveOutcome, MoveError> {
        let selection = EdgeSelection::new(first, second);
        let edge = HumanMoveContract::pre(self, &selection)?;
        let outcome = self.commit(Mover::Player, edge)?;

        #[cfg(debug_assertions)]
        HumanMoveContract::post(self)?;

        Ok(outcome)
    }

    /// Lets the computer plan and draw one edge.
    ///
    /// A capture keeps the turn with the computer; otherwise the player
    /// moves next.
    #[instrument(skip(self))]
    pub fn submit_computer_move(&mut self) -> Result<ComputerMove, MoveError> {
        ComputerMoveContract::pre(self, &ComputerTurn)?;
        let plan = MovePlanner::plan(&self.board, &mut self.rng)?;
        let outcome = self.commit(Mover::Computer, plan.edge)?;

        #[cfg(debug_assertions)]
        ComputerMoveContract::post(self)?;

        Ok(ComputerMove {
            outcome,
            tier: plan.tier,
            summary: plan.summary,
        })
    }

    /// Draws `edge`, awards completed cells and advances the phase.
    fn commit(&mut self, mover: Mover, edge: Edge) -> Result<MoveOutcome, MoveError> {
        self.board.draw_edge(edge)?;
        self.history.push(MoveRecord { mover, edge });

        let completed_cells =
            CompletionDetector::detect_and_assign(&mut self.board, &mut self.scores, mover)?;
        let turn_retained = !completed_cells.is_empty();

        self.phase = if self.scores.total() == self.board.cell_count() {
            info!(scores = %self.scores, "Game finished");
            Phase::Finished
        } else if turn_retained {
            Phase::InProgress(mover)
        } else {
            Phase::InProgress(mover.opponent())
        };

        debug!(%mover, %edge, captured = completed_cells.len(), phase = %self.phase, "Move committed");
        Ok(MoveOutcome {
            mover,
            edge,
            completed_cells,
            turn_retained,
            finished: self.phase.is_finished(),
        })
    }

    /// Owner of the cell whose primary corner is `(row, col)`.
    pub fn cell_owner(&self, row: usize, col: usize) -> Option<Mover> {
        self.board.cell_owner(Cell::new(row, col))
    }

    /// Whether the edge leaving `vertex` in `direction` is drawn.
    pub fn edge_drawn(&self, vertex: Vertex, direction: Direction) -> bool {
        self.board.edge_drawn(Edge::new(vertex, direction))
    }

    /// Current scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns true once every cell is owned.
    pub fn is_game_over(&self) -> bool {
        self.phase.is_finished()
    }

    /// Side to move, if the game is running.
    pub fn mover(&self) -> Option<Mover> {
        self.phase.mover()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Final result, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.phase
            .is_finished()
            .then(|| Outcome::from_scores(self.scores))
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every committed edge, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}
