//! Greedy move selection for the computer.
//!
//! Every unowned cell is bucketed by how many of its sides are drawn. The
//! first non-empty bucket in priority order wins, a cell is drawn from it at
//! random, and the cell's first missing side becomes the move:
//!
//! 1. [`Tier::CompleteNow`] - three sides drawn, capture it.
//! 2. [`Tier::Fresh`] - no sides drawn.
//! 3. [`Tier::Early`] - one side drawn.
//! 4. [`Tier::Risky`] - two sides drawn; a third hands the opponent a capture.

use super::action::MoveError;
use super::board::Board;
use super::{Cell, CellSide, Edge};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, instrument};

/// Heuristic priority group. Declaration order is priority order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    EnumIter,
)]
pub enum Tier {
    /// Three sides drawn.
    #[display("complete-now")]
    CompleteNow,
    /// No sides drawn.
    #[display("fresh")]
    Fresh,
    /// One side drawn.
    #[display("early")]
    Early,
    /// Two sides drawn.
    #[display("risky")]
    Risky,
}

impl Tier {
    /// Tier for a cell with `drawn` sides, `None` for a complete cell.
    pub fn for_drawn_count(drawn: usize) -> Option<Self> {
        match drawn {
            3 => Some(Tier::CompleteNow),
            0 => Some(Tier::Fresh),
            1 => Some(Tier::Early),
            2 => Some(Tier::Risky),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Candidate cells grouped by tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierBuckets {
    buckets: [Vec<Cell>; 4],
    available: usize,
}

impl TierBuckets {
    /// Buckets every unowned cell of `board`, row-major within each tier.
    #[instrument(skip(board))]
    pub fn classify(board: &Board) -> Self {
        let mut buckets = Self::default();
        for cell in board.cells().filter(|cell| board.cell_owner(*cell).is_none()) {
            buckets.available += 1;
            let tier = board
                .cell_edges(cell)
                .ok()
                .and_then(|edges| Tier::for_drawn_count(edges.drawn_count()));
            if let Some(tier) = tier {
                buckets.buckets[tier.slot()].push(cell);
            }
        }
        buckets
    }

    /// Candidates in `tier`.
    pub fn get(&self, tier: Tier) -> &[Cell] {
        &self.buckets[tier.slot()]
    }

    /// The highest-priority tier with candidates.
    pub fn first_non_empty(&self) -> Option<(Tier, &[Cell])> {
        Tier::iter()
            .map(|tier| (tier, self.get(tier)))
            .find(|(_, cells)| !cells.is_empty())
    }

    /// Candidate counts per tier.
    pub fn summary(&self) -> TierSummary {
        TierSummary {
            complete_now: self.get(Tier::CompleteNow).len(),
            fresh: self.get(Tier::Fresh).len(),
            early: self.get(Tier::Early).len(),
            risky: self.get(Tier::Risky).len(),
            available: self.available,
        }
    }
}

/// How many candidates each tier held when a move was planned.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display(
    "{available} open: {complete_now} complete-now, {fresh} fresh, {early} early, {risky} risky"
)]
pub struct TierSummary {
    /// Cells with three sides drawn.
    pub complete_now: usize,
    /// Cells with no sides drawn.
    pub fresh: usize,
    /// Cells with one side drawn.
    pub early: usize,
    /// Cells with two sides drawn.
    pub risky: usize,
    /// Unowned cells.
    pub available: usize,
}

/// The computer's chosen move and why it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlannedMove {
    /// Tier the cell was drawn from.
    pub tier: Tier,
    /// Cell the move works on.
    pub cell: Cell,
    /// Missing side being drawn.
    pub side: CellSide,
    /// The edge to draw.
    pub edge: Edge,
    /// Candidate counts at planning time.
    pub summary: TierSummary,
}

/// Four-tier greedy planner. Read-only on the board.
pub struct MovePlanner;

impl MovePlanner {
    /// Chooses an undrawn edge for the computer.
    ///
    /// Fails with [`MoveError::NoMoveAvailable`] when no unowned cell is
    /// left, which only happens if the caller missed the end of the game.
    #[instrument(skip(board, rng))]
    pub fn plan<R: Rng>(board: &Board, rng: &mut R) -> Result<PlannedMove, MoveError> {
        let buckets = TierBuckets::classify(board);
        let summary = buckets.summary();
        let (tier, candidates) = buckets
            .first_non_empty()
            .ok_or(MoveError::NoMoveAvailable)?;

        let cell = candidates[rng.random_range(0..candidates.len())];
        let side = board
            .cell_edges(cell)?
            .first_missing()
            .ok_or(MoveError::NoMoveAvailable)?;
        let edge = cell.side(side);

        debug!(%tier, %cell, %side, %edge, candidates = candidates.len(), "Move planned");
        Ok(PlannedMove {
            tier,
            cell,
            side,
            edge,
            summary,
        })
    }
}
