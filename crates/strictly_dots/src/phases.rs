//! Game phase and outcome.

use super::{Mover, Scores};
use serde::{Deserialize, Serialize};

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted from the given side.
    InProgress(Mover),
    /// Every cell is owned. Terminal.
    Finished,
}

impl Phase {
    /// Side to move, if the game is still running.
    pub fn mover(&self) -> Option<Mover> {
        match self {
            Phase::InProgress(mover) => Some(*mover),
            Phase::Finished => None,
        }
    }

    /// Returns true once the game has finished.
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Finished)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::InProgress(mover) => write!(f, "{mover} to move"),
            Phase::Finished => write!(f, "Finished"),
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The side with more cells.
    Winner(Mover),
    /// Equal cell counts.
    Draw,
}

impl Outcome {
    /// Decides the outcome from final scores.
    pub fn from_scores(scores: Scores) -> Self {
        match scores.player.cmp(&scores.computer) {
            std::cmp::Ordering::Greater => Outcome::Winner(Mover::Player),
            std::cmp::Ordering::Less => Outcome::Winner(Mover::Computer),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mover> {
        match self {
            Outcome::Winner(mover) => Some(*mover),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mover) => write!(f, "{mover} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
