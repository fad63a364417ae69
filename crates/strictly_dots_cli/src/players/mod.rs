//! Player trait and implementations.
//!
//! A player stands in for the human side of the game. The computer side is
//! always the core's own planner.

mod random;
mod stdin;

pub use random::RandomPlayer;
pub use stdin::{StdinPlayer, parse_vertices};

use anyhow::Result;
use strictly_dots::{DotsGame, EdgeSelection};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the two vertices of the next edge.
    ///
    /// Returns `None` when the player leaves the game.
    async fn get_move(&mut self, game: &DotsGame) -> Result<Option<EdgeSelection>>;

    /// Asks whether to play another game once this one is over.
    async fn rematch(&mut self) -> Result<bool> {
        Ok(false)
    }

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
