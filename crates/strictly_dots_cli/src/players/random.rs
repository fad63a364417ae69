//! Random-move player for simulations.

use super::Player;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_dots::{DotsGame, Edge, EdgeSelection};
use tracing::debug;

/// Draws a uniformly random undrawn edge, picking its endpoints in random
/// order.
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player. A seed makes its moves reproducible.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: name.into(),
            rng,
        }
    }
}

#[async_trait::async_trait]
impl Player for RandomPlayer {
    async fn get_move(&mut self, game: &DotsGame) -> Result<Option<EdgeSelection>> {
        let edges: Vec<Edge> = game.board().undrawn_edges().collect();
        if edges.is_empty() {
            return Ok(None);
        }

        let edge = edges[self.rng.random_range(0..edges.len())];
        let selection = EdgeSelection::new(edge.origin, edge.far_end());
        debug!(player = %self.name, %edge, "Random move chosen");

        if self.rng.random_bool(0.5) {
            Ok(Some(selection.reversed()))
        } else {
            Ok(Some(selection))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
