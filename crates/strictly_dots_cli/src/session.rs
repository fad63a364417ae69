//! Game sessions between a player and the computer.

use crate::config::GameConfig;
use crate::players::{Player, RandomPlayer};
use crate::render::render_board;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strictly_dots::{DotsGame, Edge, MoveError, Mover, Outcome, Phase, Scores, Tier, TierSummary};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from a session to whoever is watching it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameEvent {
    /// A game started.
    #[display("New game on {rows} x {cols} dots")]
    Started {
        /// Vertex rows.
        rows: usize,
        /// Vertex columns.
        cols: usize,
    },
    /// The board after a change, rendered.
    #[display("{_0}")]
    Board(String),
    /// Waiting for the player.
    #[display("{_0}, pick two neighbouring dots (row col row col), or q to quit")]
    AwaitingPlayer(String),
    /// The computer is about to move.
    #[display("Computer is thinking...")]
    ComputerThinking,
    /// Which tier the computer chose from, and what each tier held.
    #[display("Computer picked a {tier} edge ({summary})")]
    ComputerPlanned {
        /// Tier of the chosen cell.
        tier: Tier,
        /// Candidates per tier.
        summary: TierSummary,
    },
    /// An edge was drawn.
    #[display("{mover} drew {edge}, captured {captured}")]
    Moved {
        /// Who drew it.
        mover: Mover,
        /// The edge.
        edge: Edge,
        /// Cells closed by it.
        captured: usize,
    },
    /// The player's move was refused; the player moves again.
    #[display("Move rejected: {_0}")]
    Rejected(MoveError),
    /// Feedback on the player's input.
    #[display("{_0}")]
    Notice(String),
    /// The game ended.
    #[display("Game over: {outcome} ({scores})")]
    GameOver {
        /// Winner or draw.
        outcome: Outcome,
        /// Final scores.
        scores: Scores,
    },
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Final result; `None` if the player left early.
    pub outcome: Option<Outcome>,
    /// Scores when the session stopped.
    pub scores: Scores,
    /// Edges drawn.
    pub moves: usize,
    /// Player moves refused by the rules.
    pub rejected: usize,
}

/// Drives one game between a player and the computer.
pub struct Session {
    game: DotsGame,
    player: Box<dyn Player>,
    computer_delay: Duration,
    events: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl Session {
    /// Creates a session. The computer waits `computer_delay` before each
    /// move.
    pub fn new(game: DotsGame, player: Box<dyn Player>, computer_delay: Duration) -> Self {
        Self {
            game,
            player,
            computer_delay,
            events: None,
        }
    }

    /// Reports progress to an event listener.
    pub fn with_events(mut self, events: mpsc::UnboundedSender<GameEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// The game being played.
    pub fn game(&self) -> &DotsGame {
        &self.game
    }

    fn emit(&self, event: GameEvent) {
        if let Some(events) = &self.events {
            if events.send(event).is_err() {
                debug!("Event listener gone");
            }
        }
    }

    fn emit_board(&self) {
        if self.events.is_some() {
            self.emit(GameEvent::Board(render_board(&self.game)));
        }
    }

    /// Runs the game loop until the game ends or the player leaves.
    ///
    /// Rule violations by the player are reported and the player asked
    /// again; any other error ends the session.
    #[instrument(skip(self), fields(player = %self.player.name()))]
    pub async fn run(&mut self) -> Result<SessionReport> {
        info!("Starting game session");
        let mut rejected = 0;

        self.emit(GameEvent::Started {
            rows: self.game.board().rows(),
            cols: self.game.board().cols(),
        });
        self.emit_board();

        loop {
            match self.game.phase() {
                Phase::Finished => {
                    let outcome = self
                        .game
                        .outcome()
                        .context("Finished game has no outcome")?;
                    let scores = self.game.scores();
                    info!(%outcome, %scores, "Game over");
                    self.emit(GameEvent::GameOver { outcome, scores });
                    return Ok(self.report(Some(outcome), rejected));
                }
                Phase::InProgress(Mover::Player) => {
                    self.emit(GameEvent::AwaitingPlayer(self.player.name().to_string()));
                    let Some(selection) = self.player.get_move(&self.game).await? else {
                        info!("Player left the game");
                        return Ok(self.report(None, rejected));
                    };

                    match self
                        .game
                        .submit_human_move(selection.first, selection.second)
                    {
                        Ok(outcome) => {
                            self.emit(GameEvent::Moved {
                                mover: outcome.mover,
                                edge: outcome.edge,
                                captured: outcome.completed_cells.len(),
                            });
                            self.emit_board();
                        }
                        Err(e) if e.is_recoverable() => {
                            debug!(error = %e, "Player move rejected");
                            rejected += 1;
                            self.emit(GameEvent::Rejected(e));
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                Phase::InProgress(Mover::Computer) => {
                    self.emit(GameEvent::ComputerThinking);
                    if !self.computer_delay.is_zero() {
                        tokio::time::sleep(self.computer_delay).await;
                    }

                    let reply = self.game.submit_computer_move()?;
                    debug!(
                        tier = %reply.tier,
                        summary = %reply.summary,
                        edge = %reply.edge_drawn(),
                        "Computer moved"
                    );
                    self.emit(GameEvent::ComputerPlanned {
                        tier: reply.tier,
                        summary: reply.summary,
                    });
                    self.emit(GameEvent::Moved {
                        mover: Mover::Computer,
                        edge: reply.edge_drawn(),
                        captured: reply.outcome.completed_cells.len(),
                    });
                    self.emit_board();
                }
            }
        }
    }

    fn report(&self, outcome: Option<Outcome>, rejected: usize) -> SessionReport {
        SessionReport {
            outcome,
            scores: self.game.scores(),
            moves: self.game.history().len(),
            rejected,
        }
    }

    /// Asks the player for another game.
    pub async fn rematch(&mut self) -> Result<bool> {
        self.player.rematch().await
    }

    /// Clears the board for another game of the same size.
    pub fn restart(&mut self) {
        self.game.restart();
    }
}

/// Win counts over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display(
    "{games} games: player {player_wins}, computer {computer_wins}, draws {draws}"
)]
pub struct Tally {
    /// Games played.
    pub games: usize,
    /// Games the player won.
    pub player_wins: usize,
    /// Games the computer won.
    pub computer_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl Tally {
    /// Counts one result.
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Winner(Mover::Player) => self.player_wins += 1,
            Outcome::Winner(Mover::Computer) => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Plays `games` games of a random player against the computer without
/// pauses.
///
/// With a configured seed, game `n` uses `seed + n` so every run of the
/// batch is reproducible.
#[instrument(skip(config), fields(rows = *config.rows(), cols = *config.cols()))]
pub async fn simulate(config: &GameConfig, games: usize) -> Result<Tally> {
    let mut tally = Tally::default();

    for round in 0..games {
        let seed = config.seed().map(|seed| seed.wrapping_add(round as u64));
        let game = config.new_game_with_seed(seed)?;
        let player = RandomPlayer::new("Random", seed.map(|seed| seed.rotate_left(32)));

        let report = Session::new(game, Box::new(player), Duration::ZERO)
            .run()
            .await?;
        let outcome = report
            .outcome
            .with_context(|| format!("Simulated game {} stopped early", round))?;
        tally.record(outcome);
    }

    info!(%tally, "Simulation finished");
    Ok(tally)
}
