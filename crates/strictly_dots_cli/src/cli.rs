//! Command-line interface for the dots binary.

use crate::config::{ConfigError, ConfigOverrides, GameConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Dots - dots and boxes against a greedy computer
#[derive(Parser, Debug)]
#[command(name = "dots")]
#[command(about = "Play dots and boxes against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer at the terminal
    Play(GameArgs),

    /// Pit a random-move player against the computer and print a tally
    Simulate {
        /// Board and seed settings
        #[command(flatten)]
        game: GameArgs,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,
    },
}

/// Settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Vertex rows (overrides the config file)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Vertex columns (overrides the config file)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Seed for the computer's tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Computer thinking pause in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl GameArgs {
    /// Flag values as config overrides.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            rows: self.rows,
            cols: self.cols,
            seed: self.seed,
            computer_delay_ms: self.delay_ms,
        }
    }

    /// Loads the config file if one was given, applies the flags and
    /// validates the result.
    pub fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        let config = base.with_overrides(self.overrides());
        config.validate()?;
        Ok(config)
    }
}
