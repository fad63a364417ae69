//! Game configuration loaded from TOML with command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_dots::{DEFAULT_COLS, DEFAULT_ROWS, DotsGame, MoveError};
use tracing::{debug, info, instrument};

/// Largest number of vertex rows or columns a config may ask for.
pub const MAX_SIDE: usize = 100;

/// Settings for a game against the computer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Vertex rows.
    #[serde(default = "default_rows")]
    rows: usize,

    /// Vertex columns.
    #[serde(default = "default_cols")]
    cols: usize,

    /// Seed for the computer's tie-breaks. Unset means OS entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause before each computer move, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_cols() -> usize {
    DEFAULT_COLS
}

fn default_computer_delay_ms() -> u64 {
    1000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            seed: None,
            computer_delay_ms: default_computer_delay_ms(),
        }
    }
}

/// Values that replace file settings when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Vertex rows.
    pub rows: Option<usize>,
    /// Vertex columns.
    pub cols: Option<usize>,
    /// Tie-break seed.
    pub seed: Option<u64>,
    /// Computer pause in milliseconds.
    pub computer_delay_ms: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration for a `rows` x `cols` board with default
    /// timing.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(rows = config.rows, cols = config.cols, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces settings with any override that is set.
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        Self {
            rows: overrides.rows.unwrap_or(self.rows),
            cols: overrides.cols.unwrap_or(self.cols),
            seed: overrides.seed.or(self.seed),
            computer_delay_ms: overrides.computer_delay_ms.unwrap_or(self.computer_delay_ms),
        }
    }

    /// Rejects boards with fewer than two or more than [`MAX_SIDE`] vertex
    /// rows or columns.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 || self.cols < 2 {
            return Err(ConfigError::new(format!(
                "Board needs at least 2 x 2 dots, got {} x {}",
                self.rows, self.cols
            )));
        }
        if self.rows > MAX_SIDE || self.cols > MAX_SIDE {
            return Err(ConfigError::new(format!(
                "Board is limited to {} x {} dots, got {} x {}",
                MAX_SIDE, MAX_SIDE, self.rows, self.cols
            )));
        }
        Ok(())
    }

    /// The computer's pause as a duration.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Starts a game with the configured size and seed.
    pub fn new_game(&self) -> Result<DotsGame, MoveError> {
        self.new_game_with_seed(self.seed)
    }

    /// Starts a game with the configured size and an explicit seed.
    #[instrument(skip(self))]
    pub fn new_game_with_seed(&self, seed: Option<u64>) -> Result<DotsGame, MoveError> {
        match seed {
            Some(seed) => DotsGame::seeded(self.rows, self.cols, seed),
            None => DotsGame::new(self.rows, self.cols),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error tagged with the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.rows(), 7);
        assert_eq!(*config.cols(), 10);
        assert_eq!(*config.seed(), None);
        assert_eq!(config.computer_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_toml_takes_defaults() {
        let config = GameConfig::from_toml("rows = 4\nseed = 12\n").unwrap();
        assert_eq!(*config.rows(), 4);
        assert_eq!(*config.cols(), 10);
        assert_eq!(*config.seed(), Some(12));
        assert_eq!(*config.computer_delay_ms(), 1000);
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::new(4, 4).with_overrides(ConfigOverrides {
            cols: Some(6),
            computer_delay_ms: Some(0),
            ..ConfigOverrides::default()
        });
        assert_eq!(*config.rows(), 4);
        assert_eq!(*config.cols(), 6);
        assert_eq!(config.computer_delay(), Duration::ZERO);
    }

    #[test]
    fn test_validate_rejects_tiny_board() {
        let err = GameConfig::new(1, 3).validate().unwrap_err();
        assert!(err.message.contains("at least 2 x 2"));
        assert!(err.file.ends_with("config.rs"));
        assert!(GameConfig::new(2, 2).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_huge_board() {
        let err = GameConfig::new(MAX_SIDE + 1, 3).validate().unwrap_err();
        assert!(err.message.contains("limited to 100 x 100"));
        assert!(GameConfig::new(3, usize::MAX).validate().is_err());
        assert!(GameConfig::new(MAX_SIDE, MAX_SIDE).validate().is_ok());
    }

    #[test]
    fn test_seeded_games_match() {
        let config = GameConfig::new(3, 3).with_overrides(ConfigOverrides {
            seed: Some(5),
            ..ConfigOverrides::default()
        });
        let mut a = config.new_game().unwrap();
        let mut b = config.new_game().unwrap();
        a.submit_human_move(strictly_dots::Vertex::new(1, 1), strictly_dots::Vertex::new(1, 2))
            .unwrap();
        b.submit_human_move(strictly_dots::Vertex::new(1, 1), strictly_dots::Vertex::new(1, 2))
            .unwrap();
        assert_eq!(
            a.submit_computer_move().unwrap(),
            b.submit_computer_move().unwrap()
        );
    }
}
