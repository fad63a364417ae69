//! Strictly Dots terminal driver
//!
//! Connects a [`Player`](players::Player) to a [`strictly_dots::DotsGame`]
//! and runs the game loop, with the computer pausing before each move.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod players;
pub mod render;
pub mod session;

pub use config::{ConfigError, ConfigOverrides, GameConfig, MAX_SIDE};
pub use session::{GameEvent, Session, SessionReport, Tally, simulate};
