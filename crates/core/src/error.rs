//! Error type for the game core.
//!
//! Collisions and quitting are not errors; they are phase transitions. What
//! remains is the environment failing underneath us.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The terminal port failed to read, write or change modes
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The board ended up with no cells
    #[error("board of {width}x{height} cells is too small to play on")]
    BoardTooSmall { width: u16, height: u16 },

    /// A configuration value could not be used
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
