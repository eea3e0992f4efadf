//! Game configuration.
//!
//! Board size and growth are inputs to setup rather than constants: a host can
//! pin the board (e.g. 50x30) or let it follow the terminal.

use std::env;
use std::str::FromStr;

use log::warn;

use crate::error::GameError;
use crate::types::{
    CELL_COLUMNS, GRID_OFFSET_X, GRID_OFFSET_Y, GROW_DIVISOR, TICK_BUDGET_SECS,
};

/// Widest board whose last cell still has both columns on a `u16` terminal column
pub const MAX_BOARD_WIDTH: u16 = (u16::MAX - GRID_OFFSET_X - (CELL_COLUMNS - 1)) / CELL_COLUMNS + 1;

/// Setup inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board size in cells; `None` derives it from the viewport
    pub board: Option<(u16, u16)>,
    /// Cells gained per food; `None` derives it from the board size
    pub grow_increment: Option<u32>,
    /// Food placement seed
    pub seed: u32,
    /// Log file; `None` disables logging
    pub log_path: Option<String>,
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: None,
            grow_increment: None,
            seed: 1,
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables, ignoring values that do not parse.
    ///
    /// - `SNAKE_WIDTH` / `SNAKE_HEIGHT`: board size in cells (both required)
    /// - `SNAKE_GROW_INCREMENT`: cells gained per food
    /// - `SNAKE_SEED`: food placement seed
    /// - `SNAKE_LOG_PATH`: log file
    /// - `SNAKE_LOG_LEVEL`: log level
    pub fn from_env() -> Self {
        let width = parse_var::<u16>("SNAKE_WIDTH");
        let height = parse_var::<u16>("SNAKE_HEIGHT");
        let board = width.zip(height);
        if board.is_none() && (width.is_some() || height.is_some()) {
            warn!("SNAKE_WIDTH and SNAKE_HEIGHT must be set together, using the viewport");
        }

        let grow_increment = parse_var("SNAKE_GROW_INCREMENT");
        let seed = parse_var("SNAKE_SEED").unwrap_or(1);

        let log_path = env::var("SNAKE_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = env::var("SNAKE_LOG_LEVEL")
            .ok()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_else(|| "info".to_string());

        Self {
            board,
            grow_increment,
            seed,
            log_path,
            log_level,
        }
    }

    /// Like [`GameConfig::from_env`], but reports values that are set and do not parse.
    pub fn try_from_env() -> Result<Self, GameError> {
        for key in ["SNAKE_WIDTH", "SNAKE_HEIGHT"] {
            check_var::<u16>(key)?;
        }
        check_var::<u32>("SNAKE_GROW_INCREMENT")?;
        check_var::<u32>("SNAKE_SEED")?;

        let config = Self::from_env();
        if !matches!(
            config.log_level.as_str(),
            "off" | "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(GameError::InvalidConfig(format!(
                "SNAKE_LOG_LEVEL={}",
                config.log_level
            )));
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_board(mut self, width: u16, height: u16) -> Self {
        self.board = Some((width, height));
        self
    }

    pub fn with_grow_increment(mut self, increment: u32) -> Self {
        self.grow_increment = Some(increment);
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Reject values setup could never use
    pub fn validate(&self) -> Result<(), GameError> {
        if let Some((width, height)) = self.board {
            if width == 0 || height == 0 {
                return Err(GameError::BoardTooSmall { width, height });
            }
            if width > MAX_BOARD_WIDTH {
                return Err(GameError::InvalidConfig(format!(
                    "board width {width} exceeds {MAX_BOARD_WIDTH} cells"
                )));
            }
        }
        if self.grow_increment == Some(0) {
            return Err(GameError::InvalidConfig(
                "grow increment must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Board size for a viewport: the configured size, or whatever fits below
    /// the score line at two columns per cell.
    pub fn board_size(&self, viewport: (u16, u16)) -> (u16, u16) {
        self.board.unwrap_or_else(|| {
            (
                viewport.0.saturating_sub(GRID_OFFSET_X) / 2,
                viewport.1.saturating_sub(GRID_OFFSET_Y),
            )
        })
    }

    /// Cells gained per food on a board of the given size
    pub fn grow_increment_for(&self, width: u16, height: u16) -> u32 {
        self.grow_increment
            .unwrap_or_else(|| default_grow_increment(width, height))
    }
}

/// `max(1, (width + height) / 30)`
pub fn default_grow_increment(width: u16, height: u16) -> u32 {
    ((width as u32 + height as u32) / GROW_DIVISOR).max(1)
}

/// Seconds between ticks: the board's half perimeter shares a fixed budget
pub fn update_interval_secs(width: u16, height: u16) -> f32 {
    TICK_BUDGET_SECS / (width as f32 + height as f32)
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let value = env::var(key).ok()?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("ignoring {}={:?}: not a valid number", key, value);
            None
        }
    }
}

fn check_var<T: FromStr>(key: &str) -> Result<(), GameError> {
    match env::var(key) {
        Ok(value) if value.trim().parse::<T>().is_err() => {
            Err(GameError::InvalidConfig(format!("{key}={value}")))
        }
        _ => Ok(()),
    }
}
