//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the snake simulation and its lifecycle. It never talks to a
//! terminal directly: all I/O goes through the [`TerminalPort`] trait, so the
//! same game runs on a real tty or inside a host's virtual terminal.
//!
//! - **Deterministic**: same seed, same inputs, same game
//! - **Constant memory**: the snake body lives in the grid, 2 bits per cell
//! - **Allocation free** while running: a tick only touches the grid and the port
//!
//! # Module Structure
//!
//! - [`grid`]: packed 2-bit cells and the turn-delta codec
//! - [`snake`]: head extension, tail retraction, toroidal stepping
//! - [`game_state`]: setup / running / teardown, food, score and growth
//! - [`port`]: the terminal capability the game needs
//! - [`rng`]: seeded food placement
//! - [`config`]: setup inputs (board size, growth, seed, logging)
//!
//! # Example
//!
//! ```
//! use tui_snake_core::grid::Grid;
//! use tui_snake_core::snake::Snake;
//! use tui_snake_core::types::{Direction, Pos};
//!
//! let mut grid = Grid::new(7, 7);
//! let mut snake = Snake::new(&mut grid, Pos::new(3, 3), Direction::Left);
//!
//! snake.extend_head(&mut grid);
//! assert_eq!(snake.head(), Pos::new(2, 3));
//! assert_eq!(grid.occupied_count(), 2);
//!
//! snake.retract_tail(&mut grid);
//! assert_eq!(snake.tail(), Pos::new(2, 3));
//! assert_eq!(grid.occupied_count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod port;
pub mod rng;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::GameError;
pub use game_state::{EndReason, Game, GamePhase};
pub use grid::{decode_turn, encode_turn, Grid};
pub use port::TerminalPort;
pub use rng::SimpleRng;
pub use snake::{wrap_step, Extension, Snake};
