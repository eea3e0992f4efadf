//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal backends, hosted runtimes).
//!
//! # Board Layout
//!
//! The board is a toroidal grid of `width × height` cells drawn below a one-row
//! score line. Every grid cell is drawn two terminal columns wide:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_OFFSET_X` | 0 | Terminal column of grid column 0 |
//! | `GRID_OFFSET_Y` | 1 | Terminal row of grid row 0 (row 0 holds the score) |
//! | `CELL_COLUMNS` | 2 | Terminal columns per grid cell |
//! | `SCORE_POS` | (7, 0) | Where the score digits start |
//!
//! # Glyphs
//!
//! - `SNAKE_GLYPH`: `"██"` for snake cells
//! - `FOOD_GLYPH`: `"▓▓"` for the food cell
//! - `EMPTY_GLYPH`: two spaces for vacated cells
//!
//! # Timing
//!
//! One tick advances the snake by one cell. The interval between ticks shrinks
//! as the board grows: `TICK_BUDGET_SECS / (width + height)` seconds.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Pos};
//!
//! // Directions are cyclic: Up, Right, Down, Left.
//! assert_eq!(Direction::Up.as_bits(), 0);
//! assert_eq!(Direction::Left.as_bits(), 3);
//! assert_eq!(Direction::from_bits(5), Direction::Right);
//!
//! // Opposites differ by two steps.
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! let pos = Pos::new(3, 4);
//! assert_eq!((pos.x, pos.y), (3, 4));
//! ```

/// Terminal column where grid column 0 starts
pub const GRID_OFFSET_X: u16 = 0;

/// Terminal row where grid row 0 starts (row 0 is the score line)
pub const GRID_OFFSET_Y: u16 = 1;

/// Terminal columns used to draw one grid cell
pub const CELL_COLUMNS: u16 = 2;

/// Glyph drawn for a snake cell
pub const SNAKE_GLYPH: &str = "██";

/// Glyph drawn for the food cell
pub const FOOD_GLYPH: &str = "▓▓";

/// Glyph drawn over a vacated cell
pub const EMPTY_GLYPH: &str = "  ";

/// Score line label, drawn once at (0, 0)
pub const SCORE_LABEL: &str = "Score: ";

/// Terminal position of the first score digit (right after the label)
pub const SCORE_POS: (u16, u16) = (7, 0);

/// Viewport reported when the terminal size cannot be queried
pub const FALLBACK_VIEWPORT: (u16, u16) = (80, 24);

/// Divisor applied to half the board perimeter to get the growth increment
pub const GROW_DIVISOR: u32 = 30;

/// Seconds of tick budget shared across half the board perimeter
pub const TICK_BUDGET_SECS: f32 = 10.0;

/// Movement direction.
///
/// The discriminants follow the clockwise cycle `Up → Right → Down → Left` so
/// that the difference between two directions is the number of quarter turns
/// between them. The turn-delta encoding of the grid relies on this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// All directions in cyclic order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Build a direction from the low two bits of `bits`
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_bits(0), Direction::Up);
    /// assert_eq!(Direction::from_bits(2), Direction::Down);
    /// assert_eq!(Direction::from_bits(7), Direction::Left);
    /// ```
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 3 {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }

    pub const fn as_bits(self) -> u8 {
        self as u8
    }

    /// The direction pointing the other way
    pub const fn opposite(self) -> Self {
        Self::from_bits(self.as_bits() + 2)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// A recognized player input.
///
/// "No input" is expressed as `Option::None` by the input port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Steer the snake
    Turn(Direction),
    /// Leave the game
    Quit,
}

/// Grid position. Always kept within the board by the kinematics layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}
