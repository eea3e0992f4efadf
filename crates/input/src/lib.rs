//! Terminal input module.
//!
//! Maps `crossterm` key events (or raw tty bytes) to
//! [`crate::types::PlayerInput`] and folds everything that arrived between two
//! ticks into the single input the game applies.

pub mod batch;
pub mod map;

pub use tui_snake_types as types;

pub use batch::InputBatch;
pub use map::{handle_key_byte, handle_key_event, should_quit};
