//! Terminal backends for the game's [`TerminalPort`].
//!
//! - [`TtyTerminal`]: raw-mode crossterm output on the real terminal
//! - [`VirtualTerminal`]: in-memory screen and input queue for hosted runs
//!   and tests
//!
//! [`TickPacer`] keeps the host loop on the game's update interval.

pub mod fb;
pub mod pacer;
pub mod tty;
pub mod virtual_term;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_types as types;

pub use crate::core::TerminalPort;
pub use fb::FrameBuffer;
pub use pacer::TickPacer;
pub use tty::TtyTerminal;
pub use virtual_term::{VirtualTerminal, INPUT_QUEUE_CAP};
