//! TUI Snake (workspace facade crate).
//!
//! Re-exports the crates under `crates/` as `tui_snake::{core,input,term,types}`
//! so the binaries, tests and benches share one import path. [`logging`] holds
//! the file logger setup both binaries use.

pub mod logging;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
