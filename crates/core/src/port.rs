//! Render/Input port - what the game needs from a terminal.
//!
//! Writes are buffered by the backend and only become visible on [`TerminalPort::flush`].
//! Backends: `TtyTerminal` (a real terminal through crossterm) and
//! `VirtualTerminal` (an in-memory screen driven by a host), both in the
//! `tui-snake-term` crate.

use std::io;

use crate::types::PlayerInput;

pub trait TerminalPort {
    /// Put the terminal into raw, non-blocking input mode and prepare the screen.
    fn enter(&mut self) -> io::Result<()>;

    /// Restore the terminal mode saved by [`TerminalPort::enter`].
    fn exit(&mut self) -> io::Result<()>;

    /// Drain pending input without blocking.
    ///
    /// Returns the input that should take effect this tick, or `None` if no
    /// recognized key arrived since the last poll.
    fn poll_input(&mut self) -> io::Result<Option<PlayerInput>>;

    /// Size of the drawable area in terminal cells, `(columns, rows)`
    fn viewport_size(&mut self) -> io::Result<(u16, u16)>;

    fn move_cursor(&mut self, x: u16, y: u16) -> io::Result<()>;

    /// Write text at the cursor, advancing it
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Write a decimal integer at the cursor, advancing it
    fn write_integer(&mut self, n: u64) -> io::Result<()>;

    /// Commit buffered writes
    fn flush(&mut self) -> io::Result<()>;
}

impl<T: TerminalPort + ?Sized> TerminalPort for &mut T {
    fn enter(&mut self) -> io::Result<()> {
        (**self).enter()
    }

    fn exit(&mut self) -> io::Result<()> {
        (**self).exit()
    }

    fn poll_input(&mut self) -> io::Result<Option<PlayerInput>> {
        (**self).poll_input()
    }

    fn viewport_size(&mut self) -> io::Result<(u16, u16)> {
        (**self).viewport_size()
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        (**self).move_cursor(x, y)
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        (**self).write_text(text)
    }

    fn write_integer(&mut self, n: u64) -> io::Result<()> {
        (**self).write_integer(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
