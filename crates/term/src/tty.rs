//! TtyTerminal: the game's port onto a real terminal.
//!
//! Output is queued as crossterm commands into a byte buffer and written to
//! stdout in one go on `flush`.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};
use log::warn;

use crate::core::TerminalPort;
use crate::input::{handle_key_event, InputBatch};
use crate::types::{PlayerInput, FALLBACK_VIEWPORT};

pub struct TtyTerminal {
    stdout: io::Stdout,
    buf: Vec<u8>,
    raw_mode: bool,
}

impl TtyTerminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            raw_mode: false,
        }
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl Default for TtyTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPort for TtyTerminal {
    fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw_mode = true;
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    fn exit(&mut self) -> io::Result<()> {
        if !self.raw_mode {
            return Ok(());
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        self.raw_mode = false;
        Ok(())
    }

    fn poll_input(&mut self) -> io::Result<Option<PlayerInput>> {
        let mut batch = InputBatch::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = handle_key_event(key) {
                    batch.push(input);
                }
            }
        }
        Ok(batch.resolve())
    }

    fn viewport_size(&mut self) -> io::Result<(u16, u16)> {
        match terminal::size() {
            // One column less keeps a write to the bottom-right cell from
            // scrolling the screen.
            Ok((w, h)) if w > 1 && h > 0 => Ok((w - 1, h)),
            Ok((w, h)) => {
                warn!("terminal reports {}x{}, using {:?}", w, h, FALLBACK_VIEWPORT);
                Ok(FALLBACK_VIEWPORT)
            }
            Err(err) => {
                warn!("terminal size query failed ({}), using {:?}", err, FALLBACK_VIEWPORT);
                Ok(FALLBACK_VIEWPORT)
            }
        }
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.buf.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.buf.queue(Print(text))?;
        Ok(())
    }

    fn write_integer(&mut self, n: u64) -> io::Result<()> {
        self.buf.queue(Print(n))?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()
    }
}

impl Drop for TtyTerminal {
    fn drop(&mut self) {
        if self.raw_mode {
            if let Err(err) = self.exit() {
                warn!("failed to restore terminal: {}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Terminal I/O itself can't be checked in unit tests, but the command
    // encoding can.
    #[test]
    fn queued_writes_encode_cursor_moves_and_text() {
        let mut tty = TtyTerminal::new();
        tty.move_cursor(4, 2).unwrap();
        tty.write_text("██").unwrap();
        tty.write_integer(17).unwrap();

        let out = String::from_utf8(tty.buf.clone()).unwrap();
        assert_eq!(out, "\x1b[3;5H██17");
        assert!(!tty.is_raw_mode());
    }
}
