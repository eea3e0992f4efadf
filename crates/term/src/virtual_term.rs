//! VirtualTerminal: an in-memory terminal for hosted/embedded runs.
//!
//! The host owns the loop. It feeds key presses in with [`VirtualTerminal::push_input`]
//! (or raw key bytes), calls `Game::tick`, and reads the committed screen back
//! with [`VirtualTerminal::screen`]. Writes land in a back buffer and only show
//! up on the screen after `flush`.

use std::io;

use arrayvec::ArrayVec;

use crate::core::TerminalPort;
use crate::fb::FrameBuffer;
use crate::input::{handle_key_byte, InputBatch};
use crate::types::PlayerInput;

/// Key presses held between two polls
pub const INPUT_QUEUE_CAP: usize = 32;

#[derive(Debug, Clone)]
pub struct VirtualTerminal {
    viewport: (u16, u16),
    /// Receives writes
    back: FrameBuffer,
    /// What the host sees; replaced by `back` on flush
    front: FrameBuffer,
    cursor: (u16, u16),
    input: ArrayVec<PlayerInput, INPUT_QUEUE_CAP>,
    raw_mode: bool,
    flushes: u64,
}

impl VirtualTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: (width, height),
            back: FrameBuffer::new(width, height),
            front: FrameBuffer::new(width, height),
            cursor: (0, 0),
            input: ArrayVec::new(),
            raw_mode: false,
            flushes: 0,
        }
    }

    /// Queue a key press for the next poll.
    ///
    /// Returns false if the queue is full and the press was dropped.
    pub fn push_input(&mut self, input: PlayerInput) -> bool {
        self.input.try_push(input).is_ok()
    }

    /// Queue a raw key byte; unrecognized bytes are ignored.
    pub fn push_key_byte(&mut self, byte: u8) -> bool {
        match handle_key_byte(byte) {
            Some(input) => self.push_input(input),
            None => false,
        }
    }

    pub fn pending_inputs(&self) -> usize {
        self.input.len()
    }

    /// The committed screen
    pub fn screen(&self) -> &FrameBuffer {
        &self.front
    }

    /// Row `y` of the committed screen
    pub fn row_text(&self, y: u16) -> String {
        self.front.row_text(y)
    }

    /// Written but not yet flushed
    pub fn back_buffer(&self) -> &FrameBuffer {
        &self.back
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn flush_count(&self) -> u64 {
        self.flushes
    }

    /// Blank the back buffer; the screen changes on the next flush
    pub fn clear(&mut self) {
        self.back.clear();
    }
}

impl TerminalPort for VirtualTerminal {
    fn enter(&mut self) -> io::Result<()> {
        self.raw_mode = true;
        self.cursor = (0, 0);
        self.clear();
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        self.raw_mode = false;
        Ok(())
    }

    fn poll_input(&mut self) -> io::Result<Option<PlayerInput>> {
        let mut batch = InputBatch::new();
        batch.extend(self.input.drain(..));
        Ok(batch.resolve())
    }

    fn viewport_size(&mut self) -> io::Result<(u16, u16)> {
        Ok(self.viewport)
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.cursor = (x, y);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let (x, y) = self.cursor;
        let cols = self.back.put_str(x, y, text);
        self.cursor.0 = x.saturating_add(cols);
        Ok(())
    }

    fn write_integer(&mut self, n: u64) -> io::Result<()> {
        let (x, y) = self.cursor;
        let cols = self.back.put_u64(x, y, n);
        self.cursor.0 = x.saturating_add(cols);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.front.copy_from(&self.back);
        self.flushes += 1;
        Ok(())
    }
}
