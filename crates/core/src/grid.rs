//! Grid module - packed 2-bit cell storage for the snake body
//!
//! Each cell holds one 2-bit symbol, four cells per byte, row-major.
//! `0` is an empty cell. An occupied cell holds a turn delta recorded when the
//! head left it, or `2` ("straight through") until then.
//!
//! The turn delta between the direction a cell was entered with (`prev`) and
//! the direction it was left with (`next`) is `(next - prev + 2) mod 4`. The
//! `+2` puts "no turn" on `2`. Only a reversal encodes as `0`, and a snake
//! that reverses runs into its own neck, so a live body cell never reads as
//! empty.
//!
//! Coordinates: (x, y) where x ranges `0..width` (left to right) and y ranges
//! `0..height` (top to bottom). Callers pass positions already wrapped into
//! range; out-of-range positions are a logic error and panic on index.

use crate::types::{Direction, Pos};

/// Symbol of an empty cell
pub const EMPTY: u8 = 0;

/// Symbol of an occupied cell whose exit direction is not recorded yet
pub const OCCUPIED: u8 = 2;

/// Encode the turn taken inside a cell.
///
/// ```
/// use tui_snake_core::grid::encode_turn;
/// use tui_snake_core::types::Direction::*;
///
/// assert_eq!(encode_turn(Up, Up), 2);
/// assert_eq!(encode_turn(Up, Right), 3);
/// assert_eq!(encode_turn(Up, Down), 0);
/// assert_eq!(encode_turn(Up, Left), 1);
/// ```
#[inline(always)]
pub const fn encode_turn(prev: Direction, next: Direction) -> u8 {
    (next.as_bits().wrapping_sub(prev.as_bits()).wrapping_add(2)) & 3
}

/// Recover the exit direction from the entry direction and a stored delta.
///
/// Inverse of [`encode_turn`]: `decode_turn(p, encode_turn(p, n)) == n`.
#[inline(always)]
pub const fn decode_turn(prev: Direction, delta: u8) -> Direction {
    Direction::from_bits(prev.as_bits().wrapping_add(delta).wrapping_add(2))
}

/// Packed toroidal grid, `width × height` cells at 2 bits each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Packed cells, row-major (cell `i` lives in byte `i >> 2`)
    bytes: Box<[u8]>,
}

impl Grid {
    /// Allocate an empty grid. Both dimensions must be non-zero.
    pub fn new(width: u16, height: u16) -> Self {
        debug_assert!(width > 0 && height > 0, "grid must have at least one cell");
        let cells = (width as usize) * (height as usize);
        Self {
            width,
            height,
            bytes: vec![0u8; cells.div_ceil(4)].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Packed storage size in bytes
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Flat cell index of a position
    #[inline(always)]
    pub fn index(&self, pos: Pos) -> usize {
        debug_assert!(pos.x < self.width && pos.y < self.height);
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }

    /// Position of a flat cell index
    #[inline(always)]
    pub fn pos_of(&self, idx: usize) -> Pos {
        let w = self.width as usize;
        Pos::new((idx % w) as u16, (idx / w) as u16)
    }

    #[inline(always)]
    fn slot(idx: usize) -> (usize, u32) {
        (idx >> 2, ((idx & 3) << 1) as u32)
    }

    /// Read the 2-bit symbol at `pos`
    #[inline(always)]
    pub fn get(&self, pos: Pos) -> u8 {
        self.get_index(self.index(pos))
    }

    #[inline(always)]
    pub fn get_index(&self, idx: usize) -> u8 {
        let (byte, shift) = Self::slot(idx);
        (self.bytes[byte] >> shift) & 3
    }

    /// Check if a cell holds any part of the snake
    #[inline(always)]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.get(pos) != EMPTY
    }

    /// Mark a cell as occupied with no turn recorded
    pub fn set_occupied(&mut self, pos: Pos) {
        self.write(pos, OCCUPIED);
    }

    /// Overwrite the turn delta of a cell (low two bits of `delta`)
    pub fn set_turn(&mut self, pos: Pos, delta: u8) {
        self.write(pos, delta & 3);
    }

    /// Zero a cell
    pub fn clear(&mut self, pos: Pos) {
        self.write(pos, EMPTY);
    }

    #[inline(always)]
    fn write(&mut self, pos: Pos, symbol: u8) {
        let (byte, shift) = Self::slot(self.index(pos));
        let cell = &mut self.bytes[byte];
        *cell = (*cell & !(3 << shift)) | (symbol << shift);
    }

    /// Count occupied cells. O(cells); used for placement fallbacks and tests.
    pub fn occupied_count(&self) -> usize {
        (0..self.cell_count())
            .filter(|&i| self.get_index(i) != EMPTY)
            .count()
    }

    /// Index of the `n`-th empty cell in row-major order
    pub fn nth_empty(&self, n: usize) -> Option<usize> {
        (0..self.cell_count())
            .filter(|&i| self.get_index(i) == EMPTY)
            .nth(n)
    }
}
