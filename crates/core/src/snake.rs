//! Snake module - head extension and tail retraction over a packed grid
//!
//! The snake keeps no list of segments. Its body is the path of occupied grid
//! cells between `tail` and `head`; every body cell stores the turn the path
//! took through it (see [`crate::grid`]). Extending writes the turn into the
//! cell the head leaves. Retracting reads it back to find where the tail goes.
//! Both are O(1) and the snake itself is a handful of words.

use crate::grid::{decode_turn, encode_turn, Grid};
use crate::types::{Direction, Pos};

/// Outcome of [`Snake::extend_head`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// The head moved onto a free cell
    Moved(Pos),
    /// The destination was already part of the body; the grid cell was left as is
    Collided(Pos),
}

impl Extension {
    pub fn is_collision(&self) -> bool {
        matches!(self, Extension::Collided(_))
    }
}

/// Step one cell in `dir`, wrapping around the board edges.
#[inline(always)]
pub fn wrap_step(pos: Pos, dir: Direction, width: u16, height: u16) -> Pos {
    let (x, y) = (pos.x as u32, pos.y as u32);
    let (w, h) = (width as u32, height as u32);
    let (x, y) = match dir {
        Direction::Up => (x, (y + h - 1) % h),
        Direction::Right => ((x + 1) % w, y),
        Direction::Down => (x, (y + 1) % h),
        Direction::Left => ((x + w - 1) % w, y),
    };
    Pos::new(x as u16, y as u16)
}

/// Snake endpoints and the three headings needed to walk the grid encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake {
    head: Pos,
    tail: Pos,
    /// Heading applied by the next extension
    head_direction: Direction,
    /// Heading the head entered its current cell with
    head_prev_direction: Direction,
    /// Heading the tail entered its current cell with
    tail_direction: Direction,
    /// Occupied cell count
    len: usize,
}

impl Snake {
    /// Place a one-cell snake at `start`, heading `direction`, and mark the cell.
    pub fn new(grid: &mut Grid, start: Pos, direction: Direction) -> Self {
        grid.set_occupied(start);
        Self {
            head: start,
            tail: start,
            head_direction: direction,
            head_prev_direction: direction,
            tail_direction: direction,
            len: 1,
        }
    }

    pub fn head(&self) -> Pos {
        self.head
    }

    pub fn tail(&self) -> Pos {
        self.tail
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A snake always covers at least its head cell
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn head_direction(&self) -> Direction {
        self.head_direction
    }

    pub fn head_prev_direction(&self) -> Direction {
        self.head_prev_direction
    }

    pub fn tail_direction(&self) -> Direction {
        self.tail_direction
    }

    /// Start a new step: the heading used last becomes the entry heading of
    /// the current head cell.
    pub fn latch_heading(&mut self) {
        self.head_prev_direction = self.head_direction;
    }

    /// Steer for the next extension.
    ///
    /// A one-cell snake has no neck to run into, so it refuses to reverse
    /// and returns false (keeping the heading): the reversal would store a
    /// `0` delta in its only cell, which reads as empty. A longer snake takes
    /// the reversal and collides with its neck on the next extension.
    pub fn turn(&mut self, dir: Direction) -> bool {
        if self.len == 1 && dir == self.head_prev_direction.opposite() {
            return false;
        }
        self.head_direction = dir;
        true
    }

    /// Record the turn in the head cell, then move the head one cell.
    ///
    /// On collision the head position still advances (it now sits on the
    /// body cell it hit) but that cell is not re-marked.
    pub fn extend_head(&mut self, grid: &mut Grid) -> Extension {
        grid.set_turn(
            self.head,
            encode_turn(self.head_prev_direction, self.head_direction),
        );

        self.head = wrap_step(self.head, self.head_direction, grid.width(), grid.height());

        if grid.is_occupied(self.head) {
            return Extension::Collided(self.head);
        }

        grid.set_occupied(self.head);
        self.len += 1;
        Extension::Moved(self.head)
    }

    /// Clear the tail cell and move the tail along the recorded path.
    ///
    /// Returns the vacated position. Must not be called on a one-cell snake.
    pub fn retract_tail(&mut self, grid: &mut Grid) -> Pos {
        debug_assert!(self.len > 1, "retracting would remove the head");

        let vacated = self.tail;
        let direction = decode_turn(self.tail_direction, grid.get(vacated));

        grid.clear(vacated);
        self.tail = wrap_step(vacated, direction, grid.width(), grid.height());
        self.tail_direction = direction;
        self.len -= 1;
        vacated
    }

    /// Walk the body from tail to head, decoding each stored turn.
    ///
    /// Yields `len()` positions, ending with the head.
    pub fn body<'a>(&self, grid: &'a Grid) -> Body<'a> {
        Body {
            grid,
            pos: self.tail,
            direction: self.tail_direction,
            remaining: self.len,
        }
    }
}

/// Iterator over body cells, tail first. See [`Snake::body`].
#[derive(Debug, Clone)]
pub struct Body<'a> {
    grid: &'a Grid,
    pos: Pos,
    direction: Direction,
    remaining: usize,
}

impl Iterator for Body<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.pos;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.direction = decode_turn(self.direction, self.grid.get(current));
            self.pos = wrap_step(current, self.direction, self.grid.width(), self.grid.height());
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Body<'_> {}
