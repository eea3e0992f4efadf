//! RNG module - deterministic food placement
//!
//! A simple LCG is enough for picking food cells and keeps games reproducible
//! from a seed (the tests and the headless host rely on that).

use crate::grid::{Grid, EMPTY};
use crate::types::Pos;

/// Rejection-sampling attempts before falling back to an exact pick
const MAX_REJECTION_ATTEMPTS: u32 = 64;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are the better distributed ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick an unoccupied cell uniformly at random.
    ///
    /// Samples random cells first; once the board is crowded enough that
    /// sampling keeps hitting the snake, picks the k-th free cell instead.
    /// `free` is the number of empty cells (board size minus snake length).
    /// Returns `None` when the board is full.
    pub fn pick_free_cell(&mut self, grid: &Grid, free: usize) -> Option<Pos> {
        if free == 0 {
            return None;
        }

        let cells = grid.cell_count() as u32;
        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let idx = self.next_range(cells) as usize;
            if grid.get_index(idx) == EMPTY {
                return Some(grid.pos_of(idx));
            }
        }

        let nth = self.next_range(free as u32) as usize;
        grid.nth_empty(nth).map(|idx| grid.pos_of(idx))
    }
}
