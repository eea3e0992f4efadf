//! Folding the input that arrived between two ticks into one decision.

use crate::types::{Direction, PlayerInput};

/// Input gathered since the previous tick.
///
/// The last direction wins; a quit anywhere in the batch wins over directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputBatch {
    last_turn: Option<Direction>,
    quit: bool,
}

impl InputBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: PlayerInput) {
        match input {
            PlayerInput::Turn(dir) => self.last_turn = Some(dir),
            PlayerInput::Quit => self.quit = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last_turn.is_none() && !self.quit
    }

    /// The input that takes effect this tick
    pub fn resolve(&self) -> Option<PlayerInput> {
        if self.quit {
            Some(PlayerInput::Quit)
        } else {
            self.last_turn.map(PlayerInput::Turn)
        }
    }
}

impl Extend<PlayerInput> for InputBatch {
    fn extend<I: IntoIterator<Item = PlayerInput>>(&mut self, iter: I) {
        for input in iter {
            self.push(input);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_resolves_to_nothing() {
        let batch = InputBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.resolve(), None);
    }

    #[test]
    fn last_direction_wins() {
        let mut batch = InputBatch::new();
        batch.extend([
            PlayerInput::Turn(Direction::Up),
            PlayerInput::Turn(Direction::Left),
            PlayerInput::Turn(Direction::Down),
        ]);
        assert_eq!(batch.resolve(), Some(PlayerInput::Turn(Direction::Down)));
    }

    #[test]
    fn quit_beats_later_directions() {
        let mut batch = InputBatch::new();
        batch.push(PlayerInput::Quit);
        batch.push(PlayerInput::Turn(Direction::Right));
        assert_eq!(batch.resolve(), Some(PlayerInput::Quit));
    }
}
