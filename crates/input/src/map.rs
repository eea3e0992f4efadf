//! Key mapping from terminal events to player input.

use crate::types::{Direction, PlayerInput};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to player input.
///
/// Release and repeat events are ignored so a held key counts once per press.
pub fn handle_key_event(key: KeyEvent) -> Option<PlayerInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(PlayerInput::Quit);
    }

    let dir = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right,
        _ => return None,
    };
    Some(PlayerInput::Turn(dir))
}

/// Map a raw input byte (as read from a tty in non-canonical mode).
pub fn handle_key_byte(byte: u8) -> Option<PlayerInput> {
    match byte {
        b'w' | b'W' => Some(PlayerInput::Turn(Direction::Up)),
        b'a' | b'A' => Some(PlayerInput::Turn(Direction::Left)),
        b's' | b'S' => Some(PlayerInput::Turn(Direction::Down)),
        b'd' | b'D' => Some(PlayerInput::Turn(Direction::Right)),
        b'q' | b'Q' | 0x03 => Some(PlayerInput::Quit),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
