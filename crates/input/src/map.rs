//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a single key event means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A press (or repeat) of a game key.
    Mapped(Command),
    /// A press of any other key.
    Unmapped,
    /// A key release. Never counts as input.
    Released,
}

/// Classify a key event. Releases are decided here and nowhere else.
pub fn map_key_event(key: KeyEvent) -> KeyInput {
    if key.kind == KeyEventKind::Release {
        return KeyInput::Released;
    }
    if is_quit(key) {
        return KeyInput::Mapped(Command::Quit);
    }

    let command = match key.code {
        // Right paddle
        KeyCode::Up => Command::MoveRightPaddleUp,
        KeyCode::Down => Command::MoveRightPaddleDown,

        // Left paddle
        KeyCode::Char('w') => Command::MoveLeftPaddleUp,
        KeyCode::Char('s') => Command::MoveLeftPaddleDown,

        _ => return KeyInput::Unmapped,
    };
    KeyInput::Mapped(command)
}

/// Check if key should quit the game.
pub fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
