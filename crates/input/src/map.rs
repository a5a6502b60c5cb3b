//! Key mapping from terminal events to input-frame flags.

use blockfall_types::InputFrame;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Apply a key press to the frame being collected for the next tick.
///
/// Returns false for keys with no binding. Note that `rotate`,
/// `soft_drop`, and `hard_drop` double as menu up/down/confirm outside
/// the PLAY phase; the engine decides by its current phase.
pub fn apply_key_press(frame: &mut InputFrame, code: KeyCode) -> bool {
    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => frame.move_left = true,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => frame.move_right = true,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => frame.soft_drop = true,

        // Rotation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => frame.rotate = true,

        // Actions
        KeyCode::Char(' ') => frame.hard_drop = true,
        KeyCode::Char('c') | KeyCode::Char('C') => frame.hold = true,
        KeyCode::Char('x') | KeyCode::Char('X') => frame.release_hold = true,
        KeyCode::Char('p') | KeyCode::Char('P') => frame.pause = true,

        _ => return false,
    }
    true
}

/// Check if a key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
