//! Keyboard mapping for the game session.

use crossterm::event::{KeyCode, KeyEvent};

/// Actions the session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Unpause if paused, and apply the upward impulse.
    Flap,
    /// Leave the game.
    Quit,
}

/// Map a key event to a game input.
///
/// Every key is a flap trigger; only the quit keys are carved out. Keeping
/// flap this broad is deliberate, it matches the product's "press any key"
/// prompt.
pub fn map_key(key: KeyEvent) -> GameInput {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Flap,
    }
}
