//! Terminal rendering. Reads world state, never mutates it.

pub mod game_scene;

use ratatui::Frame;

use crate::session::GameSession;

/// Top-level draw for the running session.
pub fn draw_ui(frame: &mut Frame, session: &GameSession) {
    game_scene::render_game(frame, frame.size(), session.world(), session.best());
}
