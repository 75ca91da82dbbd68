//! Soar - a terminal side-scrolling flappy game.
//!
//! This module exposes the simulation for testing and for the binary.

pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;
pub mod session;
pub mod ui;

pub use constants::TICK_INTERVAL_MS;
pub use game::types::World;
pub use session::{GameSession, TickOutcome};
