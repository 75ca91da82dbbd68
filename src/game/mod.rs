//! The simulation: world state, per-frame step, obstacle generation and
//! collision detection.
//!
//! Everything in here is pure in-memory arithmetic. The terminal, the
//! scheduler and the RNG live with the caller; logic functions take the
//! world by `&mut` and an `Rng` by `&mut` so tests can drive them
//! deterministically.

pub mod collision;
pub mod logic;
pub mod pipes;
pub mod types;

pub use collision::circle_rect_collision;
pub use logic::{step, StepOutcome};
pub use types::World;
