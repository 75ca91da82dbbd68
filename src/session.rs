//! Game session: owns the world and exposes the tick/input seams the host
//! scheduler drives.
//!
//! The session never schedules itself. The host loop calls `tick()` at its
//! frame interval and forwards key presses to `handle_input()`; pausing and
//! resuming are state transitions here, not control flow in the loop.

use rand::Rng;

use crate::game::logic::{step, StepOutcome};
use crate::game::types::World;
use crate::input::GameInput;

/// What one scheduler tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused; nothing moved.
    Idle,
    /// One simulation frame ran.
    Stepped,
    /// The frame ended in a collision; the world is reset and paused.
    Crashed { score: u32 },
}

/// One play session: the world plus the best score seen since launch.
pub struct GameSession {
    pub world: World,
    /// Highest score across runs in this process. Never persisted.
    pub best: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            best: 0,
        }
    }

    /// Run one frame if unpaused. Crashes fold the run's score into `best`.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        if self.world.paused {
            return TickOutcome::Idle;
        }

        match step(&mut self.world, rng) {
            StepOutcome::Running => TickOutcome::Stepped,
            StepOutcome::Crashed { score } => {
                self.best = self.best.max(score);
                TickOutcome::Crashed { score }
            }
        }
    }

    /// Apply one input action. A flap unpauses (idempotent) and sets the
    /// upward impulse on the same press.
    pub fn handle_input(&mut self, input: GameInput) {
        match input {
            GameInput::Flap => {
                self.world.paused = false;
                self.world.bird.dy = -self.world.bird.jump_force;
            }
            GameInput::Quit => {}
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn best(&self) -> u32 {
        self.best
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
