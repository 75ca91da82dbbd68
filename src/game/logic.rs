//! The per-frame simulation step.

use rand::Rng;

use crate::constants::VIEWPORT_W;
use crate::game::collision::circle_rect_collision;
use crate::game::pipes::create_pipe_pair;
use crate::game::types::{Camera, World};

/// What a simulation step ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The bird is still flying.
    Running,
    /// Collision this frame. The world has been reset and paused; `score` is
    /// the count at the moment of impact.
    Crashed { score: u32 },
}

/// Advance the world by one frame.
///
/// Order matters: physics, then camera, then collision, then the obstacle
/// lifecycle. A collision resets the world and skips the rest of the frame.
pub fn step<R: Rng>(world: &mut World, rng: &mut R) -> StepOutcome {
    // Symplectic Euler: gravity accumulates into velocity, velocity
    // integrates into position. No terminal-velocity cap.
    world.bird.x += world.bird.dx;
    world.bird.dy += world.bird.gravity;
    world.bird.y += world.bird.dy;

    world.camera.x = Camera::target_x(world.bird.x, world.bird.w);
    world.ground.x = world.camera.x;

    let bird = world.bird.circle();
    let hit = world
        .pipes
        .iter()
        .any(|pipe| circle_rect_collision(bird, pipe.rect()))
        || circle_rect_collision(bird, world.ground.rect());

    if hit {
        let score = world.score;
        world.reset();
        return StepOutcome::Crashed { score };
    }

    update_level(world, rng);
    StepOutcome::Running
}

/// Obstacle lifecycle and scoring for one frame.
fn update_level<R: Rng>(world: &mut World, rng: &mut R) {
    // The auto-scroll speed divides the viewport width, so bird.x lands
    // exactly on every boundary.
    if world.bird.x.rem_euclid(VIEWPORT_W) == 0.0 {
        world.level_width += VIEWPORT_W;
        world.ground.w = world.level_width;
        // Only the very first boundary seeds a pipe; every later pair is
        // chained off the pass check below.
        if world.bird.x == 0.0 {
            create_pipe_pair(world, world.camera.x + VIEWPORT_W, rng);
        }
    }

    // Passing the center of the most recent pair scores it and spawns the
    // next one. Centers compare by bounding box, not by circle center.
    let last_pipe_center = world.pipes.last().map(|pipe| pipe.center_x());
    if let Some(center) = last_pipe_center {
        if world.bird.center_x() >= center {
            world.score += 1;
            create_pipe_pair(world, world.camera.x + VIEWPORT_W, rng);
        }
    }
}
