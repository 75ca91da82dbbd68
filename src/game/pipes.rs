//! Obstacle generation: paired top/bottom pipes with a randomized split.

use rand::Rng;

use crate::constants::{GROUND_H, MAX_HEIGHT_TRIALS, MIN_PIPE_HEIGHT, PIPE_GAP, PIPE_W, VIEWPORT_H};
use crate::game::types::{Pipe, World};

/// Vertical space left for the two pipe bodies once the gap and the ground
/// strip are subtracted.
pub const TOTAL_HEIGHT: f64 = VIEWPORT_H - PIPE_GAP - GROUND_H;

/// Sample a (bottom, top) height pair whose sum is exactly `TOTAL_HEIGHT`.
///
/// Rejection sampling: two independent chunk counts are drawn until their
/// scaled sum lands on the total. Acceptance probability is 12/169, so ~14
/// trials are expected; the loop is capped and falls back to the even chunk
/// split if the cap is ever hit. Both components are always non-negative
/// multiples of `MIN_PIPE_HEIGHT`.
pub fn random_heights<R: Rng>(rng: &mut R) -> (f64, f64) {
    let total_chunks = (TOTAL_HEIGHT / MIN_PIPE_HEIGHT) as u32;

    for _ in 0..MAX_HEIGHT_TRIALS {
        let bottom = rng.gen_range(0..total_chunks) as f64 * MIN_PIPE_HEIGHT;
        let top = rng.gen_range(0..total_chunks) as f64 * MIN_PIPE_HEIGHT;
        if bottom + top == TOTAL_HEIGHT {
            return (bottom, top);
        }
    }

    let bottom = (total_chunks / 2) as f64 * MIN_PIPE_HEIGHT;
    (bottom, TOTAL_HEIGHT - bottom)
}

/// Append one pipe pair at `reference_x` (the right edge of the current
/// viewport in world coordinates): bottom pipe rising from the ground, then
/// top pipe hanging from the ceiling. The split guarantees a clear vertical
/// gap of exactly `PIPE_GAP` between them.
pub fn create_pipe_pair<R: Rng>(world: &mut World, reference_x: f64, rng: &mut R) {
    let (bottom_height, top_height) = random_heights(rng);

    world.pipes.push(Pipe {
        x: reference_x,
        y: world.ground.y - bottom_height,
        w: PIPE_W,
        h: bottom_height,
    });
    world.pipes.push(Pipe {
        x: reference_x,
        y: 0.0,
        w: PIPE_W,
        h: top_height,
    });
}
