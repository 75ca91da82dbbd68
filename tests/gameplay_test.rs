//! Integration test: full session runs
//!
//! Drives the session the way the host loop does: handle_input + tick, with
//! a seeded RNG so every run is deterministic.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use soar::constants::{PIPE_GAP, PIPE_W, VIEWPORT_W};
use soar::input::GameInput;
use soar::session::{GameSession, TickOutcome};
use soar::World;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2024)
}

/// Keep the bird centered in the gap of the nearest unpassed pair, so long
/// scripted runs exercise spawning and scoring without ever colliding.
fn steer_through_gap(world: &mut World) {
    let bird_cx = world.bird.center_x();
    let mut target: Option<(f64, f64)> = None;

    for pair in world.pipes.chunks(2) {
        if let [bottom, top] = pair {
            // Gap spans from the top pipe's lower edge to the bottom pipe's
            // upper edge.
            let gap_center = (top.h + bottom.y) / 2.0;
            let center_x = bottom.x + bottom.w / 2.0;
            if center_x + PIPE_W >= bird_cx {
                let closer = match target {
                    Some((existing_x, _)) => center_x < existing_x,
                    None => true,
                };
                if closer {
                    target = Some((center_x, gap_center));
                }
            }
        }
    }

    if let Some((_, gap_y)) = target {
        world.bird.y = gap_y;
        world.bird.dy = 0.0;
    } else {
        world.bird.y = 300.0;
        world.bird.dy = 0.0;
    }
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[test]
fn test_session_starts_paused_and_idle() {
    let mut session = GameSession::new();
    let mut rng = rng();

    for _ in 0..10 {
        assert_eq!(session.tick(&mut rng), TickOutcome::Idle);
    }
    assert_eq!(session.world.bird.x, -200.0);
    assert!(session.world.pipes.is_empty());
}

#[test]
fn test_free_fall_run_crashes_and_resets() {
    let mut session = GameSession::new();
    let mut rng = rng();

    session.handle_input(GameInput::Flap);
    assert!(!session.world.paused);

    // Without further flaps the bird reaches the ground within a few dozen
    // frames and the run ends with a zero score.
    let mut crashed = false;
    for _ in 0..60 {
        if let TickOutcome::Crashed { score } = session.tick(&mut rng) {
            assert_eq!(score, 0);
            crashed = true;
            break;
        }
    }
    assert!(crashed);
    assert!(session.world.paused);
    assert_eq!(session.world.bird.x, -200.0);
    assert_eq!(session.best, 0);

    // The next key press starts a fresh run.
    session.handle_input(GameInput::Flap);
    assert!(!session.world.paused);
    assert_eq!(session.tick(&mut rng), TickOutcome::Stepped);
}

// =============================================================================
// Long scripted run: spawning, scoring, level growth
// =============================================================================

#[test]
fn test_first_pipes_appear_at_world_origin() {
    let mut session = GameSession::new();
    let mut rng = rng();

    session.handle_input(GameInput::Flap);

    // 40 frames at 5 units/frame take the bird from -200 to 0.
    for _ in 0..40 {
        steer_through_gap(&mut session.world);
        assert_eq!(session.tick(&mut rng), TickOutcome::Stepped);
    }

    assert_eq!(session.world.bird.x, 0.0);
    assert_eq!(session.world.pipes.len(), 2, "exactly one pair at x = 0");
    assert_eq!(session.world.score, 0);
    assert_eq!(session.world.level_width, 2.0 * VIEWPORT_W);
}

#[test]
fn test_long_run_scores_and_keeps_invariants() {
    let mut session = GameSession::new();
    let mut rng = rng();

    session.handle_input(GameInput::Flap);

    for _ in 0..1000 {
        steer_through_gap(&mut session.world);
        let outcome = session.tick(&mut rng);
        assert_ne!(outcome, TickOutcome::Idle);
        assert!(
            !matches!(outcome, TickOutcome::Crashed { .. }),
            "steered run must never collide"
        );
    }

    let world = &session.world;

    // 1000 frames of constant auto-scroll.
    assert_eq!(world.bird.x, -200.0 + 5000.0);

    // Boundaries at 0, 800, ..., 4800 each extend the level by one viewport.
    assert_eq!(world.level_width, 8.0 * VIEWPORT_W);

    // A pair roughly every 117 frames once pipes start.
    assert!(world.score >= 5, "score was {}", world.score);

    // The initial pair plus one per scored pass, never culled.
    assert_eq!(world.pipes.len() as u32, 2 * (world.score + 1));

    // Every pair: shared x, 100 wide, bottom based on the ground, top hung
    // from the ceiling, exact 175 gap.
    for pair in world.pipes.chunks(2) {
        let [bottom, top] = pair else {
            panic!("odd pipe count");
        };
        assert_eq!(bottom.x, top.x);
        assert_eq!(bottom.w, PIPE_W);
        assert_eq!(top.w, PIPE_W);
        assert_eq!(bottom.y + bottom.h, world.ground.y);
        assert_eq!(top.y, 0.0);
        assert_eq!(bottom.y - top.h, PIPE_GAP);
    }

    // Pairs appear in world order.
    for window in world.pipes.chunks(2).collect::<Vec<_>>().windows(2) {
        assert!(window[0][0].x < window[1][0].x);
    }
}

#[test]
fn test_crash_after_scoring_updates_best() {
    let mut session = GameSession::new();
    let mut rng = rng();

    session.handle_input(GameInput::Flap);

    // Score a few pairs, then stop steering and let gravity finish the run.
    for _ in 0..400 {
        steer_through_gap(&mut session.world);
        session.tick(&mut rng);
    }
    let scored = session.world.score;
    assert!(scored >= 1);

    let mut final_score = None;
    for _ in 0..100 {
        if let TickOutcome::Crashed { score } = session.tick(&mut rng) {
            final_score = Some(score);
            break;
        }
    }

    let final_score = final_score.expect("run should end within 100 frames");
    assert!(final_score >= scored);
    assert_eq!(session.best, final_score);
    assert!(session.world.paused);
    assert_eq!(session.world.score, 0);
}
