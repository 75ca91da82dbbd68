//! World-state entities for the scrolling level.
//!
//! All positions are in world units on an 800x600 viewport. The world is one
//! flat container of public fields; the simulation step mutates it in place
//! and the render step only reads it.

use crate::constants::{
    BIRD_RADIUS, BIRD_SIZE, BIRD_SPEED, GRAVITY, GROUND_H, JUMP_FORCE, VIEWPORT_H, VIEWPORT_W,
};
use crate::game::collision::{Circle, Rect};

/// The player. (x, y) is the circle center used for drawing and collision;
/// the w/h box feeds the camera offset and the pipe-pass check.
#[derive(Debug, Clone)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub radius: f64,
    /// Constant horizontal auto-scroll speed, world units per frame.
    pub dx: f64,
    /// Vertical velocity. Gravity accumulates into it every frame, uncapped.
    pub dy: f64,
    pub gravity: f64,
    /// Magnitude of the upward velocity set when the player flaps.
    pub jump_force: f64,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            // Starts one quarter viewport left of the world origin, vertically
            // centered. The first pipe boundary is reached at x = 0.
            x: -VIEWPORT_W / 4.0,
            y: VIEWPORT_H / 2.0,
            w: BIRD_SIZE,
            h: BIRD_SIZE,
            radius: BIRD_RADIUS,
            dx: BIRD_SPEED,
            dy: 0.0,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
        }
    }

    pub fn circle(&self) -> Circle {
        Circle {
            x: self.x,
            y: self.y,
            radius: self.radius,
        }
    }

    /// Box center used by the pipe-pass check (box-origin convention, not the
    /// circle center).
    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// Projection window. x is derived from the bird every frame; nothing else
/// writes to it.
#[derive(Debug, Clone)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Camera {
    /// Horizontal offset that keeps the bird roughly one third across the
    /// viewport.
    pub fn target_x(bird_x: f64, bird_w: f64) -> f64 {
        (bird_x - VIEWPORT_W / 3.0 + bird_w / 2.0).floor()
    }

    pub fn tracking(bird: &Bird) -> Self {
        Self {
            x: Self::target_x(bird.x, bird.w),
            y: 0.0,
            w: VIEWPORT_W,
            h: VIEWPORT_H,
        }
    }
}

/// One rectangular obstacle segment. Created in bottom/top pairs sharing the
/// same x; world position never changes after creation.
#[derive(Debug, Clone)]
pub struct Pipe {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Pipe {
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }
}

/// The floor: one rectangle spanning the level width so far, always rendered
/// at the camera's horizontal offset.
#[derive(Debug, Clone)]
pub struct Ground {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Ground {
    pub fn new(camera_x: f64, level_width: f64) -> Self {
        Self {
            x: camera_x,
            y: VIEWPORT_H - GROUND_H,
            w: level_width,
            h: GROUND_H,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }
}

/// Everything one run of the game mutates. Lives for the whole session and
/// is reset in place on collision.
#[derive(Debug, Clone)]
pub struct World {
    pub bird: Bird,
    pub camera: Camera,
    pub ground: Ground,
    /// Append-only pipe sequence, cleared only on reset. Pipes are pushed in
    /// bottom-then-top pairs, so the last element is the top of the most
    /// recent pair.
    pub pipes: Vec<Pipe>,
    /// Total scrollable extent generated so far; grows in viewport-width
    /// increments.
    pub level_width: f64,
    pub score: u32,
    /// True at startup and after any collision.
    pub paused: bool,
}

impl World {
    pub fn new() -> Self {
        let bird = Bird::new();
        let camera = Camera::tracking(&bird);
        let level_width = VIEWPORT_W;
        Self {
            ground: Ground::new(camera.x, level_width),
            bird,
            camera,
            pipes: Vec::new(),
            level_width,
            score: 0,
            paused: true,
        }
    }

    /// Restore every field to its initial value and pause.
    pub fn reset(&mut self) {
        *self = World::new();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
