// Viewport dimensions in world units. The terminal scene scales to fit,
// the simulation never sees terminal cells.
pub const VIEWPORT_W: f64 = 800.0;
pub const VIEWPORT_H: f64 = 600.0;

// Ground strip
pub const GROUND_H: f64 = 100.0;
pub const GROUND_TILE_W: f64 = 50.0;

// Bird tuning
pub const BIRD_SIZE: f64 = 50.0;
pub const BIRD_RADIUS: f64 = 25.0;
pub const BIRD_SPEED: f64 = 5.0;
pub const GRAVITY: f64 = 1.0;
pub const JUMP_FORCE: f64 = 12.0;

// Pipe generation
pub const PIPE_W: f64 = 100.0;
pub const PIPE_GAP: f64 = 175.0;
pub const MIN_PIPE_HEIGHT: f64 = 25.0;

// Cap on the exact-sum rejection sampler. Expected trials are ~14, so this
// is never reached with a sane RNG.
pub const MAX_HEIGHT_TRIALS: u32 = 10_000;

// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 16;
pub const INPUT_POLL_MS: u64 = 5;
