//! Pocket Arcade - two keyboard arcade toys
//!
//! Core modules:
//! - `soccer`: top-down ball-pushing mini-game (continuous physics, countdown clock)
//! - `snake`: classic snake on a grid with a mistake allowance
//! - `clock`: virtual-time scheduling (cadences + deferred transitions)
//! - `input`: key identifier mapping and the held-key latch
//! - `settings`: grid-game speed menu
//!
//! Both games are deterministic simulations: fixed per-tick constants,
//! stable step order, seeded RNG, no rendering or platform dependencies.
//! A presentation sink consumes serialized state snapshots; it never
//! feeds anything back.

pub mod clock;
pub mod input;
pub mod settings;
pub mod snake;
pub mod soccer;

pub use settings::{Settings, SpeedPreset};

/// Game configuration constants
pub mod consts {
    // --- Soccer board ---

    /// Board dimensions (pixels)
    pub const BOARD_WIDTH: f32 = 600.0;
    pub const BOARD_HEIGHT: f32 = 300.0;
    /// Player square edge length
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Player kickoff X (left of center, facing the right goal)
    pub const PLAYER_START_X: f32 = 50.0;
    /// Ball diameter
    pub const BALL_SIZE: f32 = 20.0;
    /// Player movement per tick (pixels)
    pub const MOVE_SPEED: f32 = 5.0;
    /// Fraction of the player's input speed handed to the ball on contact
    pub const PUSH_FACTOR: f32 = 0.5;
    /// Per-tick multiplicative friction on ball velocity
    pub const BALL_FRICTION: f32 = 0.98;
    /// Velocity components below this magnitude snap to exactly zero
    pub const STOP_EPSILON: f32 = 0.1;
    /// Width of the goal strips at the left and right board edges
    pub const GOAL_WIDTH: f32 = 20.0;
    /// Match length (seconds)
    pub const MAX_TIME: u32 = 60;

    /// Physics cadence (ms) - stands in for the browser's redraw rate
    pub const FRAME_INTERVAL_MS: u64 = 16;
    /// Countdown cadence (ms)
    pub const COUNTDOWN_INTERVAL_MS: u64 = 1_000;
    /// Delay before positions reset after a goal (ms)
    pub const GOAL_RESET_DELAY_MS: u64 = 1_000;

    // --- Snake grid ---

    /// Grid board edge and tile edge (pixels)
    pub const GRID_BOARD_PX: i32 = 400;
    pub const GRID_TILE_PX: i32 = 20;
    /// Cells per side
    pub const GRID_EXTENT: i32 = GRID_BOARD_PX / GRID_TILE_PX;
    /// Initial snake length (cells)
    pub const SNAKE_START_LEN: usize = 3;
    /// Collisions allowed before the run ends
    pub const MAX_MISTAKES: u32 = 10;
    /// Pause after a mistake before the snake respawns (ms)
    pub const PENALTY_DELAY_MS: u64 = 1_000;
}
