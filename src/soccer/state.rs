//! Soccer match state
//!
//! Everything the presentation sink consumes lives here. Positions are
//! top-left corners in board pixels, matching the clamp ranges.

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;

/// The player's square pusher
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Player {
    /// Top-left corner in board pixels
    pub pos: Vec2,
}

impl Player {
    /// Kickoff spot near the left edge, vertically centered
    pub fn starting() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, (BOARD_HEIGHT - PLAYER_SIZE) / 2.0),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(PLAYER_SIZE / 2.0)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ball {
    /// Top-left corner in board pixels
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    /// Multiplicative per-tick decay, 0 < friction < 1
    pub friction: f32,
}

impl Ball {
    /// At rest in the middle of the board
    pub fn starting() -> Self {
        Self {
            pos: Vec2::new(
                (BOARD_WIDTH - BALL_SIZE) / 2.0,
                (BOARD_HEIGHT - BALL_SIZE) / 2.0,
            ),
            vel: Vec2::ZERO,
            friction: BALL_FRICTION,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(BALL_SIZE / 2.0)
    }
}

/// Events a soccer tick or the countdown can produce, at most one each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchEvent {
    /// Ball entered the right goal strip
    GoalScored { score: u32 },
    /// Ball bounced off the left goal strip (no opposing goal to score in)
    Blocked,
    /// Countdown reached zero
    GameEnded { final_score: u32 },
}

/// Complete soccer state store
#[derive(Debug, Clone, Serialize)]
pub struct MatchState {
    pub player: Player,
    pub ball: Ball,
    pub score: u32,
    /// Seconds remaining on the countdown
    pub time_left: u32,
    pub running: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// A goal reset is in flight; suppresses re-scoring while the ball
    /// sits in the strip, so each goal counts exactly once
    pub reset_pending: bool,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            player: Player::starting(),
            ball: Ball::starting(),
            score: 0,
            time_left: MAX_TIME,
            running: true,
            time_ticks: 0,
            reset_pending: false,
        }
    }

    /// Put player and ball back on their kickoff spots. Score and clock
    /// carry on; this is the post-goal reset, not a restart.
    pub fn reset_positions(&mut self) {
        self.player = Player::starting();
        self.ball = Ball::starting();
        self.reset_pending = false;
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
