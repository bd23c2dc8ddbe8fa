//! Player-ball contact and wall reflection
//!
//! Both entities collide on their half extents: the square player is
//! treated as a circle of radius `PLAYER_SIZE / 2` for the contact test,
//! which is how the game has always played.

use glam::Vec2;

use super::state::{Ball, Player};
use crate::consts::*;

/// Result of the player-ball overlap check
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Unit vector from player center toward ball center
    pub normal: Vec2,
    /// Overlap depth along the center line
    pub overlap: f32,
}

/// Center-to-center contact test against the sum of half extents.
pub fn player_ball_contact(player: &Player, ball: &Ball) -> Option<Contact> {
    let min_distance = (PLAYER_SIZE + BALL_SIZE) / 2.0;
    let delta = ball.center() - player.center();
    let distance = delta.length();
    if distance >= min_distance {
        return None;
    }
    // Concentric centers leave no direction to push along; pick +X
    let normal = if distance > f32::EPSILON {
        delta / distance
    } else {
        Vec2::X
    };
    Some(Contact {
        normal,
        overlap: min_distance - distance,
    })
}

/// Push the ball out of the player along the center line and hand it the
/// player's input velocity.
///
/// Single-step resolution: the pushed ball may still overlap an adjacent
/// wall, which the wall pass cleans up on the same tick. The new velocity
/// is *set*, not added - it comes entirely from the input held at the
/// moment of contact.
pub fn resolve_player_ball(ball: &mut Ball, contact: &Contact, input_axis: Vec2) {
    ball.pos += contact.normal * contact.overlap;
    ball.vel = input_axis * MOVE_SPEED * PUSH_FACTOR;
}

/// Per-axis wall reflection: invert the exiting component and clamp back
/// into bounds.
///
/// The X axis skips the two goal-width strips at the board edges; those
/// belong to the goal check.
pub fn reflect_off_walls(ball: &mut Ball) {
    let max_x = BOARD_WIDTH - BALL_SIZE;
    let max_y = BOARD_HEIGHT - BALL_SIZE;

    let in_goal_strip = ball.pos.x < GOAL_WIDTH || ball.pos.x > max_x - GOAL_WIDTH;
    if !in_goal_strip && (ball.pos.x < 0.0 || ball.pos.x > max_x) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = ball.pos.x.clamp(0.0, max_x);
    }

    if ball.pos.y < 0.0 || ball.pos.y > max_y {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.pos.y.clamp(0.0, max_y);
    }
}
