//! Per-frame soccer step
//!
//! Fixed order every tick: player movement, ball integration, player-ball
//! contact, wall reflection, goal check. At most one event per tick, and
//! none of them are failures - every branch is normal play.

use glam::Vec2;

use super::collision::{player_ball_contact, reflect_off_walls, resolve_player_ball};
use super::state::{MatchEvent, MatchState};
use crate::consts::*;
use crate::input::HeldKeys;

/// Advance the match by one frame.
pub fn step(state: &mut MatchState, held: &HeldKeys) -> Option<MatchEvent> {
    if !state.running {
        return None;
    }
    state.time_ticks += 1;

    // 1. Player movement: summed unit deltas, scaled and clamped.
    // Axes are independent, so diagonals come through.
    let axis = held.axis();
    state.player.pos += axis * MOVE_SPEED;
    state.player.pos = state.player.pos.clamp(
        Vec2::ZERO,
        Vec2::new(BOARD_WIDTH - PLAYER_SIZE, BOARD_HEIGHT - PLAYER_SIZE),
    );

    // 2. Ball integration: friction, advance, snap-to-zero per component
    state.ball.vel *= state.ball.friction;
    state.ball.pos += state.ball.vel;
    if state.ball.vel.x.abs() < STOP_EPSILON {
        state.ball.vel.x = 0.0;
    }
    if state.ball.vel.y.abs() < STOP_EPSILON {
        state.ball.vel.y = 0.0;
    }

    // 3. Player-ball contact: the ball's new velocity comes from the input
    // held at the moment of contact, not from anyone's prior velocity
    if let Some(contact) = player_ball_contact(&state.player, &state.ball) {
        resolve_player_ball(&mut state.ball, &contact, axis);
    }

    // 4. Wall reflection (X skips the goal strips)
    reflect_off_walls(&mut state.ball);

    // 5. Goal check. The right strip scores once per entry; the left strip
    // has no opposing goal and plays as a wall.
    if state.ball.pos.x + BALL_SIZE >= BOARD_WIDTH - GOAL_WIDTH {
        // The ball may drift deeper into the strip while the reset is
        // pending; keep it on the board
        state.ball.pos.x = state.ball.pos.x.min(BOARD_WIDTH - BALL_SIZE);
        if !state.reset_pending {
            state.score += 1;
            state.reset_pending = true;
            return Some(MatchEvent::GoalScored { score: state.score });
        }
    } else if state.ball.pos.x <= GOAL_WIDTH {
        let entering = state.ball.vel.x < 0.0;
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.pos.x = GOAL_WIDTH;
        if entering {
            return Some(MatchEvent::Blocked);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    fn held(keys: &[Key]) -> HeldKeys {
        let mut h = HeldKeys::default();
        for &k in keys {
            h.press(k);
        }
        h
    }

    #[test]
    fn test_player_clamped_to_board() {
        let mut state = MatchState::new();
        state.player.pos = Vec2::new(2.0, 1.0);
        let input = held(&[Key::Left, Key::Up]);
        for _ in 0..5 {
            step(&mut state, &input);
        }
        assert_eq!(state.player.pos, Vec2::ZERO);

        state.player.pos = Vec2::new(BOARD_WIDTH - PLAYER_SIZE - 3.0, 100.0);
        let input = held(&[Key::Right]);
        for _ in 0..5 {
            step(&mut state, &input);
        }
        assert_eq!(state.player.pos.x, BOARD_WIDTH - PLAYER_SIZE);
    }

    #[test]
    fn test_diagonal_input_moves_both_axes() {
        let mut state = MatchState::new();
        let start = state.player.pos;
        step(&mut state, &held(&[Key::Right, Key::Down]));
        assert_eq!(state.player.pos, start + Vec2::splat(MOVE_SPEED));
    }

    #[test]
    fn test_ball_friction_and_snap_to_zero() {
        let mut state = MatchState::new();
        state.ball.vel = Vec2::new(1.0, 0.0);
        let input = HeldKeys::default();

        step(&mut state, &input);
        assert!((state.ball.vel.x - BALL_FRICTION).abs() < 1e-5);

        // Decay below the epsilon snaps the component to exactly zero
        state.ball.vel = Vec2::new(STOP_EPSILON, -0.05);
        step(&mut state, &input);
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_velocity_never_lingers_below_epsilon() {
        let mut state = MatchState::new();
        state.ball.vel = Vec2::new(3.0, -2.0);
        let input = HeldKeys::default();
        for _ in 0..500 {
            step(&mut state, &input);
            for component in [state.ball.vel.x, state.ball.vel.y] {
                assert!(component == 0.0 || component.abs() >= STOP_EPSILON);
            }
        }
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_contact_sets_velocity_from_held_input() {
        let mut state = MatchState::new();
        state.player.pos = state.ball.pos - Vec2::new(PLAYER_SIZE - 8.0, 0.0);
        let input = held(&[Key::Right]);
        step(&mut state, &input);
        // Push factor over the held direction, not relative velocity
        assert!(state.ball.vel.x > 0.0);
        assert!(state.ball.vel.x <= MOVE_SPEED * PUSH_FACTOR + 1e-3);
    }

    #[test]
    fn test_contact_with_no_input_stops_ball() {
        let mut state = MatchState::new();
        state.ball.vel = Vec2::new(-2.0, 0.0);
        state.ball.pos = state.player.pos + Vec2::new(PLAYER_SIZE - 8.0, 0.0);
        step(&mut state, &HeldKeys::default());
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_right_strip_scores_once_per_entry() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(BOARD_WIDTH - BALL_SIZE - GOAL_WIDTH - 2.0, 100.0);
        state.ball.vel = Vec2::new(4.0, 0.0);
        let input = HeldKeys::default();

        let event = step(&mut state, &input);
        assert_eq!(event, Some(MatchEvent::GoalScored { score: 1 }));

        // Ball keeps sitting in the strip; no double counting
        for _ in 0..20 {
            assert_eq!(step(&mut state, &input), None);
        }
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_left_strip_bounces_and_reports_blocked() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(GOAL_WIDTH + 1.0, 100.0);
        state.ball.vel = Vec2::new(-4.0, 0.0);

        let event = step(&mut state, &HeldKeys::default());
        assert_eq!(event, Some(MatchEvent::Blocked));
        assert_eq!(state.ball.pos.x, GOAL_WIDTH);
        assert!(state.ball.vel.x > 0.0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let mut state = MatchState::new();
        state.ball.vel = Vec2::new(-7.0, 9.0);
        let input = held(&[Key::Left, Key::Down]);
        for _ in 0..1000 {
            step(&mut state, &input);
            assert!(state.player.pos.x >= 0.0 && state.player.pos.x <= BOARD_WIDTH - PLAYER_SIZE);
            assert!(state.player.pos.y >= 0.0 && state.player.pos.y <= BOARD_HEIGHT - PLAYER_SIZE);
            assert!(state.ball.pos.x >= 0.0 && state.ball.pos.x <= BOARD_WIDTH - BALL_SIZE);
            assert!(state.ball.pos.y >= 0.0 && state.ball.pos.y <= BOARD_HEIGHT - BALL_SIZE);
        }
    }

    #[test]
    fn test_stopped_match_does_not_tick() {
        let mut state = MatchState::new();
        state.running = false;
        let before = state.time_ticks;
        assert_eq!(step(&mut state, &held(&[Key::Right])), None);
        assert_eq!(state.time_ticks, before);
    }
}
