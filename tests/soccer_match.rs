//! End-to-end soccer properties, driven over virtual time the way a real
//! host would: a frame cadence, an independent countdown cadence, and key
//! identifier events.

use glam::Vec2;
use proptest::prelude::*;

use pocket_arcade::consts::*;
use pocket_arcade::input::{HeldKeys, Key};
use pocket_arcade::soccer::{self, Match, MatchEvent, MatchState};

/// Run frames up to `until`, returning the time of the first goal.
fn drive_until_goal(game: &mut Match, mut now: u64, until: u64) -> u64 {
    loop {
        now += FRAME_INTERVAL_MS;
        assert!(now < until, "no goal before {until} ms");
        if let Some(MatchEvent::GoalScored { .. }) = game.frame(now) {
            return now;
        }
    }
}

#[test]
fn goal_scores_resets_and_preserves_score() {
    let mut game = Match::new();
    assert!(game.key_down("ArrowRight"));

    let goal_time = drive_until_goal(&mut game, 0, 60_000);
    assert_eq!(game.state().score, 1);
    assert!(game.state().reset_pending);
    // The scoring ball is inside the right strip
    assert!(game.state().ball.pos.x + BALL_SIZE >= BOARD_WIDTH - GOAL_WIDTH);

    // No double counting while the ball sits in the strip
    game.frame(goal_time + FRAME_INTERVAL_MS);
    assert_eq!(game.state().score, 1);

    // After the fixed delay, positions are back at kickoff and the score
    // survives
    game.key_up("ArrowRight");
    game.frame(goal_time + GOAL_RESET_DELAY_MS + FRAME_INTERVAL_MS);
    assert_eq!(game.state().score, 1);
    assert!(!game.state().reset_pending);
    assert_eq!(
        game.state().ball.pos,
        Vec2::new((BOARD_WIDTH - BALL_SIZE) / 2.0, (BOARD_HEIGHT - BALL_SIZE) / 2.0)
    );
    assert_eq!(game.state().player.pos.x, PLAYER_START_X);
}

#[test]
fn countdown_expiry_freezes_the_match() {
    let mut game = Match::new();
    game.key_down("d");

    // Interleave the two cadences: ~62 frames per countdown second
    let mut now = 0;
    let mut ended = None;
    for second in 1..=u64::from(MAX_TIME) {
        while now < second * COUNTDOWN_INTERVAL_MS {
            now += FRAME_INTERVAL_MS;
            game.frame(now);
        }
        if let Some(event) = game.second() {
            ended = Some((second, event));
            break;
        }
    }

    let (ended_at, event) = ended.expect("countdown never ended the match");
    assert_eq!(ended_at, u64::from(MAX_TIME));
    let final_score = game.state().score;
    assert_eq!(event, MatchEvent::GameEnded { final_score });
    assert!(!game.state().running);
    assert_eq!(game.state().time_left, 0);

    // No further tick mutates anything
    let frozen = serde_json::to_string(game.state()).expect("state serializes");
    for i in 1..200 {
        game.frame(now + i * FRAME_INTERVAL_MS);
    }
    game.second();
    let after = serde_json::to_string(game.state()).expect("state serializes");
    assert_eq!(frozen, after);
}

#[test]
fn restart_gives_a_fresh_match() {
    let mut game = Match::new();
    game.key_down("ArrowRight");
    drive_until_goal(&mut game, 0, 60_000);
    for _ in 0..10 {
        game.second();
    }

    game.restart();
    assert_eq!(game.state().score, 0);
    assert_eq!(game.state().time_left, MAX_TIME);
    assert!(game.state().running);
    // The latch was cleared too: with no held keys the player stays put
    let player = game.state().player.pos;
    game.frame(FRAME_INTERVAL_MS);
    assert_eq!(game.state().player.pos, player);
}

fn held_from_bits(bits: u8) -> HeldKeys {
    let mut held = HeldKeys::default();
    if bits & 1 != 0 {
        held.press(Key::Up);
    }
    if bits & 2 != 0 {
        held.press(Key::Down);
    }
    if bits & 4 != 0 {
        held.press(Key::Left);
    }
    if bits & 8 != 0 {
        held.press(Key::Right);
    }
    held
}

proptest! {
    /// Clamping keeps every entity on the board for arbitrary input
    /// sequences and initial ball velocities, and no velocity component
    /// ever lingers in the dead zone below the stop epsilon.
    #[test]
    fn bounds_and_epsilon_hold_for_any_input(
        inputs in prop::collection::vec(0u8..16, 1..300),
        vx in -12.0f32..12.0,
        vy in -12.0f32..12.0,
    ) {
        let mut state = MatchState::new();
        state.ball.vel = Vec2::new(vx, vy);

        for bits in inputs {
            soccer::step(&mut state, &held_from_bits(bits));

            prop_assert!(state.player.pos.x >= 0.0);
            prop_assert!(state.player.pos.x <= BOARD_WIDTH - PLAYER_SIZE);
            prop_assert!(state.player.pos.y >= 0.0);
            prop_assert!(state.player.pos.y <= BOARD_HEIGHT - PLAYER_SIZE);
            prop_assert!(state.ball.pos.x >= 0.0);
            prop_assert!(state.ball.pos.x <= BOARD_WIDTH - BALL_SIZE);
            prop_assert!(state.ball.pos.y >= 0.0);
            prop_assert!(state.ball.pos.y <= BOARD_HEIGHT - BALL_SIZE);

            for component in [state.ball.vel.x, state.ball.vel.y] {
                prop_assert!(component == 0.0 || component.abs() >= STOP_EPSILON);
            }
        }
    }

    /// A resting player transfers no speed: contact with empty input
    /// always leaves the ball dead.
    #[test]
    fn contact_with_no_input_stops_the_ball(offset_x in -20.0f32..20.0, offset_y in -20.0f32..20.0) {
        let mut state = MatchState::new();
        state.ball.pos = state.player.pos + Vec2::new(offset_x, offset_y);
        state.ball.vel = Vec2::ZERO;

        soccer::step(&mut state, &HeldKeys::default());

        let gap = (state.ball.center() - state.player.center()).length();
        if gap < (PLAYER_SIZE + BALL_SIZE) / 2.0 + 1e-3 {
            // Contact happened this tick or the ball was pushed flush:
            // either way its velocity came from zero input
            prop_assert_eq!(state.ball.vel, Vec2::ZERO);
        }
    }
}
