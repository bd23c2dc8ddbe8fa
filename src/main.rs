//! Pocket Arcade headless demo driver
//!
//! Runs both games over virtual time with scripted input: cadences fire
//! the controller entry points exactly as a browser host would, events
//! become overlay messages, and once per simulated second the full state
//! store goes to stdout as a JSON line for the presentation sink.
//! Progress and event detail go to the log channel.

use serde::Serialize;

use pocket_arcade::clock::{Cadence, Millis};
use pocket_arcade::consts::*;
use pocket_arcade::settings::{Settings, SpeedPreset};
use pocket_arcade::snake::{RunEvent, RunPhase, SnakeGame};
use pocket_arcade::soccer::{Match, MatchEvent};

/// One line of sink output
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum SinkLine<'a, S: Serialize> {
    /// Full state snapshot on a 1 Hz cadence
    Snapshot { at_ms: Millis, state: &'a S },
    /// Message overlay text, as the on-screen banner would show it
    Overlay { at_ms: Millis, text: String },
}

fn emit<S: Serialize>(line: &SinkLine<'_, S>) {
    if let Ok(json) = serde_json::to_string(line) {
        println!("{json}");
    }
}

fn overlay(at_ms: Millis, text: String) {
    emit::<()>(&SinkLine::Overlay { at_ms, text });
}

fn main() {
    env_logger::init();

    let settings = Settings {
        speed: std::env::var("POCKET_ARCADE_SPEED")
            .ok()
            .and_then(|s| SpeedPreset::from_str(&s))
            .unwrap_or_default(),
        seed: std::env::var("POCKET_ARCADE_SEED")
            .ok()
            .and_then(|s| s.parse().ok()),
    };
    let seed = settings.seed.unwrap_or(0xA11CE);
    log::info!(
        "pocket-arcade demo starting, seed {seed}, snake speed {}",
        settings.speed.as_str()
    );

    run_soccer();
    run_snake(seed, settings.speed);

    log::info!("demo finished");
}

/// Scripted soccer session: hold right (with a short downward dab) and
/// let the countdown play out.
fn run_soccer() {
    log::info!("soccer: pushing for the right goal");
    let mut game = Match::new();
    let mut frames = Cadence::new(FRAME_INTERVAL_MS, 0);
    let mut countdown = Cadence::new(COUNTDOWN_INTERVAL_MS, 0);

    // (time, key identifier, pressed)
    let script: &[(Millis, &str, bool)] = &[
        (64, "ArrowRight", true),
        (400, "s", true),
        (1_200, "s", false),
    ];
    let mut cursor = 0;

    let mut now: Millis = 0;
    while game.state().running {
        now += 1;

        while cursor < script.len() && script[cursor].0 <= now {
            let (_, identifier, pressed) = script[cursor];
            if pressed {
                game.key_down(identifier);
            } else {
                game.key_up(identifier);
            }
            cursor += 1;
        }

        for _ in 0..frames.fire(now) {
            match game.frame(now) {
                Some(MatchEvent::GoalScored { score }) => {
                    overlay(now, format!("GOAL! That makes {score}!"));
                }
                Some(MatchEvent::Blocked) => {
                    overlay(now, "Blocked at the near post".to_string());
                }
                Some(MatchEvent::GameEnded { .. }) | None => {}
            }
        }

        for _ in 0..countdown.fire(now) {
            if let Some(MatchEvent::GameEnded { final_score }) = game.second() {
                overlay(now, format!("Full time! Final score: {final_score}"));
            }
            emit(&SinkLine::Snapshot {
                at_ms: now,
                state: game.state(),
            });
        }
    }
}

/// Scripted snake session: a few early turns, a mid-run speed change,
/// then the mistake budget burns down against the walls.
fn run_snake(seed: u64, speed: SpeedPreset) {
    log::info!("snake: running until the mistake budget is spent");
    let mut game = SnakeGame::new(seed);
    let period = game.set_speed(speed);
    let mut ticks = Cadence::new(period, 0);
    let mut snapshots = Cadence::new(1_000, 0);

    // (time, key identifier)
    let script: &[(Millis, &str)] = &[
        (300, "ArrowUp"),
        (1_100, "ArrowLeft"),
        (2_000, "ArrowDown"),
        (2_900, "ArrowRight"),
    ];
    let mut cursor = 0;
    let mut speed_changed = false;

    let mut now: Millis = 0;
    while game.state().phase != RunPhase::GameOver {
        now += 1;

        while cursor < script.len() && script[cursor].0 <= now {
            game.key_down(script[cursor].1);
            cursor += 1;
        }

        if !speed_changed && now >= 8_000 {
            // Menu selection change mid-run: cancel-and-reschedule
            let period = game.set_speed(SpeedPreset::Fast);
            ticks.set_period(period, now);
            speed_changed = true;
        }

        // While parked for a penalty the tick cadence is stopped; the
        // respawn poll restarts it
        if game.poll(now) {
            ticks.start(now);
        }

        for _ in 0..ticks.fire(now) {
            match game.tick(now) {
                Some(RunEvent::Collided { mistakes_remaining }) => {
                    ticks.stop();
                    overlay(now, format!("Ouch! {mistakes_remaining} more mistakes allowed"));
                }
                Some(RunEvent::GameOver { final_score }) => {
                    ticks.stop();
                    overlay(now, format!("Game over! Final score: {final_score}"));
                }
                Some(RunEvent::Ate { score }) => {
                    overlay(now, format!("Score: {score}"));
                }
                None => {}
            }
        }

        for _ in 0..snapshots.fire(now) {
            emit(&SinkLine::Snapshot {
                at_ms: now,
                state: game.state(),
            });
        }
    }
}
