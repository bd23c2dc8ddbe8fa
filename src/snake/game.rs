//! Grid-run controller
//!
//! Owns the run's state store and the penalty respawn queue. The host
//! wires key events to `key_down` and a fixed-interval tick cadence to
//! `tick`; on a collision it parks that cadence and calls `poll` until
//! the respawn lands, then restarts the cadence. Speed changes go through
//! `set_speed`, which reports the new period for cancel-and-reschedule.

use super::state::{Direction, RunEvent, RunPhase, RunState};
use super::tick;
use crate::clock::{Millis, TimerQueue};
use crate::consts::*;
use crate::input::Key;
use crate::settings::SpeedPreset;

/// Deferred transitions a run can schedule
#[derive(Debug, Clone, Copy)]
enum Deferred {
    /// End-of-penalty snake respawn
    Respawn,
}

pub struct SnakeGame {
    state: RunState,
    timers: TimerQueue<Deferred>,
    speed: SpeedPreset,
}

impl SnakeGame {
    pub fn new(seed: u64) -> Self {
        Self {
            state: RunState::new(seed),
            timers: TimerQueue::new(),
            speed: SpeedPreset::default(),
        }
    }

    /// Fresh run on a new seed. The speed selection survives; pending
    /// timers do not.
    pub fn restart(&mut self, seed: u64) {
        self.state = RunState::new(seed);
        self.timers.clear();
        log::info!("snake run restarted, seed {seed}");
    }

    /// Latch a direction change from a key identifier. Returns true when
    /// the key was consumed (it named a direction), whether or not the
    /// latch accepted the change. Input is ignored once the run is over.
    pub fn key_down(&mut self, identifier: &str) -> bool {
        if self.state.phase == RunPhase::GameOver {
            return false;
        }
        match Key::from_identifier(identifier) {
            Some(key) => {
                self.state.latch_direction(Direction::from_key(key));
                true
            }
            None => false,
        }
    }

    /// One scheduled grid tick.
    pub fn tick(&mut self, now: Millis) -> Option<RunEvent> {
        let event = tick::step(&mut self.state);
        match event {
            Some(RunEvent::Collided { mistakes_remaining }) => {
                log::info!("hit! {mistakes_remaining} more mistakes allowed");
                self.timers.schedule(now + PENALTY_DELAY_MS, Deferred::Respawn);
            }
            Some(RunEvent::GameOver { final_score }) => {
                log::info!("run over, final score {final_score}");
                self.timers.clear();
            }
            Some(RunEvent::Ate { score }) => {
                log::debug!("ate, score {score}");
            }
            None => {}
        }
        event
    }

    /// Apply a due respawn while the tick cadence is parked. Returns true
    /// when the run resumed and the host should restart its cadence.
    pub fn poll(&mut self, now: Millis) -> bool {
        if self.state.phase != RunPhase::Penalty {
            return false;
        }
        if self.timers.pop_due(now).is_some() {
            self.state.respawn();
            log::debug!("respawned after penalty");
            return true;
        }
        false
    }

    /// Change the speed menu selection. The host cancels its cadence and
    /// reschedules at the returned period.
    pub fn set_speed(&mut self, speed: SpeedPreset) -> Millis {
        self.speed = speed;
        log::info!("speed set to {}", speed.as_str());
        speed.interval_ms()
    }

    pub fn speed(&self) -> SpeedPreset {
        self.speed
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }
}
