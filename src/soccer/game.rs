//! Match controller
//!
//! Owns the soccer state store, the held-key latch, and the deferred-reset
//! queue. The host wires its key events to `key_down`/`key_up`, its frame
//! cadence to `frame`, and an independent 1 Hz cadence to `second`. All
//! entry points run to completion on one thread; this controller is the
//! single writer of its state.

use super::state::{MatchEvent, MatchState};
use super::tick;
use crate::clock::{Millis, TimerQueue};
use crate::consts::*;
use crate::input::{HeldKeys, Key};

/// Deferred transitions a match can schedule
#[derive(Debug, Clone, Copy)]
enum Deferred {
    /// Post-goal return to kickoff spots
    ResetPositions,
}

pub struct Match {
    state: MatchState,
    held: HeldKeys,
    timers: TimerQueue<Deferred>,
}

impl Match {
    pub fn new() -> Self {
        Self {
            state: MatchState::new(),
            held: HeldKeys::default(),
            timers: TimerQueue::new(),
        }
    }

    /// Fresh match: state, latch, and any in-flight timers are discarded.
    pub fn restart(&mut self) {
        self.state = MatchState::new();
        self.held.clear();
        self.timers.clear();
        log::info!("match restarted, {} seconds on the clock", MAX_TIME);
    }

    /// Record a key press. Returns true when the key was consumed, so a
    /// browser host knows to suppress its default handling. Input is
    /// ignored once the match has ended.
    pub fn key_down(&mut self, identifier: &str) -> bool {
        if !self.state.running {
            return false;
        }
        match Key::from_identifier(identifier) {
            Some(key) => {
                self.held.press(key);
                true
            }
            None => false,
        }
    }

    /// Record a key release.
    pub fn key_up(&mut self, identifier: &str) -> bool {
        if !self.state.running {
            return false;
        }
        match Key::from_identifier(identifier) {
            Some(key) => {
                self.held.release(key);
                true
            }
            None => false,
        }
    }

    /// One animation frame: apply any due deferred reset, then step the
    /// simulation. A goal schedules the reset rather than blocking here.
    pub fn frame(&mut self, now: Millis) -> Option<MatchEvent> {
        while let Some(Deferred::ResetPositions) = self.timers.pop_due(now) {
            self.state.reset_positions();
            log::debug!("kickoff positions restored");
        }

        let event = tick::step(&mut self.state, &self.held);
        if let Some(MatchEvent::GoalScored { score }) = event {
            log::info!("goal! score {score}");
            self.timers
                .schedule(now + GOAL_RESET_DELAY_MS, Deferred::ResetPositions);
        }
        event
    }

    /// One countdown second. Reaching zero stops the simulation for good.
    pub fn second(&mut self) -> Option<MatchEvent> {
        if !self.state.running {
            return None;
        }
        self.state.time_left -= 1;
        if self.state.time_left == 0 {
            self.state.running = false;
            self.timers.clear();
            log::info!("time up, final score {}", self.state.score);
            return Some(MatchEvent::GameEnded {
                final_score: self.state.score,
            });
        }
        None
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
