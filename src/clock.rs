//! Virtual-time scheduling
//!
//! The browser originals leaned on requestAnimationFrame, setInterval and
//! setTimeout callbacks mutating shared globals. Here every callback site
//! is explicit: a `Cadence` decides how many times a fixed-interval
//! callback fires as virtual time advances, and a `TimerQueue` holds
//! timestamped deferred transitions. Drivers and tests advance the clock
//! by hand, so nothing ever waits on a real timer.
//!
//! Everything runs on one thread; each game's controller is the single
//! writer of its state store and every entry point runs to completion
//! before the next one starts.

/// Virtual time in milliseconds
pub type Millis = u64;

/// Catch-up cap when a cadence falls behind (prevents spiral of death)
pub const MAX_CATCH_UP: u32 = 8;

/// Fixed-interval firing schedule.
///
/// Period changes and restarts discard the old schedule and start a full
/// period from `now` - the cancel-and-reschedule model of the original
/// interval timers.
#[derive(Debug, Clone)]
pub struct Cadence {
    period: Millis,
    next_due: Millis,
    running: bool,
}

impl Cadence {
    pub fn new(period: Millis, now: Millis) -> Self {
        assert!(period > 0, "cadence period must be nonzero");
        Self {
            period,
            next_due: now + period,
            running: true,
        }
    }

    pub fn period(&self) -> Millis {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Replace the period; the next firing is one full new period from `now`.
    pub fn set_period(&mut self, period: Millis, now: Millis) {
        assert!(period > 0, "cadence period must be nonzero");
        self.period = period;
        self.next_due = now + period;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// (Re)start, first firing one full period from `now`.
    pub fn start(&mut self, now: Millis) {
        self.running = true;
        self.next_due = now + self.period;
    }

    /// Number of firings due by `now`, advancing the schedule.
    ///
    /// Capped at `MAX_CATCH_UP`; a longer stall skips the overdue firings
    /// instead of replaying them.
    pub fn fire(&mut self, now: Millis) -> u32 {
        if !self.running {
            return 0;
        }
        let mut count = 0;
        while now >= self.next_due && count < MAX_CATCH_UP {
            self.next_due += self.period;
            count += 1;
        }
        if now >= self.next_due {
            let behind = (now - self.next_due) / self.period + 1;
            self.next_due += behind * self.period;
        }
        count
    }
}

#[derive(Debug, Clone)]
struct TimerEntry<T> {
    due: Millis,
    seq: u64,
    action: T,
}

/// Deferred transitions in virtual time.
///
/// Entries fire in (due, insertion) order, so two timers landing on the
/// same millisecond stay deterministic. `clear` is the discard half of
/// discard-and-reschedule cancellation.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    entries: Vec<TimerEntry<T>>,
    seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            seq: 0,
        }
    }

    pub fn schedule(&mut self, due: Millis, action: T) {
        let seq = self.seq;
        self.seq += 1;
        self.entries.push(TimerEntry { due, seq, action });
    }

    /// Earliest entry due by `now`, if any. Linear scan; these queues
    /// hold at most a couple of entries.
    pub fn pop_due(&mut self, now: Millis) -> Option<T> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i)?;
        Some(self.entries.swap_remove(idx).action)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.entries.iter().map(|e| e.due).min()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
