//! Repeat acceleration for held directions
//!
//! Turns "how long has this direction been held" into "how far should the
//! value move this tick". There is no timer: the step is recomputed on every
//! polling tick from the press instant and the instant of the last applied
//! step.

use std::time::{Duration, Instant};

/// Hold time before the first repeat
const DEAD_ZONE_MS: u128 = 500;
/// End of the slow phase (one step per 500ms)
const SLOW_PHASE_END_MS: u128 = 1500;
/// Step count at which the fast phase starts
const FAST_PHASE_BASE: u128 = 4;
/// One step per this many ms once in the fast phase
const FAST_PHASE_INTERVAL_MS: u128 = 100;

/// Cumulative step count after holding for `elapsed`
///
/// - 0 under 500ms
/// - `elapsed / 500` under 1500ms (1 at 500ms, 2 at 1000ms)
/// - `4 + (elapsed - 1500) / 100` from 1500ms on
///
/// Non-decreasing in `elapsed`.
pub fn acceleration(elapsed: Duration) -> u32 {
    let ms = elapsed.as_millis();
    let steps = if ms < DEAD_ZONE_MS {
        0
    } else if ms < SLOW_PHASE_END_MS {
        ms / DEAD_ZONE_MS
    } else {
        FAST_PHASE_BASE + (ms - SLOW_PHASE_END_MS) / FAST_PHASE_INTERVAL_MS
    };
    u32::try_from(steps).unwrap_or(u32::MAX)
}

/// Per-control hold tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatState {
    press_time: Instant,
    last_time: Instant,
}

impl RepeatState {
    pub fn new(now: Instant) -> Self {
        Self {
            press_time: now,
            last_time: now,
        }
    }

    /// Restart tracking on a fresh press edge
    pub fn press(&mut self, now: Instant) {
        self.press_time = now;
        self.last_time = now;
    }

    /// Steps to apply for this held tick
    ///
    /// Difference between the cumulative count now and at the last applied
    /// step, so no step is ever counted twice. `last_time` only moves when
    /// the result is nonzero.
    pub fn tick(&mut self, now: Instant) -> u32 {
        let total = acceleration(now.saturating_duration_since(self.press_time));
        let prev = acceleration(self.last_time.saturating_duration_since(self.press_time));
        let delta = total.saturating_sub(prev);
        if delta > 0 {
            self.last_time = now;
        }
        delta
    }

    pub fn press_time(&self) -> Instant {
        self.press_time
    }

    pub fn last_time(&self) -> Instant {
        self.last_time
    }
}
