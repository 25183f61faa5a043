//! One-second tick source for the puzzle timers.
//!
//! Wraps the main loop's interval check (compare against the last tick
//! instant, rebase on emission) in a startable/stoppable struct so the
//! cadence is testable with synthetic instants.

use std::time::{Duration, Instant};

use crate::constants::CLOCK_TICK_MS;

/// Periodic one-second tick source. At most one per active puzzle screen.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    running: bool,
    last_tick: Instant,
}

impl Clock {
    /// Create a stopped clock.
    pub fn new() -> Self {
        Self {
            running: false,
            last_tick: Instant::now(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin emitting ticks, measuring from now.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.running = true;
        self.last_tick = now;
    }

    /// Stop emitting ticks immediately. Any interval already underway is
    /// discarded; a later start measures from scratch.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Poll for a tick. Returns true at most once per call, once a full
    /// second has elapsed since the last emission. A stopped clock never
    /// emits, and late polls do not produce catch-up bursts.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        if now.duration_since(self.last_tick) >= Duration::from_millis(CLOCK_TICK_MS) {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
