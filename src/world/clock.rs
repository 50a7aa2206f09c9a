//! Frame clocks.

use crate::Seconds;
use std::time::Instant;

/// Source of frame timing.
///
/// `now` never decreases between frames and `delta` is never negative.
pub trait Clock {
    /// Time since the clock started.
    fn now(&self) -> Seconds;

    /// Length of the current frame.
    fn delta(&self) -> Seconds;
}

/// Clock advanced by hand. Used by tests, replays and fixed-step loops.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ManualClock {
    now: Seconds,
    delta: Seconds,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: Seconds) -> Self {
        Self { now, delta: 0.0 }
    }

    /// Start a new frame of length `delta`. Negative lengths are clamped to zero.
    pub fn advance(&mut self, delta: Seconds) {
        let delta = delta.max(0.0);
        self.now += delta;
        self.delta = delta;
    }

    /// Jump to an explicit frame. `now` is never moved backwards.
    pub fn set(&mut self, now: Seconds, delta: Seconds) {
        self.now = self.now.max(now);
        self.delta = delta.max(0.0);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Seconds {
        self.now
    }

    fn delta(&self) -> Seconds {
        self.delta
    }
}

/// Clock backed by real elapsed time.
#[derive(Clone, Copy, Debug)]
pub struct RealtimeClock {
    started: Instant,
    now: Seconds,
    delta: Seconds,
}

impl RealtimeClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            now: 0.0,
            delta: 0.0,
        }
    }

    /// Sample the wall clock and start a new frame.
    pub fn frame(&mut self) {
        let now = self.started.elapsed().as_secs_f32();
        self.delta = (now - self.now).max(0.0);
        self.now = now;
    }
}

impl Default for RealtimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for RealtimeClock {
    fn now(&self) -> Seconds {
        self.now
    }

    fn delta(&self) -> Seconds {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let mut clock = ManualClock::new();
        clock.advance(0.25);
        clock.advance(0.5);

        assert_eq!(clock.now(), 0.75);
        assert_eq!(clock.delta(), 0.5);
    }

    #[test]
    fn manual_clock_never_runs_backwards() {
        let mut clock = ManualClock::starting_at(3.0);
        clock.advance(-1.0);
        assert_eq!(clock.now(), 3.0);
        assert_eq!(clock.delta(), 0.0);

        clock.set(1.0, 0.1);
        assert_eq!(clock.now(), 3.0);
    }

    #[test]
    fn realtime_clock_is_monotonic() {
        let mut clock = RealtimeClock::new();
        clock.frame();
        let first = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        clock.frame();

        assert!(clock.now() >= first);
        assert!(clock.delta() >= 0.0);
    }
}
