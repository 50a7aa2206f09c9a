//! Per-tick view handed to update callbacks.

use crate::core::StateId;
use crate::Seconds;

/// What an update callback sees during one tick.
///
/// Timing is read-only. The only thing a callback can change is the pending
/// transition, through [`Frame::enter`]; the machine applies it once the
/// callback returns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame<S: StateId> {
    state: S,
    now: Seconds,
    delta: Seconds,
    state_start_time: Seconds,
    requested: Option<S>,
}

impl<S: StateId> Frame<S> {
    pub fn new(state: S, now: Seconds, delta: Seconds, state_start_time: Seconds) -> Self {
        Self {
            state,
            now,
            delta,
            state_start_time,
            requested: None,
        }
    }

    /// State being updated.
    pub fn state(&self) -> S {
        self.state
    }

    pub fn now(&self) -> Seconds {
        self.now
    }

    pub fn delta(&self) -> Seconds {
        self.delta
    }

    /// Frame time at which the current state was entered.
    pub fn state_start_time(&self) -> Seconds {
        self.state_start_time
    }

    /// Time spent in the current state so far.
    pub fn elapsed(&self) -> Seconds {
        self.now - self.state_start_time
    }

    /// True once `threshold` has passed since the state was entered, i.e.
    /// `now >= state_start_time + threshold`.
    pub fn has_elapsed(&self, threshold: Seconds) -> bool {
        self.now >= self.state_start_time + threshold
    }

    /// Request entry into `state` at the end of this tick.
    ///
    /// Re-entering the current state is allowed and resets its timer. If
    /// called more than once, the last request wins.
    pub fn enter(&mut self, state: S) {
        self.requested = Some(state);
    }

    /// Transition requested so far, if any.
    pub fn requested(&self) -> Option<S> {
        self.requested
    }
}
