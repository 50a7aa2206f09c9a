//! Builder for constructing state machines.

use crate::core::{StateId, DEFAULT_HISTORY_LIMIT};
use crate::machine::{Frame, MachineError, StateMachine, StateRegistry, UpdateFn};
use crate::Seconds;

/// Builder for constructing state machines with a fluent API.
///
/// Callbacks are collected as given and registered at [`build`], where
/// duplicates and gaps are reported.
///
/// [`build`]: StateMachineBuilder::build
pub struct StateMachineBuilder<S: StateId, C> {
    start: Option<S>,
    behaviours: Vec<(S, UpdateFn<S, C>)>,
    history_limit: usize,
}

impl<S: StateId, C> StateMachineBuilder<S, C> {
    pub fn new() -> Self {
        Self {
            start: None,
            behaviours: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Bind the update callback for `state`.
    pub fn on<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn(&mut C, &mut Frame<S>) + Send + Sync + 'static,
    {
        self.behaviours.push((state, Box::new(callback)));
        self
    }

    /// Number of transitions the machine's history keeps.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the state machine, entering the start state at `now`.
    pub fn build(self, now: Seconds) -> Result<StateMachine<S, C>, MachineError> {
        let start = self.start.ok_or(MachineError::MissingStartState)?;

        let mut registry = StateRegistry::new();
        for (state, callback) in self.behaviours {
            registry.register_boxed(state, callback)?;
        }

        StateMachine::with_history_limit(start, registry, now, self.history_limit)
    }
}

impl<S: StateId, C> Default for StateMachineBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
