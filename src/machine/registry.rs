//! Mapping from state identifiers to per-frame update callbacks.

use crate::core::StateId;
use crate::machine::error::MachineError;
use crate::machine::frame::Frame;
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Per-frame behaviour for one state.
///
/// Receives the entity context and the frame; requests transitions through
/// [`Frame::enter`].
pub type UpdateFn<S, C> = Box<dyn Fn(&mut C, &mut Frame<S>) + Send + Sync>;

/// Table binding every state of a set to exactly one update callback.
///
/// Keyed by the state value, so reordering the state enum cannot misroute a
/// callback.
pub struct StateRegistry<S: StateId, C> {
    behaviours: BTreeMap<S, UpdateFn<S, C>>,
}

impl<S: StateId, C> StateRegistry<S, C> {
    pub fn new() -> Self {
        Self {
            behaviours: BTreeMap::new(),
        }
    }

    /// Bind `callback` to `state`.
    ///
    /// Fails with [`MachineError::DuplicateState`] if the state is already
    /// bound; the existing binding is kept.
    pub fn register<F>(&mut self, state: S, callback: F) -> Result<(), MachineError>
    where
        F: Fn(&mut C, &mut Frame<S>) + Send + Sync + 'static,
    {
        self.register_boxed(state, Box::new(callback))
    }

    /// [`StateRegistry::register`] for an already boxed callback.
    pub fn register_boxed(
        &mut self,
        state: S,
        callback: UpdateFn<S, C>,
    ) -> Result<(), MachineError> {
        if self.behaviours.contains_key(&state) {
            return Err(MachineError::DuplicateState {
                state: state.name().to_string(),
            });
        }
        self.behaviours.insert(state, callback);
        Ok(())
    }

    /// Check that every state index in `[0, state_count)` has a callback.
    ///
    /// Reports every gap at once. Indices with no state value behind them
    /// are reported as `#<index>`.
    pub fn validate(&self, state_count: usize) -> Result<(), MachineError> {
        let checks: Vec<Validation<(), NonEmptyVec<String>>> = (0..state_count)
            .map(|index| match S::from_index(index) {
                Some(state) if self.behaviours.contains_key(&state) => Validation::success(()),
                Some(state) => Validation::fail(state.name().to_string()),
                None => Validation::fail(format!("#{index}")),
            })
            .collect();

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(missing) => Err(MachineError::IncompleteRegistration {
                missing: missing.iter().cloned().collect(),
            }),
        }
    }

    pub fn contains(&self, state: S) -> bool {
        self.behaviours.contains_key(&state)
    }

    pub fn get(&self, state: S) -> Option<&UpdateFn<S, C>> {
        self.behaviours.get(&state)
    }

    /// Registered states in order.
    pub fn states(&self) -> impl Iterator<Item = S> + '_ {
        self.behaviours.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.behaviours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviours.is_empty()
    }
}

impl<S: StateId, C> Default for StateRegistry<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId, C> std::fmt::Debug for StateRegistry<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.behaviours.keys()).finish()
    }
}
