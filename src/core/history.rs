//! State entry history.
//!
//! Every entry into a state is recorded with the frame time it happened at.
//! The log is bounded: machines cycle forever, so old entries are dropped.

use super::state::StateId;
use crate::Seconds;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of transitions a history keeps.
pub const DEFAULT_HISTORY_LIMIT: usize = 32;

/// Record of a single state entry.
///
/// # Example
///
/// ```rust
/// use warden::core::StateTransition;
/// use warden::npc::NpcState;
///
/// let transition = StateTransition {
///     from: NpcState::Idle,
///     to: NpcState::Patrol,
///     at: 2.0,
/// };
/// assert!(!transition.is_reentry());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: StateId> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Frame time of the entry
    pub at: Seconds,
}

impl<S: StateId> StateTransition<S> {
    /// True when a state was entered again from itself, which resets its timer.
    pub fn is_reentry(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered, bounded history of state entries.
///
/// # Example
///
/// ```rust
/// use warden::core::{StateHistory, StateTransition};
/// use warden::npc::NpcState;
///
/// let mut history = StateHistory::with_limit(2);
/// history.record(StateTransition { from: NpcState::Idle, to: NpcState::Patrol, at: 2.0 });
/// history.record(StateTransition { from: NpcState::Patrol, to: NpcState::Idle, at: 6.0 });
/// history.record(StateTransition { from: NpcState::Idle, to: NpcState::Patrol, at: 8.0 });
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path(), vec![NpcState::Patrol, NpcState::Idle, NpcState::Patrol]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: StateId> {
    limit: usize,
    transitions: VecDeque<StateTransition<S>>,
}

impl<S: StateId> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId> StateHistory<S> {
    /// Create an empty history with the default limit.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history keeping at most `limit` transitions.
    ///
    /// A limit of zero disables recording.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
        }
    }

    /// Record a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.limit == 0 {
            return;
        }
        while self.transitions.len() >= self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// States traversed, oldest first: the `from` of the oldest retained
    /// transition followed by the `to` of each transition.
    pub fn get_path(&self) -> Vec<S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Frame time between the oldest and newest retained transition.
    pub fn duration(&self) -> Option<Seconds> {
        match (self.transitions.front(), self.transitions.back()) {
            (Some(first), Some(last)) => Some(last.at - first.at),
            _ => None,
        }
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
