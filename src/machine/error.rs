//! Errors raised while assembling or running a state machine.

use thiserror::Error;

/// Errors that can occur when building or ticking a state machine.
///
/// All of these are programming defects: a reachable state without a
/// behaviour. They abort the affected entity, never the process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("State '{state}' already has an update callback")]
    DuplicateState { state: String },

    #[error("States without an update callback: {}", missing.join(", "))]
    IncompleteRegistration { missing: Vec<String> },

    #[error("Start state '{state}' has no update callback")]
    UnregisteredStartState { state: String },

    #[error("Current state '{state}' has no update callback")]
    UnregisteredState { state: String },

    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,
}
