//! Checkpoint and resume for state machines and the entities driving them.
//!
//! A checkpoint captures where a machine is (start state, current state,
//! entry time, history) but never its callbacks; those are supplied again on
//! resume. Checkpoints encode to JSON for readability or bincode for size.
//!
//! Entities that wrap a machine can reuse [`to_json`], [`from_json`],
//! [`to_bytes`] and [`from_bytes`] for their own snapshots.

use crate::core::{StateHistory, StateId};
use crate::Seconds;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable position of a state machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: StateId> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// Wall-clock time the checkpoint was taken
    pub created_at: DateTime<Utc>,

    /// Configured start state of the machine
    pub start_state: S,

    /// State the machine was in
    pub current_state: S,

    /// Frame time the current state was entered
    pub state_start_time: Seconds,

    /// Recent state entries
    pub history: StateHistory<S>,
}

impl<S: StateId> Checkpoint<S> {
    pub fn new(
        start_state: S,
        current_state: S,
        state_start_time: Seconds,
        history: StateHistory<S>,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            start_state,
            current_state,
            state_start_time,
            history,
        }
    }

    /// Check that a machine can resume from this checkpoint.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if !self.state_start_time.is_finite() {
            return Err(CheckpointError::ValidationFailed(format!(
                "state start time {} is not finite",
                self.state_start_time
            )));
        }
        if let Some(bad) = self.history.transitions().find(|t| !t.at.is_finite()) {
            return Err(CheckpointError::ValidationFailed(format!(
                "history entry {} -> {} has a non-finite time",
                bad.from.name(),
                bad.to.name()
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        to_json(self)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        from_json(json)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        to_bytes(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        from_bytes(bytes)
    }
}

/// Encode any serializable value as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, CheckpointError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
}

pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, CheckpointError> {
    serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
}

/// Encode any serializable value with bincode.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, CheckpointError> {
    bincode::serialize(value).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
}

pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CheckpointError> {
    bincode::deserialize(bytes).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
}
