//! Checkpoint error types.

use crate::machine::MachineError;
use thiserror::Error;

/// Errors that can occur while saving or restoring a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding to JSON or bincode failed
    #[error("Failed to encode checkpoint: {0}")]
    SerializationFailed(String),

    /// Decoding from JSON or bincode failed
    #[error("Failed to decode checkpoint: {0}")]
    DeserializationFailed(String),

    /// Checkpoint was written by an incompatible format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint decoded but holds values a machine cannot resume from
    #[error("Invalid checkpoint: {0}")]
    ValidationFailed(String),

    /// The restored machine could not be bound to its callbacks
    #[error(transparent)]
    Machine(#[from] MachineError),
}
