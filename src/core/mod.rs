//! Core state identifier and history types.
//!
//! This module contains the data shared by every machine:
//! - State identifiers via the `StateId` trait
//! - Bounded history of state entries
//!
//! Nothing here dispatches behaviour; see [`crate::machine`] for that.

mod history;
mod state;

pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use state::StateId;
