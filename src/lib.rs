//! Warden: frame-driven finite state machines for non-player characters.
//!
//! An entity owns one [`StateMachine`]. Each frame the host calls
//! [`StateMachine::tick`] with the frame time; the machine runs the update
//! callback registered for its current state, and the callback may request a
//! transition. Every state of the set must have exactly one callback before
//! the machine will run.
//!
//! # Core Concepts
//!
//! - **StateId**: closed, ordered set of state tags
//! - **StateRegistry**: one update callback per tag, checked for gaps and
//!   duplicates
//! - **StateMachine**: current state, entry time, dispatch
//! - **Frame**: per-tick timing plus the transition request
//!
//! The [`npc`] module holds a complete reference client: an enemy that
//! hovers while idle and walks a square patrol.
//!
//! # Example
//!
//! ```rust
//! use warden::builder::{timed, StateMachineBuilder};
//! use warden::state_enum;
//!
//! state_enum! {
//!     enum Sentry {
//!         Rest,
//!         Scan,
//!     }
//! }
//!
//! let mut machine = StateMachineBuilder::<Sentry, ()>::new()
//!     .start(Sentry::Rest)
//!     .on(Sentry::Rest, timed(1.0, Sentry::Scan))
//!     .on(Sentry::Scan, timed(0.5, Sentry::Rest))
//!     .build(0.0)
//!     .unwrap();
//!
//! machine.tick(&mut (), 0.5, 0.5).unwrap();
//! assert_eq!(machine.current_state(), Sentry::Rest);
//!
//! machine.tick(&mut (), 1.0, 0.5).unwrap();
//! assert_eq!(machine.current_state(), Sentry::Scan);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod logging;
pub mod machine;
pub mod npc;
pub mod world;

/// Frame time, in seconds.
pub type Seconds = f32;

// Re-export commonly used types
pub use crate::core::{StateHistory, StateId, StateTransition};
pub use crate::machine::{Frame, MachineError, StateMachine, StateRegistry, TickOutcome};
