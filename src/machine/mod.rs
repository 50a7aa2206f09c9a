//! Frame-driven dispatch of per-state update callbacks.
//!
//! # Key Concepts
//!
//! - **Registry**: binds every state of a closed set to one update callback
//! - **State Machine**: tracks the current state and when it was entered,
//!   and runs that state's callback once per tick
//! - **Frame**: the per-tick view a callback reads timing from and requests
//!   transitions through
//!
//! # Example
//!
//! ```rust
//! use warden::machine::{Frame, StateMachine, StateRegistry, TickOutcome};
//! use warden::npc::NpcState;
//!
//! let mut registry = StateRegistry::new();
//! registry
//!     .register(NpcState::Idle, |ticks: &mut u32, frame: &mut Frame<NpcState>| {
//!         *ticks += 1;
//!         if frame.has_elapsed(1.0) {
//!             frame.enter(NpcState::Patrol);
//!         }
//!     })
//!     .unwrap();
//! registry
//!     .register(NpcState::Patrol, |_: &mut u32, _: &mut Frame<NpcState>| {})
//!     .unwrap();
//!
//! let mut machine = StateMachine::new(NpcState::Idle, registry, 0.0).unwrap();
//! let mut ticks = 0;
//!
//! assert_eq!(machine.tick(&mut ticks, 0.5, 0.5).unwrap(), TickOutcome::Stayed(NpcState::Idle));
//! assert!(machine.tick(&mut ticks, 1.0, 0.5).unwrap().transitioned());
//! assert_eq!(machine.current_state(), NpcState::Patrol);
//! assert_eq!(ticks, 2);
//! ```

mod error;
mod frame;
mod registry;
mod state_machine;

pub use error::MachineError;
pub use frame::Frame;
pub use registry::{StateRegistry, UpdateFn};
pub use state_machine::{StateMachine, TickOutcome};
