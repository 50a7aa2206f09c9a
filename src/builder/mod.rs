//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder, the `state_enum!` macro and small
//! callback helpers for assembling machines with minimal boilerplate.

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;

use crate::core::StateId;
use crate::machine::Frame;
use crate::Seconds;

/// Callback that does nothing but enter `next` once `after` has elapsed in
/// the current state.
///
/// # Example
///
/// ```
/// use warden::builder::{timed, StateMachineBuilder};
/// use warden::state_enum;
///
/// state_enum! {
///     enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// let mut machine = StateMachineBuilder::<Door, ()>::new()
///     .start(Door::Open)
///     .on(Door::Open, timed(2.0, Door::Closed))
///     .on(Door::Closed, timed(5.0, Door::Open))
///     .build(0.0)
///     .unwrap();
///
/// machine.tick(&mut (), 2.0, 2.0).unwrap();
/// assert_eq!(machine.current_state(), Door::Closed);
/// ```
pub fn timed<S, C>(
    after: Seconds,
    next: S,
) -> impl Fn(&mut C, &mut Frame<S>) + Send + Sync + 'static
where
    S: StateId,
    C: 'static,
{
    move |_: &mut C, frame: &mut Frame<S>| {
        if frame.has_elapsed(after) {
            frame.enter(next);
        }
    }
}
