//! State machine that dispatches one update callback per tick.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{StateHistory, StateId, StateTransition, DEFAULT_HISTORY_LIMIT};
use crate::machine::error::MachineError;
use crate::machine::frame::Frame;
use crate::machine::registry::StateRegistry;
use crate::Seconds;

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome<S: StateId> {
    /// The callback ran and requested nothing
    Stayed(S),

    /// The callback requested a transition, which has been applied
    Entered { from: S, to: S },
}

impl<S: StateId> TickOutcome<S> {
    /// State the machine is in after the tick.
    pub fn state(&self) -> S {
        match self {
            Self::Stayed(state) => *state,
            Self::Entered { to, .. } => *to,
        }
    }

    pub fn transitioned(&self) -> bool {
        matches!(self, Self::Entered { .. })
    }
}

/// Frame-driven state machine owned by a single entity.
///
/// `C` is the entity context the callbacks operate on. The machine never
/// stores it; it is passed to every [`StateMachine::tick`].
pub struct StateMachine<S: StateId, C> {
    registry: StateRegistry<S, C>,
    start_state: S,
    current: S,
    state_start_time: Seconds,
    history: StateHistory<S>,
}

impl<S: StateId, C> StateMachine<S, C> {
    /// Create a machine and enter `start_state` at `now`.
    ///
    /// Fails if the start state has no callback, or if any state of the set
    /// lacks one. The initial entry has no source state, so the history
    /// starts empty and only records later transitions.
    pub fn new(
        start_state: S,
        registry: StateRegistry<S, C>,
        now: Seconds,
    ) -> Result<Self, MachineError> {
        Self::with_history_limit(start_state, registry, now, DEFAULT_HISTORY_LIMIT)
    }

    /// Like [`StateMachine::new`] with a custom history bound.
    pub fn with_history_limit(
        start_state: S,
        registry: StateRegistry<S, C>,
        now: Seconds,
        history_limit: usize,
    ) -> Result<Self, MachineError> {
        check_registry(&registry, start_state)?;

        tracing::debug!(
            to = start_state.name(),
            at = now,
            states = registry.len(),
            "entered start state"
        );

        Ok(Self {
            registry,
            start_state,
            current: start_state,
            state_start_time: now,
            history: StateHistory::with_limit(history_limit),
        })
    }

    /// Rebuild a machine from a checkpoint, binding it to `registry`.
    pub fn resume(
        checkpoint: Checkpoint<S>,
        registry: StateRegistry<S, C>,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        check_registry(&registry, checkpoint.start_state)?;

        tracing::debug!(
            checkpoint = %checkpoint.id,
            state = checkpoint.current_state.name(),
            state_start_time = checkpoint.state_start_time,
            "state machine resumed"
        );

        Ok(Self {
            registry,
            start_state: checkpoint.start_state,
            current: checkpoint.current_state,
            state_start_time: checkpoint.state_start_time,
            history: checkpoint.history,
        })
    }

    /// Capture the machine's position; callbacks are not included.
    pub fn checkpoint(&self) -> Checkpoint<S> {
        Checkpoint::new(
            self.start_state,
            self.current,
            self.state_start_time,
            self.history.clone(),
        )
    }

    /// Enter `state` at `now`, resetting the state timer.
    ///
    /// Unconditional: re-entering the current state is a valid way to
    /// restart its timer.
    pub fn enter(&mut self, state: S, now: Seconds) {
        let from = self.current;
        self.history.record(StateTransition {
            from,
            to: state,
            at: now,
        });
        self.current = state;
        self.state_start_time = now;

        tracing::debug!(from = from.name(), to = state.name(), at = now, "entered state");
    }

    /// Run the current state's callback for one frame.
    ///
    /// A transition requested by the callback is applied before returning,
    /// stamped with `now`.
    pub fn tick(
        &mut self,
        ctx: &mut C,
        now: Seconds,
        delta: Seconds,
    ) -> Result<TickOutcome<S>, MachineError> {
        let state = self.current;
        let Some(behaviour) = self.registry.get(state) else {
            tracing::error!(state = state.name(), "no update callback for current state");
            return Err(MachineError::UnregisteredState {
                state: state.name().to_string(),
            });
        };

        tracing::trace!(state = state.name(), now, delta, "tick");

        let mut frame = Frame::new(state, now, delta, self.state_start_time);
        behaviour(ctx, &mut frame);

        match frame.requested() {
            Some(next) => {
                self.enter(next, now);
                Ok(TickOutcome::Entered {
                    from: state,
                    to: next,
                })
            }
            None => Ok(TickOutcome::Stayed(state)),
        }
    }

    pub fn current_state(&self) -> S {
        self.current
    }

    pub fn start_state(&self) -> S {
        self.start_state
    }

    pub fn state_start_time(&self) -> Seconds {
        self.state_start_time
    }

    /// Time spent in the current state as of `now`.
    pub fn elapsed(&self, now: Seconds) -> Seconds {
        now - self.state_start_time
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn registry(&self) -> &StateRegistry<S, C> {
        &self.registry
    }
}

impl<S: StateId, C> std::fmt::Debug for StateMachine<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("start_state", &self.start_state)
            .field("state_start_time", &self.state_start_time)
            .field("registry", &self.registry)
            .finish()
    }
}

fn check_registry<S: StateId, C>(
    registry: &StateRegistry<S, C>,
    start_state: S,
) -> Result<(), MachineError> {
    if !registry.contains(start_state) {
        return Err(MachineError::UnregisteredStartState {
            state: start_state.name().to_string(),
        });
    }
    registry.validate(S::count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
    enum Mode {
        Rest,
        Walk,
    }

    impl StateId for Mode {
        const ALL: &'static [Self] = &[Self::Rest, Self::Walk];

        fn name(&self) -> &'static str {
            match self {
                Self::Rest => "Rest",
                Self::Walk => "Walk",
            }
        }
    }

    #[derive(Default)]
    struct Log {
        calls: Vec<(Mode, Seconds, Seconds, Seconds)>,
    }

    fn record(log: &mut Log, frame: &mut Frame<Mode>) {
        log.calls
            .push((frame.state(), frame.now(), frame.delta(), frame.state_start_time()));
    }

    fn registry() -> StateRegistry<Mode, Log> {
        let mut registry = StateRegistry::new();
        registry
            .register(Mode::Rest, |log: &mut Log, frame: &mut Frame<Mode>| {
                record(log, frame);
                if frame.has_elapsed(1.0) {
                    frame.enter(Mode::Walk);
                }
            })
            .unwrap();
        registry
            .register(Mode::Walk, |log: &mut Log, frame: &mut Frame<Mode>| {
                record(log, frame);
                if frame.has_elapsed(3.0) {
                    frame.enter(Mode::Rest);
                }
            })
            .unwrap();
        registry
    }

    #[test]
    fn construction_enters_start_state() {
        let machine = StateMachine::new(Mode::Walk, registry(), 4.0).unwrap();

        assert_eq!(machine.current_state(), Mode::Walk);
        assert_eq!(machine.start_state(), Mode::Walk);
        assert_eq!(machine.state_start_time(), 4.0);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn history_records_transitions_after_the_start_state() {
        let mut machine = StateMachine::new(Mode::Rest, registry(), 0.0).unwrap();
        assert_eq!(machine.history().len(), 0);
        assert!(machine.history().get_path().is_empty());

        machine.tick(&mut Log::default(), 1.0, 1.0).unwrap();

        let first = machine.history().last().unwrap();
        assert_eq!((first.from, first.to, first.at), (Mode::Rest, Mode::Walk, 1.0));
        assert_eq!(machine.history().get_path(), vec![Mode::Rest, Mode::Walk]);
    }

    #[test]
    fn unregistered_start_state_is_rejected() {
        let mut partial: StateRegistry<Mode, Log> = StateRegistry::new();
        partial.register(Mode::Walk, record).unwrap();

        let result = StateMachine::new(Mode::Rest, partial, 0.0);

        assert!(matches!(
            result,
            Err(MachineError::UnregisteredStartState { state }) if state == "Rest"
        ));
    }

    #[test]
    fn incomplete_registry_is_rejected() {
        let mut partial: StateRegistry<Mode, Log> = StateRegistry::new();
        partial.register(Mode::Rest, record).unwrap();

        let result = StateMachine::new(Mode::Rest, partial, 0.0);

        assert!(matches!(
            result,
            Err(MachineError::IncompleteRegistration { missing }) if missing == vec!["Walk"]
        ));
    }

    #[test]
    fn tick_dispatches_to_current_state() {
        let mut machine = StateMachine::new(Mode::Rest, registry(), 0.0).unwrap();
        let mut log = Log::default();

        let outcome = machine.tick(&mut log, 0.5, 0.5).unwrap();

        assert_eq!(outcome, TickOutcome::Stayed(Mode::Rest));
        assert_eq!(log.calls, vec![(Mode::Rest, 0.5, 0.5, 0.0)]);
    }

    #[test]
    fn callback_request_is_applied_at_now() {
        let mut machine = StateMachine::new(Mode::Rest, registry(), 0.0).unwrap();
        let mut log = Log::default();

        let outcome = machine.tick(&mut log, 1.0, 0.5).unwrap();

        assert_eq!(
            outcome,
            TickOutcome::Entered {
                from: Mode::Rest,
                to: Mode::Walk
            }
        );
        assert_eq!(machine.current_state(), Mode::Walk);
        assert_eq!(machine.state_start_time(), 1.0);

        machine.tick(&mut log, 1.5, 0.5).unwrap();
        assert_eq!(log.calls.last(), Some(&(Mode::Walk, 1.5, 0.5, 1.0)));
    }

    #[test]
    fn enter_then_tick_dispatches_to_entered_state() {
        let mut machine = StateMachine::new(Mode::Rest, registry(), 0.0).unwrap();
        let mut log = Log::default();

        machine.enter(Mode::Walk, 0.2);
        machine.tick(&mut log, 0.2, 0.0).unwrap();

        assert_eq!(log.calls, vec![(Mode::Walk, 0.2, 0.0, 0.2)]);
    }

    #[test]
    fn reentry_resets_timer() {
        let mut machine = StateMachine::new(Mode::Walk, registry(), 0.0).unwrap();

        machine.enter(Mode::Walk, 2.5);

        assert_eq!(machine.current_state(), Mode::Walk);
        assert_eq!(machine.state_start_time(), 2.5);
        assert_eq!(machine.elapsed(3.0), 0.5);
        assert!(machine.history().last().unwrap().is_reentry());
    }

    #[test]
    fn missing_callback_at_tick_is_reported() {
        let mut machine: StateMachine<Mode, Log> = StateMachine {
            registry: StateRegistry::new(),
            start_state: Mode::Rest,
            current: Mode::Rest,
            state_start_time: 0.0,
            history: StateHistory::new(),
        };

        let result = machine.tick(&mut Log::default(), 1.0, 1.0);

        assert_eq!(
            result,
            Err(MachineError::UnregisteredState {
                state: "Rest".to_string()
            })
        );
        assert_eq!(machine.current_state(), Mode::Rest);
    }

    #[test]
    fn history_tracks_entries() {
        let mut machine = StateMachine::new(Mode::Rest, registry(), 0.0).unwrap();
        let mut log = Log::default();

        for step in 1..=10 {
            machine.tick(&mut log, step as Seconds * 0.5, 0.5).unwrap();
        }

        // Rest -> Walk at 1.0, Walk -> Rest at 4.0, Rest -> Walk at 5.0
        assert_eq!(
            machine.history().get_path(),
            vec![Mode::Rest, Mode::Walk, Mode::Rest, Mode::Walk]
        );
        let times: Vec<Seconds> = machine.history().transitions().map(|t| t.at).collect();
        assert_eq!(times, vec![1.0, 4.0, 5.0]);
    }

    #[test]
    fn checkpoint_and_resume_preserve_position() {
        let mut machine = StateMachine::new(Mode::Rest, registry(), 0.0).unwrap();
        machine.tick(&mut Log::default(), 1.0, 1.0).unwrap();

        let checkpoint = machine.checkpoint();
        let resumed = StateMachine::resume(checkpoint, registry()).unwrap();

        assert_eq!(resumed.current_state(), Mode::Walk);
        assert_eq!(resumed.start_state(), Mode::Rest);
        assert_eq!(resumed.state_start_time(), 1.0);
        assert_eq!(resumed.history().len(), 1);
    }

    #[test]
    fn resume_requires_complete_registry() {
        let machine = StateMachine::new(Mode::Rest, registry(), 0.0).unwrap();
        let mut partial: StateRegistry<Mode, Log> = StateRegistry::new();
        partial.register(Mode::Rest, record).unwrap();

        let result = StateMachine::resume(machine.checkpoint(), partial);

        assert!(matches!(
            result,
            Err(CheckpointError::Machine(MachineError::IncompleteRegistration { .. }))
        ));
    }
}
