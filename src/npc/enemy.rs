//! The reference enemy: one state machine driving one body.

use super::config::{ConfigError, NpcConfig};
use super::idle::update_idle;
use super::patrol::{update_patrol, PatrolDirection};
use super::snapshot::{EnemySnapshot, RestoreError};
use super::NpcState;
use crate::machine::{MachineError, StateMachine, StateRegistry, TickOutcome};
use crate::world::{Clock, Transform, Transform3};
use crate::Seconds;
use glam::Vec3;
use thiserror::Error;

/// Errors raised while spawning an enemy.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Machine(#[from] MachineError),
}

/// Everything the enemy's state callbacks act on.
#[derive(Clone, Debug, PartialEq)]
pub struct Body<T: Transform> {
    pub transform: T,
    pub config: NpcConfig,
    /// Current patrol heading; survives Idle spells.
    pub patrol: PatrolDirection,
}

/// Callback table for [`NpcState`]: Idle hovers, Patrol walks.
pub fn behaviours<T>() -> Result<StateRegistry<NpcState, Body<T>>, MachineError>
where
    T: Transform + 'static,
{
    let mut registry = StateRegistry::new();
    registry.register(NpcState::Idle, update_idle::<T>)?;
    registry.register(NpcState::Patrol, update_patrol::<T>)?;
    Ok(registry)
}

/// Enemy that idles and patrols forever.
///
/// # Example
///
/// ```rust
/// use warden::npc::{Enemy, NpcConfig, NpcState};
/// use warden::world::{Clock, ManualClock, Transform3};
///
/// let mut clock = ManualClock::new();
/// let mut enemy = Enemy::spawn(NpcConfig::default(), Transform3::default(), clock.now()).unwrap();
///
/// while clock.now() < 2.0 {
///     clock.advance(0.25);
///     enemy.update(&clock).unwrap();
/// }
///
/// assert_eq!(enemy.state(), NpcState::Patrol);
/// assert_eq!(enemy.position().y, 0.0);
/// ```
pub struct Enemy<T: Transform + 'static = Transform3> {
    machine: StateMachine<NpcState, Body<T>>,
    body: Body<T>,
}

impl<T: Transform + 'static> Enemy<T> {
    /// Validate `config` and enter its start state at `now`.
    pub fn spawn(config: NpcConfig, transform: T, now: Seconds) -> Result<Self, SpawnError> {
        config.validate()?;
        let machine = StateMachine::new(config.start_state, behaviours()?, now)?;

        tracing::info!(
            start_state = ?config.start_state,
            position = ?transform.position(),
            at = now,
            "enemy spawned"
        );

        Ok(Self {
            machine,
            body: Body {
                transform,
                config,
                patrol: PatrolDirection::default(),
            },
        })
    }

    /// Rebuild an enemy from a snapshot, placing `transform` at the saved
    /// position.
    pub fn restore(snapshot: EnemySnapshot, mut transform: T) -> Result<Self, RestoreError> {
        snapshot.validate()?;
        let machine = StateMachine::resume(snapshot.machine, behaviours()?)?;
        transform.set_position(snapshot.position);

        Ok(Self {
            machine,
            body: Body {
                transform,
                config: snapshot.config,
                patrol: snapshot.patrol_direction,
            },
        })
    }

    /// Capture the enemy's state, position and tuning.
    pub fn snapshot(&self) -> EnemySnapshot {
        EnemySnapshot {
            machine: self.machine.checkpoint(),
            position: self.body.transform.position(),
            patrol_direction: self.body.patrol,
            config: self.body.config,
        }
    }

    /// Run one frame using `clock`'s timing.
    pub fn update(&mut self, clock: &impl Clock) -> Result<TickOutcome<NpcState>, MachineError> {
        self.tick(clock.now(), clock.delta())
    }

    /// Run one frame at `now`, `delta` seconds after the previous one.
    pub fn tick(
        &mut self,
        now: Seconds,
        delta: Seconds,
    ) -> Result<TickOutcome<NpcState>, MachineError> {
        self.machine
            .tick(&mut self.body, now, delta)
            .inspect_err(|err| tracing::error!(error = %err, at = now, "enemy update aborted"))
    }

    pub fn state(&self) -> NpcState {
        self.machine.current_state()
    }

    pub fn position(&self) -> Vec3 {
        self.body.transform.position()
    }

    pub fn patrol_direction(&self) -> PatrolDirection {
        self.body.patrol
    }

    pub fn config(&self) -> &NpcConfig {
        &self.body.config
    }

    pub fn body(&self) -> &Body<T> {
        &self.body
    }

    pub fn machine(&self) -> &StateMachine<NpcState, Body<T>> {
        &self.machine
    }
}

impl<T: Transform + std::fmt::Debug + 'static> std::fmt::Debug for Enemy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enemy")
            .field("machine", &self.machine)
            .field("body", &self.body)
            .finish()
    }
}
