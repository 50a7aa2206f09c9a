//! Reference client: an enemy that hovers in place, then patrols.
//!
//! The enemy alternates between two states:
//!
//! - **Idle**: bob up and down for `idle_wait_time`, then land and patrol
//! - **Patrol**: walk along a compass direction, turning each time the goal
//!   `direction * patrol_distance` is passed, for `patrol_walk_time`, then
//!   idle again
//!
//! Both transitions are purely time based and the cycle never ends.

mod config;
mod enemy;
mod idle;
mod patrol;
mod snapshot;

pub use config::{ConfigError, NpcConfig};
pub use enemy::{behaviours, Body, Enemy, SpawnError};
pub use idle::{hover_offset, update_idle, HOVER_FRAME_RATE, HOVER_PERIOD};
pub use patrol::{passed_goal, update_patrol, PatrolDirection};
pub use snapshot::{EnemySnapshot, RestoreError};

use crate::state_enum;

state_enum! {
    /// Behaviour states of the reference enemy.
    #[derive(Default)]
    pub enum NpcState {
        #[default]
        Idle,
        Patrol,
    }
}
