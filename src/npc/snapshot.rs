//! Snapshot of a whole enemy: machine position plus body.

use super::config::{ConfigError, NpcConfig};
use super::patrol::PatrolDirection;
use super::NpcState;
use crate::checkpoint::{self, Checkpoint, CheckpointError};
use crate::machine::MachineError;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while restoring an enemy from a snapshot.
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    #[error(transparent)]
    Machine(#[from] MachineError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Snapshot position {position:?} is not finite")]
    InvalidPosition { position: Vec3 },
}

/// Saved enemy, restorable with [`super::Enemy::restore`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnemySnapshot {
    pub machine: Checkpoint<NpcState>,
    pub position: Vec3,
    pub patrol_direction: PatrolDirection,
    pub config: NpcConfig,
}

impl EnemySnapshot {
    /// Check everything outside the machine checkpoint: the tuning and the
    /// saved position.
    pub fn validate(&self) -> Result<(), RestoreError> {
        self.config.validate()?;
        if !self.position.is_finite() {
            return Err(RestoreError::InvalidPosition {
                position: self.position,
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        checkpoint::to_json(self)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        checkpoint::from_json(json)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        checkpoint::to_bytes(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        checkpoint::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npc::Enemy;
    use crate::world::Transform3;

    fn patrolling_enemy() -> Enemy {
        let config = NpcConfig {
            start_state: NpcState::Patrol,
            ..NpcConfig::default()
        };
        let mut enemy = Enemy::spawn(config, Transform3::default(), 0.0).unwrap();
        for step in 1..=4 {
            enemy.tick(step as f32 * 0.5, 0.5).unwrap();
        }
        enemy
    }

    #[test]
    fn json_snapshot_restores_enemy() {
        let enemy = patrolling_enemy();

        let json = enemy.snapshot().to_json().unwrap();
        let restored =
            Enemy::restore(EnemySnapshot::from_json(&json).unwrap(), Transform3::default())
                .unwrap();

        assert_eq!(restored.state(), NpcState::Patrol);
        assert_eq!(restored.position(), enemy.position());
        assert_eq!(restored.patrol_direction(), enemy.patrol_direction());
    }

    #[test]
    fn binary_snapshot_restores_enemy() {
        let enemy = patrolling_enemy();

        let bytes = enemy.snapshot().to_bytes().unwrap();
        let restored =
            Enemy::restore(EnemySnapshot::from_bytes(&bytes).unwrap(), Transform3::default())
                .unwrap();

        assert_eq!(restored.position(), enemy.position());
        assert_eq!(restored.config(), enemy.config());
    }

    #[test]
    fn invalid_config_in_snapshot_is_rejected() {
        let mut snapshot = patrolling_enemy().snapshot();
        snapshot.config.patrol_walk_time = -4.0;

        let result = Enemy::restore(snapshot, Transform3::default());

        assert!(matches!(result, Err(RestoreError::Config(_))));
    }

    #[test]
    fn non_finite_position_is_rejected() {
        for position in [
            Vec3::new(f32::NAN, 0.0, 0.0),
            Vec3::new(0.0, f32::INFINITY, 0.0),
            Vec3::new(0.0, 0.0, f32::NEG_INFINITY),
        ] {
            let mut snapshot = patrolling_enemy().snapshot();
            snapshot.position = position;

            let result = Enemy::restore(snapshot, Transform3::default());

            assert!(matches!(result, Err(RestoreError::InvalidPosition { .. })));
        }
    }

    #[test]
    fn stale_checkpoint_version_is_rejected() {
        let mut snapshot = patrolling_enemy().snapshot();
        snapshot.machine.version += 1;

        let result = Enemy::restore(snapshot, Transform3::default());

        assert!(matches!(
            result,
            Err(RestoreError::Checkpoint(CheckpointError::UnsupportedVersion { .. }))
        ));
    }

    #[test]
    fn truncated_bytes_fail_to_decode() {
        let bytes = patrolling_enemy().snapshot().to_bytes().unwrap();

        let result = EnemySnapshot::from_bytes(&bytes[..bytes.len() / 2]);

        assert!(matches!(result, Err(CheckpointError::DeserializationFailed(_))));
    }
}
