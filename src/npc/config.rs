//! Tuning for the reference enemy.

use super::NpcState;
use crate::Seconds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Errors raised while loading or checking an [`NpcConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {}", violations.join("; "))]
    Invalid { violations: Vec<String> },
}

/// Enemy behaviour settings, fixed at spawn.
///
/// Every field has a default, so a config file only lists what it changes.
///
/// # Example
///
/// ```rust
/// use warden::npc::{NpcConfig, NpcState};
///
/// let json = r#"{ "patrol_speed": 2.5, "start_state": "Patrol" }"#;
/// let config = NpcConfig::from_json(json).unwrap();
///
/// assert_eq!(config.patrol_speed, 2.5);
/// assert_eq!(config.start_state, NpcState::Patrol);
/// assert_eq!(config.idle_wait_time, 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NpcConfig {
    /// Time to spend hovering in Idle
    pub idle_wait_time: Seconds,

    /// Vertical travel of the idle hover
    pub idle_hover_distance: f32,

    /// Time to spend walking in Patrol
    pub patrol_walk_time: Seconds,

    /// Distance from the origin at which the patrol turns
    pub patrol_distance: f32,

    /// Walking speed, in world units per second
    pub patrol_speed: f32,

    pub start_state: NpcState,
}

impl Default for NpcConfig {
    fn default() -> Self {
        Self {
            idle_wait_time: 2.0,
            idle_hover_distance: 0.02,
            patrol_walk_time: 4.0,
            patrol_distance: 6.0,
            patrol_speed: 5.0,
            start_state: NpcState::Idle,
        }
    }
}

impl NpcConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check every numeric setting, reporting all problems together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: Vec<Validation<(), NonEmptyVec<String>>> = vec![
            non_negative("idle_wait_time", self.idle_wait_time),
            non_negative("idle_hover_distance", self.idle_hover_distance),
            non_negative("patrol_walk_time", self.patrol_walk_time),
            non_negative("patrol_distance", self.patrol_distance),
            non_negative("patrol_speed", self.patrol_speed),
        ];

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }
}

fn non_negative(field: &str, value: f32) -> Validation<(), NonEmptyVec<String>> {
    if value.is_finite() && value >= 0.0 {
        Validation::success(())
    } else {
        Validation::fail(format!("{field} must be a finite, non-negative number (got {value})"))
    }
}
