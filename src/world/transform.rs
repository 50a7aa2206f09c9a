//! Position access for entities.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Where an entity is and how to move it.
///
/// Writes are visible to the next read within the same frame.
pub trait Transform {
    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    fn translate(&mut self, delta: Vec3) {
        let position = self.position();
        self.set_position(position + delta);
    }
}

/// Plain world-space position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform3 {
    pub position: Vec3,
}

impl Transform3 {
    pub fn at(position: Vec3) -> Self {
        Self { position }
    }
}

impl Transform for Transform3 {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }
}
