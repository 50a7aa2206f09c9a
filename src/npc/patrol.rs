//! Patrol: walk out along a compass direction, turning each time the goal
//! is passed, then go back to idling.

use super::enemy::Body;
use super::NpcState;
use crate::machine::Frame;
use crate::world::Transform;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Compass direction of travel on the ground plane.
///
/// Cycles Right -> Up -> Left -> Down -> Right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatrolDirection {
    #[default]
    Right,
    Up,
    Left,
    Down,
}

impl PatrolDirection {
    pub const ALL: [Self; 4] = [Self::Right, Self::Up, Self::Left, Self::Down];

    /// Next direction in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Right => Self::Up,
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
        }
    }

    /// Unit vector of travel. "Up" is +Z: patrols stay on the ground.
    pub fn normal(self) -> Vec3 {
        match self {
            Self::Right => Vec3::X,
            Self::Up => Vec3::Z,
            Self::Left => Vec3::NEG_X,
            Self::Down => Vec3::NEG_Z,
        }
    }
}

/// True once `position` lies beyond the goal `direction * distance`,
/// measured along `direction`.
pub fn passed_goal(position: Vec3, direction: PatrolDirection, distance: f32) -> bool {
    let normal = direction.normal();
    let goal = normal * distance;
    (goal - position).dot(normal) < 0.0
}

/// Patrol update: turn if the goal is behind us, step forward, and after
/// `patrol_walk_time` go back to Idle.
///
/// The step uses the direction held at the start of the tick; a turn takes
/// effect on the next tick.
pub fn update_patrol<T: Transform>(body: &mut Body<T>, frame: &mut Frame<NpcState>) {
    let heading = body.patrol;

    if passed_goal(body.transform.position(), heading, body.config.patrol_distance) {
        body.patrol = heading.next();
        tracing::debug!(from = ?heading, to = ?body.patrol, at = frame.now(), "patrol turned");
    }

    let step = body.config.patrol_speed * frame.delta();
    body.transform.translate(heading.normal() * step);

    if frame.has_elapsed(body.config.patrol_walk_time) {
        frame.enter(NpcState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npc::NpcConfig;
    use crate::world::Transform3;

    fn body_at(position: Vec3, patrol: PatrolDirection) -> Body<Transform3> {
        Body {
            transform: Transform3::at(position),
            config: NpcConfig::default(),
            patrol,
        }
    }

    #[test]
    fn directions_cycle_with_period_four() {
        let mut direction = PatrolDirection::Right;
        let mut seen = Vec::new();
        for _ in 0..8 {
            seen.push(direction);
            direction = direction.next();
        }

        assert_eq!(&seen[..4], &PatrolDirection::ALL);
        assert_eq!(&seen[4..], &PatrolDirection::ALL);
    }

    #[test]
    fn normals_lie_on_ground_plane() {
        assert_eq!(PatrolDirection::Right.normal(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(PatrolDirection::Up.normal(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(PatrolDirection::Left.normal(), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(PatrolDirection::Down.normal(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn goal_is_passed_only_beyond_it() {
        assert!(!passed_goal(Vec3::ZERO, PatrolDirection::Right, 6.0));
        assert!(!passed_goal(Vec3::new(6.0, 0.0, 0.0), PatrolDirection::Right, 6.0));
        assert!(passed_goal(Vec3::new(6.1, 0.0, 0.0), PatrolDirection::Right, 6.0));
        assert!(passed_goal(Vec3::new(6.1, 0.0, -7.0), PatrolDirection::Down, 6.0));
    }

    #[test]
    fn patrol_steps_along_heading() {
        let mut body = body_at(Vec3::ZERO, PatrolDirection::Right);
        let mut frame = Frame::new(NpcState::Patrol, 0.5, 0.5, 0.0);

        update_patrol(&mut body, &mut frame);

        assert_eq!(body.transform.position(), Vec3::new(2.5, 0.0, 0.0));
        assert_eq!(body.patrol, PatrolDirection::Right);
        assert_eq!(frame.requested(), None);
    }

    #[test]
    fn turn_applies_from_next_tick() {
        let mut body = body_at(Vec3::new(6.5, 0.0, 0.0), PatrolDirection::Right);
        let mut frame = Frame::new(NpcState::Patrol, 1.0, 0.1, 0.0);

        update_patrol(&mut body, &mut frame);

        assert_eq!(body.patrol, PatrolDirection::Up);
        assert_eq!(body.transform.position(), Vec3::new(7.0, 0.0, 0.0));
    }

    #[test]
    fn zero_delta_does_not_move() {
        let mut body = body_at(Vec3::new(1.0, 0.0, 2.0), PatrolDirection::Left);
        let mut frame = Frame::new(NpcState::Patrol, 1.0, 0.0, 0.0);

        update_patrol(&mut body, &mut frame);

        assert_eq!(body.transform.position(), Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn patrol_requests_idle_after_walk_time() {
        let mut body = body_at(Vec3::ZERO, PatrolDirection::Right);
        let mut frame = Frame::new(NpcState::Patrol, 7.0, 0.1, 3.0);

        update_patrol(&mut body, &mut frame);

        assert_eq!(frame.requested(), Some(NpcState::Idle));
    }
}
