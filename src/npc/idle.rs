//! Idle: hover in place, then set off on patrol.

use super::enemy::Body;
use super::NpcState;
use crate::machine::Frame;
use crate::world::Transform;
use crate::Seconds;
use glam::Vec3;

/// Period of the hover wave.
pub const HOVER_PERIOD: Seconds = 2.0;

/// Frame rate the hover offset is tuned for. The offset is applied once per
/// frame at this rate, so it is scaled by `delta * HOVER_FRAME_RATE`.
pub const HOVER_FRAME_RATE: f32 = 60.0;

/// Triangle wave in `[-hover_distance / 2, hover_distance / 2]`.
///
/// Peaks at `now mod 2 == 0` and `2`, bottoms out at `1`, and crosses zero
/// at `0.5` and `1.5`.
pub fn hover_offset(now: Seconds, hover_distance: f32) -> f32 {
    let wrapped = now.rem_euclid(HOVER_PERIOD);
    let ping_pong = (wrapped - 1.0).abs() - 0.5;
    ping_pong * hover_distance
}

/// Idle update: bob up and down, and after `idle_wait_time` land on the
/// ground and start patrolling.
pub fn update_idle<T: Transform>(body: &mut Body<T>, frame: &mut Frame<NpcState>) {
    let hover = hover_offset(frame.now(), body.config.idle_hover_distance);
    body.transform
        .translate(Vec3::new(0.0, hover * frame.delta() * HOVER_FRAME_RATE, 0.0));

    if frame.has_elapsed(body.config.idle_wait_time) {
        let mut position = body.transform.position();
        position.y = 0.0;
        body.transform.set_position(position);

        frame.enter(NpcState::Patrol);
    }
}
