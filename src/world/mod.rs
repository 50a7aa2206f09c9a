//! Collaborators supplied by the host: frame timing and entity positions.

mod clock;
mod transform;

pub use clock::{Clock, ManualClock, RealtimeClock};
pub use transform::{Transform, Transform3};
