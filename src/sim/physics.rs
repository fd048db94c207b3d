//! Per-tick integration and boundary clamping

use glam::Vec2;

use super::state::Body;
use crate::consts::{BOUND_INSET, CANVAS_SIZE};

/// Keep a position inside the playfield insets. Out-of-range coordinates
/// snap to the nearest inset boundary; there is no wraparound.
pub fn clamp_to_bounds(pos: Vec2) -> Vec2 {
    let clamp = |v: f32| v.clamp(BOUND_INSET, CANVAS_SIZE - BOUND_INSET);
    Vec2::new(clamp(pos.x), clamp(pos.y))
}

/// One integration step, applied identically to every category. Position
/// moves against velocity (up is negative y) and is clamped to the
/// playfield; velocity then picks up acceleration.
pub fn move_body(b: &Body) -> Body {
    Body {
        rotation: b.rotation + b.torque,
        angle: b.angle + b.rotation,
        pos: clamp_to_bounds(b.pos - b.vel),
        vel: b.vel + b.acc,
        ..b.clone()
    }
}
