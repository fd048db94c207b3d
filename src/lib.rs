//! Space Invaders - deterministic simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, alien behavior,
//!   the event reducer)
//!
//! Rendering and raw input handling live outside this crate: the core
//! consumes abstract [`sim::GameEvent`]s one at a time and produces
//! [`sim::State`] snapshots, plus a per-tick `exit` set telling the
//! renderer which bodies to drop.

pub mod sim;

pub use sim::{Body, BodyId, Category, GameEvent, State};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Playfield dimensions (square canvas)
    pub const CANVAS_SIZE: f32 = 800.0;
    /// Bodies are clamped to [BOUND_INSET, CANVAS_SIZE - BOUND_INSET] on both axes
    pub const BOUND_INSET: f32 = 20.0;

    /// Ship defaults
    pub const SHIP_SPAWN: Vec2 = Vec2::new(380.0, 425.0);
    pub const SHIP_RADIUS: f32 = 20.0;
    /// Horizontal thrust per directional key press
    pub const SHIP_THRUST: f32 = 5.0;

    /// Bullet defaults (player and alien bullets share these)
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 5.0;
    /// Bullets spawn this far from their shooter
    pub const MUZZLE_OFFSET: f32 = 20.0;
    /// Bullets older than this many ticks expire into the exit set
    pub const BULLET_LIFETIME_TICKS: u64 = 70;

    /// Alien wave defaults
    pub const START_ALIEN_COUNT: u32 = 9;
    pub const ALIEN_RADIUS: f32 = 18.0;
    pub const ALIEN_START_SPEED: f32 = 2.0;
    /// Speed gain applied on each direction reversal
    pub const ALIEN_TURN_SCALE: f32 = 1.09;
    /// Vertical step taken on each direction reversal
    pub const ALIEN_DESCEND_STEP: f32 = 15.0;

    /// Shield defaults
    pub const START_SHIELD_COUNT: u32 = 60;
    pub const SHIELD_RADIUS: f32 = 10.0;
    pub const SHIELD_ROW_Y: f32 = 350.0;

    /// Points per alien destroyed
    pub const ALIEN_SCORE: u32 = 10;
    /// Score that ends the run in victory (exact-equality test)
    pub const WIN_SCORE: u32 = 270;
}

/// 90-degree rotation in screen coordinates: (x, y) -> (y, -x)
#[inline]
pub fn ortho(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Rotate a vector by `deg` degrees
#[inline]
pub fn rotate_deg(v: Vec2, deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Unit vector `deg` degrees away from "up". Screen coordinates put up at
/// negative y, so angle 0 is straight up and angle 90 points right.
#[inline]
pub fn unit_vec_in_direction(deg: f32) -> Vec2 {
    rotate_deg(Vec2::new(0.0, -1.0), deg)
}
