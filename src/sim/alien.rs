//! Alien wave behavior
//!
//! Two rules, each driven by its own fixed-rate trigger: the synchronized
//! reversal-and-descend when any alien touches a horizontal boundary, and
//! the timed shot from a pseudo-randomly chosen alien.

use glam::Vec2;

use super::rng::SeededRng;
use super::state::{Body, Category, State};
use crate::consts::*;
use crate::ortho;

/// If any alien has reached a horizontal boundary, the whole wave turns at
/// once: every velocity is rotated 90 degrees and scaled up, and every alien
/// steps down one row. One atomic transition no matter how many aliens
/// triggered it.
pub fn change_direction(s: State) -> State {
    let at_edge = s
        .aliens
        .iter()
        .any(|a| a.pos.x <= BOUND_INSET || a.pos.x >= CANVAS_SIZE - BOUND_INSET);
    if !at_edge {
        return s;
    }

    let aliens = s
        .aliens
        .iter()
        .map(|a| Body {
            vel: ortho(a.vel) * ALIEN_TURN_SCALE,
            pos: a.pos + Vec2::new(0.0, ALIEN_DESCEND_STEP),
            ..a.clone()
        })
        .collect();
    State { aliens, ..s }
}

/// A pseudo-randomly chosen alien fires straight down. The generator is
/// seeded from the current simulation time, so which alien shoots is a
/// deterministic function of when the trigger arrives. With no aliens left
/// this raises `stage_clear` instead.
pub fn fire(mut s: State) -> State {
    if s.aliens.is_empty() {
        s.stage_clear = true;
        return s;
    }

    let roll = SeededRng::new(s.time).float();
    let idx = ((roll * s.aliens.len() as f64) as usize).min(s.aliens.len() - 1);
    let muzzle = s.aliens[idx].pos + Vec2::new(0.0, MUZZLE_OFFSET);

    let bullet = Body::circle(
        Category::EnemyBullet,
        s.obj_count,
        s.time,
        muzzle,
        BULLET_RADIUS,
        // Negative y velocity carries the bullet down under the
        // position-minus-velocity convention
        Vec2::new(0.0, -BULLET_SPEED),
    );
    s.enemy_bullets.push(bullet);
    s.obj_count += 1;
    s
}
