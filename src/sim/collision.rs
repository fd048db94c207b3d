//! Circle collision detection and per-tick collision resolution
//!
//! Five pairings matter: ship vs aliens, player bullets vs aliens, alien
//! bullets vs ship, alien bullets vs shields, and alien bodies vs shields.
//! Each is resolved independently from the cartesian product of the two
//! collections; removal is by body id, so a body hit twice in one tick is
//! still removed exactly once.

use std::collections::HashSet;

use super::state::{Body, BodyId, State};
use crate::consts::{ALIEN_SCORE, WIN_SCORE};

/// Two bodies collide iff their centers are strictly closer than the sum of
/// their radii; exact touching does not count.
pub fn bodies_collided(a: &Body, b: &Body) -> bool {
    (a.pos - b.pos).length() < a.radius + b.radius
}

/// All colliding (x, y) pairs from the cartesian product of two collections
fn colliding_pairs<'a>(xs: &'a [Body], ys: &'a [Body]) -> Vec<(&'a Body, &'a Body)> {
    xs.iter()
        .flat_map(|x| ys.iter().map(move |y| (x, y)))
        .filter(|(x, y)| bodies_collided(x, y))
        .collect()
}

/// Drop every body whose id is in `dead`, preserving order
fn cut(bodies: Vec<Body>, dead: &HashSet<BodyId>) -> Vec<Body> {
    bodies.into_iter().filter(|b| !dead.contains(&b.id)).collect()
}

/// Resolve every collision pairing for one tick.
///
/// Destroyed bullets, aliens, and shield segments are appended to `exit`.
/// A ship hit only raises `game_over`; the ship body itself stays. Clearing
/// the wave raises `stage_clear` and advances the level, and a score of
/// exactly [`WIN_SCORE`] raises `game_won`.
pub fn handle_collisions(s: State) -> State {
    let ship_rammed = s.aliens.iter().any(|a| bodies_collided(&s.ship, a));
    let ship_shot = s.enemy_bullets.iter().any(|b| bodies_collided(&s.ship, b));

    let bullet_hits = colliding_pairs(&s.bullets, &s.aliens);
    let dead_bullets: HashSet<BodyId> = bullet_hits.iter().map(|(b, _)| b.id).collect();
    let dead_aliens: HashSet<BodyId> = bullet_hits.iter().map(|(_, a)| a.id).collect();

    let enemy_bullet_hits = colliding_pairs(&s.enemy_bullets, &s.shields);
    let dead_enemy_bullets: HashSet<BodyId> =
        enemy_bullet_hits.iter().map(|(b, _)| b.id).collect();
    let mut dead_shields: HashSet<BodyId> =
        enemy_bullet_hits.iter().map(|(_, sh)| sh.id).collect();

    // Alien bodies grind shield segments away but survive the contact
    let alien_shield_hits = colliding_pairs(&s.aliens, &s.shields);
    dead_shields.extend(alien_shield_hits.iter().map(|(_, sh)| sh.id));

    let score = s.score + dead_aliens.len() as u32 * ALIEN_SCORE;

    let mut exit = s.exit;
    exit.extend(s.bullets.iter().filter(|b| dead_bullets.contains(&b.id)).cloned());
    exit.extend(s.aliens.iter().filter(|a| dead_aliens.contains(&a.id)).cloned());
    exit.extend(
        s.enemy_bullets
            .iter()
            .filter(|b| dead_enemy_bullets.contains(&b.id))
            .cloned(),
    );
    exit.extend(s.shields.iter().filter(|sh| dead_shields.contains(&sh.id)).cloned());

    let aliens = cut(s.aliens, &dead_aliens);
    let stage_clear = aliens.is_empty();

    State {
        time: s.time,
        ship: s.ship,
        bullets: cut(s.bullets, &dead_bullets),
        enemy_bullets: cut(s.enemy_bullets, &dead_enemy_bullets),
        shields: cut(s.shields, &dead_shields),
        level: if stage_clear { s.level + 1 } else { s.level },
        aliens,
        exit,
        obj_count: s.obj_count,
        game_over: s.game_over || ship_rammed || ship_shot,
        game_won: score == WIN_SCORE,
        stage_clear,
        score,
    }
}
