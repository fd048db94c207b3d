//! Game state and core simulation types
//!
//! `State` is treated as an immutable value: every transition produces a new
//! snapshot, so the renderer can hold the previous one without locking.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Collision-group and rendering category of a body. Immutable once created;
/// all categories integrate identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Ship,
    Alien,
    Bullet,
    EnemyBullet,
    Shield,
}

impl Category {
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Ship => "ship",
            Category::Alien => "alien",
            Category::Bullet => "bullet",
            Category::EnemyBullet => "enemyBullet",
            Category::Shield => "shield",
        }
    }
}

/// Identity of a body: category plus a serial unique within the category.
///
/// `Display` renders the string the renderer keys its visual proxies on
/// ("alien3", "bullet9"); the singleton ship is just "ship".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId {
    pub category: Category,
    pub serial: u32,
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            Category::Ship => write!(f, "ship"),
            _ => write!(f, "{}{}", self.category.prefix(), self.serial),
        }
    }
}

/// Every object that participates in physics is a Body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    /// Simulation time at spawn; drives bullet expiry
    pub create_time: u64,
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    pub acc: Vec2,
    pub angle: f32,
    pub rotation: f32,
    pub torque: f32,
}

impl Body {
    /// Stamp a circular body with its category and serial; angular state
    /// starts zeroed
    pub fn circle(
        category: Category,
        serial: u32,
        create_time: u64,
        pos: Vec2,
        radius: f32,
        vel: Vec2,
    ) -> Self {
        Self {
            id: BodyId { category, serial },
            create_time,
            pos,
            radius,
            vel,
            acc: Vec2::ZERO,
            angle: 0.0,
            rotation: 0.0,
            torque: 0.0,
        }
    }

    /// The player ship, created once at game start
    pub fn ship() -> Self {
        Self::circle(Category::Ship, 0, 0, SHIP_SPAWN, SHIP_RADIUS, Vec2::ZERO)
    }
}

/// Two fixed rows of aliens: five across the top at y=30, four below at
/// y=90, all sharing one horizontal starting velocity
pub fn spawn_aliens() -> Vec<Body> {
    (0..START_ALIEN_COUNT)
        .map(|i| {
            let pos = if i <= 4 {
                Vec2::new(i as f32 * 75.0 + 250.0, 30.0)
            } else {
                Vec2::new(i as f32 * 75.0 - 90.0, 90.0)
            };
            Body::circle(
                Category::Alien,
                i,
                0,
                pos,
                ALIEN_RADIUS,
                Vec2::new(ALIEN_START_SPEED, 0.0),
            )
        })
        .collect()
}

/// Sixty stationary shield segments along one row, clustered into three
/// defensive groups
pub fn spawn_shields() -> Vec<Body> {
    (0..START_SHIELD_COUNT)
        .map(|i| {
            let x = if i <= 20 {
                i as f32 * 5.0 + 80.0
            } else if i <= 40 {
                i as f32 * 5.0 + 230.0
            } else {
                i as f32 * 5.0 + 380.0
            };
            Body::circle(
                Category::Shield,
                i,
                0,
                Vec2::new(x, SHIELD_ROW_Y),
                SHIELD_RADIUS,
                Vec2::ZERO,
            )
        })
        .collect()
}

/// Complete simulation snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Ticks elapsed on the fixed-rate clock
    pub time: u64,
    pub ship: Body,
    pub bullets: Vec<Body>,
    pub enemy_bullets: Vec<Body>,
    pub aliens: Vec<Body>,
    pub shields: Vec<Body>,
    /// Bodies that left the simulation this tick, for renderer cleanup.
    /// Replaced every tick, never accumulated.
    pub exit: Vec<Body>,
    /// Mints serials for spawned bullets
    pub obj_count: u32,
    pub game_over: bool,
    pub game_won: bool,
    pub stage_clear: bool,
    pub score: u32,
    pub level: u32,
}

impl State {
    /// Initial state of the game; restart leads back here
    pub fn initial() -> Self {
        Self {
            time: 0,
            ship: Body::ship(),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            aliens: spawn_aliens(),
            shields: spawn_shields(),
            exit: Vec::new(),
            obj_count: START_ALIEN_COUNT,
            game_over: false,
            game_won: false,
            stage_clear: false,
            score: 0,
            level: 1,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let s = State::initial();
        assert_eq!(s.aliens.len(), 9);
        assert_eq!(s.shields.len(), 60);
        assert!(s.bullets.is_empty());
        assert!(s.enemy_bullets.is_empty());
        assert!(s.exit.is_empty());
        assert_eq!(s.obj_count, 9);
        assert_eq!(s.level, 1);
        assert_eq!(s.score, 0);
        assert!(!s.game_over && !s.game_won && !s.stage_clear);
    }

    #[test]
    fn test_alien_rows() {
        let aliens = spawn_aliens();
        assert_eq!(aliens[0].pos, Vec2::new(250.0, 30.0));
        assert_eq!(aliens[4].pos, Vec2::new(550.0, 30.0));
        assert_eq!(aliens[5].pos, Vec2::new(285.0, 90.0));
        assert_eq!(aliens[8].pos, Vec2::new(510.0, 90.0));
        assert!(aliens.iter().all(|a| a.vel == Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn test_shield_clusters() {
        let shields = spawn_shields();
        assert!(shields.iter().all(|s| s.pos.y == SHIELD_ROW_Y));
        assert!(shields.iter().all(|s| s.vel == Vec2::ZERO));
        // Cluster boundaries: a 150px gap opens after index 20 and 40
        assert_eq!(shields[20].pos.x, 180.0);
        assert_eq!(shields[21].pos.x, 335.0);
        assert_eq!(shields[40].pos.x, 430.0);
        assert_eq!(shields[41].pos.x, 585.0);
    }

    #[test]
    fn test_body_id_display() {
        let alien = &spawn_aliens()[3];
        assert_eq!(alien.id.to_string(), "alien3");
        assert_eq!(Body::ship().id.to_string(), "ship");
        let b = Body::circle(
            Category::EnemyBullet,
            12,
            0,
            Vec2::ZERO,
            BULLET_RADIUS,
            Vec2::ZERO,
        );
        assert_eq!(b.id.to_string(), "enemyBullet12");
    }

    #[test]
    fn test_ids_unique_within_initial_state() {
        use std::collections::HashSet;
        let s = State::initial();
        let mut seen = HashSet::new();
        for b in s.aliens.iter().chain(s.shields.iter()).chain([&s.ship]) {
            assert!(seen.insert(b.id), "duplicate id {}", b.id);
        }
    }
}
