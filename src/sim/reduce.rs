//! The state reducer: one input event in, the next state out
//!
//! Events from every source (clock, player keys, alien timers, restart) are
//! folded into the state strictly in arrival order. The reducer is a total
//! function over (State, GameEvent) pairs; there is no malformed state and
//! no fallible path.

use glam::Vec2;

use super::alien;
use super::collision::handle_collisions;
use super::physics::move_body;
use super::state::{Body, Category, State};
use crate::consts::{BULLET_LIFETIME_TICKS, BULLET_RADIUS, BULLET_SPEED, MUZZLE_OFFSET};
use crate::unit_vec_in_direction;

/// Abstract input commands fed to the reducer, one at a time. The event
/// source merges the fixed-rate clock, the two alien timers, and discrete
/// player commands into a single ordered stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Fixed-rate clock advance; `elapsed` is the tick counter
    Tick { elapsed: u64 },
    /// Directional key press: signed horizontal thrust
    MoveShip { distance: f32 },
    /// Directional key release
    StopShip,
    /// Fire key press
    Shoot,
    /// Fixed-rate alien movement trigger (same period as the clock)
    AlienDirectionTick,
    /// Slower fixed-rate alien fire trigger
    AlienFireTick,
    /// Restart key press
    Restart,
}

/// Fold one event into the state.
///
/// Terminal flags short-circuit everything else, checked in priority order
/// `game_over`, then `game_won`, then `stage_clear`; each resets to the
/// initial layout carrying over what its policy preserves and handing the
/// displaced bodies to `exit` for renderer cleanup.
pub fn reduce(s: &State, event: GameEvent) -> State {
    if s.game_over {
        // A lost run keeps nothing; live projectiles leave for cleanup
        let mut exit = s.bullets.clone();
        exit.extend(s.enemy_bullets.iter().cloned());
        return State {
            exit,
            ..State::initial()
        };
    }

    if s.game_won {
        // Victory halts at the initial layout, keeping the earned score and
        // level (which re-raises the flag on the next collision pass, so the
        // game stays parked here until a restart)
        let mut exit = s.bullets.clone();
        exit.extend(s.enemy_bullets.iter().cloned());
        return State {
            score: s.score,
            level: s.level,
            exit,
            ..State::initial()
        };
    }

    if s.stage_clear {
        // Next wave: fresh aliens, carried-over score, level, and shields in
        // whatever damaged condition they survived in
        let mut exit = s.enemy_bullets.clone();
        exit.extend(s.aliens.iter().cloned());
        exit.extend(s.bullets.iter().cloned());
        return State {
            score: s.score,
            level: s.level,
            shields: s.shields.clone(),
            exit,
            ..State::initial()
        };
    }

    match event {
        GameEvent::MoveShip { distance } => {
            let mut next = s.clone();
            next.ship.vel -= unit_vec_in_direction(90.0) * distance;
            next
        }
        GameEvent::StopShip => {
            let mut next = s.clone();
            next.ship.vel = Vec2::ZERO;
            next
        }
        GameEvent::Shoot => {
            let mut next = s.clone();
            let muzzle = next.ship.pos + unit_vec_in_direction(0.0) * MUZZLE_OFFSET;
            next.bullets.push(Body::circle(
                Category::Bullet,
                next.obj_count,
                next.time,
                muzzle,
                BULLET_RADIUS,
                Vec2::new(0.0, BULLET_SPEED),
            ));
            next.obj_count += 1;
            next
        }
        GameEvent::AlienDirectionTick => alien::change_direction(s.clone()),
        GameEvent::AlienFireTick => alien::fire(s.clone()),
        GameEvent::Restart => {
            let mut exit = s.aliens.clone();
            exit.extend(s.bullets.iter().cloned());
            exit.extend(s.enemy_bullets.iter().cloned());
            State {
                exit,
                ..State::initial()
            }
        }
        GameEvent::Tick { elapsed } => tick(s, elapsed),
    }
}

/// Plain clock tick: expire old bullets into `exit`, integrate every live
/// body, advance the clock, then resolve collisions.
fn tick(s: &State, elapsed: u64) -> State {
    let expired =
        |b: &Body| elapsed.saturating_sub(b.create_time) > BULLET_LIFETIME_TICKS;

    let (expired_bullets, live_bullets): (Vec<Body>, Vec<Body>) =
        s.bullets.iter().cloned().partition(&expired);
    let (expired_enemy_bullets, live_enemy_bullets): (Vec<Body>, Vec<Body>) =
        s.enemy_bullets.iter().cloned().partition(&expired);

    let mut exit = expired_bullets;
    exit.extend(expired_enemy_bullets);

    handle_collisions(State {
        ship: move_body(&s.ship),
        bullets: live_bullets.iter().map(move_body).collect(),
        enemy_bullets: live_enemy_bullets.iter().map(move_body).collect(),
        aliens: s.aliens.iter().map(move_body).collect(),
        shields: s.shields.iter().map(move_body).collect(),
        exit,
        time: elapsed,
        ..s.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::spawn_aliens;

    fn tick_n(mut s: State, n: u64) -> State {
        for _ in 0..n {
            let elapsed = s.time + 1;
            s = reduce(&s, GameEvent::Tick { elapsed });
        }
        s
    }

    #[test]
    fn test_move_and_stop_ship() {
        let s = State::initial();
        let moving = reduce(&s, GameEvent::MoveShip { distance: -SHIP_THRUST });
        assert!((moving.ship.vel.x - 5.0).abs() < 1e-4);

        let ticked = reduce(&moving, GameEvent::Tick { elapsed: 1 });
        assert!(ticked.ship.pos.x < s.ship.pos.x);

        let stopped = reduce(&ticked, GameEvent::StopShip);
        assert_eq!(stopped.ship.vel, Vec2::ZERO);
    }

    #[test]
    fn test_shoot_spawns_bullet_ahead_of_ship() {
        let s = State::initial();
        let next = reduce(&s, GameEvent::Shoot);
        assert_eq!(next.bullets.len(), 1);
        assert_eq!(next.obj_count, s.obj_count + 1);

        let bullet = &next.bullets[0];
        assert_eq!(bullet.id.to_string(), "bullet9");
        assert!((bullet.pos.y - (s.ship.pos.y - 20.0)).abs() < 1e-4);
        assert_eq!(bullet.vel, Vec2::new(0.0, BULLET_SPEED));

        // And it climbs the screen on the next tick
        let ticked = reduce(&next, GameEvent::Tick { elapsed: 1 });
        assert!(ticked.bullets[0].pos.y < bullet.pos.y);
    }

    #[test]
    fn test_tick_advances_time_and_aliens() {
        let s = State::initial();
        let next = reduce(&s, GameEvent::Tick { elapsed: 1 });
        assert_eq!(next.time, 1);
        // Positive x velocity drifts aliens left under the
        // position-minus-velocity convention
        assert_eq!(next.aliens[0].pos.x, s.aliens[0].pos.x - 2.0);
        assert!(next.exit.is_empty());
    }

    #[test]
    fn test_bullet_expires_after_seventy_ticks() {
        let mut s = State::initial();
        s.bullets.push(Body::circle(
            Category::Bullet,
            s.obj_count,
            0,
            Vec2::new(400.0, 250.0),
            BULLET_RADIUS,
            Vec2::ZERO,
        ));
        s.obj_count += 1;

        let s = tick_n(s, 70);
        assert_eq!(s.bullets.len(), 1, "bullet should survive through tick 70");

        let s = reduce(&s, GameEvent::Tick { elapsed: 71 });
        assert!(s.bullets.is_empty());
        let exited: Vec<_> = s.exit.iter().map(|b| b.id.to_string()).collect();
        assert_eq!(exited, vec!["bullet9".to_string()]);

        // exit is replaced, not accumulated: the id appears exactly once ever
        let s = reduce(&s, GameEvent::Tick { elapsed: 72 });
        assert!(s.exit.is_empty());
    }

    #[test]
    fn test_restart_returns_initial_state_with_cleanup_exit() {
        let s = State::initial();
        let s = reduce(&s, GameEvent::Shoot);
        let s = reduce(&s, GameEvent::Tick { elapsed: 1 });
        let s = reduce(&s, GameEvent::AlienFireTick);

        let expected_exit = s.aliens.len() + s.bullets.len() + s.enemy_bullets.len();
        let mut next = reduce(&s, GameEvent::Restart);
        assert_eq!(next.exit.len(), expected_exit);

        next.exit.clear();
        assert_eq!(next, State::initial());
    }

    #[test]
    fn test_game_over_short_circuits_any_event() {
        let mut s = State::initial();
        s.game_over = true;
        s.score = 120;
        s.bullets.push(Body::circle(
            Category::Bullet,
            9,
            0,
            Vec2::new(400.0, 250.0),
            BULLET_RADIUS,
            Vec2::ZERO,
        ));

        let next = reduce(&s, GameEvent::Shoot);
        assert_eq!(next.score, 0);
        assert_eq!(next.level, 1);
        assert_eq!(next.exit.len(), 1);
        assert!(!next.game_over);
    }

    #[test]
    fn test_game_won_preserves_score_and_level() {
        let mut s = State::initial();
        s.game_won = true;
        s.score = 270;
        s.level = 4;

        let next = reduce(&s, GameEvent::Tick { elapsed: 500 });
        assert_eq!(next.score, 270);
        assert_eq!(next.level, 4);
        assert_eq!(next.aliens.len(), 9);
        assert_eq!(next.time, 0);
    }

    #[test]
    fn test_stage_clear_preserves_damaged_shields() {
        let mut s = State::initial();
        s.stage_clear = true;
        s.score = 90;
        s.level = 2;
        s.aliens.clear();
        s.shields.truncate(40); // a battered shield line carries over

        let next = reduce(&s, GameEvent::Tick { elapsed: 500 });
        assert_eq!(next.score, 90);
        assert_eq!(next.level, 2);
        assert_eq!(next.shields.len(), 40);
        assert_eq!(next.aliens.len(), 9, "a fresh wave spawns");
    }

    #[test]
    fn test_short_circuit_priority_game_over_first() {
        let mut s = State::initial();
        s.game_over = true;
        s.game_won = true;
        s.stage_clear = true;
        s.score = 270;

        // game_over wins: score is not preserved
        let next = reduce(&s, GameEvent::Tick { elapsed: 1 });
        assert_eq!(next.score, 0);
    }

    #[test]
    fn test_one_alien_one_bullet_end_to_end() {
        let mut s = State::initial();
        s.aliens = vec![Body::circle(
            Category::Alien,
            0,
            0,
            Vec2::new(400.0, 30.0),
            ALIEN_RADIUS,
            Vec2::new(2.0, 0.0),
        )];
        s.bullets.push(Body::circle(
            Category::Bullet,
            9,
            0,
            Vec2::new(400.0, 48.0),
            BULLET_RADIUS,
            Vec2::new(0.0, 5.0),
        ));
        s.obj_count = 10;

        let next = reduce(&s, GameEvent::Tick { elapsed: 1 });
        assert_eq!(next.score, 10);
        assert!(next.aliens.is_empty());
        assert!(next.stage_clear);
        let exited: Vec<_> = next.exit.iter().map(|b| b.id.to_string()).collect();
        assert!(exited.contains(&"bullet9".to_string()));
        assert!(exited.contains(&"alien0".to_string()));
    }

    #[test]
    fn test_identical_event_streams_are_deterministic() {
        let events = [
            GameEvent::MoveShip { distance: SHIP_THRUST },
            GameEvent::Tick { elapsed: 1 },
            GameEvent::AlienDirectionTick,
            GameEvent::Shoot,
            GameEvent::Tick { elapsed: 2 },
            GameEvent::AlienFireTick,
            GameEvent::StopShip,
            GameEvent::Tick { elapsed: 3 },
        ];

        let mut a = State::initial();
        let mut b = State::initial();
        for e in events {
            a = reduce(&a, e);
            b = reduce(&b, e);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_wave_clear_carries_score_into_next_level() {
        // Shoot down the whole wave by teleporting bullets onto each alien
        let mut s = State::initial();
        let aliens = spawn_aliens();
        for (i, alien) in aliens.iter().enumerate() {
            s.bullets.push(Body::circle(
                Category::Bullet,
                s.obj_count + i as u32,
                0,
                alien.pos,
                BULLET_RADIUS,
                Vec2::ZERO,
            ));
        }
        s.obj_count += aliens.len() as u32;

        let cleared = reduce(&s, GameEvent::Tick { elapsed: 1 });
        assert!(cleared.stage_clear);
        assert_eq!(cleared.score, 90);
        assert_eq!(cleared.level, 2);

        // The next event lands on the stage_clear short-circuit
        let next_wave = reduce(&cleared, GameEvent::Tick { elapsed: 2 });
        assert_eq!(next_wave.aliens.len(), 9);
        assert_eq!(next_wave.score, 90);
        assert_eq!(next_wave.level, 2);
        assert!(!next_wave.stage_clear);
        assert_eq!(next_wave.time, 0);
    }
}
