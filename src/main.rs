//! Headless demo driver
//!
//! Stands in for the out-of-scope renderer: merges the fixed-rate clock, the
//! alien timers, and a short scripted set of player commands into a single
//! channel, folds the stream through the reducer strictly in arrival order,
//! logs the interesting transitions, and prints the final state snapshot as
//! JSON.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use space_invaders::consts::SHIP_THRUST;
use space_invaders::sim::{GameEvent, State, reduce};

/// Clock and alien-movement period
const TICK_PERIOD: Duration = Duration::from_millis(10);
/// Alien fire period
const FIRE_PERIOD: Duration = Duration::from_millis(1000);
/// How many clock ticks the demo runs for
const DEMO_TICKS: u64 = 500;

fn main() {
    env_logger::init();
    log::info!("space-invaders core demo starting");

    let (tx, rx) = mpsc::channel();

    // Fixed-rate clock
    let clock = tx.clone();
    thread::spawn(move || {
        for elapsed in 1.. {
            if clock.send(GameEvent::Tick { elapsed }).is_err() {
                break;
            }
            thread::sleep(TICK_PERIOD);
        }
    });

    // Alien movement trigger, same period as the clock
    let mover = tx.clone();
    thread::spawn(move || {
        while mover.send(GameEvent::AlienDirectionTick).is_ok() {
            thread::sleep(TICK_PERIOD);
        }
    });

    // Alien fire trigger
    let shooter = tx.clone();
    thread::spawn(move || {
        while shooter.send(GameEvent::AlienFireTick).is_ok() {
            thread::sleep(FIRE_PERIOD);
        }
    });

    // Scripted player: strafe left, fire a few shots, strafe back
    thread::spawn(move || {
        let script = [
            (300, GameEvent::MoveShip { distance: -SHIP_THRUST }),
            (700, GameEvent::StopShip),
            (100, GameEvent::Shoot),
            (400, GameEvent::Shoot),
            (400, GameEvent::Shoot),
            (300, GameEvent::MoveShip { distance: SHIP_THRUST }),
            (700, GameEvent::StopShip),
            (100, GameEvent::Shoot),
        ];
        for (delay_ms, event) in script {
            thread::sleep(Duration::from_millis(delay_ms));
            if tx.send(event).is_err() {
                break;
            }
        }
    });

    let mut state = State::initial();
    for event in rx {
        let prev = (state.score, state.level);
        state = reduce(&state, event);

        if state.score != prev.0 {
            log::info!("score: {} -> {}", prev.0, state.score);
        }
        if state.level != prev.1 {
            log::info!("level: {} -> {}", prev.1, state.level);
        }
        if state.game_over {
            log::info!("game over at tick {}", state.time);
        }
        if state.game_won {
            log::info!("victory with score {}", state.score);
        }
        for body in &state.exit {
            log::debug!("exit: {}", body.id);
        }

        if let GameEvent::Tick { elapsed } = event
            && elapsed >= DEMO_TICKS
        {
            break;
        }
    }

    // Final snapshot in the renderer-facing format
    let snapshot = serde_json::to_string_pretty(&state).expect("state serializes");
    println!("{snapshot}");
}
