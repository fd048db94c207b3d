//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Random draws seeded from simulation time only
//! - Stable collection order (removal is by body id)
//! - No rendering or platform dependencies

pub mod alien;
pub mod collision;
pub mod physics;
pub mod reduce;
pub mod rng;
pub mod state;

pub use collision::{bodies_collided, handle_collisions};
pub use physics::{clamp_to_bounds, move_body};
pub use reduce::{GameEvent, reduce};
pub use rng::SeededRng;
pub use state::{Body, BodyId, Category, State};
