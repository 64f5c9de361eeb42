//! Simulation module
//!
//! All gameplay logic lives here. This module must stay host-agnostic:
//! - Per-frame steps only (velocities are pixels per frame)
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod tween;

pub use collision::{circle_outside_rect, circles_touch};
pub use spawner::{SpawnClock, spawn_enemy};
pub use state::{
    Arena, Circle, Color, Enemy, GameEvent, GameState, Particle, Player, Projectile, SessionPhase,
};
pub use tick::{PendingRemovals, tick};
pub use tween::RadiusTween;
