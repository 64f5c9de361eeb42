//! Canvas Shooter - defend the center against incoming orbs
//!
//! Core modules:
//! - `sim`: Simulation (entities, spawning, collisions, session state)
//! - `renderer`: Canvas 2D drawing of a session
//! - `platform`: Browser timers and DOM glue (wasm only)
//! - `config`: Data-driven game balance

pub mod config;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, StartupError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player radius, fixed for the whole session
    pub const PLAYER_RADIUS: f32 = 10.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Pixels per frame
    pub const PROJECTILE_SPEED: f32 = 5.0;

    /// Enemy radius is drawn from [MIN, MAX)
    pub const ENEMY_MIN_RADIUS: f32 = 4.0;
    pub const ENEMY_MAX_RADIUS: f32 = 30.0;
    /// Pixels per frame (unit vector toward the center)
    pub const ENEMY_SPEED: f32 = 1.0;
    /// Milliseconds between enemy spawns
    pub const SPAWN_PERIOD_MS: u32 = 1000;

    /// Per-frame multiplicative velocity damping for particles
    pub const PARTICLE_FRICTION: f32 = 0.99;
    /// Alpha lost per frame
    pub const PARTICLE_FADE: f32 = 0.01;
    /// Particle radius is drawn from [0, MAX)
    pub const PARTICLE_MAX_RADIUS: f32 = 2.0;
    /// Velocity spread: each axis is (r1 - 0.5) * (r2 * SPREAD)
    pub const PARTICLE_SPREAD: f32 = 8.0;

    /// Radius removed by a non-fatal hit
    pub const SHRINK_STEP: f32 = 10.0;
    /// A hit shrinks the enemy only if the result stays above this
    pub const SHRINK_FLOOR: f32 = 5.0;
    /// Shrink animation length (~0.5 s at 60 Hz)
    pub const SHRINK_FRAMES: u32 = 30;

    /// Circles touch when `dist - r1 - r2 < HIT_TOLERANCE`
    pub const HIT_TOLERANCE: f32 = 1.0;

    /// Score awards
    pub const SHRINK_SCORE: u64 = 100;
    pub const DESTROY_SCORE: u64 = 250;

    /// Alpha of the black overlay that fades the previous frame
    pub const TRAIL_FADE_ALPHA: f32 = 0.1;

    /// Nominal frame length used by hosts without a display clock
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}

/// Unit vector pointing from `from` toward `to`, via atan2 so that a zero
/// offset yields (1, 0) instead of NaN
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    Vec2::new(angle.cos(), angle.sin())
}
