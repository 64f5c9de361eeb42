//! Game balance configuration
//!
//! Every tunable defaults to the value in [`crate::consts`]. A page can
//! override any subset with a JSON `<script id="game-config">` block; the
//! native binary accepts a JSON file path. Nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Data-driven tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Player & projectiles ===
    pub player_radius: f32,
    pub projectile_radius: f32,
    pub projectile_speed: f32,

    // === Enemies ===
    pub enemy_min_radius: f32,
    pub enemy_max_radius: f32,
    pub enemy_speed: f32,
    pub spawn_period_ms: u32,

    // === Particles ===
    pub particle_friction: f32,
    pub particle_fade: f32,
    pub particle_max_radius: f32,
    pub particle_spread: f32,

    // === Hits ===
    pub shrink_step: f32,
    pub shrink_floor: f32,
    pub shrink_frames: u32,
    pub hit_tolerance: f32,
    pub shrink_score: u64,
    pub destroy_score: u64,

    // === Rendering ===
    pub trail_fade_alpha: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_radius: PLAYER_RADIUS,
            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,

            enemy_min_radius: ENEMY_MIN_RADIUS,
            enemy_max_radius: ENEMY_MAX_RADIUS,
            enemy_speed: ENEMY_SPEED,
            spawn_period_ms: SPAWN_PERIOD_MS,

            particle_friction: PARTICLE_FRICTION,
            particle_fade: PARTICLE_FADE,
            particle_max_radius: PARTICLE_MAX_RADIUS,
            particle_spread: PARTICLE_SPREAD,

            shrink_step: SHRINK_STEP,
            shrink_floor: SHRINK_FLOOR,
            shrink_frames: SHRINK_FRAMES,
            hit_tolerance: HIT_TOLERANCE,
            shrink_score: SHRINK_SCORE,
            destroy_score: DESTROY_SCORE,

            trail_fade_alpha: TRAIL_FADE_ALPHA,
        }
    }
}

impl GameConfig {
    /// DOM id of the optional JSON config block (used only in wasm32)
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "game-config";

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
            ConfigError::Invalid { field, reason }
        }

        if !(self.player_radius > 0.0) {
            return Err(invalid("player_radius", "must be positive"));
        }
        if !(self.projectile_radius > 0.0) {
            return Err(invalid("projectile_radius", "must be positive"));
        }
        if !(self.projectile_speed > 0.0) {
            return Err(invalid("projectile_speed", "must be positive"));
        }
        if !(self.enemy_min_radius > 0.0) {
            return Err(invalid("enemy_min_radius", "must be positive"));
        }
        if !(self.enemy_max_radius > self.enemy_min_radius) {
            return Err(invalid(
                "enemy_max_radius",
                "must be greater than enemy_min_radius",
            ));
        }
        if !(self.enemy_speed > 0.0) {
            return Err(invalid("enemy_speed", "must be positive"));
        }
        if self.spawn_period_ms == 0 {
            return Err(invalid("spawn_period_ms", "must be non-zero"));
        }
        if !(self.particle_friction > 0.0 && self.particle_friction <= 1.0) {
            return Err(invalid("particle_friction", "must be in (0, 1]"));
        }
        if !(self.particle_fade > 0.0) {
            return Err(invalid("particle_fade", "must be positive"));
        }
        if !(self.particle_max_radius > 0.0) {
            return Err(invalid("particle_max_radius", "must be positive"));
        }
        if !(self.particle_spread >= 0.0) {
            return Err(invalid("particle_spread", "must not be negative"));
        }
        if !(self.shrink_step > 0.0) {
            return Err(invalid("shrink_step", "must be positive"));
        }
        if !(self.shrink_floor >= 0.0) {
            return Err(invalid("shrink_floor", "must not be negative"));
        }
        if !(self.trail_fade_alpha > 0.0 && self.trail_fade_alpha <= 1.0) {
            return Err(invalid("trail_fade_alpha", "must be in (0, 1]"));
        }
        Ok(())
    }

    /// Load the page's config block, falling back to defaults (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded game config from #{}", Self::ELEMENT_ID);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring game config: {e}");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default game config");
                Self::default()
            }
        }
    }

    /// Load a JSON config file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
