//! Enemy spawning
//!
//! Enemies appear just outside one edge of the arena and head straight for
//! its center. The host calls [`spawn_enemy`] once per spawn period, either
//! from a periodic timer or through a [`SpawnClock`].

use glam::Vec2;
use rand::Rng;

use super::state::{Arena, Circle, Color, Enemy, GameState};
use crate::config::GameConfig;
use crate::direction_to;

/// Spawn one enemy. Returns `None` once the session is no longer playing,
/// which tells the host to cancel its spawn timer.
pub fn spawn_enemy(state: &mut GameState) -> Option<u32> {
    if !state.is_playing() {
        return None;
    }

    let (body, vel) = roll_enemy(&mut state.rng, &state.arena, &state.config);
    let id = state.next_entity_id();
    log::debug!(
        "Spawned enemy {} at ({:.0}, {:.0}) r={:.1}",
        id,
        body.pos.x,
        body.pos.y,
        body.radius
    );
    state.enemies.push(Enemy {
        id,
        body,
        vel,
        shrink: None,
    });
    Some(id)
}

/// Pick radius, edge position, color and heading for a new enemy
pub fn roll_enemy<R: Rng>(rng: &mut R, arena: &Arena, config: &GameConfig) -> (Circle, Vec2) {
    let radius = rng.random_range(config.enemy_min_radius..config.enemy_max_radius);

    let pos = if rng.random_bool(0.5) {
        // Left or right edge
        let x = if rng.random_bool(0.5) {
            -radius
        } else {
            arena.width + radius
        };
        Vec2::new(x, rng.random::<f32>() * arena.height)
    } else {
        // Top or bottom edge
        let y = if rng.random_bool(0.5) {
            -radius
        } else {
            arena.height + radius
        };
        Vec2::new(rng.random::<f32>() * arena.width, y)
    };

    let color = Color::Hsl {
        hue: rng.random::<f32>() * 360.0,
    };
    let vel = direction_to(pos, arena.center()) * config.enemy_speed;

    (Circle::new(pos, radius, color), vel)
}

/// Converts elapsed wall time into due spawns for hosts without a
/// periodic timer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnClock {
    period_ms: f64,
    elapsed_ms: f64,
}

impl SpawnClock {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: f64::from(period_ms.max(1)),
            elapsed_ms: 0.0,
        }
    }

    /// Advance by `dt_ms` and return how many spawn periods completed
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.elapsed_ms += dt_ms.max(0.0);
        let mut due = 0;
        while self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            due += 1;
        }
        due
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}
