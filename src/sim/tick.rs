//! Per-frame simulation step
//!
//! Order within a frame: particles, then projectiles, then enemies (with
//! their collision checks). Structural removals of projectiles and enemies
//! are collected while iterating and applied once the pass completes.

use glam::Vec2;
use rand::Rng;

use super::collision::{circle_outside_rect, circles_touch};
use super::state::{Circle, GameEvent, GameState, Particle};
use crate::config::GameConfig;

/// Entity IDs to remove after the current pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingRemovals {
    pub projectiles: Vec<u32>,
    pub enemies: Vec<u32>,
}

impl PendingRemovals {
    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty() && self.enemies.is_empty()
    }

    /// Remove every listed entity still present. IDs that are already gone
    /// are ignored, so applying twice is harmless.
    pub fn apply(&self, state: &mut GameState) {
        if !self.projectiles.is_empty() {
            state
                .projectiles
                .retain(|p| !self.projectiles.contains(&p.id));
        }
        if !self.enemies.is_empty() {
            state.enemies.retain(|e| !self.enemies.contains(&e.id));
        }
    }
}

/// Advance the session by one frame and report what happened
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_playing() {
        return events;
    }
    state.frame += 1;

    let config = &state.config;

    // Update first, then prune, so a particle leaves on the frame it fades out
    state.particles.retain_mut(|particle| {
        particle.update(config.particle_friction, config.particle_fade);
        !particle.is_expired()
    });

    let mut pending = PendingRemovals::default();

    for projectile in &mut state.projectiles {
        projectile.update();
        let body = &projectile.body;
        if circle_outside_rect(body.pos, body.radius, state.arena.width, state.arena.height) {
            pending.projectiles.push(projectile.id);
        }
    }

    let player = state.player.body;
    let mut player_hit = false;

    for enemy in &mut state.enemies {
        enemy.update();

        if circles_touch(
            player.pos,
            player.radius,
            enemy.body.pos,
            enemy.body.radius,
            config.hit_tolerance,
        ) {
            log::debug!("Enemy {} reached the player", enemy.id);
            player_hit = true;
            break;
        }

        for projectile in &state.projectiles {
            if !circles_touch(
                projectile.body.pos,
                projectile.body.radius,
                enemy.body.pos,
                enemy.body.radius,
                config.hit_tolerance,
            ) {
                continue;
            }

            spawn_explosion(
                &mut state.particles,
                &mut state.rng,
                config,
                projectile.body.pos,
                &enemy.body,
            );

            let shrunk = enemy.body.radius - config.shrink_step;
            if shrunk > config.shrink_floor {
                enemy.shrink_to(shrunk, config.shrink_frames);
                state.score += config.shrink_score;
                events.push(GameEvent::EnemyShrunk {
                    enemy_id: enemy.id,
                    target_radius: shrunk,
                });
                pending.projectiles.push(projectile.id);
            } else {
                state.score += config.destroy_score;
                log::debug!("Enemy {} destroyed", enemy.id);
                events.push(GameEvent::EnemyDestroyed { enemy_id: enemy.id });
                pending.enemies.push(enemy.id);
                pending.projectiles.push(projectile.id);
            }
            events.push(GameEvent::ScoreChanged { score: state.score });
        }
    }

    if !pending.is_empty() {
        pending.apply(state);
    }

    if player_hit {
        state.end_session();
        events.push(GameEvent::GameOver {
            final_score: state.score,
        });
    }

    events
}

/// Burst `2 * radius` particles in the enemy's color at the impact point
fn spawn_explosion<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    config: &GameConfig,
    at: Vec2,
    enemy: &Circle,
) {
    let count = (enemy.radius * 2.0) as usize;
    particles.reserve(count);
    for _ in 0..count {
        let radius = rng.random::<f32>() * config.particle_max_radius;
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * (rng.random::<f32>() * config.particle_spread),
            (rng.random::<f32>() - 0.5) * (rng.random::<f32>() * config.particle_spread),
        );
        particles.push(Particle::new(at, radius, enemy.color, vel));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Arena, Color, Enemy, Projectile, SessionPhase};

    fn playing() -> GameState {
        let mut state = GameState::new(Arena::new(800.0, 600.0), GameConfig::default(), 12345);
        state.start();
        state
    }

    fn add_enemy(state: &mut GameState, pos: Vec2, radius: f32) -> u32 {
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            body: Circle::new(pos, radius, Color::Hsl { hue: 200.0 }),
            vel: Vec2::ZERO,
            shrink: None,
        });
        id
    }

    fn add_projectile(state: &mut GameState, pos: Vec2) -> u32 {
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            body: Circle::new(pos, 5.0, Color::White),
            vel: Vec2::ZERO,
        });
        id
    }

    #[test]
    fn test_tick_idle_does_nothing() {
        let mut state = GameState::new(Arena::new(800.0, 600.0), GameConfig::default(), 1);
        add_enemy(&mut state, Vec2::new(100.0, 100.0), 10.0);
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.frame, 0);
        assert_eq!(state.enemies[0].body.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_large_enemy_shrinks() {
        let mut state = playing();
        let enemy = add_enemy(&mut state, Vec2::new(100.0, 100.0), 25.0);
        let projectile = add_projectile(&mut state, Vec2::new(100.0, 100.0));

        let events = tick(&mut state);
        assert_eq!(state.score, 100);
        assert!(state.projectiles.iter().all(|p| p.id != projectile));
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].target_radius(), 15.0);
        assert_eq!(state.particles.len(), 50);
        assert!(events.contains(&GameEvent::EnemyShrunk {
            enemy_id: enemy,
            target_radius: 15.0,
        }));
        assert!(events.contains(&GameEvent::ScoreChanged { score: 100 }));

        // The shrink is animated, not instant
        tick(&mut state);
        let r = state.enemies[0].body.radius;
        assert!(r < 25.0 && r > 15.0);

        for _ in 0..state.config.shrink_frames {
            tick(&mut state);
        }
        assert_eq!(state.enemies[0].body.radius, 15.0);
    }

    #[test]
    fn test_small_enemy_destroyed() {
        let mut state = playing();
        let enemy = add_enemy(&mut state, Vec2::new(100.0, 100.0), 14.0);
        add_projectile(&mut state, Vec2::new(110.0, 100.0));

        let events = tick(&mut state);
        assert_eq!(state.score, 250);
        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.particles.len(), 28);
        assert!(events.contains(&GameEvent::EnemyDestroyed { enemy_id: enemy }));
        assert!(events.contains(&GameEvent::ScoreChanged { score: 250 }));
    }

    #[test]
    fn test_explosion_particles_at_impact() {
        let mut state = playing();
        add_enemy(&mut state, Vec2::new(100.0, 100.0), 14.0);
        let impact = Vec2::new(110.0, 100.0);
        add_projectile(&mut state, impact);

        tick(&mut state);
        for p in &state.particles {
            assert_eq!(p.body.color, Color::Hsl { hue: 200.0 });
            assert!(p.body.radius >= 0.0 && p.body.radius < 2.0);
            // Spawned at the impact and moved at most one damped step
            assert!(p.body.pos.distance(impact) < 4.0 * 2f32.sqrt());
            assert!(p.vel.x.abs() < 4.0 && p.vel.y.abs() < 4.0);
        }
    }

    #[test]
    fn test_projectile_hits_every_enemy_it_touches_this_frame() {
        let mut state = playing();
        add_enemy(&mut state, Vec2::new(100.0, 100.0), 14.0);
        add_enemy(&mut state, Vec2::new(100.0, 110.0), 14.0);
        add_projectile(&mut state, Vec2::new(100.0, 105.0));

        tick(&mut state);
        assert_eq!(state.score, 500);
        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_offscreen_projectile_removed_after_pass() {
        let mut state = playing();
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            body: Circle::new(Vec2::new(-4.0, 300.0), 5.0, Color::White),
            vel: Vec2::new(-5.0, 0.0),
        });
        let keep = add_projectile(&mut state, Vec2::new(200.0, 300.0));

        tick(&mut state);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].id, keep);
    }

    #[test]
    fn test_enemy_touching_player_ends_game() {
        let mut state = playing();
        add_enemy(&mut state, Vec2::new(405.0, 300.0), 5.0);
        add_projectile(&mut state, Vec2::new(405.0, 300.0));

        let events = tick(&mut state);
        assert_eq!(state.phase, SessionPhase::GameOver);
        assert_eq!(events, vec![GameEvent::GameOver { final_score: 0 }]);
        // No projectile checks for the enemy that ended the game
        assert!(state.particles.is_empty());

        // Nothing advances after game over
        assert!(tick(&mut state).is_empty());
    }

    #[test]
    fn test_game_over_keeps_score() {
        let mut state = playing();
        add_enemy(&mut state, Vec2::new(100.0, 100.0), 14.0);
        add_projectile(&mut state, Vec2::new(100.0, 100.0));
        add_enemy(&mut state, Vec2::new(400.0, 315.0), 6.0);

        let events = tick(&mut state);
        assert_eq!(state.phase, SessionPhase::GameOver);
        assert_eq!(events.last(), Some(&GameEvent::GameOver { final_score: 250 }));
    }

    #[test]
    fn test_particles_fade_and_prune() {
        let mut state = playing();
        state.particles.push(Particle::new(
            Vec2::new(10.0, 10.0),
            1.0,
            Color::White,
            Vec2::new(1.0, 0.0),
        ));

        let mut last_alpha = 1.0;
        let mut frames = 0;
        while !state.particles.is_empty() {
            tick(&mut state);
            frames += 1;
            if let Some(p) = state.particles.first() {
                assert!(p.alpha < last_alpha);
                assert!(p.alpha > 0.0);
                last_alpha = p.alpha;
            }
            assert!(frames <= 101, "particle outlived its fade");
        }
        assert!(frames >= 99);
    }

    #[test]
    fn test_particle_removal_skips_nobody() {
        let mut state = playing();
        for alpha in [0.005, 0.5, 0.005, 0.5] {
            let mut p = Particle::new(Vec2::ZERO, 1.0, Color::White, Vec2::new(1.0, 0.0));
            p.alpha = alpha;
            state.particles.push(p);
        }

        tick(&mut state);
        assert_eq!(state.particles.len(), 2);
        for p in &state.particles {
            assert!((p.alpha - 0.49).abs() < 1e-6);
            assert!((p.body.pos.x - 0.99).abs() < 1e-6);
        }
    }

    #[test]
    fn test_pending_removals_idempotent() {
        let mut state = playing();
        let enemy = add_enemy(&mut state, Vec2::new(100.0, 100.0), 20.0);
        let projectile = add_projectile(&mut state, Vec2::new(600.0, 100.0));
        let pending = PendingRemovals {
            projectiles: vec![projectile, projectile],
            enemies: vec![enemy],
        };
        pending.apply(&mut state);
        pending.apply(&mut state);
        assert!(state.projectiles.is_empty());
        assert!(state.enemies.is_empty());

        // Stale IDs after a reset are no-ops
        state.start();
        add_enemy(&mut state, Vec2::new(100.0, 100.0), 20.0);
        pending.apply(&mut state);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_determinism() {
        use crate::sim::spawner::spawn_enemy;

        let run = || {
            let mut state = playing();
            for frame in 0..600 {
                if frame % 60 == 0 {
                    spawn_enemy(&mut state);
                }
                if frame % 15 == 0 {
                    if let Some(target) = state.enemies.first().map(|e| e.body.pos) {
                        state.fire(target);
                    }
                }
                tick(&mut state);
            }
            state
        };

        let a = run();
        let b = run();
        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.enemies, b.enemies);
        assert_eq!(a.particles.len(), b.particles.len());
    }
}
