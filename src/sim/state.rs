//! Game state and core simulation types
//!
//! One [`GameState`] owns the whole session: the player, the three live
//! collections, the score and the RNG. Entities hold no back-references.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::tween::RadiusTween;
use crate::config::GameConfig;
use crate::direction_to;

/// Fill color of an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    White,
    /// Saturation and lightness are fixed at 50%
    Hsl { hue: f32 },
}

impl Color {
    /// CSS color string for a canvas `fillStyle`
    pub fn css(&self) -> String {
        match self {
            Color::White => "white".to_string(),
            Color::Hsl { hue } => format!("hsl({hue}, 50%, 50%)"),
        }
    }
}

/// The geometric shape every entity shares
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Circle {
    pub fn new(pos: Vec2, radius: f32, color: Color) -> Self {
        Self { pos, radius, color }
    }
}

/// Fixed at the arena center for the whole session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub body: Circle,
}

/// A shot fired from the player toward a click point
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub body: Circle,
    pub vel: Vec2,
}

impl Projectile {
    pub fn update(&mut self) {
        self.body.pos += self.vel;
    }
}

/// An orb homing in on the player from outside the arena
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub body: Circle,
    pub vel: Vec2,
    /// Active shrink animation, if any
    pub shrink: Option<RadiusTween>,
}

impl Enemy {
    /// Move one frame and advance any running shrink animation
    pub fn update(&mut self) {
        self.body.pos += self.vel;
        if let Some(tween) = self.shrink.as_mut() {
            self.body.radius = tween.step();
            if tween.is_finished() {
                self.shrink = None;
            }
        }
    }

    /// Start animating toward `target`, replacing any running animation
    pub fn shrink_to(&mut self, target: f32, frames: u32) {
        self.shrink = Some(RadiusTween::new(self.body.radius, target, frames));
    }

    /// Radius the enemy will settle at
    pub fn target_radius(&self) -> f32 {
        self.shrink.map_or(self.body.radius, |t| t.to)
    }
}

/// Explosion debris: drifts, slows down and fades out
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub body: Circle,
    pub vel: Vec2,
    /// Opacity, starts at 1
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, radius: f32, color: Color, vel: Vec2) -> Self {
        Self {
            body: Circle::new(pos, radius, color),
            vel,
            alpha: 1.0,
        }
    }

    pub fn update(&mut self, friction: f32, fade: f32) {
        self.vel *= friction;
        self.body.pos += self.vel;
        self.alpha -= fade;
    }

    pub fn is_expired(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Drawable area in screen pixels, origin top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Page loaded, start overlay shown
    Idle,
    /// Active gameplay
    Playing,
    /// An enemy reached the player
    GameOver,
}

/// Something the host should react to (score sinks, overlay)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ScoreChanged { score: u64 },
    EnemyShrunk { enemy_id: u32, target_radius: f32 },
    EnemyDestroyed { enemy_id: u32 },
    GameOver { final_score: u64 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub config: GameConfig,
    pub rng: Pcg32,
    pub phase: SessionPhase,
    pub score: u64,
    /// Frames simulated this session
    pub frame: u64,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an idle session; nothing moves until [`GameState::start`]
    pub fn new(arena: Arena, config: GameConfig, seed: u64) -> Self {
        let player = Self::make_player(&arena, &config);
        Self {
            arena,
            config,
            rng: Pcg32::seed_from_u64(seed),
            phase: SessionPhase::Idle,
            score: 0,
            frame: 0,
            player,
            projectiles: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            next_id: 1,
        }
    }

    fn make_player(arena: &Arena, config: &GameConfig) -> Player {
        Player {
            body: Circle::new(arena.center(), config.player_radius, Color::White),
        }
    }

    /// Begin a fresh session, discarding everything from the previous one
    pub fn start(&mut self) {
        self.player = Self::make_player(&self.arena, &self.config);
        self.projectiles.clear();
        self.enemies.clear();
        self.particles.clear();
        self.score = 0;
        self.frame = 0;
        self.phase = SessionPhase::Playing;
        log::info!("Session started");
    }

    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    /// Allocate a new entity ID (never reused, even across sessions)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Fire a projectile from the player toward `target`
    pub fn fire(&mut self, target: Vec2) -> Option<u32> {
        if !self.is_playing() {
            return None;
        }
        let origin = self.player.body.pos;
        let vel = direction_to(origin, target) * self.config.projectile_speed;
        let id = self.next_entity_id();
        self.projectiles.push(Projectile {
            id,
            body: Circle::new(origin, self.config.projectile_radius, Color::White),
            vel,
        });
        Some(id)
    }

    /// Add points and return the new score
    pub fn award(&mut self, points: u64) -> u64 {
        self.score += points;
        self.score
    }

    /// Stop the session; the host cancels its frame loop and spawner
    pub fn end_session(&mut self) {
        if self.phase == SessionPhase::Playing {
            self.phase = SessionPhase::GameOver;
            log::info!("Game over, final score {}", self.score);
        }
    }
}
