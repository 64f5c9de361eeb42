//! Rendering
//!
//! The simulation never draws. After each tick the host calls
//! [`draw_frame`] with a [`Surface`]; on the web that is the page's 2D
//! canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::{Circle, GameState};

/// The drawing operations a frame needs
pub trait Surface {
    /// Erase everything
    fn clear(&mut self, width: f32, height: f32);
    /// Fill an axis-aligned rectangle with a CSS color
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, style: &str);
    /// Fill a circle with a CSS color at the given opacity
    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str, alpha: f32);
}

fn draw_circle<S: Surface + ?Sized>(surface: &mut S, circle: &Circle, alpha: f32) {
    // Negative radii are rejected by canvas arc()
    if circle.radius < 0.0 {
        return;
    }
    surface.fill_circle(circle.pos, circle.radius, &circle.color.css(), alpha);
}

/// Draw one frame: fade the previous frame into a trail, then the player,
/// particles, projectiles and enemies in that order
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    let fade = format!("rgba(0, 0, 0, {})", state.config.trail_fade_alpha);
    surface.fill_rect(0.0, 0.0, state.arena.width, state.arena.height, &fade);

    draw_circle(surface, &state.player.body, 1.0);

    for particle in &state.particles {
        draw_circle(surface, &particle.body, particle.alpha.clamp(0.0, 1.0));
    }
    for projectile in &state.projectiles {
        draw_circle(surface, &projectile.body, 1.0);
    }
    for enemy in &state.enemies {
        draw_circle(surface, &enemy.body, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{Arena, Color, Enemy, Particle};

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Rect(String),
        Circle { radius: f32, style: String, alpha: f32 },
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, _width: f32, _height: f32) {
            self.ops.push(Op::Clear);
        }

        fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, style: &str) {
            self.ops.push(Op::Rect(style.to_string()));
        }

        fn fill_circle(&mut self, _center: Vec2, radius: f32, style: &str, alpha: f32) {
            self.ops.push(Op::Circle {
                radius,
                style: style.to_string(),
                alpha,
            });
        }
    }

    #[test]
    fn test_draw_order() {
        let mut state = GameState::new(Arena::new(800.0, 600.0), GameConfig::default(), 7);
        state.start();
        state.fire(Vec2::new(0.0, 0.0));
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            body: Circle::new(Vec2::new(50.0, 50.0), 20.0, Color::Hsl { hue: 10.0 }),
            vel: Vec2::ZERO,
            shrink: None,
        });
        let mut particle = Particle::new(Vec2::ZERO, 1.5, Color::Hsl { hue: 10.0 }, Vec2::ZERO);
        particle.alpha = 0.4;
        state.particles.push(particle);

        let mut recorder = Recorder::default();
        draw_frame(&mut recorder, &state);

        assert_eq!(
            recorder.ops,
            vec![
                Op::Rect("rgba(0, 0, 0, 0.1)".to_string()),
                Op::Circle {
                    radius: 10.0,
                    style: "white".to_string(),
                    alpha: 1.0
                },
                Op::Circle {
                    radius: 1.5,
                    style: "hsl(10, 50%, 50%)".to_string(),
                    alpha: 0.4
                },
                Op::Circle {
                    radius: 5.0,
                    style: "white".to_string(),
                    alpha: 1.0
                },
                Op::Circle {
                    radius: 20.0,
                    style: "hsl(10, 50%, 50%)".to_string(),
                    alpha: 1.0
                },
            ]
        );
    }

    #[test]
    fn test_idle_frame_draws_only_player() {
        let state = GameState::new(Arena::new(320.0, 240.0), GameConfig::default(), 7);
        let mut recorder = Recorder::default();
        draw_frame(&mut recorder, &state);
        assert_eq!(recorder.ops.len(), 2);
        assert!(!recorder.ops.contains(&Op::Clear));
    }
}
