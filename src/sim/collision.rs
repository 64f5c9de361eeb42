//! Circle collision tests
//!
//! Everything in the arena is a circle, so the only queries are
//! circle-circle contact and circle-vs-screen culling.

use glam::Vec2;

/// True when two circles touch or overlap, within `tolerance`:
/// `dist(a, b) - radius_a - radius_b < tolerance`
#[inline]
pub fn circles_touch(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32, tolerance: f32) -> bool {
    a.distance(b) - radius_a - radius_b < tolerance
}

/// True when a circle lies entirely outside the `[0, width] x [0, height]`
/// rectangle on any side
#[inline]
pub fn circle_outside_rect(center: Vec2, radius: f32, width: f32, height: f32) -> bool {
    center.x + radius < 0.0
        || center.x - radius > width
        || center.y + radius < 0.0
        || center.y - radius > height
}
