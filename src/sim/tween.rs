//! Radius interpolation for the enemy shrink animation

/// Animates a radius from `from` to `to` over a fixed number of frames
/// with a quadratic ease-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusTween {
    pub from: f32,
    pub to: f32,
    pub frames: u32,
    pub elapsed: u32,
}

impl RadiusTween {
    pub fn new(from: f32, to: f32, frames: u32) -> Self {
        Self {
            from,
            to,
            frames: frames.max(1),
            elapsed: 0,
        }
    }

    /// Advance one frame and return the radius for that frame
    pub fn step(&mut self) -> f32 {
        if self.elapsed < self.frames {
            self.elapsed += 1;
        }
        self.sample()
    }

    /// Radius at the current progress
    pub fn sample(&self) -> f32 {
        let t = self.elapsed as f32 / self.frames as f32;
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.frames
    }
}
