//! Canvas 2D backend

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::error::StartupError;

/// A [`Surface`] backed by a `<canvas>` 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, StartupError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(StartupError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| StartupError::NoContext2d)?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, style: &str) {
        self.ctx.set_fill_style_str(style);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str, alpha: f32) {
        let translucent = alpha < 1.0;
        if translucent {
            self.ctx.save();
            self.ctx.set_global_alpha(alpha as f64);
        }

        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
        self.ctx.set_fill_style_str(style);
        self.ctx.fill();

        if translucent {
            self.ctx.restore();
        }
    }
}
