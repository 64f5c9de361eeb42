//! Platform abstraction layer (browser only)
//!
//! Handles the host side of a session:
//! - Periodic timers (`setInterval`) for the spawner
//! - Display-refresh callbacks (`requestAnimationFrame`) for the frame loop
//! - DOM lookups for the HUD and start overlay

pub mod hud;

pub use hud::Hud;

use wasm_bindgen::prelude::*;

use crate::error::StartupError;

fn window() -> Result<web_sys::Window, StartupError> {
    web_sys::window().ok_or(StartupError::NoWindow)
}

/// A running `setInterval`. Cleared on [`Interval::cancel`] or drop.
pub struct Interval {
    id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: u32, callback: impl FnMut() + 'static) -> Result<Self, StartupError> {
        let callback = Closure::<dyn FnMut()>::new(callback);
        let id = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms.min(i32::MAX as u32) as i32,
        )?;
        Ok(Self {
            id: Some(id),
            _callback: callback,
        })
    }

    /// Stop further ticks. The closure stays alive until drop, so this is
    /// safe to call from inside the callback itself.
    pub fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(w) = web_sys::window() {
                w.clear_interval_with_handle(id);
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// The pending `requestAnimationFrame` request of a frame loop
#[derive(Debug, Default)]
pub struct AnimationFrame {
    id: Option<i32>,
}

impl AnimationFrame {
    /// Schedule `callback` for the next display refresh, replacing any
    /// pending request
    pub fn request(&mut self, callback: impl FnOnce(f64) + 'static) -> Result<(), StartupError> {
        self.cancel();
        let closure = Closure::once(callback);
        let id = window()?.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        self.id = Some(id);
        Ok(())
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(w) = web_sys::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }

    /// Mark the pending request as delivered (call at the top of the callback)
    pub fn fired(&mut self) {
        self.id = None;
    }
}
