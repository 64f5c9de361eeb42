//! HUD and start overlay

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement};

use crate::error::StartupError;

/// In-game score readout
pub const SCORE_SELECTOR: &str = "#score";
/// Start/game-over overlay
pub const START_MODAL_SELECTOR: &str = "#start-modal";
/// Score shown on the overlay after a session
pub const START_SCORE_SELECTOR: &str = "#start-score";
pub const START_BUTTON_SELECTOR: &str = "#start-btn";
pub const CANVAS_SELECTOR: &str = "canvas";

fn require(document: &Document, selector: &'static str) -> Result<Element, StartupError> {
    document
        .query_selector(selector)?
        .ok_or(StartupError::MissingElement(selector))
}

/// Handles to every DOM element the game writes to
pub struct Hud {
    pub canvas: HtmlCanvasElement,
    pub start_button: Element,
    score: Element,
    start_modal: Element,
    start_score: Element,
}

impl Hud {
    /// Look up all elements; any missing one is a fatal startup error
    pub fn find(document: &Document) -> Result<Self, StartupError> {
        let canvas = require(document, CANVAS_SELECTOR)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| StartupError::MissingElement(CANVAS_SELECTOR))?;

        Ok(Self {
            canvas,
            start_button: require(document, START_BUTTON_SELECTOR)?,
            score: require(document, SCORE_SELECTOR)?,
            start_modal: require(document, START_MODAL_SELECTOR)?,
            start_score: require(document, START_SCORE_SELECTOR)?,
        })
    }

    pub fn set_score(&self, score: u64) {
        self.score.set_text_content(Some(&score.to_string()));
    }

    pub fn set_final_score(&self, score: u64) {
        self.start_score.set_text_content(Some(&score.to_string()));
    }

    pub fn show_start_modal(&self, show: bool) {
        let style = if show { "display: flex" } else { "display: none" };
        let _ = self.start_modal.set_attribute("style", style);
    }
}
