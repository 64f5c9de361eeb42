//! Error types
//!
//! The simulation itself never fails; errors only come from loading
//! configuration and from acquiring the browser surfaces at startup.

use thiserror::Error;

/// Failure to load or validate a [`GameConfig`](crate::GameConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal startup preconditions (missing window, canvas, or DOM element)
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("required element `{0}` not found")]
    MissingElement(&'static str),

    #[error("canvas has no 2d rendering context")]
    NoContext2d,

    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for StartupError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        StartupError::Js(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<StartupError> for wasm_bindgen::JsValue {
    fn from(err: StartupError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
