//! Mount-time errors.
//!
//! Only setup can fail. Once mounted, event handling absorbs everything.

use glide_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No global window")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Selector {0:?} matched nothing")]
    NotFound(String),

    #[error("Invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Element {0:?} is not an HTML element")]
    NotHtmlElement(String),

    #[error("Could not listen for {event:?}: {message}")]
    Listen { event: String, message: String },

    #[error("Could not schedule timer: {0}")]
    Timer(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Best-effort text of a JS exception.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
