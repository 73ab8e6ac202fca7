//! Interaction Errors

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum InteractionError {
    /// A DOM call threw
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("no element matches `{0}`")]
    MissingElement(String),

    #[error("`{0}` is not a count")]
    InvalidCount(String),

    #[error("CSRF token field `{0}` not found")]
    MissingCsrfToken(String),

    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The endpoint answered but reported a failure in its body
    #[error("server error: {0}")]
    Server(String),
}

impl From<JsValue> for InteractionError {
    fn from(value: JsValue) -> Self {
        InteractionError::Dom(describe_js(&value))
    }
}

/// Best-effort text for a thrown JS value
pub fn describe_js(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
