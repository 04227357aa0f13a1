//! Errors raised by the platform glue behind the hooks.

use thiserror::Error;

/// Failure while talking to the host page (browser DOM or webview).
///
/// These never reach rendering: hooks log them and fall back to a
/// harmless default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no global `window` object is available")]
    NoWindow,

    #[error("the window has no `document`")]
    NoDocument,

    #[error("matchMedia is not supported for query `{0}`")]
    MediaQueryUnsupported(String),

    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
