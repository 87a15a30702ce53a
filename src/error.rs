use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum PopupError {
    #[error("host call failed: {0}")]
    Host(String),

    #[error("{0}")]
    Network(String),

    #[error("HTTP error! status: {status}{}", detail_suffix(.message))]
    Status { status: u16, message: Option<String> },

    #[error("invalid JSON from backend: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No response data received")]
    EmptyResponse,

    #[error("Unable to get the current page URL.")]
    NoActiveUrl,

    #[error("invalid popup settings: {0}")]
    Config(String),
}

impl PopupError {
    pub fn host(err: JsValue) -> Self {
        Self::Host(js_error_message(&err))
    }
}

impl From<serde_wasm_bindgen::Error> for PopupError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::Host(err.to_string())
    }
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

/// Best-effort text for a thrown JS value: `Error.message`, a bare string, or
/// the debug form of whatever else was thrown.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_fetch_failure() {
        let bare = PopupError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(bare.to_string(), "HTTP error! status: 500");

        let detailed = PopupError::Status {
            status: 500,
            message: Some("'question'".to_string()),
        };
        assert_eq!(detailed.to_string(), "HTTP error! status: 500 ('question')");
    }

    #[test]
    fn empty_response_keeps_popup_wording() {
        assert_eq!(
            PopupError::EmptyResponse.to_string(),
            "No response data received"
        );
    }
}
