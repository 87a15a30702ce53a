use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::PopupConfig;
use crate::error::{js_error_message, PopupError};

#[async_trait(?Send)]
pub trait NoteBackend {
    /// Generates a note for `url` and returns its raw text.
    async fn generate(&self, url: &str) -> Result<String, PopupError>;
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ChatRequest<'a> {
    pub url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<&'a str>,
}

/// Body of `/api/chat`. Successful replies carry `response`; failures carry
/// `error` and a `details` traceback.
#[derive(Deserialize, Debug, Default)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ChatResponse {
    pub fn into_note(self) -> Result<String, PopupError> {
        match self.response {
            Some(note) if !note.is_empty() => Ok(note),
            _ => Err(PopupError::EmptyResponse),
        }
    }
}

/// Maps an HTTP status and body to the generated note.
pub fn interpret_reply(status: u16, body: &str) -> Result<String, PopupError> {
    if !(200..300).contains(&status) {
        let reply = serde_json::from_str::<ChatResponse>(body).unwrap_or_default();
        if let Some(details) = &reply.details {
            log::debug!("backend failure details: {details}");
        }
        return Err(PopupError::Status {
            status,
            message: reply.error,
        });
    }

    let reply: ChatResponse = serde_json::from_str(body)?;
    reply.into_note()
}

pub struct HttpNoteBackend {
    config: PopupConfig,
}

impl HttpNoteBackend {
    pub fn new(config: PopupConfig) -> Self {
        Self { config }
    }

    fn request(&self, url: &str) -> Result<Request, PopupError> {
        let body = serde_json::to_string(&ChatRequest {
            url,
            question: self.config.question.as_deref(),
        })?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_mode(RequestMode::Cors);
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.config.endpoint, &init)
            .map_err(PopupError::host)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(PopupError::host)?;
        Ok(request)
    }
}

#[async_trait(?Send)]
impl NoteBackend for HttpNoteBackend {
    async fn generate(&self, url: &str) -> Result<String, PopupError> {
        let request = self.request(url)?;
        let window =
            web_sys::window().ok_or_else(|| PopupError::Host("no window".to_string()))?;

        log::info!("requesting note from {}", self.config.endpoint);
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| PopupError::Network(js_error_message(&err)))?;
        let response: Response = response.dyn_into().map_err(PopupError::host)?;

        let text = response.text().map_err(PopupError::host)?;
        let body = JsFuture::from(text)
            .await
            .map_err(|err| PopupError::Network(js_error_message(&err)))?
            .as_string()
            .unwrap_or_default();

        interpret_reply(response.status(), &body)
    }
}
