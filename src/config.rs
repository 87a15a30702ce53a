use serde::{Deserialize, Serialize};

use crate::error::PopupError;
use crate::host::KeyValueStore;

/// Storage key holding the popup settings as JSON. Notes are keyed by page
/// URL, which can never collide with it.
pub const SETTINGS_KEY: &str = "notesage:settings";

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/chat";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PopupConfig {
    pub endpoint: String,
    pub question: Option<String>,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            endpoint: option_env!("NOTESAGE_ENDPOINT")
                .unwrap_or(DEFAULT_ENDPOINT)
                .to_string(),
            question: None,
        }
    }
}

impl PopupConfig {
    pub fn from_json(raw: &str) -> Result<Self, PopupError> {
        let mut config: Self =
            serde_json::from_str(raw).map_err(|e| PopupError::Config(e.to_string()))?;
        config.endpoint = config.endpoint.trim().to_string();
        if !(config.endpoint.starts_with("http://") || config.endpoint.starts_with("https://")) {
            return Err(PopupError::Config(format!(
                "endpoint must be an http(s) url, got `{}`",
                config.endpoint
            )));
        }
        config.question = config
            .question
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
        Ok(config)
    }

    /// Reads settings saved under [`SETTINGS_KEY`], falling back to defaults
    /// when none are stored or they fail to parse.
    pub async fn load(store: &impl KeyValueStore) -> Self {
        let raw = match store.get(SETTINGS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(err) => {
                log::warn!("could not read popup settings: {err}");
                return Self::default();
            }
        };

        Self::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("ignoring stored settings: {err}");
            Self::default()
        })
    }
}
