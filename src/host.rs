//! Extension host capabilities.
//!
//! The popup only talks to the browser through these traits, so the note
//! flows can run against in-memory fakes. `ChromeTabs` and `ChromeStorage`
//! are the real bindings over the promise-returning MV3 `chrome.*` APIs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::PopupError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = query, catch)]
    async fn tabs_query(query: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "storage", "local"], js_name = get, catch)]
    async fn storage_get(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "storage", "local"], js_name = set, catch)]
    async fn storage_set(items: JsValue) -> Result<JsValue, JsValue>;
}

#[async_trait(?Send)]
pub trait TabQuery {
    /// URL of the active tab in the current window, if it has one.
    async fn active_tab_url(&self) -> Result<Option<String>, PopupError>;
}

#[async_trait(?Send)]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PopupError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), PopupError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TabsQueryArgs {
    active: bool,
    current_window: bool,
}

#[derive(Deserialize)]
struct TabInfo {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ChromeTabs;

#[async_trait(?Send)]
impl TabQuery for ChromeTabs {
    async fn active_tab_url(&self) -> Result<Option<String>, PopupError> {
        let args = serde_wasm_bindgen::to_value(&TabsQueryArgs {
            active: true,
            current_window: true,
        })?;
        let tabs = tabs_query(args).await.map_err(PopupError::host)?;
        let tabs: Vec<TabInfo> = serde_wasm_bindgen::from_value(tabs)?;
        Ok(first_tab_url(tabs))
    }
}

fn first_tab_url(tabs: Vec<TabInfo>) -> Option<String> {
    tabs.into_iter()
        .next()
        .and_then(|tab| tab.url)
        .filter(|url| !url.is_empty())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ChromeStorage;

#[async_trait(?Send)]
impl KeyValueStore for ChromeStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, PopupError> {
        let items = storage_get(JsValue::from_str(key))
            .await
            .map_err(PopupError::host)?;
        let value =
            js_sys::Reflect::get(&items, &JsValue::from_str(key)).map_err(PopupError::host)?;
        Ok(value.as_string())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PopupError> {
        let items = js_sys::Object::new();
        js_sys::Reflect::set(&items, &JsValue::from_str(key), &JsValue::from_str(value))
            .map_err(PopupError::host)?;
        storage_set(items.into()).await.map_err(PopupError::host)?;
        log::debug!("note saved for {key}");
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::*;

    pub struct FakeTabs(pub Option<String>);

    #[async_trait(?Send)]
    impl TabQuery for FakeTabs {
        async fn active_tab_url(&self) -> Result<Option<String>, PopupError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    pub struct MemoryStore {
        pub entries: RefCell<HashMap<String, String>>,
        pub fail_writes: Cell<bool>,
    }

    impl MemoryStore {
        pub fn with_entry(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }
    }

    #[async_trait(?Send)]
    impl KeyValueStore for MemoryStore {
        async fn get(&self, key: &str) -> Result<Option<String>, PopupError> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), PopupError> {
            if self.fail_writes.get() {
                return Err(PopupError::Host("QUOTA_BYTES quota exceeded".to_string()));
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
