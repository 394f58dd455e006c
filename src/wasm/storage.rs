use anyhow::{anyhow, Result};
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

use crate::core::store::KeyValueStore;

/// `window.localStorage` behind the core storage trait.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage> {
        window()
            .ok_or_else(|| anyhow!("no window available"))?
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| anyhow!("local storage not available"))
    }
}

fn js_err(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(text) => anyhow!(text),
        None => anyhow!("{:?}", value),
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // Fails when the quota is exhausted or storage is disabled.
        Self::storage()?.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::storage()?.remove_item(key).map_err(js_err)
    }
}
