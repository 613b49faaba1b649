//! Browser persistence for the settings slot.

use gloo::console;
use gloo::utils::window;
use hearth_settings::{
    DEFAULT_STORAGE_KEY, SettingsConfig, SettingsStorage, SettingsStore, StorageError,
    StorageResult,
};
use wasm_bindgen::JsValue;

pub(crate) const SETTINGS_KEY: &str = DEFAULT_STORAGE_KEY;

/// `window.localStorage` adapter.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        match window().local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable {
                detail: "localStorage is not available".to_string(),
            }),
            Err(err) => Err(StorageError::Unavailable {
                detail: js_detail(&err),
            }),
        }
    }
}

impl SettingsStorage for BrowserStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(|err| {
            let detail = js_detail(&err);
            log_storage_error("get", key, &detail);
            StorageError::Read {
                key: key.to_string(),
                detail,
            }
        })
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(|err| {
            let detail = js_detail(&err);
            log_storage_error("set", key, &detail);
            StorageError::Write {
                key: key.to_string(),
                detail,
            }
        })
    }
}

/// Store backed by `localStorage`, loaded once for the app lifetime.
pub(crate) fn initialize_store() -> SettingsStore {
    let config = SettingsConfig::default().with_storage_key(SETTINGS_KEY);
    let store = SettingsStore::initialize(BrowserStorage, &config);
    console::debug!("settings loaded", format!("{:?}", store.origin()));
    store
}

fn js_detail(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
