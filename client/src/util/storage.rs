//! Browser storage helpers for persisted client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so state modules
//! can persist JSON snapshots (detail history, tree view toggle) without
//! repeating web-sys glue. SSR and native tests see an empty store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Which browser storage area a key lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// Survives browser restarts.
    Local,
    /// Scoped to the tab; cleared when it closes.
    Session,
}

#[cfg(feature = "hydrate")]
fn storage(area: StorageArea) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match area {
        StorageArea::Local => window.local_storage().ok().flatten(),
        StorageArea::Session => window.session_storage().ok().flatten(),
    }
}

/// Load a JSON value for `key`. Missing or malformed entries yield `None`.
pub fn load_json<T: DeserializeOwned>(area: StorageArea, key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage(area)?.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding malformed {key} from storage: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
        None
    }
}

/// Save a JSON value for `key`. Quota and privacy-mode failures are ignored.
pub fn save_json<T: Serialize>(area: StorageArea, key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage(area) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key, value);
    }
}

/// Remove `key` from storage.
pub fn remove(area: StorageArea, key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage(area) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
    }
}
