//! Browser `localStorage` backing for session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements `ledger::KeyValueStore` so session load/save/clear logic stays
//! in `ledger` and only the web-sys glue lives here. On the server (SSR)
//! every read is empty and writes are no-ops.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use ledger::KeyValueStore;

/// `window.localStorage`, when the browser provides it.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.remove_item(key).is_err() {
                log::warn!("localStorage remove failed for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
