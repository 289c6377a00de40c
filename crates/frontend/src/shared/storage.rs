//! Persisted key/value storage behind a swappable interface.
//!
//! The browser's localStorage is the production backend; tests inject
//! [`MemoryStore`] instead. Storage failures (quota, disabled storage)
//! are logged and swallowed, never surfaced to the UI.

use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal string key/value contract the filter state persists through.
pub trait KeyValueStore {
    /// Read a value; `None` when the key is absent or storage is unavailable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value. Failures are the implementation's problem, not the caller's.
    fn set(&self, key: &str, value: &str);
}

/// localStorage-backed store.
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for key {}", key);
                }
            }
            None => log::warn!("localStorage unavailable, not persisting {}", key),
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
