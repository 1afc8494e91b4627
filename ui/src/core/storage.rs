//! Local persistence for small string settings.
//!
//! Browser builds talk to `window.localStorage`; everything else (native test
//! runs, server rendering) keeps values in a shared in-memory map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Key-value backend for persisted preferences.
pub trait PreferenceStorage {
    /// Stored value for `key`, if any. Read failures count as absent.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage area is reachable (no window, storage disabled by the user agent).
    #[error("local storage is unavailable")]
    Unavailable,
    /// The user agent refused the write (quota, private mode).
    #[error("failed to write {key}: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// In-memory storage. Clones share the same map, so a "reload" in tests is just
/// loading a fresh store from a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        storage.values.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`, scoped per user agent.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn area() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::area()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let area = Self::area().ok_or(StorageError::Unavailable)?;
        area.set_item(key, value)
            .map_err(|err| StorageError::WriteRejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// Storage backend used by the running app on this target.
#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = BrowserStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = MemoryStorage;
