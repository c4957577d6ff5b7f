//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the web platform. It is a
//! zero-size handle that looks up `window.localStorage` on every call; the
//! browser keeps the storage object alive, so there is nothing to cache.
//!
//! Reads swallow errors (private browsing, disabled storage) and return `None`,
//! which the session store treats as "logged out".

use wasm_bindgen::JsValue;

use crate::kv::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Browser(format!("{value:?}"))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}
