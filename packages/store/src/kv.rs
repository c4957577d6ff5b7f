//! # Key-value persistence for client state
//!
//! [`KeyValueStore`] is the small storage seam behind [`crate::SessionStore`]. It
//! mirrors the browser's `localStorage` contract: string keys, string values,
//! synchronous access. Implementations live in sibling modules:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStore`] | tests, and any platform without durable storage |
//! | [`crate::FileStore`] | native builds, one file per key under a data directory |
//! | `LocalStorage` | WASM with the `web` feature |
//!
//! Reads never fail: a missing or unreadable entry is `None`. Writes report a
//! [`StorageError`] so callers can log it, but a failed write never corrupts the
//! in-memory state the UI renders from.

/// Errors raised by a storage backend write.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("browser storage error: {0}")]
    Browser(String),
}

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
