//! # Filesystem-backed key-value store
//!
//! [`FileStore`] persists each key as a small file so the session survives
//! restarts on native builds (desktop previews, `dx serve` without the `web`
//! feature).
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json        # raw value written by the caller
//! ```
//!
//! Use [`FileStore::default_location`] to get `<data_dir>/goh2`, where
//! `data_dir` comes from [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/goh2/` |
//! | Linux | `~/.local/share/goh2/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\goh2\` |

use std::path::PathBuf;

use crate::kv::{KeyValueStore, StorageError};

#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted at the platform data directory.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("goh2");
        Self::new(base)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(format!("{safe}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("goh2_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut session = SessionStore::load(FileStore::new(dir.clone()));
        session.set_token("from-disk").unwrap();

        // Re-open from the same directory
        let reopened = SessionStore::load(FileStore::new(dir.clone()));
        assert_eq!(reopened.token(), Some("from-disk"));
        assert!(reopened.is_authenticated());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let dir = std::env::temp_dir().join(format!("goh2_missing_{}", std::process::id()));
        let store = FileStore::new(dir);
        assert!(store.remove("never-written").is_ok());
        assert!(store.get("never-written").is_none());
    }
}
