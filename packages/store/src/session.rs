//! # Session store — the persisted bearer token
//!
//! [`SessionStore`] owns the single piece of client state that survives a page
//! reload: the backend's bearer token and the derived `is_authenticated` flag.
//! Every mutation writes through to a [`KeyValueStore`] under the configured
//! storage key (default `"goh2-auth-storage"`).
//!
//! ## Persisted format
//!
//! ```json
//! {"state":{"token":"eyJ...","isAuthenticated":true},"version":0}
//! ```
//!
//! Logging out does not delete the key; it writes the cleared state, so storage
//! always reflects the last known session. Anything unreadable under the key is
//! treated as the logged-out default.
//!
//! There is no expiry or refresh: a rejected token shows up as an
//! `Unauthorized` API error. [`SessionStore::expire`] clears the session and
//! remembers why, so the views can send the user back to `/login` with the
//! `sessionExpired` notice.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_STORAGE_KEY;
use crate::kv::{KeyValueStore, StorageError};

const PERSIST_VERSION: u32 = 0;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: Option<String>,
    pub is_authenticated: bool,
}

#[derive(Serialize, Deserialize)]
struct Persisted {
    state: Session,
    #[serde(default)]
    version: u32,
}

/// Session state backed by a persistent key-value store.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    backend: S,
    key: String,
    session: Session,
    expired: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Restore the session stored under the default key.
    pub fn load(backend: S) -> Self {
        Self::load_with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Restore the session stored under `key`.
    pub fn load_with_key(backend: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let session = backend
            .get(&key)
            .and_then(|raw| serde_json::from_str::<Persisted>(&raw).ok())
            .map(|p| p.state)
            .map(normalize)
            .unwrap_or_default();
        Self {
            backend,
            key,
            session,
            expired: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    /// Whether the last session ended because the backend rejected its token.
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Store a freshly issued token and mark the session authenticated.
    ///
    /// The in-memory state is updated even if persisting fails.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), StorageError> {
        self.session = Session {
            token: Some(token.into()),
            is_authenticated: true,
        };
        self.expired = false;
        self.persist()
    }

    /// Clear the token and mark the session unauthenticated.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.session = Session::default();
        self.persist()
    }

    /// Log out because the backend rejected the token.
    pub fn expire(&mut self) -> Result<(), StorageError> {
        self.expired = true;
        self.logout()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let envelope = Persisted {
            state: self.session.clone(),
            version: PERSIST_VERSION,
        };
        let raw = serde_json::to_string(&envelope)?;
        self.backend.set(&self.key, &raw)
    }
}

// A stored flag without a token (or the reverse) is not a usable session.
fn normalize(session: Session) -> Session {
    match session.token {
        Some(token) if !token.is_empty() => Session {
            token: Some(token),
            is_authenticated: true,
        },
        _ => Session::default(),
    }
}

/// Split a `token` parameter out of a URL query string.
///
/// Accepts the query with or without its leading `?`. Returns the token (if
/// present and non-empty) and the remaining query, re-joined without a leading
/// `?`. Used to pick up tokens handed over by an external login redirect and
/// scrub them from the address bar.
pub fn split_token_param(query: &str) -> (Option<String>, String) {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut token = None;
    let mut rest = Vec::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        match pair.split_once('=') {
            Some(("token", value)) => {
                if !value.is_empty() {
                    token = Some(value.to_string());
                }
            }
            None if pair == "token" => {}
            _ => rest.push(pair),
        }
    }
    (token, rest.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn test_starts_logged_out() {
        let store = SessionStore::load(MemoryStore::new());
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_set_token_authenticates_and_persists() {
        let backend = MemoryStore::new();
        let mut store = SessionStore::load(backend.clone());

        store.set_token("abc").unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("abc"));

        let raw = backend.get(DEFAULT_STORAGE_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "state": { "token": "abc", "isAuthenticated": true },
                "version": 0
            })
        );
    }

    #[test]
    fn test_logout_clears_state_and_storage() {
        let backend = MemoryStore::new();
        let mut store = SessionStore::load(backend.clone());
        store.set_token("abc").unwrap();

        store.logout().unwrap();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());

        let reloaded = SessionStore::load(backend.clone());
        assert_eq!(reloaded.session(), &Session::default());

        let raw = backend.get(DEFAULT_STORAGE_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["state"]["token"], serde_json::Value::Null);
        assert_eq!(json["state"]["isAuthenticated"], false);
    }

    #[test]
    fn test_expire_logs_out_and_flags_until_next_login() {
        let backend = MemoryStore::new();
        let mut store = SessionStore::load(backend.clone());
        store.set_token("abc").unwrap();
        assert!(!store.is_expired());

        store.expire().unwrap();
        assert!(!store.is_authenticated());
        assert!(store.is_expired());
        assert!(!SessionStore::load(backend.clone()).is_authenticated());

        store.set_token("fresh").unwrap();
        assert!(!store.is_expired());

        store.logout().unwrap();
        assert!(!store.is_expired());
    }

    #[test]
    fn test_reload_restores_token() {
        let backend = MemoryStore::new();
        SessionStore::load(backend.clone()).set_token("persisted").unwrap();

        let reloaded = SessionStore::load(backend);
        assert_eq!(reloaded.token(), Some("persisted"));
        assert!(reloaded.is_authenticated());
    }

    #[test]
    fn test_corrupt_storage_is_logged_out() {
        let backend = MemoryStore::new();
        backend.set(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        let store = SessionStore::load(backend.clone());
        assert!(!store.is_authenticated());

        backend
            .set(
                DEFAULT_STORAGE_KEY,
                r#"{"state":{"token":null,"isAuthenticated":true},"version":0}"#,
            )
            .unwrap();
        let store = SessionStore::load(backend);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_custom_key() {
        let backend = MemoryStore::new();
        let mut store = SessionStore::load_with_key(backend.clone(), "other-key");
        store.set_token("t").unwrap();
        assert!(backend.get("other-key").is_some());
        assert!(backend.get(DEFAULT_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_split_token_param() {
        assert_eq!(
            split_token_param("?token=abc"),
            (Some("abc".to_string()), String::new())
        );
        assert_eq!(
            split_token_param("?lang=es&token=abc&ref=mail"),
            (Some("abc".to_string()), "lang=es&ref=mail".to_string())
        );
        assert_eq!(split_token_param(""), (None, String::new()));
        assert_eq!(
            split_token_param("messageKey=ok"),
            (None, "messageKey=ok".to_string())
        );
        assert_eq!(split_token_param("token="), (None, String::new()));
    }
}
