//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the persisted [`SessionStore`] and derives an
//! [`ApiClient`] carrying the current token. Views reach both through
//! [`use_session`].
//!
//! Failed backend calls go through [`SessionContext::report_error`]: an
//! `Unauthorized` answer ends the session, which the route guards turn into a
//! redirect to `/login?messageKey=sessionExpired`.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{GoH2Config, KeyValueStore, SessionStore};

/// Key-value backend the session persists to on this platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Configuration stored on this platform, or the defaults if it can't be read.
pub fn load_config() -> GoH2Config {
    match GoH2Config::load(&make_backend()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring unreadable {}: {}", GoH2Config::STORE_KEY, e);
            GoH2Config::from_build_env()
        }
    }
}

pub fn make_backend() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStore::default_location()
    }
}

/// Handle to the session, shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    store: Signal<SessionStore<PlatformStore>>,
    api: Memo<ApiClient>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.store.read().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.store.read().token().map(str::to_string)
    }

    /// API client authenticated with the current token.
    pub fn api(&self) -> ApiClient {
        self.api.read().clone()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        if let Err(e) = self.store.write().set_token(token) {
            tracing::error!("Failed to persist session: {}", e);
        }
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.store.write().logout() {
            tracing::error!("Failed to persist logout: {}", e);
        }
    }

    /// The session ended because the backend rejected the token.
    pub fn is_expired(&self) -> bool {
        self.store.read().is_expired()
    }

    /// Log a failed call to `what`. Returns `true` if it ended the session.
    pub fn report_error(&mut self, what: &str, err: &ApiError) -> bool {
        tracing::error!("{} failed: {}", what, err);
        // Only write the signal when something changes.
        err.is_unauthorized() && expire_on_rejection(&mut self.store.write(), err)
    }
}

/// End `store`'s session if `err` says its token was rejected.
pub fn expire_on_rejection<S: KeyValueStore>(store: &mut SessionStore<S>, err: &ApiError) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    tracing::warn!("Session rejected by the backend, logging out");
    if let Err(e) = store.expire() {
        tracing::error!("Failed to persist logout: {}", e);
    }
    true
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Shortcut for `use_session().api()`.
pub fn use_api() -> ApiClient {
    use_session().api()
}

/// Provider component that restores the session and exposes it to `children`.
#[component]
pub fn SessionProvider(config: GoH2Config, children: Element) -> Element {
    let storage_key = config.session.storage_key.clone();
    let store = use_signal(move || {
        let mut store = SessionStore::load_with_key(make_backend(), storage_key);
        if let Some(token) = take_url_token() {
            tracing::info!("Session token received via URL");
            if let Err(e) = store.set_token(token) {
                tracing::error!("Failed to persist session: {}", e);
            }
        }
        store
    });

    let api = use_memo(move || {
        ApiClient::from_config(&config).with_token(store.read().token().map(str::to_string))
    });

    use_context_provider(|| SessionContext { store, api });

    rsx! {
        {children}
    }
}

/// Pages whose `token` parameter belongs to the page, not the session.
#[cfg(target_arch = "wasm32")]
const OWN_TOKEN_PATHS: &[&str] = &["/restablecer-password"];

/// Pick up a `?token=` handed over by an external login and strip it from the
/// address bar.
fn take_url_token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let location = window.location();
        let path = location.pathname().ok()?;
        if OWN_TOKEN_PATHS.iter().any(|p| path.starts_with(p)) {
            return None;
        }
        let search = location.search().ok()?;
        let (token, rest) = store::session::split_token_param(&search);
        let token = token?;
        let clean = if rest.is_empty() {
            path
        } else {
            format!("{path}?{rest}")
        };
        if let Ok(history) = window.history() {
            if let Err(e) =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&clean))
            {
                tracing::warn!("Failed to scrub token from URL: {:?}", e);
            }
        }
        Some(token)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn logged_in(backend: &MemoryStore) -> SessionStore<MemoryStore> {
        let mut store = SessionStore::load(backend.clone());
        store.set_token("tok").unwrap();
        store
    }

    #[test]
    fn test_unauthorized_ends_the_session() {
        let backend = MemoryStore::new();
        let mut store = logged_in(&backend);

        assert!(expire_on_rejection(&mut store, &ApiError::Unauthorized {
            message: "Token inválido".into(),
        }));
        assert!(!store.is_authenticated());
        assert!(store.is_expired());
        assert!(!SessionStore::load(backend).is_authenticated());
    }

    #[test]
    fn test_other_errors_keep_the_session() {
        let backend = MemoryStore::new();
        let mut store = logged_in(&backend);

        for err in [
            ApiError::Validation {
                message: "Texto requerido".into(),
            },
            ApiError::NotFound {
                message: "No encontrado".into(),
            },
            ApiError::Network("offline".into()),
        ] {
            assert!(!expire_on_rejection(&mut store, &err));
        }
        assert!(store.is_authenticated());
        assert!(!store.is_expired());
        assert_eq!(SessionStore::load(backend).token(), Some("tok"));
    }
}
