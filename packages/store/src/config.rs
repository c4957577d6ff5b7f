//! # Client configuration — `goh2.toml`
//!
//! Defines the settings the front-end needs at startup. The values can come from
//! a TOML document kept in the platform key-value store under
//! [`GoH2Config::STORE_KEY`] (a `goh2-config.json` file natively, a
//! `localStorage` entry in the browser) or from compiled-in defaults.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000/api"
//!
//! [session]
//! storage_key = "goh2-auth-storage"
//!
//! [ui]
//! default_locale = "es"
//! ```
//!
//! ## Build-time override
//!
//! [`GoH2Config::from_build_env`] reads `GOH2_API_URL` at compile time with
//! `option_env!`, because a WASM bundle has no process environment to consult at
//! runtime. Deployments set it when building the bundle.
//!
//! All structs derive `Default` so an empty document is the default configuration.

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_STORAGE_KEY: &str = "goh2-auth-storage";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GoH2Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// REST backend settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

/// Session persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key the session envelope is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

/// Presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// `lang` of the rendered document.
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_locale() -> String {
    "es".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
        }
    }
}

impl GoH2Config {
    pub const STORE_KEY: &'static str = "goh2-config";

    /// Defaults, with the API URL taken from `GOH2_API_URL` when it was set at build time.
    pub fn from_build_env() -> Self {
        let config = Self::default();
        match option_env!("GOH2_API_URL") {
            Some(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        }
    }

    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read the TOML document stored under [`Self::STORE_KEY`].
    ///
    /// A missing document gives the defaults. `GOH2_API_URL` set at build time
    /// still wins over the stored base URL.
    pub fn load(store: &impl KeyValueStore) -> Result<Self, toml::de::Error> {
        let config = match store.get(Self::STORE_KEY) {
            Some(text) => Self::from_toml(&text)?,
            None => Self::default(),
        };
        Ok(match option_env!("GOH2_API_URL") {
            Some(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn test_empty_document_is_default() {
        let config = GoH2Config::from_toml("").unwrap();
        assert_eq!(config, GoH2Config::default());
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.session.storage_key, "goh2-auth-storage");
        assert_eq!(config.ui.default_locale, "es");
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = GoH2Config::from_toml(
            r#"
            [api]
            base_url = "https://api.goh2.app/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.goh2.app/api");
        assert_eq!(config.session.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_load_from_store() {
        let store = MemoryStore::new();
        let loaded = GoH2Config::load(&store).unwrap();
        assert_eq!(loaded, GoH2Config::from_build_env());

        store
            .set(
                GoH2Config::STORE_KEY,
                r#"
                [session]
                storage_key = "goh2-staging"

                [ui]
                default_locale = "en"
                "#,
            )
            .unwrap();
        let loaded = GoH2Config::load(&store).unwrap();
        assert_eq!(loaded.session.storage_key, "goh2-staging");
        assert_eq!(loaded.ui.default_locale, "en");
    }

    #[test]
    fn test_load_rejects_malformed_document() {
        let store = MemoryStore::new();
        store.set(GoH2Config::STORE_KEY, "[api\nbase_url =").unwrap();
        assert!(GoH2Config::load(&store).is_err());
    }
}
