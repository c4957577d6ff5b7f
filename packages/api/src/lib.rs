//! # API crate — typed client for the GoH2 REST backend
//!
//! Every backend call the front-end makes goes through [`ApiClient`]. The client
//! holds the configured base URL and, once the user has logged in, the bearer
//! token from the session store. Each method performs exactly one HTTP request
//! and returns either the decoded JSON body or an [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | [`auth`] | `/auth/login`, `/auth/registro`, `/auth/forgot-password`, `/auth/reset-password` |
//! | [`profile`] | `/perfil`, `/configuracion/cambiar-password` |
//! | [`registros`] | `/bebidas`, `/registros`, `/resumen/hoy` |
//! | [`social`] | `/social/*` |
//!
//! There are no retries and no timeouts. A call is cancelled by dropping its
//! future, which is what Dioxus does when the owning component unmounts.
//!
//! ## Errors
//!
//! Non-2xx responses are mapped by status (see [`ApiError::from_response`]).
//! The backend reports failures as `{"error": "..."}`; that text is carried
//! verbatim, otherwise each endpoint supplies its own fallback message.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

pub mod auth;
mod error;
pub mod profile;
pub mod registros;
pub mod social;

pub use error::{ApiError, ApiErrorKind};

pub use store::models::{
    Bebida, Comentario, FeedItem, FeedPage, Genero, NivelActividad, NuevoRegistro, Periodo,
    ProfileUpdate, RankingItem, Registro, RegistrosDelDia, ResumenDiario, UserProfile,
    UsuarioBusqueda,
};
pub use store::GoH2Config;

/// Client for the GoH2 backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    pub fn from_config(config: &GoH2Config) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// Same client, authenticating with `token` (or anonymous for `None`).
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Unauthenticated request.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Request carrying `Authorization: Bearer <token>`.
    ///
    /// Fails with [`ApiError::Unauthorized`] without touching the network when
    /// no token is set.
    pub(crate) fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or_else(ApiError::not_logged_in)?;
        Ok(self.request(method, path).bearer_auth(token))
    }
}

/// Send `req` and decode a JSON body.
pub(crate) async fn send_json<T: DeserializeOwned>(
    req: RequestBuilder,
    fallback: &str,
) -> Result<T, ApiError> {
    let body = send(req, fallback).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Send `req`, keeping only whether it succeeded.
pub(crate) async fn send_ack(req: RequestBuilder, fallback: &str) -> Result<(), ApiError> {
    send(req, fallback).await.map(|_| ())
}

async fn send(req: RequestBuilder, fallback: &str) -> Result<String, ApiError> {
    let resp = req.send().await.map_err(|e| {
        tracing::error!("Request failed: {}", e);
        ApiError::from(e)
    })?;
    let status = resp.status();
    let url = resp.url().path().to_string();
    let body = resp.text().await?;
    if status.is_success() {
        tracing::debug!("{} {}", status.as_u16(), url);
        Ok(body)
    } else {
        let err = ApiError::from_response(status.as_u16(), &body, fallback);
        tracing::warn!("{} {}: {}", status.as_u16(), url, err.message());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:3000/api/");
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(client.url("/perfil"), "http://localhost:3000/api/perfil");
        assert_eq!(client.url("bebidas"), "http://localhost:3000/api/bebidas");
    }

    #[test]
    fn test_from_config() {
        let config = GoH2Config::default().with_base_url("https://goh2.example/api");
        let client = ApiClient::from_config(&config);
        assert_eq!(client.url("resumen/hoy"), "https://goh2.example/api/resumen/hoy");
        assert!(client.token().is_none());
    }

    #[test]
    fn test_authed_request_sets_bearer_header() {
        let client = ApiClient::new("http://api.test").with_token(Some("abc".to_string()));
        let req = client.authed(Method::GET, "/perfil").unwrap().build().unwrap();
        assert_eq!(
            req.headers().get("authorization").unwrap(),
            "Bearer abc"
        );
    }

    #[test]
    fn test_authed_without_token_fails_locally() {
        let client = ApiClient::new("http://api.test").with_token(Some(String::new()));
        let err = client.authed(Method::GET, "/perfil").unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_plain_request_has_no_auth() {
        let client = ApiClient::new("http://api.test").with_token(Some("abc".to_string()));
        let req = client.request(Method::POST, "/auth/login").build().unwrap();
        assert!(req.headers().get("authorization").is_none());
    }
}
