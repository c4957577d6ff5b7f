//! Error type shared by every backend call.

use serde::Deserialize;

/// Shown for transport failures, where there is no server message to surface.
const NETWORK_MESSAGE: &str = "No se pudo conectar con el servidor. Revisa tu conexión.";
const DECODE_MESSAGE: &str = "Respuesta inesperada del servidor.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 400, 409 or 422: the backend rejected the input.
    #[error("{message}")]
    Validation { message: String },
    /// 401 or 403: missing, expired or rejected token.
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    Validation,
    Unauthorized,
    NotFound,
    Server,
    Network,
    Decode,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Map a non-2xx response to an error.
    ///
    /// The message is the body's `error` field when the body is JSON and has
    /// one, `fallback` otherwise.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        match status {
            400 | 409 | 422 => ApiError::Validation { message },
            401 | 403 => ApiError::Unauthorized { message },
            404 => ApiError::NotFound { message },
            _ => ApiError::Server { status, message },
        }
    }

    /// Error returned by authenticated calls made without a token.
    pub fn not_logged_in() -> Self {
        ApiError::Unauthorized {
            message: "Tu sesión ha expirado. Inicia sesión de nuevo.".to_string(),
        }
    }

    /// Text to show the user.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation { message }
            | ApiError::Unauthorized { message }
            | ApiError::NotFound { message }
            | ApiError::Server { message, .. } => message,
            ApiError::Network(_) => NETWORK_MESSAGE,
            ApiError::Decode(_) => DECODE_MESSAGE,
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Validation { .. } => ApiErrorKind::Validation,
            ApiError::Unauthorized { .. } => ApiErrorKind::Unauthorized,
            ApiError::NotFound { .. } => ApiErrorKind::NotFound,
            ApiError::Server { .. } => ApiErrorKind::Server,
            ApiError::Network(_) => ApiErrorKind::Network,
            ApiError::Decode(_) => ApiErrorKind::Decode,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ApiErrorKind::Unauthorized
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_preferred() {
        let err = ApiError::from_response(400, r#"{"error":"Credenciales inválidas."}"#, "Error al iniciar sesión");
        assert_eq!(
            err,
            ApiError::Validation {
                message: "Credenciales inválidas.".to_string()
            }
        );
        assert_eq!(err.message(), "Credenciales inválidas.");
    }

    #[test]
    fn test_fallback_when_body_has_no_error() {
        let err = ApiError::from_response(500, "<html>oops</html>", "Error al obtener ranking");
        assert_eq!(err.message(), "Error al obtener ranking");
        assert_eq!(err.kind(), ApiErrorKind::Server);

        let err = ApiError::from_response(404, r#"{"error":""}"#, "Error al cargar perfil");
        assert_eq!(err.message(), "Error al cargar perfil");
        assert_eq!(err.kind(), ApiErrorKind::NotFound);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_response(409, "{}", "x").kind(), ApiErrorKind::Validation);
        assert_eq!(ApiError::from_response(422, "{}", "x").kind(), ApiErrorKind::Validation);
        assert!(ApiError::from_response(401, "{}", "x").is_unauthorized());
        assert!(ApiError::from_response(403, "{}", "x").is_unauthorized());
        assert_eq!(
            ApiError::from_response(502, "", "x"),
            ApiError::Server {
                status: 502,
                message: "x".to_string()
            }
        );
    }

    #[test]
    fn test_transport_errors_use_generic_text() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.message(), NETWORK_MESSAGE);
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
