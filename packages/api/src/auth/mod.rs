//! Account endpoints: login, registration and password reset.
//!
//! None of these need a token. A successful [`ApiClient::login`] returns the
//! token the caller stores in the session.

use reqwest::{Method, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::{send_ack, send_json, ApiClient, ApiError};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ResetPasswordRequest<'a> {
    token: &'a str,
    password: &'a str,
}

impl ApiClient {
    fn login_request(&self, data: &LoginRequest) -> RequestBuilder {
        self.request(Method::POST, "/auth/login").json(data)
    }

    pub async fn login(&self, data: &LoginRequest) -> Result<LoginResponse, ApiError> {
        send_json(self.login_request(data), "Error al iniciar sesión").await
    }

    pub async fn register(&self, data: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let req = self.request(Method::POST, "/auth/registro").json(data);
        send_json(req, "Error al registrar usuario").await
    }

    /// Register, then log in with the same credentials.
    pub async fn register_and_login(&self, data: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        self.register(data).await?;
        tracing::info!("Registered {}, logging in", data.email);
        self.login(&LoginRequest {
            email: data.email.clone(),
            password: data.password.clone(),
        })
        .await
    }

    fn forgot_password_request(&self, email: &str) -> RequestBuilder {
        self.request(Method::POST, "/auth/forgot-password")
            .json(&ForgotPasswordRequest { email })
    }

    /// Ask the backend to email a reset link.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        send_ack(self.forgot_password_request(email), "Error al solicitar el cambio de contraseña").await
    }

    fn reset_password_request(&self, token: &str, password: &str) -> RequestBuilder {
        self.request(Method::POST, "/auth/reset-password")
            .json(&ResetPasswordRequest { token, password })
    }

    /// Set a new password using the token from the reset link.
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), ApiError> {
        send_ack(self.reset_password_request(token, password), "Error al actualizar la contraseña").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_json(req: &reqwest::Request) -> serde_json::Value {
        let bytes = req.body().and_then(|b| b.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_login_request() {
        let client = ApiClient::new("http://api.test");
        let req = client
            .login_request(&LoginRequest {
                email: "ana@example.com".to_string(),
                password: "secreto".to_string(),
            })
            .build()
            .unwrap();
        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.url().as_str(), "http://api.test/auth/login");
        assert_eq!(
            body_json(&req),
            serde_json::json!({"email": "ana@example.com", "password": "secreto"})
        );
    }

    #[test]
    fn test_reset_password_request_carries_token() {
        let client = ApiClient::new("http://api.test");
        let req = client
            .reset_password_request("reset-123", "nueva1")
            .build()
            .unwrap();
        assert_eq!(req.url().path(), "/auth/reset-password");
        assert_eq!(
            body_json(&req),
            serde_json::json!({"token": "reset-123", "password": "nueva1"})
        );
    }

    #[test]
    fn test_forgot_password_request() {
        let client = ApiClient::new("http://api.test");
        let req = client.forgot_password_request("ana@example.com").build().unwrap();
        assert_eq!(body_json(&req), serde_json::json!({"email": "ana@example.com"}));
    }

    #[test]
    fn test_login_response_decodes() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"message":"Login exitoso","token":"eyJ"}"#).unwrap();
        assert_eq!(resp.token, "eyJ");
    }
}
