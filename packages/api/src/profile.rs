//! Profile and account settings.

use reqwest::{Method, RequestBuilder};
use serde::Serialize;

use crate::{send_ack, send_json, ApiClient, ApiError, ProfileUpdate, UserProfile};

#[derive(Serialize)]
struct DeleteAccountRequest<'a> {
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    password_actual: &'a str,
    password_nueva: &'a str,
}

impl ApiClient {
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        let req = self.authed(Method::GET, "/perfil")?;
        send_json(req, "Error al cargar perfil").await
    }

    /// `PUT /perfil`. Fields left as `None` are not sent.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let req = self.authed(Method::PUT, "/perfil")?.json(update);
        send_ack(req, "Error al actualizar perfil.").await
    }

    fn delete_account_request(&self, password: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self
            .authed(Method::DELETE, "/perfil")?
            .json(&DeleteAccountRequest { password }))
    }

    /// Delete the account; the backend re-checks the current password.
    pub async fn delete_account(&self, password: &str) -> Result<(), ApiError> {
        send_ack(self.delete_account_request(password)?, "Error al eliminar cuenta").await
    }

    fn change_password_request(&self, current: &str, new: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self
            .authed(Method::POST, "/configuracion/cambiar-password")?
            .json(&ChangePasswordRequest {
                password_actual: current,
                password_nueva: new,
            }))
    }

    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), ApiError> {
        let req = self.change_password_request(current, new)?;
        send_ack(req, "Error al cambiar contraseña").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://api.test").with_token(Some("tok".to_string()))
    }

    fn body_json(req: &reqwest::Request) -> serde_json::Value {
        let bytes = req.body().and_then(|b| b.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_delete_account_sends_password_in_body() {
        let req = client().delete_account_request("secreto").unwrap().build().unwrap();
        assert_eq!(req.method(), Method::DELETE);
        assert_eq!(req.url().path(), "/perfil");
        assert_eq!(body_json(&req), serde_json::json!({"password": "secreto"}));
        assert_eq!(req.headers().get("authorization").unwrap(), "Bearer tok");
    }

    #[test]
    fn test_change_password_body() {
        let req = client()
            .change_password_request("vieja1", "nueva1")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(req.url().path(), "/configuracion/cambiar-password");
        assert_eq!(
            body_json(&req),
            serde_json::json!({"passwordActual": "vieja1", "passwordNueva": "nueva1"})
        );
    }

    #[tokio::test]
    async fn test_profile_requires_token() {
        let anonymous = ApiClient::new("http://api.test");
        let err = anonymous.get_profile().await.unwrap_err();
        assert!(err.is_unauthorized());
    }
}
