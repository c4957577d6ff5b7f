//! Beverages, intake entries and the daily summary.

use reqwest::{Method, RequestBuilder};

use crate::{send_json, ApiClient, ApiError, Bebida, NuevoRegistro, Registro, RegistrosDelDia, ResumenDiario};

impl ApiClient {
    pub async fn get_bebidas(&self) -> Result<Vec<Bebida>, ApiError> {
        let req = self.authed(Method::GET, "/bebidas")?;
        send_json(req, "Error al obtener bebidas").await
    }

    fn registros_request(&self, fecha: Option<&str>) -> Result<RequestBuilder, ApiError> {
        let req = self.authed(Method::GET, "/registros")?;
        Ok(match fecha {
            Some(fecha) => req.query(&[("fecha", fecha)]),
            None => req,
        })
    }

    /// Entries for `fecha` (`YYYY-MM-DD`), or for today when `None`.
    pub async fn get_registros(&self, fecha: Option<&str>) -> Result<RegistrosDelDia, ApiError> {
        send_json(self.registros_request(fecha)?, "Error al obtener registros").await
    }

    pub async fn create_registro(&self, data: &NuevoRegistro) -> Result<Registro, ApiError> {
        let req = self.authed(Method::POST, "/registros")?.json(data);
        send_json(req, "Error al crear registro").await
    }

    pub async fn get_resumen_hoy(&self) -> Result<ResumenDiario, ApiError> {
        let req = self.authed(Method::GET, "/resumen/hoy")?;
        send_json(req, "Error al obtener resumen").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://api.test").with_token(Some("tok".to_string()))
    }

    #[test]
    fn test_registros_date_filter() {
        let req = client().registros_request(Some("2026-10-15")).unwrap().build().unwrap();
        assert_eq!(req.url().as_str(), "http://api.test/registros?fecha=2026-10-15");

        let req = client().registros_request(None).unwrap().build().unwrap();
        assert_eq!(req.url().as_str(), "http://api.test/registros");
        assert!(req.url().query().is_none());
    }
}
