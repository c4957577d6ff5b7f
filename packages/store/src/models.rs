//! # Domain models exchanged with the GoH2 backend
//!
//! Client-side projections of the entities owned by the REST API. Every type is
//! `Serialize + Deserialize` with `camelCase` field names so it maps directly onto
//! the JSON the backend produces and consumes.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`ResumenDiario`] | Today's consumption against the computed daily goal. |
//! | [`Bebida`] | A beverage type with its hydration contribution factor. |
//! | [`Registro`] | One logged consumption event. |
//! | [`RegistrosDelDia`] | A day's registros plus the backend-computed daily total. |
//! | [`NuevoRegistro`] | Body of `POST /registros`. |
//! | [`UserProfile`] / [`ProfileUpdate`] | The biometric profile and its partial update body. |
//! | [`RankingItem`], [`FeedItem`], [`Comentario`], [`UsuarioBusqueda`] | Social projections. |
//!
//! The enums ([`Genero`], [`NivelActividad`], [`UnidadMedida`], [`TipoRegistro`],
//! [`Periodo`]) carry the exact wire spelling and implement [`FromStr`] so form
//! inputs can be parsed into them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Daily goal used wherever the backend does not provide one.
pub const DEFAULT_GOAL_ML: f64 = 2000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genero {
    Masculino,
    Femenino,
    Otro,
}

impl Genero {
    pub const ALL: [Genero; 3] = [Genero::Masculino, Genero::Femenino, Genero::Otro];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genero::Masculino => "Masculino",
            Genero::Femenino => "Femenino",
            Genero::Otro => "Otro",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NivelActividad {
    Sedentario,
    Ligero,
    Moderado,
    Activo,
    MuyActivo,
}

impl NivelActividad {
    pub const ALL: [NivelActividad; 5] = [
        NivelActividad::Sedentario,
        NivelActividad::Ligero,
        NivelActividad::Moderado,
        NivelActividad::Activo,
        NivelActividad::MuyActivo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NivelActividad::Sedentario => "Sedentario",
            NivelActividad::Ligero => "Ligero",
            NivelActividad::Moderado => "Moderado",
            NivelActividad::Activo => "Activo",
            NivelActividad::MuyActivo => "MuyActivo",
        }
    }

    /// Human-readable label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            NivelActividad::Sedentario => "Sedentario",
            NivelActividad::Ligero => "Ligero",
            NivelActividad::Moderado => "Moderado",
            NivelActividad::Activo => "Activo",
            NivelActividad::MuyActivo => "Muy activo",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NivelActividad::Sedentario => "Poco o ningún ejercicio",
            NivelActividad::Ligero => "Ejercicio ligero 1-3 días por semana",
            NivelActividad::Moderado => "Ejercicio moderado 3-5 días por semana",
            NivelActividad::Activo => "Ejercicio intenso 6-7 días por semana",
            NivelActividad::MuyActivo => "Ejercicio muy intenso o trabajo físico",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnidadMedida {
    #[default]
    Ml,
    Oz,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoRegistro {
    #[default]
    Manual,
    Digital,
}

/// Ranking aggregation window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodo {
    #[default]
    Dia,
    Semana,
    Mes,
}

impl Periodo {
    pub const ALL: [Periodo; 3] = [Periodo::Dia, Periodo::Semana, Periodo::Mes];

    pub fn as_str(&self) -> &'static str {
        match self {
            Periodo::Dia => "dia",
            Periodo::Semana => "semana",
            Periodo::Mes => "mes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Periodo::Dia => "Hoy",
            Periodo::Semana => "Semana",
            Periodo::Mes => "Mes",
        }
    }
}

/// Error returned when a string does not name a known option.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown option: {0}")]
pub struct UnknownOption(pub String);

impl FromStr for Genero {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genero::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl FromStr for NivelActividad {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NivelActividad::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl FromStr for Periodo {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Periodo::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl fmt::Display for Genero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NivelActividad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Periodo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response of `GET /resumen/hoy`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumenDiario {
    pub consumido_ml: f64,
    pub objetivo_ml: f64,
}

impl Default for ResumenDiario {
    fn default() -> Self {
        Self {
            consumido_ml: 0.0,
            objetivo_ml: DEFAULT_GOAL_ML,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bebida {
    pub id: String,
    pub nombre: String,
    pub factor_hidratacion: f64,
}

/// Name-only reference embedded in registros and feed items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NombreRef {
    pub nombre: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registro {
    pub id: String,
    pub cantidad_consumida_ml: u32,
    #[serde(default)]
    pub aporte_hidrico_ml: f64,
    pub fecha_hora: DateTime<Utc>,
    pub bebida: NombreRef,
    #[serde(default)]
    pub tipo_registro: TipoRegistro,
}

/// Response of `GET /registros`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrosDelDia {
    #[serde(default)]
    pub total_aporte_dia: f64,
    #[serde(default)]
    pub registros: Vec<Registro>,
}

/// Body of `POST /registros`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuevoRegistro {
    pub bebida_id: String,
    pub cantidad_consumida_ml: u32,
    pub tipo_registro: TipoRegistro,
    /// Backdates the entry; the backend stamps "now" when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hora: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub nombre: String,
    #[serde(default)]
    pub fecha_nacimiento: Option<DateTime<Utc>>,
    #[serde(default)]
    pub genero: Option<Genero>,
    #[serde(default)]
    pub altura_cm: Option<u32>,
    #[serde(default)]
    pub peso_kg: Option<f64>,
    #[serde(default)]
    pub nivel_actividad: Option<NivelActividad>,
    #[serde(default)]
    pub unidad_medida: UnidadMedida,
}

/// Body of `PUT /perfil`. Unset fields are left out of the JSON entirely.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genero: Option<Genero>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altura_cm: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peso_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nivel_actividad: Option<NivelActividad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidad_medida: Option<UnidadMedida>,
}

/// Midnight UTC of a calendar date, the form birth dates travel in.
pub fn date_to_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingItem {
    pub usuario_id: String,
    pub nombre: String,
    pub total_ml: f64,
    #[serde(default)]
    pub es_usuario_actual: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: String,
    pub cantidad_consumida_ml: u32,
    pub fecha_hora: DateTime<Utc>,
    pub usuario: NombreRef,
    pub bebida: NombreRef,
    pub conteo_de_likes: u32,
    pub conteo_de_comentarios: u32,
    pub le_di_like: bool,
}

/// Response of `GET /social/feed`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub data: Vec<FeedItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComentarioAutor {
    pub id: String,
    pub nombre: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comentario {
    pub id: String,
    pub texto: String,
    pub created_at: DateTime<Utc>,
    pub usuario: ComentarioAutor,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsuarioBusqueda {
    pub id: String,
    pub nombre: String,
    pub email: String,
}

/// Format a millilitre amount without a trailing `.0`.
pub fn format_ml(ml: f64) -> String {
    format!("{}", ml.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registro_from_backend_json() {
        let json = r#"{
            "id": "r1",
            "cantidadConsumidaMl": 250,
            "aporteHidricoMl": 225.5,
            "fechaHora": "2026-10-16T08:30:00.000Z",
            "bebida": { "nombre": "Café" },
            "tipoRegistro": "MANUAL"
        }"#;
        let registro: Registro = serde_json::from_str(json).unwrap();
        assert_eq!(registro.cantidad_consumida_ml, 250);
        assert_eq!(registro.bebida.nombre, "Café");
        assert_eq!(registro.tipo_registro, TipoRegistro::Manual);
    }

    #[test]
    fn test_profile_update_omits_unset_fields() {
        let update = ProfileUpdate {
            peso_kg: Some(70.5),
            nivel_actividad: Some(NivelActividad::MuyActivo),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "pesoKg": 70.5, "nivelActividad": "MuyActivo" })
        );
    }

    #[test]
    fn test_nuevo_registro_wire_format() {
        let body = NuevoRegistro {
            bebida_id: "b1".to_string(),
            cantidad_consumida_ml: 350,
            tipo_registro: TipoRegistro::Manual,
            fecha_hora: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bebidaId": "b1",
                "cantidadConsumidaMl": 350,
                "tipoRegistro": "MANUAL"
            })
        );
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("Femenino".parse::<Genero>(), Ok(Genero::Femenino));
        assert_eq!("MuyActivo".parse::<NivelActividad>(), Ok(NivelActividad::MuyActivo));
        assert_eq!("semana".parse::<Periodo>(), Ok(Periodo::Semana));
        assert!("Desconocido".parse::<Genero>().is_err());
        assert_eq!(serde_json::to_string(&UnidadMedida::Ml).unwrap(), "\"ML\"");
    }

    #[test]
    fn test_format_ml() {
        assert_eq!(format_ml(1000.0), "1000");
        assert_eq!(format_ml(224.6), "225");
    }
}
