//! # Onboarding draft — multi-step profile collection
//!
//! [`OnboardingDraft`] accumulates the data entered across the onboarding steps
//! and is submitted once, as a [`ProfileUpdate`], on the final step. Each step
//! validates its own form (see [`crate::validation`]) and then merges the result
//! with [`OnboardingDraft::set_biometric_data`].
//!
//! The draft lives only in memory; a reload restarts onboarding from the
//! defaults, which pre-select `Masculino` and `Moderado`.
//!
//! [`OnboardingStep`] describes the step sequence and the progress shown in the
//! header bar of each step.

use chrono::NaiveDate;

use crate::models::{date_to_utc, Genero, NivelActividad, ProfileUpdate, UnidadMedida};

#[derive(Clone, Debug, PartialEq)]
pub struct OnboardingDraft {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub genero: Option<Genero>,
    pub altura_cm: Option<u32>,
    pub peso_kg: Option<f64>,
    pub nivel_actividad: Option<NivelActividad>,
}

impl Default for OnboardingDraft {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            email: String::new(),
            password: String::new(),
            fecha_nacimiento: None,
            genero: Some(Genero::Masculino),
            altura_cm: None,
            peso_kg: None,
            nivel_actividad: Some(NivelActividad::Moderado),
        }
    }
}

/// A partial update of the biometric fields. `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BiometricPatch {
    pub fecha_nacimiento: Option<NaiveDate>,
    pub genero: Option<Genero>,
    pub altura_cm: Option<u32>,
    pub peso_kg: Option<f64>,
    pub nivel_actividad: Option<NivelActividad>,
}

/// Fields the final submission cannot do without.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    FechaNacimiento,
    Genero,
    AlturaCm,
    PesoKg,
    NivelActividad,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::FechaNacimiento => "fechaNacimiento",
            DraftField::Genero => "genero",
            DraftField::AlturaCm => "alturaCm",
            DraftField::PesoKg => "pesoKg",
            DraftField::NivelActividad => "nivelActividad",
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("Datos incompletos. Por favor, completa todos los pasos anteriores.")]
    Incomplete { missing: Vec<DraftField> },
}

impl OnboardingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_account_data(
        &mut self,
        nombre: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) {
        self.nombre = nombre.into();
        self.email = email.into();
        self.password = password.into();
    }

    /// Shallow-merge the fields present in `patch`.
    pub fn set_biometric_data(&mut self, patch: BiometricPatch) {
        if let Some(fecha) = patch.fecha_nacimiento {
            self.fecha_nacimiento = Some(fecha);
        }
        if let Some(genero) = patch.genero {
            self.genero = Some(genero);
        }
        if let Some(altura) = patch.altura_cm {
            self.altura_cm = Some(altura);
        }
        if let Some(peso) = patch.peso_kg {
            self.peso_kg = Some(peso);
        }
        if let Some(nivel) = patch.nivel_actividad {
            self.nivel_actividad = Some(nivel);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.fecha_nacimiento.is_none() {
            missing.push(DraftField::FechaNacimiento);
        }
        if self.genero.is_none() {
            missing.push(DraftField::Genero);
        }
        if self.altura_cm.is_none() {
            missing.push(DraftField::AlturaCm);
        }
        if self.peso_kg.is_none() {
            missing.push(DraftField::PesoKg);
        }
        if self.nivel_actividad.is_none() {
            missing.push(DraftField::NivelActividad);
        }
        missing
    }

    /// Build the `PUT /perfil` body submitted at the end of onboarding.
    pub fn to_profile_update(&self) -> Result<ProfileUpdate, DraftError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DraftError::Incomplete { missing });
        }
        Ok(ProfileUpdate {
            fecha_nacimiento: self.fecha_nacimiento.map(date_to_utc),
            genero: self.genero,
            altura_cm: self.altura_cm,
            peso_kg: self.peso_kg,
            nivel_actividad: self.nivel_actividad,
            unidad_medida: Some(UnidadMedida::Ml),
        })
    }
}

/// The onboarding steps, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnboardingStep {
    DatosBasicos,
    Medidas,
    Actividad,
    Objetivos,
    Exito,
}

impl OnboardingStep {
    /// Steps counted in the "Paso N de M" header, including registration.
    pub const TOTAL: u8 = 8;

    /// The registration screen's place in the sequence, right before [`OnboardingStep::DatosBasicos`].
    pub const REGISTER_NUMBER: u8 = 3;

    /// Header text for step `number`.
    pub fn header(number: u8) -> String {
        format!("Paso {} de {}", number, Self::TOTAL)
    }

    pub fn next(self) -> Option<OnboardingStep> {
        match self {
            OnboardingStep::DatosBasicos => Some(OnboardingStep::Medidas),
            OnboardingStep::Medidas => Some(OnboardingStep::Actividad),
            OnboardingStep::Actividad => Some(OnboardingStep::Objetivos),
            OnboardingStep::Objetivos => Some(OnboardingStep::Exito),
            OnboardingStep::Exito => None,
        }
    }

    pub fn previous(self) -> Option<OnboardingStep> {
        match self {
            OnboardingStep::DatosBasicos => None,
            OnboardingStep::Medidas => Some(OnboardingStep::DatosBasicos),
            OnboardingStep::Actividad => Some(OnboardingStep::Medidas),
            OnboardingStep::Objetivos => Some(OnboardingStep::Actividad),
            OnboardingStep::Exito => Some(OnboardingStep::Objetivos),
        }
    }

    /// Position in the "Paso N de M" header.
    pub fn number(self) -> u8 {
        match self {
            OnboardingStep::DatosBasicos => 4,
            OnboardingStep::Medidas => 5,
            OnboardingStep::Actividad => 6,
            OnboardingStep::Objetivos => 7,
            OnboardingStep::Exito => 8,
        }
    }

    /// Progress bar fill reached at the end of this step.
    pub fn progress_percent(self) -> f64 {
        f64::from(self.number()) / f64::from(Self::TOTAL) * 100.0
    }

    pub fn path(self) -> &'static str {
        match self {
            OnboardingStep::DatosBasicos => "/onboarding/paso-datos-basicos",
            OnboardingStep::Medidas => "/onboarding/paso-medidas",
            OnboardingStep::Actividad => "/onboarding/paso-actividad",
            OnboardingStep::Objetivos => "/onboarding/paso-objetivos",
            OnboardingStep::Exito => "/onboarding/paso-exito",
        }
    }
}
