//! # Form validation
//!
//! Every form in the app validates locally before any request is sent. Each form
//! is a plain struct of the raw input strings with a `validate` method that
//! either returns the parsed, typed values or a [`ValidationErrors`] listing one
//! [`FieldError`] per offending field, in field order.
//!
//! | Form | Rules |
//! |------|-------|
//! | [`LoginForm`] | email format, password present |
//! | [`RegisterForm`] | name present, email format, password ≥ 6, confirmation matches |
//! | [`ForgotPasswordForm`] | email format |
//! | [`NewPasswordForm`] | password ≥ 6, confirmation matches |
//! | [`BasicDataForm`] | birth date is a past `YYYY-MM-DD`, gender is a known option |
//! | [`MeasurementsForm`] | height a positive integer, weight a positive number |
//! | [`ActivityForm`] | activity level is a known option |
//! | [`ChangePasswordForm`] | current present, new ≥ 6, confirmation matches |
//! | [`DeleteAccountForm`] | password present |
//! | [`ProfileEditForm`] | each filled field obeys the onboarding rule for it; blank fields are left unchanged |
//!
//! Errors carry a stable message key ([`ErrorKind::key`]) plus a default Spanish
//! message ([`ErrorKind::message`]) for rendering.

use chrono::NaiveDate;

use crate::models::{date_to_utc, Genero, NivelActividad, ProfileUpdate, UserProfile};

pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    EmailInvalid,
    PasswordRequired,
    PasswordMinLength,
    PasswordMismatch,
    NameRequired,
    InvalidDate,
    InvalidOption,
    PositiveNumber,
}

impl ErrorKind {
    pub fn key(&self) -> &'static str {
        match self {
            ErrorKind::EmailInvalid => "Auth.errors.emailInvalid",
            ErrorKind::PasswordRequired => "Auth.errors.passwordRequired",
            ErrorKind::PasswordMinLength => "Auth.errors.passwordMinLength",
            ErrorKind::PasswordMismatch => "Auth.errors.passwordMismatch",
            ErrorKind::NameRequired => "Auth.errors.nameRequired",
            ErrorKind::InvalidDate => "Auth.errors.invalidDate",
            ErrorKind::InvalidOption => "Auth.errors.invalidOption",
            ErrorKind::PositiveNumber => "Auth.errors.positiveNumber",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::EmailInvalid => "Introduce un correo electrónico válido",
            ErrorKind::PasswordRequired => "La contraseña es obligatoria",
            ErrorKind::PasswordMinLength => "La contraseña debe tener al menos 6 caracteres",
            ErrorKind::PasswordMismatch => "Las contraseñas no coinciden",
            ErrorKind::NameRequired => "El nombre es obligatorio",
            ErrorKind::InvalidDate => "Introduce una fecha válida",
            ErrorKind::InvalidOption => "Selecciona una opción válida",
            ErrorKind::PositiveNumber => "Introduce un número mayor que cero",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: ErrorKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s)", errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, kind: ErrorKind) {
        self.errors.push(FieldError { field, kind });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First error recorded for `field`.
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Message to show under `field`, if it failed.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.for_field(field).map(|e| e.kind.message())
    }

    pub fn has(&self, field: &str, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.field == field && e.kind == kind)
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Structural email check: one `@`, a non-empty local part, and a dotted domain
/// with non-empty labels. No whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|l| {
            !l.is_empty() && !l.starts_with('-') && !l.ends_with('-')
                && l.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
        && labels.last().is_some_and(|tld| tld.len() >= 2)
}

fn check_email(errors: &mut ValidationErrors, field: &'static str, email: &str) {
    if !is_valid_email(email) {
        errors.push(field, ErrorKind::EmailInvalid);
    }
}

fn check_new_password(
    errors: &mut ValidationErrors,
    field: &'static str,
    confirm_field: &'static str,
    password: &str,
    confirm: &str,
) {
    if password.chars().count() < PASSWORD_MIN_LEN {
        errors.push(field, ErrorKind::PasswordMinLength);
    }
    if password != confirm {
        errors.push(confirm_field, ErrorKind::PasswordMismatch);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_email(&mut errors, "email", &self.email);
        if self.password.is_empty() {
            errors.push("password", ErrorKind::PasswordRequired);
        }
        errors.into_result(|| Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<Registration, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.nombre.trim().is_empty() {
            errors.push("nombre", ErrorKind::NameRequired);
        }
        check_email(&mut errors, "email", &self.email);
        check_new_password(
            &mut errors,
            "password",
            "confirmPassword",
            &self.password,
            &self.confirm_password,
        );
        errors.into_result(|| Registration {
            nombre: self.nombre.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<String, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_email(&mut errors, "email", &self.email);
        errors.into_result(|| self.email.trim().to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl NewPasswordForm {
    pub fn validate(&self) -> Result<String, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_new_password(
            &mut errors,
            "password",
            "confirmPassword",
            &self.password,
            &self.confirm_password,
        );
        errors.into_result(|| self.password.clone())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BasicDataForm {
    /// `YYYY-MM-DD`, as produced by a date input.
    pub fecha_nacimiento: String,
    pub genero: String,
}

impl BasicDataForm {
    pub fn validate(&self, today: NaiveDate) -> Result<(NaiveDate, Genero), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let fecha = NaiveDate::parse_from_str(self.fecha_nacimiento.trim(), "%Y-%m-%d")
            .ok()
            .filter(|d| *d <= today);
        if fecha.is_none() {
            errors.push("fechaNacimiento", ErrorKind::InvalidDate);
        }
        let genero = self.genero.parse::<Genero>().ok();
        if genero.is_none() {
            errors.push("genero", ErrorKind::InvalidOption);
        }
        match (fecha, genero) {
            (Some(f), Some(g)) if errors.is_empty() => Ok((f, g)),
            _ => Err(errors),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasurementsForm {
    pub altura_cm: String,
    pub peso_kg: String,
}

impl MeasurementsForm {
    pub fn validate(&self) -> Result<(u32, f64), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let altura = self
            .altura_cm
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|a| *a > 0);
        if altura.is_none() {
            errors.push("alturaCm", ErrorKind::PositiveNumber);
        }
        let peso = self
            .peso_kg
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0);
        if peso.is_none() {
            errors.push("pesoKg", ErrorKind::PositiveNumber);
        }
        match (altura, peso) {
            (Some(a), Some(p)) => Ok((a, p)),
            _ => Err(errors),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityForm {
    pub nivel_actividad: String,
}

impl ActivityForm {
    pub fn validate(&self) -> Result<NivelActividad, ValidationErrors> {
        self.nivel_actividad.parse::<NivelActividad>().map_err(|_| {
            let mut errors = ValidationErrors::default();
            errors.push("nivelActividad", ErrorKind::InvalidOption);
            errors
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePasswordForm {
    /// Returns `(current, new)`.
    pub fn validate(&self) -> Result<(String, String), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.current_password.is_empty() {
            errors.push("currentPassword", ErrorKind::PasswordRequired);
        }
        check_new_password(
            &mut errors,
            "newPassword",
            "confirmPassword",
            &self.new_password,
            &self.confirm_password,
        );
        errors.into_result(|| (self.current_password.clone(), self.new_password.clone()))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteAccountForm {
    pub password: String,
}

impl DeleteAccountForm {
    pub fn validate(&self) -> Result<String, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.password.is_empty() {
            errors.push("password", ErrorKind::PasswordRequired);
        }
        errors.into_result(|| self.password.clone())
    }
}

/// The biometric section of the settings page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileEditForm {
    pub altura_cm: String,
    pub peso_kg: String,
    pub fecha_nacimiento: String,
    pub nivel_actividad: String,
}

impl ProfileEditForm {
    /// Pre-fill from the stored profile.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            altura_cm: profile.altura_cm.map(|a| a.to_string()).unwrap_or_default(),
            peso_kg: profile.peso_kg.map(|p| p.to_string()).unwrap_or_default(),
            fecha_nacimiento: profile
                .fecha_nacimiento
                .map(|f| f.date_naive().format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            nivel_actividad: profile
                .nivel_actividad
                .map(|n| n.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self, today: NaiveDate) -> Result<ProfileUpdate, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let mut update = ProfileUpdate::default();

        let altura = self.altura_cm.trim();
        if !altura.is_empty() {
            match altura.parse::<u32>().ok().filter(|a| *a > 0) {
                Some(a) => update.altura_cm = Some(a),
                None => errors.push("alturaCm", ErrorKind::PositiveNumber),
            }
        }
        let peso = self.peso_kg.trim();
        if !peso.is_empty() {
            match peso
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite() && *p > 0.0)
            {
                Some(p) => update.peso_kg = Some(p),
                None => errors.push("pesoKg", ErrorKind::PositiveNumber),
            }
        }
        let fecha = self.fecha_nacimiento.trim();
        if !fecha.is_empty() {
            match NaiveDate::parse_from_str(fecha, "%Y-%m-%d")
                .ok()
                .filter(|d| *d <= today)
            {
                Some(d) => update.fecha_nacimiento = Some(date_to_utc(d)),
                None => errors.push("fechaNacimiento", ErrorKind::InvalidDate),
            }
        }
        if !self.nivel_actividad.is_empty() {
            match self.nivel_actividad.parse::<NivelActividad>() {
                Ok(n) => update.nivel_actividad = Some(n),
                Err(_) => errors.push("nivelActividad", ErrorKind::InvalidOption),
            }
        }
        errors.into_result(|| update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("  ana.lopez+h2o@mail.example.es "));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email("ana lopez@example.com"));
        assert!(!is_valid_email("ana@example..com"));
        assert!(!is_valid_email("ana@example.c"));
    }

    #[test]
    fn test_login_rejects_bad_email_and_empty_password() {
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has("email", ErrorKind::EmailInvalid));
        assert!(errors.has("password", ErrorKind::PasswordRequired));
    }

    #[test]
    fn test_login_accepts_and_trims_email() {
        let form = LoginForm {
            email: " ana@example.com ".to_string(),
            password: "x".to_string(),
        };
        let creds = form.validate().unwrap();
        assert_eq!(creds.email, "ana@example.com");
    }

    #[test]
    fn test_register_rejects_short_password() {
        let form = RegisterForm {
            nombre: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "12345".to_string(),
            confirm_password: "12345".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.errors.len(), 1);
        assert!(errors.has("password", ErrorKind::PasswordMinLength));
    }

    #[test]
    fn test_register_rejects_mismatched_confirmation() {
        let form = RegisterForm {
            nombre: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secreto1".to_string(),
            confirm_password: "secreto2".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has("confirmPassword", ErrorKind::PasswordMismatch));
        assert_eq!(
            errors.message_for("confirmPassword"),
            Some("Las contraseñas no coinciden")
        );
    }

    #[test]
    fn test_register_requires_name() {
        let form = RegisterForm {
            nombre: "   ".to_string(),
            email: "ana@example.com".to_string(),
            password: "secreto".to_string(),
            confirm_password: "secreto".to_string(),
        };
        assert!(form.validate().unwrap_err().has("nombre", ErrorKind::NameRequired));
    }

    #[test]
    fn test_register_valid() {
        let form = RegisterForm {
            nombre: " Ana ".to_string(),
            email: "ana@example.com".to_string(),
            password: "secreto".to_string(),
            confirm_password: "secreto".to_string(),
        };
        let reg = form.validate().unwrap();
        assert_eq!(reg.nombre, "Ana");
    }

    #[test]
    fn test_basic_data() {
        let ok = BasicDataForm {
            fecha_nacimiento: "1990-05-01".to_string(),
            genero: "Femenino".to_string(),
        };
        assert_eq!(
            ok.validate(today()).unwrap(),
            (NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(), Genero::Femenino)
        );

        let future = BasicDataForm {
            fecha_nacimiento: "2030-01-01".to_string(),
            genero: "Otro".to_string(),
        };
        assert!(future
            .validate(today())
            .unwrap_err()
            .has("fechaNacimiento", ErrorKind::InvalidDate));

        let empty = BasicDataForm::default();
        let errors = empty.validate(today()).unwrap_err();
        assert_eq!(errors.errors.len(), 2);
    }

    #[test]
    fn test_measurements() {
        let ok = MeasurementsForm {
            altura_cm: "180".to_string(),
            peso_kg: "72,5".to_string(),
        };
        assert_eq!(ok.validate().unwrap(), (180, 72.5));

        let bad = MeasurementsForm {
            altura_cm: "180.5".to_string(),
            peso_kg: "-3".to_string(),
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.has("alturaCm", ErrorKind::PositiveNumber));
        assert!(errors.has("pesoKg", ErrorKind::PositiveNumber));

        let zero = MeasurementsForm {
            altura_cm: "0".to_string(),
            peso_kg: "70".to_string(),
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_activity() {
        let ok = ActivityForm {
            nivel_actividad: "Ligero".to_string(),
        };
        assert_eq!(ok.validate().unwrap(), NivelActividad::Ligero);
        let bad = ActivityForm {
            nivel_actividad: "Extremo".to_string(),
        };
        assert!(bad.validate().unwrap_err().has("nivelActividad", ErrorKind::InvalidOption));
    }

    #[test]
    fn test_change_password() {
        let form = ChangePasswordForm {
            current_password: "viejo".to_string(),
            new_password: "nuevo123".to_string(),
            confirm_password: "nuevo124".to_string(),
        };
        assert!(form
            .validate()
            .unwrap_err()
            .has("confirmPassword", ErrorKind::PasswordMismatch));

        let form = ChangePasswordForm {
            current_password: "viejo".to_string(),
            new_password: "nuevo123".to_string(),
            confirm_password: "nuevo123".to_string(),
        };
        assert_eq!(
            form.validate().unwrap(),
            ("viejo".to_string(), "nuevo123".to_string())
        );
    }

    #[test]
    fn test_new_password_and_delete_account() {
        let form = NewPasswordForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
        };
        assert!(form.validate().unwrap_err().has("password", ErrorKind::PasswordMinLength));
        assert!(DeleteAccountForm::default().validate().is_err());
        assert!(ForgotPasswordForm {
            email: "x@y.io".to_string()
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_profile_edit_partial_update() {
        let form = ProfileEditForm {
            altura_cm: "175".to_string(),
            nivel_actividad: "MuyActivo".to_string(),
            ..Default::default()
        };
        let update = form.validate(today()).unwrap();
        assert_eq!(update.altura_cm, Some(175));
        assert_eq!(update.nivel_actividad, Some(NivelActividad::MuyActivo));
        assert!(update.peso_kg.is_none());
        assert!(update.fecha_nacimiento.is_none());
    }

    #[test]
    fn test_profile_edit_rejects_bad_values() {
        let form = ProfileEditForm {
            altura_cm: "alto".to_string(),
            peso_kg: "0".to_string(),
            fecha_nacimiento: "2099-01-01".to_string(),
            nivel_actividad: "Nada".to_string(),
        };
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.errors.len(), 4);
    }

    #[test]
    fn test_profile_edit_prefill() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id":"u1","email":"ana@example.com","nombre":"Ana",
                "fechaNacimiento":"1990-05-01T00:00:00.000Z","alturaCm":165,
                "pesoKg":58.5,"nivelActividad":"Ligero","unidadMedida":"ML"}"#,
        )
        .unwrap();
        let form = ProfileEditForm::from_profile(&profile);
        assert_eq!(form.fecha_nacimiento, "1990-05-01");
        assert_eq!(form.peso_kg, "58.5");
        assert_eq!(form.nivel_actividad, "Ligero");
    }
}
