use api::auth::RegisterRequest;
use api::ApiError;
use dioxus::prelude::*;
use store::validation::{RegisterForm, ValidationErrors};
use store::OnboardingStep;
use ui::components::{Button, FormError, Input, PasswordInput};
use ui::{use_onboarding, use_session};

use super::{login_route, use_redirect_if_logged_in, AuthShell};
use crate::Route;

/// The backend reports a duplicate email with this phrase.
const DUPLICATE_EMAIL_MARKER: &str = "correo ya ha sido registrado";

fn registration_error(err: &ApiError) -> String {
    if err.message().contains(DUPLICATE_EMAIL_MARKER) {
        "Este correo electrónico ya está registrado. Intenta iniciar sesión.".to_string()
    } else {
        err.message().to_string()
    }
}

#[component]
pub fn Registro() -> Element {
    use_redirect_if_logged_in();

    let mut session = use_session();
    let mut draft = use_onboarding();
    let nav = use_navigator();
    let mut form = use_signal(RegisterForm::default);
    let mut field_errors = use_signal(ValidationErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let registration = match form.read().validate() {
            Ok(r) => r,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(ValidationErrors::default());
        let api = session.api();
        spawn(async move {
            loading.set(true);
            let request = RegisterRequest {
                nombre: registration.nombre.clone(),
                email: registration.email.clone(),
                password: registration.password.clone(),
            };
            match api.register_and_login(&request).await {
                Ok(resp) => {
                    tracing::info!("Account created");
                    draft.write().set_account_data(
                        registration.nombre,
                        registration.email,
                        registration.password,
                    );
                    session.set_token(resp.token);
                    nav.push(Route::PasoDatosBasicos {});
                }
                Err(e) => {
                    tracing::error!("Registration failed: {}", e);
                    error.set(Some(registration_error(&e)));
                    loading.set(false);
                }
            }
        });
    };

    let field = move |name: &str| field_errors.read().message_for(name).map(str::to_string);

    rsx! {
        AuthShell {
            title: "Crea tu cuenta",
            subtitle: OnboardingStep::header(OnboardingStep::REGISTER_NUMBER),
            form {
                class: "auth-form",
                onsubmit: handle_register,
                label {
                    class: "field",
                    span { "Nombre" }
                    Input {
                        placeholder: "Tu nombre",
                        invalid: field("nombre").is_some(),
                        value: form.read().nombre.clone(),
                        oninput: move |evt: FormEvent| form.write().nombre = evt.value(),
                    }
                    FormError { message: field("nombre") }
                }
                label {
                    class: "field",
                    span { "Correo electrónico" }
                    Input {
                        r#type: "email",
                        placeholder: "tu@correo.com",
                        invalid: field("email").is_some(),
                        value: form.read().email.clone(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    FormError { message: field("email") }
                }
                label {
                    class: "field",
                    span { "Contraseña" }
                    PasswordInput {
                        invalid: field("password").is_some(),
                        value: form.read().password.clone(),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                    FormError { message: field("password") }
                }
                label {
                    class: "field",
                    span { "Confirmar contraseña" }
                    PasswordInput {
                        invalid: field("confirmPassword").is_some(),
                        value: form.read().confirm_password.clone(),
                        oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                    }
                    FormError { message: field("confirmPassword") }
                }
                FormError { message: error() }
                Button {
                    r#type: "submit",
                    class: "w-full",
                    loading: loading(),
                    "Crear cuenta"
                }
            }
            p {
                class: "auth-footer",
                "¿Ya tienes cuenta? "
                Link { class: "auth-link", to: login_route(""), "Inicia sesión" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_email_gets_friendly_text() {
        let err = ApiError::Validation {
            message: "El correo ya ha sido registrado.".to_string(),
        };
        assert!(registration_error(&err).starts_with("Este correo electrónico ya está registrado"));

        let err = ApiError::Validation {
            message: "Nombre demasiado largo".to_string(),
        };
        assert_eq!(registration_error(&err), "Nombre demasiado largo");
    }
}
