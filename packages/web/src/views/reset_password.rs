//! Password recovery: request a reset link, confirmation, and the new-password
//! form the emailed link points at.

use dioxus::prelude::*;
use store::validation::{ForgotPasswordForm, NewPasswordForm, ValidationErrors};
use ui::components::{Button, FormError, Input, PasswordInput};
use ui::icons::FaEnvelope;
use ui::{use_api, Icon};

use super::{login_route, AuthShell};
use crate::Route;

#[component]
pub fn ResetPassword(token: String) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut form = use_signal(ForgotPasswordForm::default);
    let mut field_errors = use_signal(ValidationErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Links from older emails land here with the token attached.
    if !token.is_empty() {
        nav.replace(Route::NewPassword { token });
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let email = match form.read().validate() {
            Ok(email) => email,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(ValidationErrors::default());
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            match api.forgot_password(&email).await {
                Ok(()) => {
                    nav.push(Route::ResetEmailSent { email });
                }
                Err(e) => {
                    tracing::error!("Password reset request failed: {}", e);
                    error.set(Some(e.message().to_string()));
                    loading.set(false);
                }
            }
        });
    };

    let email_error = field_errors.read().message_for("email").map(str::to_string);

    rsx! {
        AuthShell {
            title: "Restablecer contraseña",
            subtitle: "Te enviaremos un enlace para crear una nueva contraseña.",
            form {
                class: "auth-form",
                onsubmit: handle_submit,
                label {
                    class: "field",
                    span { "Correo electrónico" }
                    Input {
                        r#type: "email",
                        placeholder: "tu@correo.com",
                        invalid: email_error.is_some(),
                        value: form.read().email.clone(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    FormError { message: email_error.clone() }
                }
                FormError { message: error() }
                Button {
                    r#type: "submit",
                    class: "w-full",
                    loading: loading(),
                    "Enviar enlace"
                }
            }
            p {
                class: "auth-footer",
                Link { class: "auth-link", to: login_route(""), "Volver a iniciar sesión" }
            }
        }
    }
}

#[component]
pub fn ResetEmailSent(email: String) -> Element {
    rsx! {
        AuthShell {
            title: "Revisa tu correo",
            div {
                class: "sent-icon",
                Icon { icon: FaEnvelope, width: 40, height: 40 }
            }
            if email.is_empty() {
                p { "Te hemos enviado un enlace para restablecer tu contraseña." }
            } else {
                p {
                    "Te hemos enviado un enlace para restablecer tu contraseña a "
                    strong { "{email}" }
                    "."
                }
            }
            p { class: "muted", "Si no lo ves, revisa la carpeta de spam." }
            p {
                class: "auth-footer",
                Link { class: "auth-link", to: login_route(""), "Volver a iniciar sesión" }
            }
        }
    }
}

#[component]
pub fn NewPassword(token: String) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut form = use_signal(NewPasswordForm::default);
    let mut field_errors = use_signal(ValidationErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if token.is_empty() {
        nav.replace(Route::ResetPassword {
            token: String::new(),
        });
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let password = match form.read().validate() {
            Ok(password) => password,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(ValidationErrors::default());
        let api = api.clone();
        let token = token.clone();
        spawn(async move {
            loading.set(true);
            match api.reset_password(&token, &password).await {
                Ok(()) => {
                    tracing::info!("Password reset");
                    nav.replace(login_route("passwordUpdateSuccess"));
                }
                Err(e) => {
                    tracing::error!("Password reset failed: {}", e);
                    error.set(Some(e.message().to_string()));
                    loading.set(false);
                }
            }
        });
    };

    let field = move |name: &str| field_errors.read().message_for(name).map(str::to_string);

    rsx! {
        AuthShell {
            title: "Nueva contraseña",
            subtitle: "Elige una contraseña de al menos 6 caracteres.",
            form {
                class: "auth-form",
                onsubmit: handle_submit,
                label {
                    class: "field",
                    span { "Nueva contraseña" }
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
                    "Guardar contraseña"
                }
            }
        }
    }
}
