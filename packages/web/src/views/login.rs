use api::auth::LoginRequest;
use dioxus::prelude::*;
use store::validation::{LoginForm, ValidationErrors};
use ui::components::{
    notice_kind, notice_message, Button, FormError, Input, Notification, PasswordInput,
};
use ui::use_session;

use super::{login_route, use_redirect_if_logged_in, AuthShell};
use crate::Route;

#[allow(non_snake_case)]
#[component]
pub fn Login(messageKey: String) -> Element {
    use_redirect_if_logged_in();

    let mut session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);
    let mut field_errors = use_signal(ValidationErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut notice = use_signal(|| {
        notice_message(&messageKey).map(|text| (text.to_string(), notice_kind(&messageKey)))
    });
    // Shown once; a reload must not bring it back.
    use_hook(|| {
        if let Some(route) = consumed_notice(&messageKey) {
            nav.replace(route);
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let credentials = match form.read().validate() {
            Ok(c) => c,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(ValidationErrors::default());
        let api = session.api();
        spawn(async move {
            loading.set(true);
            let request = LoginRequest {
                email: credentials.email,
                password: credentials.password,
            };
            match api.login(&request).await {
                Ok(resp) => {
                    tracing::info!("Logged in");
                    session.set_token(resp.token);
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    error.set(Some(e.message().to_string()));
                    loading.set(false);
                }
            }
        });
    };

    let field = move |name: &str| field_errors.read().message_for(name).map(str::to_string);

    rsx! {
        if let Some((message, kind)) = notice() {
            Notification {
                message,
                kind,
                on_close: move |_| notice.set(None),
            }
        }
        AuthShell {
            title: "Inicia sesión",
            subtitle: "Bienvenido de nuevo. Sigue hidratándote.",
            form {
                class: "auth-form",
                onsubmit: handle_login,
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
                Link {
                    class: "auth-link align-end",
                    to: Route::ResetPassword { token: String::new() },
                    "¿Olvidaste tu contraseña?"
                }
                FormError { message: error() }
                Button {
                    r#type: "submit",
                    class: "w-full",
                    loading: loading(),
                    "Iniciar sesión"
                }
            }
            p {
                class: "auth-footer",
                "¿No tienes cuenta? "
                Link { class: "auth-link", to: Route::Registro {}, "Regístrate" }
            }
        }
    }
}

/// Where to go once the notice carried by `message_key` has been taken.
fn consumed_notice(message_key: &str) -> Option<Route> {
    (!message_key.is_empty()).then(|| login_route(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_key_is_dropped_from_url() {
        assert_eq!(consumed_notice("passwordUpdateSuccess"), Some(login_route("")));
        assert_eq!(consumed_notice("sessionExpired"), Some(login_route("")));
        assert_eq!(consumed_notice(""), None);
    }
}
