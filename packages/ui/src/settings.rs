//! Sections of the settings page.

use api::NivelActividad;
use chrono::Local;
use dioxus::prelude::*;
use store::validation::{ChangePasswordForm, DeleteAccountForm, ProfileEditForm, ValidationErrors};

use crate::components::{Button, ButtonVariant, FormError, Input, Loading, PasswordInput};
use crate::icons::{FaLock, FaRuler, FaTriangleExclamation};
use crate::session::{use_api, use_session};
use crate::views::ModalOverlay;
use crate::Icon;

/// Biometric data, pre-filled from `GET /perfil`.
#[component]
pub fn ProfileForm() -> Element {
    let mut session = use_session();
    let api = session.api();
    let mut form = use_signal(ProfileEditForm::default);
    let mut field_errors = use_signal(ValidationErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let loader = {
        let api = api.clone();
        use_resource(move || {
            let api = api.clone();
            async move {
                match api.get_profile().await {
                    Ok(profile) => {
                        form.set(ProfileEditForm::from_profile(&profile));
                        true
                    }
                    Err(e) => {
                        session.report_error("Profile load", &e);
                        error.set(Some(e.message().to_string()));
                        false
                    }
                }
            }
        })
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        success.set(false);
        error.set(None);
        let update = match form.read().validate(Local::now().date_naive()) {
            Ok(update) => update,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(ValidationErrors::default());
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.update_profile(&update).await {
                Ok(()) => success.set(true),
                Err(e) => {
                    session.report_error("Profile update", &e);
                    error.set(Some(e.message().to_string()));
                }
            }
            saving.set(false);
        });
    };

    if loader.read().is_none() {
        return rsx! { Loading { label: "Cargando perfil..." } };
    }

    let field = move |name: &str| field_errors.read().message_for(name).map(str::to_string);

    rsx! {
        section {
            class: "settings-section card",
            h2 {
                Icon { icon: FaRuler, width: 16, height: 16 }
                span { "Datos Biométricos" }
            }
            form {
                class: "settings-form",
                onsubmit: handle_save,
                label {
                    class: "field",
                    span { "Altura (cm)" }
                    Input {
                        r#type: "number",
                        invalid: field("alturaCm").is_some(),
                        value: form.read().altura_cm.clone(),
                        oninput: move |evt: FormEvent| form.write().altura_cm = evt.value(),
                    }
                    FormError { message: field("alturaCm") }
                }
                label {
                    class: "field",
                    span { "Peso (kg)" }
                    Input {
                        r#type: "number",
                        invalid: field("pesoKg").is_some(),
                        value: form.read().peso_kg.clone(),
                        oninput: move |evt: FormEvent| form.write().peso_kg = evt.value(),
                    }
                    FormError { message: field("pesoKg") }
                }
                label {
                    class: "field",
                    span { "Fecha de nacimiento" }
                    Input {
                        r#type: "date",
                        invalid: field("fechaNacimiento").is_some(),
                        value: form.read().fecha_nacimiento.clone(),
                        oninput: move |evt: FormEvent| form.write().fecha_nacimiento = evt.value(),
                    }
                    FormError { message: field("fechaNacimiento") }
                }
                label {
                    class: "field",
                    span { "Nivel de actividad" }
                    select {
                        class: "input",
                        value: "{form.read().nivel_actividad}",
                        onchange: move |evt| form.write().nivel_actividad = evt.value(),
                        option { value: "", disabled: true, "Selecciona una opción" }
                        for nivel in NivelActividad::ALL {
                            option {
                                key: "{nivel.as_str()}",
                                value: "{nivel.as_str()}",
                                selected: form.read().nivel_actividad == nivel.as_str(),
                                "{nivel.label()}"
                            }
                        }
                    }
                    FormError { message: field("nivelActividad") }
                }
                FormError { message: error() }
                if success() {
                    p { class: "form-success", "Perfil actualizado correctamente" }
                }
                Button {
                    r#type: "submit",
                    loading: saving(),
                    "Guardar Cambios"
                }
            }
        }
    }
}

/// Change-password form.
#[component]
pub fn SecurityForm() -> Element {
    let api = use_api();
    let mut form = use_signal(ChangePasswordForm::default);
    let mut field_errors = use_signal(ValidationErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        success.set(false);
        error.set(None);
        let (current, new) = match form.read().validate() {
            Ok(passwords) => passwords,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(ValidationErrors::default());
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.change_password(&current, &new).await {
                Ok(()) => {
                    form.set(ChangePasswordForm::default());
                    success.set(true);
                }
                Err(e) => {
                    tracing::error!("Failed to change password: {}", e);
                    error.set(Some(e.message().to_string()));
                }
            }
            saving.set(false);
        });
    };

    let field = move |name: &str| field_errors.read().message_for(name).map(str::to_string);

    rsx! {
        section {
            class: "settings-section card",
            h2 {
                Icon { icon: FaLock, width: 16, height: 16 }
                span { "Seguridad" }
            }
            form {
                class: "settings-form",
                onsubmit: handle_submit,
                label {
                    class: "field",
                    span { "Contraseña Actual" }
                    PasswordInput {
                        invalid: field("currentPassword").is_some(),
                        value: form.read().current_password.clone(),
                        oninput: move |evt: FormEvent| form.write().current_password = evt.value(),
                    }
                    FormError { message: field("currentPassword") }
                }
                label {
                    class: "field",
                    span { "Nueva Contraseña" }
                    PasswordInput {
                        invalid: field("newPassword").is_some(),
                        value: form.read().new_password.clone(),
                        oninput: move |evt: FormEvent| form.write().new_password = evt.value(),
                    }
                    FormError { message: field("newPassword") }
                }
                label {
                    class: "field",
                    span { "Confirmar Contraseña" }
                    PasswordInput {
                        invalid: field("confirmPassword").is_some(),
                        value: form.read().confirm_password.clone(),
                        oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                    }
                    FormError { message: field("confirmPassword") }
                }
                FormError { message: error() }
                if success() {
                    p { class: "form-success", "Contraseña actualizada" }
                }
                Button {
                    r#type: "submit",
                    variant: ButtonVariant::Secondary,
                    loading: saving(),
                    "Actualizar Contraseña"
                }
            }
        }
    }
}

/// Confirmation dialog for `DELETE /perfil`. On success the session is cleared
/// and `on_deleted` fires.
#[component]
pub fn DeleteAccountModal(on_close: EventHandler<()>, on_deleted: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut form = use_signal(DeleteAccountForm::default);
    let mut field_errors = use_signal(ValidationErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);

    let handle_delete = move |evt: FormEvent| {
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
        let api = session.api();
        spawn(async move {
            deleting.set(true);
            match api.delete_account(&password).await {
                Ok(()) => {
                    tracing::info!("Account deleted");
                    session.logout();
                    on_deleted.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to delete account: {}", e);
                    error.set(Some(e.message().to_string()));
                    deleting.set(false);
                }
            }
        });
    };

    let password_error = field_errors
        .read()
        .message_for("password")
        .map(str::to_string);

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-body delete-account",
                div {
                    class: "danger-icon",
                    Icon { icon: FaTriangleExclamation, width: 28, height: 28 }
                }
                h2 { "¿Eliminar cuenta?" }
                p {
                    class: "muted",
                    "Esta acción es permanente. Se borrarán tu perfil, tus registros y tu actividad social."
                }
                form {
                    onsubmit: handle_delete,
                    label {
                        class: "field",
                        span { "Confirma tu contraseña para continuar" }
                        PasswordInput {
                            invalid: password_error.is_some(),
                            value: form.read().password.clone(),
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                        FormError { message: password_error.clone() }
                    }
                    FormError { message: error() }
                    div {
                        class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| on_close.call(()),
                            "Cancelar"
                        }
                        Button {
                            r#type: "submit",
                            variant: ButtonVariant::Danger,
                            loading: deleting(),
                            "Sí, eliminar todo"
                        }
                    }
                }
            }
        }
    }
}
