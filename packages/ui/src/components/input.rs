use dioxus::prelude::*;

use crate::icons::{FaEye, FaEyeSlash, FaTriangleExclamation};
use crate::Icon;

#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default)] invalid: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: if invalid { "input input-invalid {class}" } else { "input {class}" },
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            aria_invalid: invalid,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Password field with a show/hide toggle.
#[component]
pub fn PasswordInput(
    #[props(default)] placeholder: String,
    #[props(default)] invalid: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let mut visible = use_signal(|| false);

    rsx! {
        div {
            class: "password-field",
            Input {
                r#type: if visible() { "text".to_string() } else { "password".to_string() },
                placeholder,
                invalid,
                value,
                oninput: move |evt| oninput.call(evt),
            }
            button {
                class: "password-toggle",
                r#type: "button",
                aria_label: if visible() { "Ocultar contraseña" } else { "Mostrar contraseña" },
                onclick: move |_| visible.toggle(),
                if visible() {
                    Icon { icon: FaEyeSlash, width: 16, height: 16 }
                } else {
                    Icon { icon: FaEye, width: 16, height: 16 }
                }
            }
        }
    }
}

/// Inline message under a form field.
#[component]
pub fn FormError(message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    rsx! {
        p {
            class: "form-error",
            role: "alert",
            Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
            span { "{message}" }
        }
    }
}
