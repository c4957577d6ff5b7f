use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Button that swaps its label for a spinner while `loading`.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{r#type}",
            disabled: disabled || loading,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "spinner", aria_hidden: "true" }
            } else {
                {children}
            }
        }
    }
}
