use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// Full-screen backdrop with a centered card.
/// Clicking the backdrop or the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default)] title: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    if let Some(title) = title {
                        h2 { class: "modal-title", "{title}" }
                    }
                    button {
                        class: "modal-close",
                        aria_label: "Cerrar",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }
                {children}
            }
        }
    }
}
