use dioxus::prelude::*;

#[component]
pub fn Loading(#[props(default = "Cargando...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "loading", "{label}" }
    }
}
