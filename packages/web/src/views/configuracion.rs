use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::icons::{FaRightFromBracket, FaTrashCan};
use ui::{use_session, DeleteAccountModal, Icon, ProfileForm, SecurityForm};

use super::login_route;

#[component]
pub fn Configuracion() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut show_delete = use_signal(|| false);

    rsx! {
        div {
            class: "page configuracion",
            header {
                class: "page-header",
                h1 { "Configuración" }
            }
            ProfileForm {}
            SecurityForm {}
            section {
                class: "settings-section card",
                Button {
                    variant: ButtonVariant::Secondary,
                    class: "w-full",
                    onclick: move |_| {
                        tracing::info!("Logging out");
                        session.logout();
                        nav.replace(login_route(""));
                    },
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    span { "Cerrar sesión" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "w-full danger-text",
                    onclick: move |_| show_delete.set(true),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                    span { "Eliminar cuenta" }
                }
            }
        }
        if show_delete() {
            DeleteAccountModal {
                on_close: move |_| show_delete.set(false),
                on_deleted: move |_| {
                    nav.replace(login_route("accountDeleted"));
                },
            }
        }
    }
}
