use dioxus::prelude::*;
use ui::icons::{FaChartColumn, FaClockRotateLeft, FaGear, FaHouse, FaUsers};
use ui::{Icon, Navbar};

use super::use_require_session;
use crate::Route;

/// Shell of the authenticated pages: content plus the bottom navigation.
#[component]
pub fn AppLayout() -> Element {
    if !use_require_session() {
        return rsx! {};
    }

    rsx! {
        main {
            class: "app-content",
            Outlet::<Route> {}
        }
        Navbar {
            Link {
                to: Route::Dashboard {},
                active_class: "active",
                Icon { icon: FaHouse, width: 18, height: 18 }
                span { "Inicio" }
            }
            Link {
                to: Route::History {},
                active_class: "active",
                Icon { icon: FaClockRotateLeft, width: 18, height: 18 }
                span { "Historial" }
            }
            Link {
                to: Route::Resumen {},
                active_class: "active",
                Icon { icon: FaChartColumn, width: 18, height: 18 }
                span { "Resumen" }
            }
            Link {
                to: Route::Social {},
                active_class: "active",
                Icon { icon: FaUsers, width: 18, height: 18 }
                span { "Social" }
            }
            Link {
                to: Route::Configuracion {},
                active_class: "active",
                Icon { icon: FaGear, width: 18, height: 18 }
                span { "Ajustes" }
            }
        }
    }
}
