use chrono::Local;
use dioxus::prelude::*;
use store::history::{goal_reached, DayCursor};
use store::models::format_ml;
use ui::components::{Button, Loading};
use ui::icons::{FaChevronLeft, FaChevronRight, FaPlus, FaTrophy};
use ui::{use_session, AddRegistroModal, Icon, LogList};

use super::report_api_error;

#[component]
pub fn History() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let today = Local::now().date_naive();
    let mut cursor = use_signal(move || DayCursor::new(today));
    let mut reload = use_signal(|| 0u32);
    let mut show_add = use_signal(|| false);

    let day = use_resource(move || {
        let api = session.api();
        let fecha = cursor().api_param();
        reload();
        async move {
            let result = api.get_registros(Some(&fecha)).await;
            if let Err(e) = &result {
                report_api_error("History load", e, session, nav);
            }
            result
        }
    });

    let bebidas = use_resource(move || {
        let api = session.api();
        async move {
            let result = api.get_bebidas().await;
            if let Err(e) = &result {
                report_api_error("Beverage list", e, session, nav);
            }
            result
        }
    });

    let label = cursor.read().label(today);
    let can_go_forward = cursor.read().can_go_forward(today);
    let bebida_list = match &*bebidas.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        div {
            class: "page history",
            header {
                class: "day-nav",
                button {
                    class: "icon-button",
                    aria_label: "Día anterior",
                    onclick: move |_| cursor.write().previous(),
                    Icon { icon: FaChevronLeft, width: 16, height: 16 }
                }
                h1 { class: "day-label", "{label}" }
                button {
                    class: "icon-button",
                    aria_label: "Día siguiente",
                    disabled: !can_go_forward,
                    onclick: move |_| {
                        cursor.write().next(Local::now().date_naive());
                    },
                    Icon { icon: FaChevronRight, width: 16, height: 16 }
                }
            }
            match &*day.read() {
                None => rsx! { Loading { label: "Cargando registros..." } },
                Some(Err(_)) => rsx! { p { class: "form-error", "No se pudo cargar este día." } },
                Some(Ok(dia)) => rsx! {
                    section {
                        class: "day-total card",
                        span { class: "muted", "Total del día" }
                        span { class: "day-total-value", "{format_ml(dia.total_aporte_dia)} ml" }
                        if goal_reached(dia.total_aporte_dia) {
                            span {
                                class: "goal-badge",
                                Icon { icon: FaTrophy, width: 12, height: 12 }
                                "Objetivo alcanzado"
                            }
                        }
                    }
                    LogList { registros: dia.registros.clone() }
                },
            }
            Button {
                class: "w-full",
                disabled: bebidas.read().is_none(),
                onclick: move |_| show_add.set(true),
                Icon { icon: FaPlus, width: 14, height: 14 }
                span { "Añadir a este día" }
            }
        }
        if show_add() {
            AddRegistroModal {
                bebidas: bebida_list,
                day: cursor.read().date(),
                on_close: move |_| show_add.set(false),
                on_saved: move |_| reload += 1,
            }
        }
    }
}
