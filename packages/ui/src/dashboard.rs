//! Widgets of the dashboard and history pages.

use api::{Bebida, NuevoRegistro, Registro, ResumenDiario};
use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use store::dashboard::{
    beverage_color, progress_label, progress_percent, remaining_ml, ring_circumference,
    ring_dash_offset, AmountPicker, BeverageKind, RING_RADIUS,
};
use store::history::DayCursor;
use store::models::{format_ml, TipoRegistro};

use crate::components::{Button, ButtonVariant, FormError, Loading};
use crate::icons::{FaDroplet, FaGlassWater, FaLeaf, FaMinus, FaMugHot, FaPlus};
use crate::session::use_session;
use crate::views::ModalOverlay;
use crate::Icon;

/// Ring showing today's consumption against the goal.
#[component]
pub fn HydrationProgress(resumen: ResumenDiario) -> Element {
    let percent = progress_percent(resumen.consumido_ml, resumen.objetivo_ml);
    let label = progress_label(&resumen);
    let circumference = ring_circumference();
    let offset = ring_dash_offset(percent);
    let consumed = format_ml(resumen.consumido_ml);
    let goal = format_ml(resumen.objetivo_ml);
    let remaining = remaining_ml(&resumen);

    rsx! {
        section {
            class: "hydration-progress card",
            svg {
                class: "progress-ring",
                view_box: "0 0 200 200",
                width: "200",
                height: "200",
                circle {
                    class: "progress-ring-track",
                    cx: "100",
                    cy: "100",
                    r: "{RING_RADIUS}",
                    fill: "none",
                    stroke_width: "14",
                }
                circle {
                    class: "progress-ring-fill",
                    cx: "100",
                    cy: "100",
                    r: "{RING_RADIUS}",
                    fill: "none",
                    stroke_width: "14",
                    stroke_linecap: "round",
                    stroke_dasharray: "{circumference}",
                    stroke_dashoffset: "{offset}",
                    transform: "rotate(-90 100 100)",
                }
            }
            div {
                class: "progress-center",
                Icon { icon: FaDroplet, width: 20, height: 20 }
                span { class: "progress-percent", "{label}" }
                span { class: "progress-amount", "{consumed} / {goal} ml" }
            }
            if remaining > 0.0 {
                p { class: "progress-hint", "Te faltan {format_ml(remaining)} ml para tu objetivo" }
            } else {
                p { class: "progress-hint progress-hint-done", "¡Objetivo cumplido!" }
            }
        }
    }
}

#[component]
pub fn BeverageIcon(nombre: String, #[props(default = 18)] size: u32) -> Element {
    let color = beverage_color(&nombre);
    rsx! {
        span {
            class: "beverage-icon",
            style: "color: {color}; background-color: {color}1f;",
            match BeverageKind::from_name(&nombre) {
                BeverageKind::Water => rsx! { Icon { icon: FaGlassWater, width: size, height: size } },
                BeverageKind::Coffee => rsx! { Icon { icon: FaMugHot, width: size, height: size } },
                BeverageKind::Tea => rsx! { Icon { icon: FaLeaf, width: size, height: size } },
                BeverageKind::Other => rsx! { Icon { icon: FaDroplet, width: size, height: size } },
            }
        }
    }
}

/// Registros of one day, newest as delivered by the backend.
#[component]
pub fn LogList(registros: Vec<Registro>, #[props(default)] loading: bool) -> Element {
    if loading {
        return rsx! { Loading { label: "Cargando registros..." } };
    }

    if registros.is_empty() {
        return rsx! {
            div {
                class: "log-empty",
                Icon { icon: FaGlassWater, width: 28, height: 28 }
                p { class: "log-empty-title", "¡Bebe agua ya mismo!" }
                p { class: "log-empty-subtitle", "Sin registro de bebidas" }
            }
        };
    }

    rsx! {
        ul {
            class: "log-list",
            for registro in registros {
                LogItem { key: "{registro.id}", registro }
            }
        }
    }
}

#[component]
fn LogItem(registro: Registro) -> Element {
    let time = registro.fecha_hora.with_timezone(&Local).format("%H:%M").to_string();
    let origin = match registro.tipo_registro {
        TipoRegistro::Manual => "Manual",
        TipoRegistro::Digital => "Digital",
    };

    rsx! {
        li {
            class: "log-item",
            BeverageIcon { nombre: registro.bebida.nombre.clone() }
            div {
                class: "log-item-body",
                span { class: "log-item-name", "{registro.bebida.nombre}" }
                span { class: "log-item-meta", "{time} · {origin}" }
            }
            span { class: "log-item-amount", "{registro.cantidad_consumida_ml} ml" }
        }
    }
}

/// Grid of beverages to pick from.
#[component]
pub fn BeverageSelector(bebidas: Vec<Bebida>, on_select: EventHandler<Bebida>) -> Element {
    if bebidas.is_empty() {
        return rsx! { p { class: "muted", "No hay bebidas disponibles." } };
    }

    rsx! {
        div {
            class: "beverage-grid",
            for bebida in bebidas {
                button {
                    key: "{bebida.id}",
                    class: "beverage-option",
                    onclick: {
                        let bebida = bebida.clone();
                        move |_| on_select.call(bebida.clone())
                    },
                    BeverageIcon { nombre: bebida.nombre.clone(), size: 22 }
                    span { "{bebida.nombre}" }
                }
            }
        }
    }
}

/// Two-step modal: pick a beverage, then an amount.
///
/// With `day` set, the registro is backdated to that day at the current time of
/// day. `on_saved` fires after the backend accepted it.
#[component]
pub fn AddRegistroModal(
    bebidas: Vec<Bebida>,
    #[props(default)] day: Option<NaiveDate>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<Registro>,
) -> Element {
    let mut session = use_session();
    let api = session.api();
    let mut selected = use_signal(|| Option::<Bebida>::None);
    let mut picker = use_signal(AmountPicker::new);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_add = move |_| {
        let Some(bebida) = selected() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            error.set(None);
            saving.set(true);
            let nuevo = NuevoRegistro {
                bebida_id: bebida.id.clone(),
                cantidad_consumida_ml: picker.read().amount(),
                tipo_registro: TipoRegistro::Manual,
                fecha_hora: day.map(|d| DayCursor::new(d).entry_timestamp(Local::now())),
            };
            match api.create_registro(&nuevo).await {
                Ok(registro) => {
                    saving.set(false);
                    on_saved.call(registro);
                    on_close.call(());
                }
                Err(e) => {
                    session.report_error("Add registro", &e);
                    error.set(Some(e.message().to_string()));
                    saving.set(false);
                }
            }
        });
    };

    let title = match selected() {
        None => "¿Qué has bebido?".to_string(),
        Some(_) => "¿Cuánto?".to_string(),
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            title,
            div {
                class: "modal-body",
                match selected() {
                    None => rsx! {
                        BeverageSelector {
                            bebidas: bebidas.clone(),
                            on_select: move |bebida| {
                                picker.set(AmountPicker::new());
                                selected.set(Some(bebida));
                            },
                        }
                    },
                    Some(bebida) => rsx! {
                        div {
                            class: "amount-step",
                            div {
                                class: "amount-selected",
                                BeverageIcon { nombre: bebida.nombre.clone(), size: 22 }
                                span { "{bebida.nombre}" }
                                button {
                                    class: "link-button",
                                    onclick: move |_| selected.set(None),
                                    "Cambiar"
                                }
                            }
                            div {
                                class: "amount-stepper",
                                button {
                                    class: "stepper-button",
                                    aria_label: "Menos",
                                    disabled: picker.read().amount() <= AmountPicker::MIN,
                                    onclick: move |_| picker.write().decrease(),
                                    Icon { icon: FaMinus, width: 14, height: 14 }
                                }
                                span { class: "amount-value", "{picker.read().amount()} ml" }
                                button {
                                    class: "stepper-button",
                                    aria_label: "Más",
                                    onclick: move |_| picker.write().increase(),
                                    Icon { icon: FaPlus, width: 14, height: 14 }
                                }
                            }
                            div {
                                class: "amount-presets",
                                for preset in AmountPicker::PRESETS {
                                    button {
                                        key: "{preset}",
                                        class: if picker.read().is_selected(preset) { "preset preset-active" } else { "preset" },
                                        onclick: move |_| picker.write().select_preset(preset),
                                        "{preset} ml"
                                    }
                                }
                            }
                            FormError { message: error() }
                            Button {
                                variant: ButtonVariant::Primary,
                                class: "w-full",
                                loading: saving(),
                                onclick: handle_add,
                                "AÑADIR"
                            }
                        }
                    },
                }
            }
        }
    }
}
