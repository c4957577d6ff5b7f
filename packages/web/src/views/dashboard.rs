use api::ResumenDiario;
use dioxus::prelude::*;
use ui::components::{Button, Loading};
use ui::icons::FaPlus;
use ui::{use_session, AddRegistroModal, HydrationProgress, Icon, LogList};

use super::report_api_error;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut reload = use_signal(|| 0u32);
    let mut show_add = use_signal(|| false);

    let today = use_resource(move || {
        let api = session.api();
        reload();
        async move {
            let result = futures::try_join!(api.get_resumen_hoy(), api.get_registros(None));
            if let Err(e) = &result {
                report_api_error("Dashboard load", e, session, nav);
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

    let (resumen, registros) = match &*today.read() {
        Some(Ok((resumen, dia))) => (resumen.clone(), Some(dia.registros.clone())),
        _ => (ResumenDiario::default(), None),
    };
    let failed = matches!(&*today.read(), Some(Err(_)));
    let bebida_list = match &*bebidas.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        div {
            class: "page dashboard",
            header {
                class: "page-header",
                h1 { "Hoy" }
            }
            HydrationProgress { resumen }
            section {
                class: "page-section",
                div {
                    class: "section-header",
                    h2 { "Registro de hoy" }
                    Button {
                        class: "add-button",
                        disabled: bebidas.read().is_none(),
                        onclick: move |_| show_add.set(true),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "Añadir" }
                    }
                }
                if failed {
                    p { class: "form-error", "No se pudieron cargar tus datos de hoy." }
                } else if let Some(registros) = registros {
                    LogList { registros }
                } else {
                    Loading { label: "Cargando registros..." }
                }
            }
        }
        if show_add() {
            AddRegistroModal {
                bebidas: bebida_list,
                on_close: move |_| show_add.set(false),
                on_saved: move |_| reload += 1,
            }
        }
    }
}
