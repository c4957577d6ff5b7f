use chrono::Local;
use dioxus::prelude::*;
use futures::future::try_join_all;
use store::history::format_api_date;
use store::summary::{last_seven_days, DayTotal, WeeklyStats};
use ui::components::Loading;
use ui::{use_session, StatsGrid, WeeklyChart, WeeklyInsight};

use super::report_api_error;

/// Last seven days: totals, goal completion and a bar chart.
#[component]
pub fn Resumen() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let today = Local::now().date_naive();

    let week = use_resource(move || {
        let api = session.api();
        async move {
            let dates = last_seven_days(today);
            let fetches = dates.iter().map(|date| {
                let api = api.clone();
                let fecha = format_api_date(*date);
                async move { api.get_registros(Some(&fecha)).await }
            });
            match try_join_all(fetches).await {
                Ok(days) => Ok(dates
                    .iter()
                    .zip(days)
                    .map(|(date, dia)| DayTotal::new(*date, dia.total_aporte_dia))
                    .collect::<Vec<_>>()),
                Err(e) => {
                    report_api_error("Weekly summary", &e, session, nav);
                    Err(e)
                }
            }
        }
    });

    rsx! {
        div {
            class: "page resumen",
            header {
                class: "page-header",
                h1 { "Resumen" }
            }
            match &*week.read() {
                None => rsx! { Loading { label: "Cargando resumen..." } },
                Some(Err(_)) => rsx! { p { class: "form-error", "No se pudo cargar tu resumen semanal." } },
                Some(Ok(days)) => {
                    let stats = WeeklyStats::from_days(days);
                    rsx! {
                        StatsGrid { stats: stats.clone() }
                        WeeklyChart { days: days.clone(), today }
                        WeeklyInsight { stats }
                    }
                }
            }
        }
    }
}
