//! Widgets of the weekly summary page.

use chrono::NaiveDate;
use dioxus::prelude::*;
use store::models::format_ml;
use store::summary::{bar_height_percent, chart_scale, DayTotal, WeeklyStats};

use crate::icons::{FaBullseye, FaChartLine, FaDroplet, FaLightbulb};
use crate::Icon;

#[component]
pub fn StatsGrid(stats: WeeklyStats) -> Element {
    let avg = format_ml(stats.avg_daily_ml);
    let total = stats.total_litres_label();
    let rate = stats.completion_rate.round() as i64;

    rsx! {
        div {
            class: "stats-grid",
            div {
                class: "stat-card",
                Icon { icon: FaDroplet, width: 16, height: 16 }
                span { class: "stat-label", "Promedio Diario" }
                span { class: "stat-value", "{avg}" span { class: "stat-unit", " ml" } }
            }
            div {
                class: "stat-card",
                Icon { icon: FaChartLine, width: 16, height: 16 }
                span { class: "stat-label", "Total Semanal" }
                span { class: "stat-value", "{total}" span { class: "stat-unit", " Litros" } }
            }
            div {
                class: "stat-card",
                Icon { icon: FaBullseye, width: 16, height: 16 }
                span { class: "stat-label", "Objetivo Cumplido" }
                span { class: "stat-value", "{rate}" span { class: "stat-unit", "%" } }
            }
        }
    }
}

/// Bar chart of the last seven days, oldest on the left.
#[component]
pub fn WeeklyChart(days: Vec<DayTotal>, today: NaiveDate) -> Element {
    let scale = chart_scale(&days);

    rsx! {
        section {
            class: "weekly-chart card",
            div {
                class: "chart-header",
                h2 { "Hidratación Semanal" }
                span { class: "muted", "Últimos 7 días" }
            }
            div {
                class: "chart-bars",
                for day in days {
                    div {
                        key: "{day.date}",
                        class: "chart-column",
                        title: "{format_ml(day.amount_ml)} ml",
                        div {
                            class: "chart-track",
                            div {
                                class: if day.goal_met() { "chart-bar chart-bar-met" } else { "chart-bar" },
                                style: "height: {bar_height_percent(day.amount_ml, scale)}%;",
                            }
                        }
                        span {
                            class: if day.date == today { "chart-label chart-label-today" } else { "chart-label" },
                            "{day.short_label()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn WeeklyInsight(stats: WeeklyStats) -> Element {
    rsx! {
        aside {
            class: "insight card",
            Icon { icon: FaLightbulb, width: 18, height: 18 }
            p { "{stats.insight()}" }
        }
    }
}
