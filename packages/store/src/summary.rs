//! # Weekly summary
//!
//! The summary view fetches the last seven days one `GET /registros?fecha=` at a
//! time and folds the daily totals into the figures below. The per-day goal is
//! the fixed [`DEFAULT_GOAL_ML`]; the backend does not expose historical goals.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::DEFAULT_GOAL_ML;

pub const WEEK_DAYS: u64 = 7;
/// Smallest chart scale, so a light week does not render full-height bars.
pub const MIN_CHART_SCALE_ML: f64 = 2500.0;
/// Average above which the weekly insight is encouraging.
pub const GOOD_AVERAGE_ML: f64 = 1500.0;

#[derive(Clone, Debug, PartialEq)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub amount_ml: f64,
    pub goal_ml: f64,
}

impl DayTotal {
    pub fn new(date: NaiveDate, amount_ml: f64) -> Self {
        Self {
            date,
            amount_ml,
            goal_ml: DEFAULT_GOAL_ML,
        }
    }

    pub fn goal_met(&self) -> bool {
        self.amount_ml >= self.goal_ml
    }

    /// Capitalised short weekday, e.g. "Lun".
    pub fn short_label(&self) -> &'static str {
        short_weekday(self.date.weekday())
    }
}

/// The seven days ending at `today`, oldest first.
pub fn last_seven_days(today: NaiveDate) -> Vec<NaiveDate> {
    (0..WEEK_DAYS)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .collect()
}

pub fn short_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lun",
        Weekday::Tue => "Mar",
        Weekday::Wed => "Mié",
        Weekday::Thu => "Jue",
        Weekday::Fri => "Vie",
        Weekday::Sat => "Sáb",
        Weekday::Sun => "Dom",
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeeklyStats {
    pub total_ml: f64,
    pub avg_daily_ml: f64,
    /// Percentage of the week's days on which the goal was met.
    pub completion_rate: f64,
}

impl WeeklyStats {
    pub fn from_days(days: &[DayTotal]) -> Self {
        let window = WEEK_DAYS as f64;
        let total_ml: f64 = days.iter().map(|d| d.amount_ml).sum();
        let met = days.iter().filter(|d| d.goal_met()).count() as f64;
        Self {
            total_ml,
            avg_daily_ml: total_ml / window,
            completion_rate: met / window * 100.0,
        }
    }

    /// Total in litres with one decimal, e.g. "10.5".
    pub fn total_litres_label(&self) -> String {
        format!("{:.1}", self.total_ml / 1000.0)
    }

    pub fn insight(&self) -> &'static str {
        if self.avg_daily_ml >= GOOD_AVERAGE_ML {
            "¡Vas muy bien! Tu promedio de hidratación es estable. Mantén este ritmo para mejorar tu energía diaria."
        } else {
            "Parece que esta semana ha sido baja en hidratación. Intenta tener una botella de agua cerca mientras trabajas."
        }
    }
}

/// Value mapped to a full-height bar.
pub fn chart_scale(days: &[DayTotal]) -> f64 {
    days.iter()
        .map(|d| d.amount_ml)
        .fold(MIN_CHART_SCALE_ML, f64::max)
}

pub fn bar_height_percent(amount_ml: f64, scale: f64) -> f64 {
    if scale <= 0.0 {
        return 0.0;
    }
    (amount_ml / scale * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last_seven_days_oldest_first() {
        let days = last_seven_days(day(2026, 10, 16));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], day(2026, 10, 10));
        assert_eq!(days[6], day(2026, 10, 16));
        let labels: Vec<_> = days.iter().map(|d| short_weekday(d.weekday())).collect();
        assert_eq!(labels, ["Sáb", "Dom", "Lun", "Mar", "Mié", "Jue", "Vie"]);
    }

    #[test]
    fn test_weekly_stats() {
        let amounts = [2000.0, 1500.0, 2500.0, 0.0, 1000.0, 2000.0, 1500.0];
        let days: Vec<DayTotal> = last_seven_days(day(2026, 10, 16))
            .into_iter()
            .zip(amounts)
            .map(|(d, a)| DayTotal::new(d, a))
            .collect();
        let stats = WeeklyStats::from_days(&days);
        assert_eq!(stats.total_ml, 10500.0);
        assert_eq!(stats.avg_daily_ml, 1500.0);
        assert!((stats.completion_rate - 3.0 / 7.0 * 100.0).abs() < 1e-9);
        assert_eq!(stats.total_litres_label(), "10.5");
        assert!(stats.insight().starts_with("¡Vas muy bien!"));
    }

    #[test]
    fn test_chart_scale_has_floor() {
        let light = vec![DayTotal::new(day(2026, 10, 16), 800.0)];
        assert_eq!(chart_scale(&light), 2500.0);
        assert_eq!(bar_height_percent(800.0, chart_scale(&light)), 32.0);

        let heavy = vec![DayTotal::new(day(2026, 10, 16), 4000.0)];
        assert_eq!(chart_scale(&heavy), 4000.0);
    }

    #[test]
    fn test_empty_week() {
        let stats = WeeklyStats::from_days(&[]);
        assert_eq!(stats, WeeklyStats::default());
        assert!(stats.insight().starts_with("Parece"));
    }
}
