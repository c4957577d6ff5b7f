//! Day-by-day navigation for the history view.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone, Utc, Weekday};

/// Daily total that earns the "goal reached" badge in the history view.
pub const HISTORY_GOAL_ML: f64 = 2000.0;

/// The day currently shown in the history view. Never moves past `today`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCursor {
    date: NaiveDate,
}

impl DayCursor {
    pub fn new(today: NaiveDate) -> Self {
        Self { date: today }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `YYYY-MM-DD`, the format of the `fecha` query parameter.
    pub fn api_param(&self) -> String {
        format_api_date(self.date)
    }

    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.date == today
    }

    pub fn can_go_forward(&self, today: NaiveDate) -> bool {
        self.date < today
    }

    pub fn previous(&mut self) {
        if let Some(d) = self.date.checked_sub_days(Days::new(1)) {
            self.date = d;
        }
    }

    /// Advance one day. Returns `false`, leaving the cursor alone, once it is at `today`.
    pub fn next(&mut self, today: NaiveDate) -> bool {
        if !self.can_go_forward(today) {
            return false;
        }
        match self.date.checked_add_days(Days::new(1)) {
            Some(d) => {
                self.date = d;
                true
            }
            None => false,
        }
    }

    /// Timestamp for an entry added while viewing this day: the shown date at the
    /// current local time of day.
    pub fn entry_timestamp(&self, now: DateTime<Local>) -> DateTime<Utc> {
        let naive = self.date.and_time(now.time());
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| now.with_timezone(&Utc))
    }

    /// "Hoy", or e.g. "jueves, 15 de octubre".
    pub fn label(&self, today: NaiveDate) -> String {
        if self.is_today(today) {
            "Hoy".to_string()
        } else {
            long_date_label(self.date)
        }
    }
}

pub fn format_api_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn goal_reached(total_ml: f64) -> bool {
    total_ml >= HISTORY_GOAL_ML
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

pub fn month_name(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
        "septiembre", "octubre", "noviembre", "diciembre",
    ];
    MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

pub fn long_date_label(date: NaiveDate) -> String {
    format!(
        "{}, {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date.month())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_forward_disabled_on_today() {
        let today = day(2026, 10, 16);
        let mut cursor = DayCursor::new(today);
        assert!(!cursor.can_go_forward(today));
        assert!(!cursor.next(today));
        assert_eq!(cursor.date(), today);
    }

    #[test]
    fn test_back_then_forward_to_today() {
        let today = day(2026, 10, 16);
        let mut cursor = DayCursor::new(today);
        cursor.previous();
        cursor.previous();
        assert_eq!(cursor.date(), day(2026, 10, 14));
        assert!(cursor.can_go_forward(today));

        assert!(cursor.next(today));
        assert!(cursor.next(today));
        assert!(cursor.is_today(today));
        assert!(!cursor.can_go_forward(today));
    }

    #[test]
    fn test_crosses_month_boundary() {
        let mut cursor = DayCursor::new(day(2026, 3, 1));
        cursor.previous();
        assert_eq!(cursor.api_param(), "2026-02-28");
    }

    #[test]
    fn test_labels() {
        let today = day(2026, 10, 16);
        let mut cursor = DayCursor::new(today);
        assert_eq!(cursor.label(today), "Hoy");
        cursor.previous();
        assert_eq!(cursor.label(today), "jueves, 15 de octubre");
    }

    #[test]
    fn test_entry_timestamp_keeps_shown_date() {
        let now = Local::now();
        let shown = now.date_naive().checked_sub_days(Days::new(3)).unwrap();
        let mut cursor = DayCursor::new(now.date_naive());
        cursor.previous();
        cursor.previous();
        cursor.previous();
        let ts = cursor.entry_timestamp(now);
        assert_eq!(ts.with_timezone(&Local).date_naive(), shown);
    }

    #[test]
    fn test_goal_badge_threshold() {
        assert!(!goal_reached(1999.0));
        assert!(goal_reached(2000.0));
    }
}
