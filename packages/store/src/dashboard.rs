//! Today's progress and the add-registro amount picker.

use crate::models::ResumenDiario;

/// Radius of the progress ring, in SVG user units.
pub const RING_RADIUS: f64 = 80.0;

/// Share of the goal consumed, clamped to `0..=100`. A non-positive goal is 0%.
pub fn progress_percent(consumed_ml: f64, goal_ml: f64) -> f64 {
    if goal_ml <= 0.0 || !consumed_ml.is_finite() {
        return 0.0;
    }
    (consumed_ml / goal_ml * 100.0).clamp(0.0, 100.0)
}

/// Rounded percentage label, e.g. `"50%"`.
pub fn progress_label(resumen: &ResumenDiario) -> String {
    let pct = progress_percent(resumen.consumido_ml, resumen.objetivo_ml);
    format!("{}%", pct.round() as i64)
}

pub fn ring_circumference() -> f64 {
    2.0 * std::f64::consts::PI * RING_RADIUS
}

/// `stroke-dashoffset` that leaves `percent` of the ring drawn.
pub fn ring_dash_offset(percent: f64) -> f64 {
    let c = ring_circumference();
    c - (percent.clamp(0.0, 100.0) / 100.0) * c
}

/// Millilitres still missing to reach the goal.
pub fn remaining_ml(resumen: &ResumenDiario) -> f64 {
    (resumen.objetivo_ml - resumen.consumido_ml).max(0.0)
}

/// Amount selector used by the add-registro modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmountPicker {
    amount: u32,
}

impl AmountPicker {
    pub const DEFAULT: u32 = 250;
    pub const MIN: u32 = 50;
    pub const STEP: u32 = 50;
    pub const PRESETS: [u32; 3] = [250, 350, 500];

    pub fn new() -> Self {
        Self {
            amount: Self::DEFAULT,
        }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn decrease(&mut self) {
        self.amount = self.amount.saturating_sub(Self::STEP).max(Self::MIN);
    }

    pub fn increase(&mut self) {
        self.amount = self.amount.saturating_add(Self::STEP);
    }

    pub fn select_preset(&mut self, preset: u32) {
        self.amount = preset.max(Self::MIN);
    }

    pub fn is_selected(&self, preset: u32) -> bool {
        self.amount == preset
    }
}

impl Default for AmountPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Icon family shown for a beverage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeverageKind {
    Water,
    Coffee,
    Tea,
    Other,
}

impl BeverageKind {
    pub fn from_name(nombre: &str) -> Self {
        let n = nombre.to_lowercase();
        if n.contains("agua") {
            BeverageKind::Water
        } else if n.contains("café") {
            BeverageKind::Coffee
        } else if n.contains("té") {
            BeverageKind::Tea
        } else {
            BeverageKind::Other
        }
    }
}

/// Accent colour for a beverage, matched on its (Spanish) name.
pub fn beverage_color(nombre: &str) -> &'static str {
    let n = nombre.to_lowercase();
    if n.contains("agua") {
        "#0097B2"
    } else if n.contains("café") {
        "#6B4423"
    } else if n.contains("té") {
        "#4A7C59"
    } else if n.contains("jugo") {
        "#FF6B35"
    } else if n.contains("yogur") {
        "#E84A5F"
    } else if n.contains("refresco") {
        "#9B59B6"
    } else if n.contains("cerveza") {
        if n.contains("sin") {
            "#A0826D"
        } else {
            "#8B4513"
        }
    } else if n.contains("alcohol") {
        "#4A4A4A"
    } else {
        "#0097B2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_goal_is_fifty_percent() {
        let resumen = ResumenDiario {
            consumido_ml: 1000.0,
            objetivo_ml: 2000.0,
        };
        assert_eq!(progress_label(&resumen), "50%");
        assert_eq!(remaining_ml(&resumen), 1000.0);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(progress_percent(3000.0, 2000.0), 100.0);
        assert_eq!(progress_percent(-5.0, 2000.0), 0.0);
        assert_eq!(progress_percent(500.0, 0.0), 0.0);
        assert_eq!(progress_label(&ResumenDiario::default()), "0%");
    }

    #[test]
    fn test_ring_offset() {
        assert_eq!(ring_dash_offset(0.0), ring_circumference());
        assert!(ring_dash_offset(100.0).abs() < 1e-9);
    }

    #[test]
    fn test_amount_picker() {
        let mut picker = AmountPicker::new();
        assert_eq!(picker.amount(), 250);
        picker.increase();
        assert_eq!(picker.amount(), 300);
        picker.select_preset(50);
        picker.decrease();
        assert_eq!(picker.amount(), 50);
        picker.select_preset(500);
        assert!(picker.is_selected(500));
    }

    #[test]
    fn test_beverage_styling() {
        assert_eq!(beverage_color("Agua mineral"), "#0097B2");
        assert_eq!(beverage_color("Cerveza sin alcohol"), "#A0826D");
        assert_eq!(beverage_color("Cerveza"), "#8B4513");
        assert_eq!(beverage_color("Kombucha"), "#0097B2");
        assert_eq!(BeverageKind::from_name("Café con leche"), BeverageKind::Coffee);
        assert_eq!(BeverageKind::from_name("Té verde"), BeverageKind::Tea);
        assert_eq!(BeverageKind::from_name("Jugo"), BeverageKind::Other);
    }
}
