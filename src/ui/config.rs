use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// Palette for one theme
#[derive(Clone, Copy)]
pub struct ThemeColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub header_panel: Color32,
    pub card: Color32,
    pub card_stroke: Color32,
}

/// Colors that do not change with the theme
#[derive(Clone, Copy)]
pub struct AccentColors {
    pub brand: Color32,
    pub price_line: Color32,
    pub anomaly: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub warning: Color32,
    pub deep_scan: Color32,
    pub explain: Color32,
    pub report: Color32,
    pub muted: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub dark: ThemeColors,
    pub light: ThemeColors,
    pub accents: AccentColors,
    /// Low to critical, sampled by the gauge needle
    pub risk_gradient: [&'static str; 3],
    pub inline_chart_height: f32,
    pub gauge_radius: f32,
    pub dropdown_max_rows: usize,
}

impl UiConfig {
    pub fn theme(&self, dark_mode: bool) -> &ThemeColors {
        if dark_mode { &self.dark } else { &self.light }
    }
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    dark: ThemeColors {
        label: Color32::GRAY,
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(6, 182, 212),
        central_panel: Color32::from_rgb(3, 7, 18),
        header_panel: Color32::from_rgb(17, 24, 39),
        card: Color32::from_rgb(17, 24, 39),
        card_stroke: Color32::from_rgb(31, 41, 55),
    },
    light: ThemeColors {
        label: Color32::from_rgb(107, 114, 128),
        heading: Color32::from_rgb(17, 24, 39),
        subsection_heading: Color32::from_rgb(37, 99, 235),
        central_panel: Color32::from_rgb(249, 250, 251),
        header_panel: Color32::WHITE,
        card: Color32::WHITE,
        card_stroke: Color32::from_rgb(229, 231, 235),
    },
    accents: AccentColors {
        brand: Color32::from_rgb(6, 182, 212),
        price_line: Color32::from_rgb(6, 182, 212),
        anomaly: Color32::from_rgb(239, 68, 68),
        positive: Color32::from_rgb(34, 197, 94),
        negative: Color32::from_rgb(239, 68, 68),
        warning: Color32::from_rgb(234, 179, 8),
        deep_scan: Color32::from_rgb(168, 85, 247),
        explain: Color32::from_rgb(236, 72, 153),
        report: Color32::from_rgb(59, 130, 246),
        muted: Color32::GRAY,
    },
    risk_gradient: ["#22c55e", "#eab308", "#ef4444"],
    inline_chart_height: 300.0,
    gauge_radius: 80.0,
    dropdown_max_rows: 8,
};
