use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Small gray text for captions like "Last 5 Days".
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "Label: Value" pair with consistent spacing and styling.
    /// The label is subdued, the value is colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Upper-case card title in the theme's label color.
    fn label_card_title(&mut self, text: impl Into<String>, dark_mode: bool);

    /// Large monospace figure for a stat card.
    fn label_figure(&mut self, text: impl Into<String>, dark_mode: bool);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);

    /// Renders a warning/info message (Yellow/Gold).
    fn label_warning(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.accents.muted));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_card_title(&mut self, text: impl Into<String>, dark_mode: bool) {
        let text = text.into().to_uppercase();
        self.label(
            RichText::new(text)
                .small()
                .strong()
                .color(UI_CONFIG.theme(dark_mode).label),
        );
    }

    fn label_figure(&mut self, text: impl Into<String>, dark_mode: bool) {
        self.label(
            RichText::new(text)
                .size(24.0)
                .strong()
                .monospace()
                .color(UI_CONFIG.theme(dark_mode).heading),
        );
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.accents.negative));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.accents.warning));
    }
}
