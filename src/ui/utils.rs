use eframe::egui::{Color32, Context, Frame, Margin, RichText, Stroke, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>, dark_mode: bool) -> RichText {
    RichText::new(text.into().to_uppercase())
        .color(UI_CONFIG.theme(dark_mode).label)
        .small()
        .strong()
        .monospace()
}

/// Creates a colored sub-section heading using the theme's accent
pub fn colored_subsection_heading(text: impl Into<String>, dark_mode: bool) -> RichText {
    RichText::new(text.into())
        .strong()
        .color(UI_CONFIG.theme(dark_mode).subsection_heading)
}

/// Sets up visuals for the whole application in the chosen theme
pub fn setup_custom_visuals(ctx: &Context, dark_mode: bool) {
    let theme = UI_CONFIG.theme(dark_mode);
    let mut visuals = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.window_fill = theme.card;
    visuals.panel_fill = theme.central_panel;
    visuals.selection.bg_fill = UI_CONFIG.accents.brand.linear_multiply(0.6);
    visuals.hyperlink_color = UI_CONFIG.accents.brand;

    visuals.widgets.noninteractive.fg_stroke.color = theme.label;
    visuals.widgets.hovered.fg_stroke.color = theme.heading;
    visuals.widgets.active.fg_stroke.color = theme.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>, dark_mode: bool) {
    ui.add_space(10.0);
    ui.label(colored_heading(text, dark_mode));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Rounded, bordered container used by every dashboard card
pub fn card_frame(dark_mode: bool) -> Frame {
    let theme = UI_CONFIG.theme(dark_mode);
    Frame::new()
        .fill(theme.card)
        .stroke(Stroke::new(1.0, theme.card_stroke))
        .corner_radius(12.0)
        .inner_margin(Margin::same(16))
}

pub fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}
