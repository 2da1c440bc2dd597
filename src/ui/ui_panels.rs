use eframe::egui::{
    Area, Color32, CursorIcon, Id, Key, Order, RichText, ScrollArea, Sense, TextEdit, Ui,
};

use crate::domain::TickerEntry;
use crate::engine::SessionAction;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{card_frame, section_heading};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Search box with the ticker autocomplete dropdown
pub struct SearchPanel<'a> {
    query: String,
    suggestions: &'a [TickerEntry],
    dropdown_open: bool,
    loading: bool,
}

impl<'a> SearchPanel<'a> {
    pub fn new(
        query: &str,
        suggestions: &'a [TickerEntry],
        dropdown_open: bool,
        loading: bool,
    ) -> Self {
        Self {
            query: query.to_string(),
            suggestions,
            dropdown_open,
            loading,
        }
    }

    /// Returns the clicked symbol, plus the rect the dropdown covered.
    fn render_dropdown(&self, ui: &Ui, anchor: eframe::egui::Rect) -> (Option<String>, eframe::egui::Rect) {
        let mut picked = None;

        let area = Area::new(Id::new("ticker_dropdown"))
            .order(Order::Foreground)
            .fixed_pos(anchor.left_bottom())
            .show(ui.ctx(), |ui| {
                card_frame(ui.visuals().dark_mode).show(ui, |ui| {
                    ui.set_min_width(anchor.width());
                    ScrollArea::vertical()
                        .max_height(UI_CONFIG.dropdown_max_rows as f32 * 28.0)
                        .show(ui, |ui| {
                            for entry in self.suggestions {
                                let text = RichText::new(format!("{}  {}", entry.symbol, entry.name));
                                if ui.selectable_label(false, text).clicked() {
                                    picked = Some(entry.symbol.to_string());
                                }
                            }
                        });
                });
            });

        (picked, area.response.rect)
    }
}

impl<'a> Panel for SearchPanel<'a> {
    type Event = SessionAction;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        let response = ui.add(
            TextEdit::singleline(&mut self.query)
                .hint_text(UI_TEXT.search_hint)
                .desired_width(320.0),
        );

        if response.changed() {
            events.push(SessionAction::EditQuery(self.query.clone()));
        }
        if response.gained_focus() {
            events.push(SessionAction::FocusQuery);
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Search submitted: {}", self.query);
            }
            events.push(SessionAction::Submit);
        }

        if self.loading {
            ui.spinner();
            ui.label_warning(UI_TEXT.scanning);
        }

        if self.dropdown_open && !self.suggestions.is_empty() {
            let (picked, dropdown_rect) = self.render_dropdown(ui, response.rect);

            if let Some(symbol) = picked {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("Suggestion picked: {}", symbol);
                }
                events.push(SessionAction::SelectSuggestion(symbol));
            } else {
                // Blur: a press anywhere outside the box and the list closes it
                let pressed_outside = ui.input(|i| {
                    i.pointer.any_pressed()
                        && i.pointer.interact_pos().is_some_and(|pos| {
                            !dropdown_rect.contains(pos) && !response.rect.contains(pos)
                        })
                });
                if pressed_outside || ui.input(|i| i.key_pressed(Key::Escape)) {
                    events.push(SessionAction::DismissSuggestions);
                }
            }
        }

        events
    }
}

/// Actions offered by the toolkit grid
#[derive(Debug, Clone, PartialEq)]
pub enum ToolkitEvent {
    Session(SessionAction),
    GenerateReport,
}

/// The "Forensic Toolkit" quick-action grid
pub struct ToolkitPanel {
    dark_mode: bool,
}

impl ToolkitPanel {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    fn quick_action(&self, ui: &mut Ui, title: &str, desc: &str, accent: Color32) -> bool {
        let inner = card_frame(self.dark_mode).show(ui, |ui| {
            ui.set_min_width(170.0);
            ui.label(RichText::new(title).strong().color(accent));
            ui.label_subdued(desc);
        });

        ui.interact(inner.response.rect, Id::new(("toolkit", title)), Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand)
            .clicked()
    }
}

impl Panel for ToolkitPanel {
    type Event = ToolkitEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.toolkit_heading, self.dark_mode);

        ui.horizontal_wrapped(|ui| {
            let accents = &UI_CONFIG.accents;

            if self.quick_action(ui, UI_TEXT.action_report, UI_TEXT.action_report_desc, accents.report) {
                events.push(ToolkitEvent::GenerateReport);
            }
            if self.quick_action(
                ui,
                UI_TEXT.action_deep_scan,
                UI_TEXT.action_deep_scan_desc,
                accents.deep_scan,
            ) {
                events.push(ToolkitEvent::Session(SessionAction::RequestDeepScan));
            }
            if self.quick_action(ui, UI_TEXT.action_explain, UI_TEXT.action_explain_desc, accents.explain) {
                events.push(ToolkitEvent::Session(SessionAction::RequestExplanation));
            }
            if self.quick_action(
                ui,
                UI_TEXT.action_parameters,
                UI_TEXT.action_parameters_desc,
                accents.muted,
            ) {
                events.push(ToolkitEvent::Session(SessionAction::OpenSettings));
            }
        });

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions && !events.is_empty() {
            log::info!("Toolkit: {:?}", events);
        }

        events
    }
}
