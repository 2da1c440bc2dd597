use eframe::egui::{Align, Context, Id, Layout, Modal, RichText, ScrollArea, Slider, Ui};

use crate::analysis::{Density, transform};
use crate::domain::{Currency, Sensitivity};
use crate::engine::{Overlay, SessionAction};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_plot_view::PriceChart;
use crate::ui::utils::{colored_subsection_heading, spaced_separator};

use super::app::ForensicApp;

const EXPANDED_CHART_WIDTH: f32 = 900.0;
const EXPANDED_CHART_HEIGHT: f32 = 520.0;

/// A rendered piece of the analyst narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum NarrativeBlock {
    Heading(String),
    Paragraph(String),
    Gap,
}

impl ForensicApp {
    pub(super) fn render_overlays(&mut self, ctx: &Context) {
        let actions = match self.engine.state().overlay {
            Overlay::None => Vec::new(),
            Overlay::Settings => self.render_settings_modal(ctx),
            Overlay::DeepScanConfirm => self.render_deep_scan_modal(ctx),
            Overlay::Explanation => self.render_explanation_modal(ctx),
            Overlay::ExpandedChart => self.render_expanded_chart_modal(ctx),
        };
        self.dispatch_all(ctx, actions);
    }

    pub(super) fn render_notice(&mut self, ctx: &Context) {
        let Some(notice) = self.engine.state().notice.clone() else {
            return;
        };

        let mut dismissed = false;
        let response = Modal::new(Id::new("notice_modal")).show(ctx, |ui| {
            ui.set_width(320.0);
            ui.label(colored_subsection_heading(notice.to_string(), self.dark_mode));
            if let Some(detail) = notice.detail() {
                ui.add_space(6.0);
                ui.label_error(detail);
            }
            ui.add_space(12.0);
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                if ui.button(UI_TEXT.ok).clicked() {
                    dismissed = true;
                }
            });
        });

        if dismissed || response.should_close() {
            self.dispatch(ctx, SessionAction::DismissNotice);
        }
    }

    fn render_settings_modal(&self, ctx: &Context) -> Vec<SessionAction> {
        let mut actions = Vec::new();
        let current = self.engine.state().sensitivity;

        let response = Modal::new(Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(360.0);
            ui.label(colored_subsection_heading(UI_TEXT.settings_title, self.dark_mode));
            spaced_separator(ui);

            ui.label_card_title(UI_TEXT.settings_slider, self.dark_mode);
            let mut value = current.value();
            let slider = ui.add(Slider::new(&mut value, 0..=100).suffix("%"));
            if slider.changed() {
                actions.push(SessionAction::SetSensitivity(value));
            }
            ui.horizontal(|ui| {
                ui.label_subdued(UI_TEXT.settings_loose);
                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    ui.label_subdued(UI_TEXT.settings_strict);
                });
            });

            ui.add_space(8.0);
            let preview = Sensitivity::new(value);
            ui.metric(
                UI_TEXT.settings_current,
                &format!("contamination={:.3}", preview.contamination()),
                UI_CONFIG.accents.brand,
            );

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button(UI_TEXT.settings_apply).clicked() {
                    actions.push(SessionAction::ApplySettings);
                }
                if ui.button(UI_TEXT.close).clicked() {
                    actions.push(SessionAction::CloseOverlay);
                }
            });
        });

        if response.should_close() && actions.is_empty() {
            actions.push(SessionAction::CloseOverlay);
        }
        actions
    }

    fn render_deep_scan_modal(&self, ctx: &Context) -> Vec<SessionAction> {
        let mut actions = Vec::new();

        let response = Modal::new(Id::new("deep_scan_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.label(
                RichText::new(UI_TEXT.deep_scan_title)
                    .size(18.0)
                    .strong()
                    .color(UI_CONFIG.accents.deep_scan),
            );
            spaced_separator(ui);

            ui.label(RichText::new(UI_TEXT.deep_scan_intro).strong());
            ui.add_space(6.0);
            for point in UI_TEXT.deep_scan_points {
                ui.label(format!("• {}", point));
            }

            ui.add_space(12.0);
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                if ui
                    .button(RichText::new(UI_TEXT.deep_scan_confirm).color(UI_CONFIG.accents.deep_scan))
                    .clicked()
                {
                    actions.push(SessionAction::ConfirmDeepScan);
                }
                if ui.button(UI_TEXT.cancel).clicked() {
                    actions.push(SessionAction::CloseOverlay);
                }
            });
        });

        if response.should_close() && actions.is_empty() {
            actions.push(SessionAction::CloseOverlay);
        }
        actions
    }

    fn render_explanation_modal(&self, ctx: &Context) -> Vec<SessionAction> {
        let mut actions = Vec::new();
        let state = self.engine.state();

        let response = Modal::new(Id::new("explanation_modal")).show(ctx, |ui| {
            ui.set_width(520.0);
            ui.label(
                RichText::new(UI_TEXT.explanation_title)
                    .size(18.0)
                    .strong()
                    .color(UI_CONFIG.accents.explain),
            );
            spaced_separator(ui);

            if state.explanation_loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label_subdued(UI_TEXT.explanation_loading);
                });
            } else {
                let text = state
                    .explanation
                    .as_deref()
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or(UI_TEXT.explanation_empty);
                ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                    render_narrative(ui, text, self.dark_mode);
                });
            }

            ui.add_space(12.0);
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                if ui.button(UI_TEXT.close_report).clicked() {
                    actions.push(SessionAction::CloseOverlay);
                }
            });
        });

        if response.should_close() && actions.is_empty() {
            actions.push(SessionAction::CloseOverlay);
        }
        actions
    }

    fn render_expanded_chart_modal(&self, ctx: &Context) -> Vec<SessionAction> {
        let mut actions = Vec::new();
        let state = self.engine.state();
        let Some(displayed) = state.last_result.as_ref() else {
            return vec![SessionAction::CloseOverlay];
        };

        let mode = displayed.mode();
        let series = transform(Some(&displayed.result), mode, Density::Expanded);
        let currency = Currency::resolve(Some(&displayed.result.ticker));

        let response = Modal::new(Id::new("expanded_chart_modal")).show(ctx, |ui| {
            ui.set_width(EXPANDED_CHART_WIDTH);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(colored_subsection_heading(
                        format!("{} - {}", displayed.result.ticker, UI_TEXT.detail_suffix),
                        self.dark_mode,
                    ));
                    ui.label_subdued(mode.detail_subheading());
                });
                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    if ui.button(UI_TEXT.close).clicked() {
                        actions.push(SessionAction::CloseOverlay);
                    }
                });
            });
            ui.add_space(8.0);

            PriceChart::new(&series, currency)
                .height(EXPANDED_CHART_HEIGHT)
                .show(ui, "expanded_chart");
        });

        if response.should_close() && actions.is_empty() {
            actions.push(SessionAction::CloseOverlay);
        }
        actions
    }
}

fn render_narrative(ui: &mut Ui, text: &str, dark_mode: bool) {
    for block in narrative_blocks(text) {
        match block {
            NarrativeBlock::Heading(heading) => {
                ui.add_space(4.0);
                ui.label(colored_subsection_heading(heading, dark_mode));
            }
            NarrativeBlock::Paragraph(line) => {
                ui.label(line);
            }
            NarrativeBlock::Gap => ui.add_space(6.0),
        }
    }
}

/// Splits the backend's light markdown into headings and plain lines.
pub(super) fn narrative_blocks(text: &str) -> Vec<NarrativeBlock> {
    text.lines()
        .map(str::trim)
        .map(|line| {
            if line.is_empty() {
                NarrativeBlock::Gap
            } else if let Some(heading) = line.strip_prefix('#') {
                NarrativeBlock::Heading(heading.trim_start_matches('#').trim().to_string())
            } else {
                NarrativeBlock::Paragraph(line.replace("**", ""))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrative_markdown_is_flattened() {
        let text = "### Forensic Analysis: AAPL\n\n**Risk Level: LOW**\n- Normal trading.";
        assert_eq!(
            narrative_blocks(text),
            vec![
                NarrativeBlock::Heading("Forensic Analysis: AAPL".to_string()),
                NarrativeBlock::Gap,
                NarrativeBlock::Paragraph("Risk Level: LOW".to_string()),
                NarrativeBlock::Paragraph("- Normal trading.".to_string()),
            ]
        );
    }

    #[test]
    fn plain_failure_text_is_one_paragraph() {
        let blocks = narrative_blocks(crate::engine::EXPLANATION_FAILED_TEXT);
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], NarrativeBlock::Paragraph(_)));
    }
}
