use std::time::Duration;

use colorgrad::Gradient;
use eframe::egui::{
    Align, Align2, Area, CentralPanel, Color32, Context, Frame, Id, Layout, Margin, Order, Pos2,
    RichText, ScrollArea, Sense, Shape, Stroke, TopBottomPanel, Ui, Vec2, vec2,
};

use crate::analysis::{Density, RiskAssessment, evidence_report, transform};
use crate::domain::Currency;
use crate::engine::{Notice, SessionAction};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::counter::CounterTarget;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, SearchPanel, ToolkitEvent, ToolkitPanel};
use crate::ui::ui_plot_view::PriceChart;
use crate::ui::utils::{card_frame, colored_subsection_heading, to_egui_color};
use crate::utils::app_time::now;

use super::app::ForensicApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

const TOAST_LIFETIME: Duration = Duration::from_millis(2500);

/// One headline card: title, figure, caption and a trend chip.
struct StatCard<'a> {
    title: &'a str,
    value: String,
    caption: String,
    trend: &'a str,
    positive: bool,
}

impl ForensicApp {
    pub(super) fn render_header_panel(&mut self, ctx: &Context) {
        let theme = UI_CONFIG.theme(self.dark_mode);
        let header_frame = Frame::new()
            .fill(theme.header_panel)
            .inner_margin(Margin::symmetric(16, 10));

        TopBottomPanel::top("header_panel")
            .frame(header_frame)
            .show(ctx, |ui| {
                let mut actions = Vec::new();
                let mut toggle_theme = false;

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.app_title)
                            .size(20.0)
                            .strong()
                            .color(theme.heading),
                    );
                    ui.label(
                        RichText::new(UI_TEXT.brand_suffix)
                            .size(20.0)
                            .strong()
                            .color(UI_CONFIG.accents.brand),
                    );
                    ui.add_space(24.0);

                    let state = self.engine.state();
                    let mut search = SearchPanel::new(
                        &state.query,
                        &state.suggestions,
                        state.dropdown_open,
                        state.loading,
                    );
                    actions = search.render(ui);

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let icon = if self.dark_mode {
                            UI_TEXT.theme_to_light
                        } else {
                            UI_TEXT.theme_to_dark
                        };
                        if ui.button(icon).clicked() {
                            toggle_theme = true;
                        }
                        ui.label(
                            RichText::new(UI_TEXT.status_online)
                                .small()
                                .strong()
                                .color(UI_CONFIG.accents.positive),
                        );
                    });
                });

                if toggle_theme {
                    self.toggle_theme(ctx);
                }
                self.dispatch_all(ctx, actions);
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                self.render_stat_cards(ui);
                ui.add_space(16.0);

                let mut actions = Vec::new();
                let mut report_requested = false;

                let width = ui.available_width();
                let chart_width = (width * 0.66).max(320.0);
                let gauge_width = (width - chart_width - 16.0).max(200.0);

                ui.horizontal_top(|ui| {
                    ui.allocate_ui(vec2(chart_width, 0.0), |ui| {
                        let (chart_actions, report) = self.render_chart_card(ui);
                        actions.extend(chart_actions);
                        report_requested |= report;
                    });
                    ui.allocate_ui(vec2(gauge_width, 0.0), |ui| {
                        self.render_risk_gauge_card(ui);
                    });
                });

                ui.add_space(16.0);
                for event in ToolkitPanel::new(self.dark_mode).render(ui) {
                    match event {
                        ToolkitEvent::Session(action) => actions.push(action),
                        ToolkitEvent::GenerateReport => report_requested = true,
                    }
                }

                if report_requested {
                    self.generate_report(ctx);
                }
                self.dispatch_all(ctx, actions);
            });
        });

        self.render_toast(ctx);
    }

    fn render_stat_cards(&self, ui: &mut Ui) {
        let state = self.engine.state();
        let displayed = state.last_result.as_ref();
        let mode = state.displayed_mode();

        let last_price = displayed.and_then(|d| {
            let currency = Currency::resolve(Some(&d.result.ticker));
            d.result.last_price().map(|p| currency.format_price(p))
        });
        let anomaly_count = displayed.map(|d| d.result.anomaly_count).unwrap_or(0);

        let cards = [
            StatCard {
                title: UI_TEXT.card_last_price,
                value: last_price.unwrap_or_else(|| "—".to_string()),
                caption: displayed
                    .map(|d| d.result.ticker.clone())
                    .unwrap_or_else(|| UI_TEXT.no_data.to_string()),
                trend: if displayed.is_some() {
                    mode.trend_label()
                } else {
                    UI_TEXT.offline
                },
                positive: true,
            },
            StatCard {
                title: UI_TEXT.card_total_anomalies,
                value: self.counters.display_or(CounterTarget::AnomalyCount, "0"),
                caption: mode.window_label().to_string(),
                trend: if anomaly_count > 0 {
                    UI_TEXT.risk_detected
                } else {
                    UI_TEXT.stable
                },
                positive: displayed.is_some() && anomaly_count == 0,
            },
            StatCard {
                title: UI_TEXT.card_data_points,
                value: self.counters.display_or(CounterTarget::TotalPoints, "0"),
                caption: mode.candle_label().to_string(),
                trend: UI_TEXT.updated,
                positive: true,
            },
        ];

        let dark_mode = self.dark_mode;
        ui.columns(cards.len(), |columns| {
            for (column, card) in columns.iter_mut().zip(cards.iter()) {
                render_stat_card(column, card, dark_mode);
            }
        });
    }

    /// Returns session actions plus whether "Export Evidence" was clicked.
    fn render_chart_card(&self, ui: &mut Ui) -> (Vec<SessionAction>, bool) {
        let state = self.engine.state();
        let mode = state.displayed_mode();
        let currency = Currency::resolve(state.displayed_ticker());
        let series = transform(
            state.last_result.as_ref().map(|d| &d.result),
            mode,
            Density::Inline,
        );

        let mut actions = Vec::new();
        let mut report = false;

        card_frame(self.dark_mode).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(colored_subsection_heading(mode.chart_heading(), self.dark_mode));
                    ui.label_subdued(mode.chart_subheading());
                });
                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    if ui.small_button(UI_TEXT.export_evidence).clicked() {
                        report = true;
                    }
                    if ui.small_button(UI_TEXT.expand_chart).clicked() {
                        actions.push(SessionAction::ExpandChart);
                    }
                });
            });
            ui.add_space(8.0);

            PriceChart::new(&series, currency)
                .height(UI_CONFIG.inline_chart_height)
                .show(ui, "inline_chart");
        });

        (actions, report)
    }

    fn render_risk_gauge_card(&self, ui: &mut Ui) {
        let anomaly_count = self
            .engine
            .state()
            .last_result
            .as_ref()
            .map(|d| d.result.anomaly_count)
            .unwrap_or(0);
        let risk = RiskAssessment::from_anomaly_count(anomaly_count);

        card_frame(self.dark_mode).show(ui, |ui| {
            ui.label(colored_subsection_heading(UI_TEXT.risk_heading, self.dark_mode));
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                paint_gauge(ui, &risk, self.dark_mode);
                ui.label_figure(format!("{}%", risk.score), self.dark_mode);
                ui.label(
                    RichText::new(risk.level.caption())
                        .small()
                        .strong()
                        .color(needle_color(risk.fraction())),
                );
            });
        });
    }

    fn generate_report(&mut self, ctx: &Context) {
        let message = match self.engine.state().last_result.as_ref() {
            Some(displayed) => {
                ctx.copy_text(evidence_report(displayed));
                UI_TEXT.report_copied.to_string()
            }
            None => Notice::SearchFirst.to_string(),
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Generate report: {}", message);
        }

        self.toast = Some((message, now()));
    }

    fn render_toast(&mut self, ctx: &Context) {
        let Some((message, shown_at)) = self.toast.as_ref() else {
            return;
        };
        let remaining = TOAST_LIFETIME.saturating_sub(now().saturating_duration_since(*shown_at));
        if remaining.is_zero() {
            self.toast = None;
            return;
        }

        Area::new(Id::new("toast"))
            .order(Order::Tooltip)
            .anchor(Align2::CENTER_BOTTOM, vec2(0.0, -24.0))
            .show(ctx, |ui| {
                card_frame(self.dark_mode).show(ui, |ui| {
                    ui.label(RichText::new(message.as_str()).color(UI_CONFIG.accents.brand));
                });
            });
        ctx.request_repaint_after(remaining);
    }
}

fn render_stat_card(ui: &mut Ui, card: &StatCard, dark_mode: bool) {
    card_frame(dark_mode).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label_card_title(card.title, dark_mode);
        ui.label_figure(&card.value, dark_mode);
        ui.horizontal(|ui| {
            let chip = if card.positive {
                UI_CONFIG.accents.positive
            } else {
                UI_CONFIG.accents.negative
            };
            ui.label(RichText::new(card.trend).small().strong().color(chip));
            ui.label_subdued(&card.caption);
        });
    });
}

/// Half-circle gauge: colored sweep plus a needle rotated by the risk score.
fn paint_gauge(ui: &mut Ui, risk: &RiskAssessment, dark_mode: bool) {
    let radius = UI_CONFIG.gauge_radius;
    let (rect, _) = ui.allocate_exact_size(Vec2::new(radius * 2.0 + 16.0, radius + 16.0), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = Pos2::new(rect.center().x, rect.bottom() - 8.0);

    let point_at = |degrees: f32, r: f32| {
        let theta = degrees.to_radians();
        center + vec2(theta.cos(), theta.sin()) * r
    };

    // Sweep from -180° (left) to 0° (right) in short segments
    const SEGMENTS: usize = 48;
    for i in 0..SEGMENTS {
        let t0 = i as f32 / SEGMENTS as f32;
        let t1 = (i + 1) as f32 / SEGMENTS as f32;
        painter.line_segment(
            [point_at(-180.0 + t0 * 180.0, radius), point_at(-180.0 + t1 * 180.0, radius)],
            Stroke::new(10.0, needle_color(t0).linear_multiply(0.35)),
        );
    }

    let tip = point_at(risk.rotation_degrees, radius - 12.0);
    let color = needle_color(risk.fraction());
    painter.add(Shape::line_segment([center, tip], Stroke::new(3.0, color)));
    painter.circle_filled(center, 6.0, UI_CONFIG.theme(dark_mode).heading);
}

fn needle_color(fraction: f32) -> Color32 {
    match colorgrad::GradientBuilder::new()
        .html_colors(&UI_CONFIG.risk_gradient)
        .build::<colorgrad::LinearGradient>()
    {
        Ok(gradient) => to_egui_color(gradient.at(fraction.clamp(0.0, 1.0))),
        Err(_) => UI_CONFIG.accents.negative,
    }
}
