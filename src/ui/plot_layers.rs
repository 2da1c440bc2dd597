use eframe::egui::Color32;
use egui_plot::{HLine, Line, LineStyle, MarkerShape, PlotPoints, PlotUi, Points};

use crate::analysis::ChartSeries;
use crate::domain::Currency;
use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub series: &'a ChartSeries,
    pub currency: Currency,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. PRICE LINE LAYER
// ============================================================================
pub struct PriceLineLayer;

impl PlotLayer for PriceLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let color = line_color(ctx.series);

        plot_ui.line(
            Line::new(UI_TEXT.price_legend, series_points(ctx.series))
                .color(color)
                .width(2.0),
        );
    }
}

// ============================================================================
// 2. SAMPLE MARKER LAYER (Live only)
// ============================================================================
pub struct SampleMarkerLayer;

impl PlotLayer for SampleMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.series.show_markers() || ctx.series.is_placeholder {
            return;
        }

        plot_ui.points(
            Points::new(UI_TEXT.price_legend, series_points(ctx.series))
                .radius(ctx.series.marker_radius)
                .shape(MarkerShape::Circle)
                .filled(true)
                .color(line_color(ctx.series)),
        );
    }
}

// ============================================================================
// 3. ANOMALY LAYER
// ============================================================================
pub struct AnomalyLayer;

impl PlotLayer for AnomalyLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let flagged: Vec<[f64; 2]> = ctx
            .series
            .anomaly_indices
            .iter()
            .filter_map(|&idx| ctx.series.prices.get(idx).map(|&price| [idx as f64, price]))
            .collect();

        if flagged.is_empty() {
            return;
        }

        // Stay visible even when Deep Scan suppresses the ordinary markers
        let radius = ctx.series.marker_radius.max(3.0) + 1.5;

        plot_ui.points(
            Points::new(UI_TEXT.anomaly_legend, PlotPoints::new(flagged))
                .radius(radius)
                .shape(MarkerShape::Circle)
                .filled(true)
                .color(UI_CONFIG.accents.anomaly),
        );
    }
}

// ============================================================================
// 4. LAST PRICE LAYER
// ============================================================================
pub struct LastPriceLayer;

impl PlotLayer for LastPriceLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.series.is_placeholder {
            return;
        }
        let Some(&last) = ctx.series.prices.last() else {
            return;
        };

        plot_ui.hline(
            HLine::new(ctx.currency.format_price(last), last)
                .color(UI_CONFIG.accents.muted)
                .width(1.0)
                .style(LineStyle::dashed_loose()),
        );
    }
}

// ============================================================================
// HELPER FUNCTIONS (Private to this module)
// ============================================================================

fn series_points(series: &ChartSeries) -> PlotPoints<'static> {
    PlotPoints::new(
        series
            .prices
            .iter()
            .enumerate()
            .map(|(idx, &price)| [idx as f64, price])
            .collect(),
    )
}

fn line_color(series: &ChartSeries) -> Color32 {
    if series.is_placeholder {
        UI_CONFIG.accents.muted
    } else {
        UI_CONFIG.accents.price_line
    }
}
