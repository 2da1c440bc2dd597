use eframe::egui;
use egui_plot::{AxisHints, Corner, GridMark, HPlacement, Legend, Plot, PlotPoint};

use crate::analysis::ChartSeries;
use crate::domain::Currency;
use crate::ui::plot_layers::{
    AnomalyLayer, LastPriceLayer, LayerContext, PlotLayer, PriceLineLayer, SampleMarkerLayer,
};

/// At most this many x-axis labels are drawn, whatever survived decimation.
const MAX_X_MARKS: usize = 8;

/// A price chart for one series at one size.
pub struct PriceChart<'a> {
    series: &'a ChartSeries,
    currency: Currency,
    height: Option<f32>,
}

impl<'a> PriceChart<'a> {
    pub fn new(series: &'a ChartSeries, currency: Currency) -> Self {
        Self {
            series,
            currency,
            height: None,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn show(self, ui: &mut egui::Ui, id: &str) {
        let series = self.series;
        let currency = self.currency;
        let marks = label_marks(&series.labels, MAX_X_MARKS);

        let hover_labels = series.labels.clone();
        let (y_min, y_max) = padded_bounds(series.price_bounds());
        let x_max = series.len().saturating_sub(1).max(1) as f64;

        let mut plot = Plot::new(id)
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![create_x_axis(series.labels.clone())])
            .custom_y_axes(vec![create_y_axis(currency)])
            .x_grid_spacer(move |_input| marks.clone())
            .label_formatter(move |_name, point: &PlotPoint| {
                let label = label_at(&hover_labels, point.x).unwrap_or_default();
                format!("{}\n{}", label, currency.format_price(point.y))
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false);

        if let Some(height) = self.height {
            plot = plot.height(height);
        }

        plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(0.0..=x_max);
            plot_ui.set_plot_bounds_y(y_min..=y_max);

            let ctx = LayerContext { series, currency };

            // Back to front
            let layers: Vec<Box<dyn PlotLayer>> = vec![
                Box::new(PriceLineLayer),
                Box::new(LastPriceLayer),
                Box::new(SampleMarkerLayer),
                Box::new(AnomalyLayer),
            ];

            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
    }
}

fn create_x_axis(labels: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        label_at(&labels, grid_mark.value).unwrap_or_default()
    })
}

fn create_y_axis(currency: Currency) -> AxisHints<'static> {
    AxisHints::new_y()
        .formatter(move |grid_mark, _range| currency.format_price(grid_mark.value))
        .placement(HPlacement::Left)
}

/// The label for an x position, only on exact sample positions.
fn label_at(labels: &[String], x: f64) -> Option<String> {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 1e-6 {
        return None;
    }
    labels
        .get(idx as usize)
        .filter(|label| !label.is_empty())
        .cloned()
}

/// Grid marks on non-blank labels, thinned to at most `max_marks`.
fn label_marks(labels: &[String], max_marks: usize) -> Vec<GridMark> {
    let visible: Vec<usize> = labels
        .iter()
        .enumerate()
        .filter(|(_, label)| !label.is_empty())
        .map(|(idx, _)| idx)
        .collect();

    let every = visible.len().div_ceil(max_marks.max(1)).max(1);
    visible
        .into_iter()
        .step_by(every)
        .map(|idx| GridMark {
            value: idx as f64,
            step_size: every as f64,
        })
        .collect()
}

// A flat series (e.g. the placeholder) would otherwise collapse the y range
fn padded_bounds(bounds: Option<(f64, f64)>) -> (f64, f64) {
    match bounds {
        Some((lo, hi)) if hi > lo => {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        }
        Some((value, _)) => (value - 1.0, value + 1.0),
        None => (-1.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn label_lookup_ignores_fractional_and_blank_positions() {
        let labels = labels(&["10:00", "", "10:10"]);
        assert_eq!(label_at(&labels, 0.0).as_deref(), Some("10:00"));
        assert_eq!(label_at(&labels, 1.0), None);
        assert_eq!(label_at(&labels, 0.5), None);
        assert_eq!(label_at(&labels, -1.0), None);
        assert_eq!(label_at(&labels, 7.0), None);
    }

    #[test]
    fn marks_skip_blank_labels_and_respect_cap() {
        let mut many = vec![String::new(); 300];
        for idx in (0..300).step_by(30) {
            many[idx] = format!("d{}", idx);
        }

        let marks = label_marks(&many, 8);
        assert!(marks.len() <= 8);
        assert!(marks.iter().all(|m| !many[m.value as usize].is_empty()));
        assert_eq!(marks[0].value, 0.0);
    }

    #[test]
    fn flat_series_still_gets_a_range() {
        assert_eq!(padded_bounds(Some((0.0, 0.0))), (-1.0, 1.0));
        let (lo, hi) = padded_bounds(Some((100.0, 200.0)));
        assert!(lo < 100.0 && hi > 200.0);
    }
}
