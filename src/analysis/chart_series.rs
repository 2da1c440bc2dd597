use crate::config::PRESENTATION;
use crate::domain::{AnalysisResult, Mode};

/// The two sizes a chart is drawn at.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Density {
    /// Dashboard card
    Inline,
    /// Full-screen detail overlay
    Expanded,
}

impl Density {
    /// Keep every Nth label when thinning.
    pub fn label_stride(&self) -> usize {
        match self {
            Density::Inline => PRESENTATION.chart.inline_label_stride,
            Density::Expanded => PRESENTATION.chart.expanded_label_stride,
        }
    }

    fn marker_radius(&self) -> f32 {
        match self {
            Density::Inline => PRESENTATION.chart.inline_marker_radius,
            Density::Expanded => PRESENTATION.chart.expanded_marker_radius,
        }
    }
}

/// Render-ready series. `labels` and `prices` always have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub prices: Vec<f64>,
    /// Indices into `prices` the backend flagged as anomalous
    pub anomaly_indices: Vec<usize>,
    /// 0.0 when point markers are suppressed
    pub marker_radius: f32,
    pub is_placeholder: bool,
}

impl ChartSeries {
    /// Three flat points so an empty dashboard still draws a chart.
    pub fn placeholder(density: Density) -> Self {
        Self {
            labels: PRESENTATION
                .chart
                .placeholder_labels
                .iter()
                .map(|label| label.to_string())
                .collect(),
            prices: vec![0.0; PRESENTATION.chart.placeholder_labels.len()],
            anomaly_indices: Vec::new(),
            marker_radius: density.marker_radius(),
            is_placeholder: true,
        }
    }

    pub fn show_markers(&self) -> bool {
        self.marker_radius > 0.0
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// (min, max) of the prices, None for an empty series
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        self.prices.iter().fold(None, |acc, &price| match acc {
            None => Some((price, price)),
            Some((lo, hi)) => Some((lo.min(price), hi.max(price))),
        })
    }
}

/// Turns a stored result into a chart series for the given view size.
///
/// Decimation only ever blanks label text. Every price sample is kept so the
/// curve stays exact while the axis stays legible.
pub fn transform(result: Option<&AnalysisResult>, mode: Mode, density: Density) -> ChartSeries {
    let Some(result) = result.filter(|r| r.has_series()) else {
        return ChartSeries::placeholder(density);
    };

    let prices = result.prices.clone();
    let mut labels = align_labels(&result.timestamps, prices.len());

    if mode == Mode::DeepScan && labels.len() > PRESENTATION.chart.decimation_min_labels {
        decimate_labels(&mut labels, density.label_stride());
    }

    let marker_radius = match mode {
        Mode::DeepScan => 0.0,
        Mode::Live => density.marker_radius(),
    };

    ChartSeries {
        labels,
        prices,
        anomaly_indices: result.anomaly_indices(),
        marker_radius,
        is_placeholder: false,
    }
}

// A length mismatch is tolerated by trimming or padding the labels, never the prices.
fn align_labels(timestamps: &[String], point_count: usize) -> Vec<String> {
    let mut labels: Vec<String> = timestamps.iter().take(point_count).cloned().collect();
    labels.resize(point_count, String::new());
    labels
}

fn decimate_labels(labels: &mut [String], stride: usize) {
    let stride = stride.max(1);
    for (idx, label) in labels.iter_mut().enumerate() {
        if idx % stride != 0 {
            label.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(len: usize) -> AnalysisResult {
        AnalysisResult {
            ticker: "RELIANCE.NS".to_string(),
            prices: (0..len).map(|i| 100.0 + i as f64 * 0.5).collect(),
            timestamps: (0..len).map(|i| format!("2024-01-{:03}", i)).collect(),
            anomaly_count: 0,
            total_points: len as u32,
            ..Default::default()
        }
    }

    fn visible_labels(series: &ChartSeries) -> usize {
        series.labels.iter().filter(|l| !l.is_empty()).count()
    }

    #[test]
    fn absent_result_gives_three_flat_points() {
        for density in [Density::Inline, Density::Expanded] {
            for mode in [Mode::Live, Mode::DeepScan] {
                let series = transform(None, mode, density);
                assert!(series.is_placeholder);
                assert_eq!(series.prices, vec![0.0, 0.0, 0.0]);
                assert_eq!(series.labels, vec!["10:00", "10:30", "11:00"]);
            }
        }
    }

    #[test]
    fn empty_prices_or_timestamps_give_placeholder() {
        let mut no_prices = sample_result(10);
        no_prices.prices.clear();
        assert_eq!(transform(Some(&no_prices), Mode::Live, Density::Inline).len(), 3);

        let mut no_stamps = sample_result(10);
        no_stamps.timestamps.clear();
        assert!(transform(Some(&no_stamps), Mode::Live, Density::Inline).is_placeholder);
    }

    #[test]
    fn deep_scan_thins_labels_but_keeps_every_price() {
        for len in [31usize, 45, 60, 61, 500, 501] {
            let result = sample_result(len);
            for density in [Density::Inline, Density::Expanded] {
                let series = transform(Some(&result), Mode::DeepScan, density);
                let stride = density.label_stride();

                assert_eq!(series.prices, result.prices, "prices changed for len {len}");
                assert_eq!(series.labels.len(), len);
                assert_eq!(visible_labels(&series), len.div_ceil(stride));
                assert_eq!(series.labels[0], result.timestamps[0]);
            }
        }
    }

    #[test]
    fn thirty_labels_or_fewer_are_not_thinned() {
        let result = sample_result(30);
        let series = transform(Some(&result), Mode::DeepScan, Density::Inline);
        assert_eq!(series.labels, result.timestamps);
    }

    #[test]
    fn live_mode_never_thins() {
        let result = sample_result(200);
        let series = transform(Some(&result), Mode::Live, Density::Expanded);
        assert_eq!(visible_labels(&series), 200);
    }

    #[test]
    fn markers_hidden_in_deep_scan_only() {
        let result = sample_result(12);
        assert!(!transform(Some(&result), Mode::DeepScan, Density::Inline).show_markers());

        let inline = transform(Some(&result), Mode::Live, Density::Inline);
        let expanded = transform(Some(&result), Mode::Live, Density::Expanded);
        assert_eq!(inline.marker_radius, 3.0);
        assert_eq!(expanded.marker_radius, 4.0);
    }

    #[test]
    fn mismatched_lengths_keep_all_prices() {
        let mut short_labels = sample_result(8);
        short_labels.timestamps.truncate(5);
        let series = transform(Some(&short_labels), Mode::Live, Density::Inline);
        assert_eq!(series.prices.len(), 8);
        assert_eq!(series.labels.len(), 8);
        assert_eq!(series.labels[7], "");

        let mut long_labels = sample_result(4);
        long_labels.timestamps.push("extra".to_string());
        let series = transform(Some(&long_labels), Mode::Live, Density::Inline);
        assert_eq!(series.labels.len(), 4);
    }

    #[test]
    fn anomaly_indices_pass_through() {
        let mut result = sample_result(5);
        result.anomalies = vec![1, -1, 1, 1, -1];
        let series = transform(Some(&result), Mode::Live, Density::Inline);
        assert_eq!(series.anomaly_indices, vec![1, 4]);
    }

    #[test]
    fn price_bounds_cover_series() {
        let series = transform(Some(&sample_result(4)), Mode::Live, Density::Inline);
        assert_eq!(series.price_bounds(), Some((100.0, 101.5)));
    }
}
