use serde::Deserialize;
use std::fmt;

use crate::config::PRESENTATION;
use crate::domain::ticker::TickerSymbol;

/// Scan mode. Live looks at a short intraday window, Deep Scan at two years
/// of daily candles with a stricter anomaly threshold.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, strum_macros::EnumIter)]
pub enum Mode {
    #[default]
    Live,
    DeepScan,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Live => write!(f, "Live"),
            Mode::DeepScan => write!(f, "Deep Scan"),
        }
    }
}

impl Mode {
    pub fn window_label(&self) -> &'static str {
        match self {
            Mode::Live => "Last 5 Days",
            Mode::DeepScan => "Last 2 Years",
        }
    }

    pub fn candle_label(&self) -> &'static str {
        match self {
            Mode::Live => "5m Candles",
            Mode::DeepScan => "Daily Candles",
        }
    }

    pub fn trend_label(&self) -> &'static str {
        match self {
            Mode::Live => "Live",
            Mode::DeepScan => "Historical",
        }
    }

    pub fn chart_heading(&self) -> &'static str {
        match self {
            Mode::Live => "Intraday Anomaly Detection",
            Mode::DeepScan => "Historical Forensic Scan (2 Years)",
        }
    }

    pub fn chart_subheading(&self) -> &'static str {
        match self {
            Mode::Live => "Live monitoring of price-volume divergence",
            Mode::DeepScan => "Long-term manipulation patterns",
        }
    }

    pub fn detail_subheading(&self) -> &'static str {
        match self {
            Mode::Live => "Intraday Live Monitor",
            Mode::DeepScan => "2-Year Historical Analysis",
        }
    }
}

/// User-facing 0..=100 slider value. Out of range input is clamped.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Sensitivity(u8);

impl Default for Sensitivity {
    fn default() -> Self {
        Self(PRESENTATION.sensitivity.default)
    }
}

impl Sensitivity {
    pub fn new(value: u8) -> Self {
        Self(value.min(PRESENTATION.sensitivity.max))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Backend contamination parameter this setting maps to. Display only.
    pub fn contamination(&self) -> f64 {
        let cfg = &PRESENTATION.sensitivity;
        cfg.contamination_floor + (self.0 as f64 / 100.0) * cfg.contamination_span
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Everything the backend needs for one scan. Built fresh per user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisRequestParams {
    pub ticker: TickerSymbol,
    pub mode: Mode,
    pub sensitivity: Sensitivity,
}

impl AnalysisRequestParams {
    pub fn new(ticker: TickerSymbol, mode: Mode, sensitivity: Sensitivity) -> Self {
        Self {
            ticker,
            mode,
            sensitivity,
        }
    }
}

/// Verdict the backend model assigns to an anomalous sample.
pub const ANOMALY_VERDICT: i32 = -1;

/// Response body of the analysis endpoints.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    pub ticker: String,
    #[serde(default)]
    pub prices: Vec<f64>,
    #[serde(default)]
    pub timestamps: Vec<String>,
    #[serde(default)]
    pub anomaly_count: u32,
    #[serde(default)]
    pub total_points: u32,
    #[serde(default)]
    pub explanation: Option<String>,
    /// Per-sample model verdict (1 normal, -1 anomalous), aligned with `prices`
    #[serde(default)]
    pub anomalies: Vec<i32>,
    /// Server-side score; the dashboard computes its own for display
    #[serde(default)]
    pub risk_score: Option<u32>,
}

impl AnalysisResult {
    /// True only when both sequences carry data.
    pub fn has_series(&self) -> bool {
        !self.prices.is_empty() && !self.timestamps.is_empty()
    }

    pub fn last_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    pub fn anomaly_indices(&self) -> Vec<usize> {
        self.anomalies
            .iter()
            .enumerate()
            .filter(|(idx, verdict)| **verdict == ANOMALY_VERDICT && *idx < self.prices.len())
            .map(|(idx, _)| idx)
            .collect()
    }
}
