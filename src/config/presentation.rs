//! Presentation constants: risk calibration, chart decimation, counters

use std::time::Duration;

pub struct RiskSettings {
    // Normalization baseline for anomaly counts (calibration choice, not from the response)
    pub normalization_baseline: f64,
    pub amplification: f64,
    // Severity bands, same cut-offs the backend narrative uses
    pub high_above: u8,
    pub critical_above: u8,
}

pub struct ChartSettings {
    /// Label thinning kicks in above this many labels (Deep Scan only)
    pub decimation_min_labels: usize,
    pub inline_label_stride: usize,
    pub expanded_label_stride: usize,
    pub placeholder_labels: [&'static str; 3],
    pub inline_marker_radius: f32,
    pub expanded_marker_radius: f32,
}

pub struct CounterSettings {
    pub tick: Duration,
    /// Approximate number of frames per animation, regardless of magnitude
    pub target_frames: u64,
}

pub struct SensitivitySettings {
    pub default: u8,
    pub max: u8,
    pub contamination_floor: f64,
    pub contamination_span: f64,
}

/// The Master Presentation Configuration
pub struct PresentationConfig {
    pub risk: RiskSettings,
    pub chart: ChartSettings,
    pub counter: CounterSettings,
    pub sensitivity: SensitivitySettings,
}

pub const PRESENTATION: PresentationConfig = PresentationConfig {
    risk: RiskSettings {
        normalization_baseline: 370.0,
        amplification: 5.0,
        high_above: 40,
        critical_above: 75,
    },

    chart: ChartSettings {
        decimation_min_labels: 30,
        inline_label_stride: 30,
        expanded_label_stride: 15,
        placeholder_labels: ["10:00", "10:30", "11:00"],
        inline_marker_radius: 3.0,
        expanded_marker_radius: 4.0,
    },

    counter: CounterSettings {
        tick: Duration::from_millis(20),
        target_frames: 30,
    },

    sensitivity: SensitivitySettings {
        default: 50,
        max: 100,
        contamination_floor: 0.01,
        contamination_span: 0.19,
    },
};
