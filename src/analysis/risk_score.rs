use std::fmt;

use crate::config::PRESENTATION;

/// Maps an anomaly count into a 0..=100 risk percentage.
///
/// Anything at or above `baseline / amplification` (74 with the shipped
/// calibration) saturates at 100.
pub fn risk_score(anomaly_count: u32) -> u8 {
    let cfg = &PRESENTATION.risk;
    let raw = anomaly_count as f64 / cfg.normalization_baseline * 100.0 * cfg.amplification;
    raw.min(100.0).round() as u8
}

/// Needle rotation for the half-circle gauge: 0 → -180°, 100 → 0°.
pub fn gauge_rotation_degrees(score: u8) -> f32 {
    score as f32 * 1.8 - 180.0
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RiskLevel {
    Low,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        let cfg = &PRESENTATION.risk;
        if score > cfg.critical_above {
            RiskLevel::Critical
        } else if score > cfg.high_above {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW LEVEL",
            RiskLevel::High => "HIGH LEVEL",
            RiskLevel::Critical => "CRITICAL LEVEL",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Everything the gauge card needs, derived from a single count.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub rotation_degrees: f32,
}

impl RiskAssessment {
    pub fn from_anomaly_count(anomaly_count: u32) -> Self {
        let score = risk_score(anomaly_count);
        Self {
            score,
            level: RiskLevel::from_score(score),
            rotation_degrees: gauge_rotation_degrees(score),
        }
    }

    /// Position of the needle along the sweep, 0.0..=1.0
    pub fn fraction(&self) -> f32 {
        self.score as f32 / 100.0
    }
}
