// Presentation-side derivations from a stored analysis result
pub mod chart_series;
pub mod report;
pub mod risk_score;

pub use chart_series::{ChartSeries, Density, transform};
pub use report::evidence_report;
pub use risk_score::{RiskAssessment, RiskLevel, gauge_rotation_degrees, risk_score};
