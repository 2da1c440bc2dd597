//! Plain-text evidence summary for the "Generate Report" action.

use crate::analysis::risk_score::RiskAssessment;
use crate::domain::Currency;
use crate::engine::state::DisplayedAnalysis;

pub fn evidence_report(displayed: &DisplayedAnalysis) -> String {
    let result = &displayed.result;
    let mode = displayed.params.mode;
    let currency = Currency::resolve(Some(&result.ticker));
    let risk = RiskAssessment::from_anomaly_count(result.anomaly_count);

    let last_price = result
        .last_price()
        .map(|price| currency.format_price(price))
        .unwrap_or_else(|| "n/a".to_string());

    let mut lines = vec![
        format!("Forensic Evidence Report: {}", result.ticker),
        format!("Scan Mode: {} ({})", mode, mode.window_label()),
        format!(
            "Sensitivity: {} (contamination {:.3})",
            displayed.params.sensitivity,
            displayed.params.sensitivity.contamination()
        ),
        format!("Last Traded Price: {}", last_price),
        format!("Data Points: {} ({})", result.total_points, mode.candle_label()),
        format!("Total Anomalies: {}", result.anomaly_count),
        format!("Manipulation Risk: {}% ({})", risk.score, risk.level),
    ];

    if let Some(explanation) = result.explanation.as_deref().filter(|e| !e.is_empty()) {
        lines.push(String::new());
        lines.push(explanation.to_string());
    }

    lines.join("\n")
}
