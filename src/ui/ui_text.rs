//! User-facing copy, kept in one place.

pub struct UiText {
    pub app_title: &'static str,
    pub brand_suffix: &'static str,
    pub search_hint: &'static str,
    pub scanning: &'static str,
    pub status_online: &'static str,
    pub theme_to_light: &'static str,
    pub theme_to_dark: &'static str,

    // Stat cards
    pub card_last_price: &'static str,
    pub card_total_anomalies: &'static str,
    pub card_data_points: &'static str,
    pub no_data: &'static str,
    pub offline: &'static str,
    pub risk_detected: &'static str,
    pub stable: &'static str,
    pub updated: &'static str,

    // Chart card
    pub expand_chart: &'static str,
    pub export_evidence: &'static str,
    pub detail_suffix: &'static str,
    pub price_legend: &'static str,
    pub anomaly_legend: &'static str,

    // Risk gauge
    pub risk_heading: &'static str,

    // Toolkit
    pub toolkit_heading: &'static str,
    pub action_report: &'static str,
    pub action_report_desc: &'static str,
    pub action_deep_scan: &'static str,
    pub action_deep_scan_desc: &'static str,
    pub action_explain: &'static str,
    pub action_explain_desc: &'static str,
    pub action_parameters: &'static str,
    pub action_parameters_desc: &'static str,
    pub report_copied: &'static str,

    // Overlays
    pub deep_scan_title: &'static str,
    pub deep_scan_intro: &'static str,
    pub deep_scan_points: [&'static str; 3],
    pub deep_scan_confirm: &'static str,
    pub cancel: &'static str,
    pub explanation_title: &'static str,
    pub explanation_loading: &'static str,
    pub explanation_empty: &'static str,
    pub close_report: &'static str,
    pub settings_title: &'static str,
    pub settings_slider: &'static str,
    pub settings_loose: &'static str,
    pub settings_strict: &'static str,
    pub settings_current: &'static str,
    pub settings_apply: &'static str,
    pub close: &'static str,
    pub ok: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Forensic",
    brand_suffix: ".AI",
    search_hint: "Search ticker (e.g. RELIANCE.NS, AAPL)",
    scanning: "SCANNING...",
    status_online: "ONLINE",
    theme_to_light: "☀",
    theme_to_dark: "🌙",

    card_last_price: "Last Traded Price",
    card_total_anomalies: "Total Anomalies",
    card_data_points: "Data Points",
    no_data: "No Data",
    offline: "Offline",
    risk_detected: "Risk Detected",
    stable: "Stable",
    updated: "Updated",

    expand_chart: "⛶",
    export_evidence: "Export Evidence",
    detail_suffix: "Detailed View",
    price_legend: "Price",
    anomaly_legend: "Anomaly",

    risk_heading: "Manipulation Risk",

    toolkit_heading: "Forensic Toolkit",
    action_report: "Generate Report",
    action_report_desc: "Copy evidence summary",
    action_deep_scan: "Deep Scan",
    action_deep_scan_desc: "Run 2-Year Analysis",
    action_explain: "AI Explanation",
    action_explain_desc: "Analyze Patterns",
    action_parameters: "Parameters",
    action_parameters_desc: "Adjust threshold",
    report_copied: "Evidence report copied to clipboard",

    deep_scan_title: "Deep Scan Protocol",
    deep_scan_intro: "You are about to initiate a Level-2 Historical Forensic Analysis.",
    deep_scan_points: [
        "Fetches 2 Years of daily OHLCV data.",
        "Switches detection algorithm to find long-term Pump & Dump schemes.",
        "Uses a stricter anomaly threshold (only flags major deviations).",
    ],
    deep_scan_confirm: "Initialize Deep Scan",
    cancel: "Cancel",
    explanation_title: "AI Forensic Analyst",
    explanation_loading: "Analyzing Market Patterns...",
    explanation_empty: "No explanation available.",
    close_report: "Close Report",
    settings_title: "Model Parameters",
    settings_slider: "Sensitivity Threshold",
    settings_loose: "LOOSE (Safe)",
    settings_strict: "STRICT (Risky)",
    settings_current: "Current Config:",
    settings_apply: "Apply Changes",
    close: "Close",
    ok: "OK",
};
