//! Analysis service connection settings

use std::time::Duration;

pub struct EndpointPaths {
    /// Intraday window (5 days of 5m candles on the backend)
    pub live: &'static str,
    /// Historical window (2 years of daily candles)
    pub deep_scan: &'static str,
    /// Live window plus the generated narrative
    pub explain: &'static str,
}

/// The Master Service Configuration
pub struct ServiceConfig {
    pub default_api_base: &'static str,
    pub endpoints: EndpointPaths,
    // Single attempt per user action, so this is the whole budget.
    // Only applied natively; the browser fetch API has no client-side timeout.
    pub request_timeout: Duration,
    pub user_agent: &'static str,
}

pub const SERVICE: ServiceConfig = ServiceConfig {
    default_api_base: "https://forensicai-backend.onrender.com",
    endpoints: EndpointPaths {
        live: "analyze",
        deep_scan: "deep-scan",
        explain: "explain",
    },
    request_timeout: Duration::from_secs(120),
    user_agent: "ForensicLens/0.1",
};
