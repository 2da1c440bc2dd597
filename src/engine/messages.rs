use crate::domain::{AnalysisRequestParams, AnalysisResult};
use crate::service::ServiceError;

/// Monotonically increasing request tag. Larger is newer.
pub type RequestSeq = u64;

/// Everything that can happen to a session: user intent and request outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    // --- Search box ---
    EditQuery(String),
    FocusQuery,
    DismissSuggestions,
    SelectSuggestion(String),
    Submit,

    // --- Toolkit ---
    RequestDeepScan,
    ConfirmDeepScan,
    OpenSettings,
    SetSensitivity(u8),
    ApplySettings,
    RequestExplanation,
    ExpandChart,
    CloseOverlay,
    DismissNotice,

    // --- Request outcomes ---
    AnalysisSettled {
        seq: RequestSeq,
        outcome: Result<AnalysisResult, ServiceError>,
    },
    ExplanationSettled {
        seq: RequestSeq,
        outcome: Result<Option<String>, ServiceError>,
    },
}

/// Work the session asks its host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchAnalysis {
        seq: RequestSeq,
        params: AnalysisRequestParams,
    },
    FetchExplanation {
        seq: RequestSeq,
        params: AnalysisRequestParams,
    },
    AnimateCounters {
        total_points: u32,
        anomaly_count: u32,
    },
}
