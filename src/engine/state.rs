use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{AnalysisRequestParams, AnalysisResult, Mode, Sensitivity, TickerEntry};

use super::messages::RequestSeq;

/// The overlay layered above the dashboard. A single value, so two overlays
/// can never be open at once.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub enum Overlay {
    #[default]
    None,
    Settings,
    DeepScanConfirm,
    Explanation,
    ExpandedChart,
}

/// Phase of the most recent analysis request.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum RequestPhase {
    #[default]
    Idle,
    Requesting,
    Ready,
    Failed,
}

/// Blocking, user-visible alert.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Notice {
    AnalysisFailed { mode: Mode, message: String },
    SearchFirst,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AnalysisFailed {
                mode: Mode::Live, ..
            } => write!(f, "Backend Error"),
            Notice::AnalysisFailed {
                mode: Mode::DeepScan,
                ..
            } => write!(f, "Deep Scan Error"),
            Notice::SearchFirst => write!(f, "Please search for a stock first!"),
        }
    }
}

impl Notice {
    pub fn detail(&self) -> Option<&str> {
        match self {
            Notice::AnalysisFailed { message, .. } => Some(message),
            Notice::SearchFirst => None,
        }
    }
}

/// The accepted result plus the request that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayedAnalysis {
    pub seq: RequestSeq,
    pub params: AnalysisRequestParams,
    pub result: AnalysisResult,
}

impl DisplayedAnalysis {
    /// Mode the displayed data was fetched with (not necessarily the current mode).
    pub fn mode(&self) -> Mode {
        self.params.mode
    }
}

/// Sequence bookkeeping for in-flight requests.
#[derive(Clone, Debug, Default)]
pub(super) struct RequestLedger {
    next_seq: RequestSeq,
    pub(super) pending_analysis: BTreeMap<RequestSeq, AnalysisRequestParams>,
    pub(super) latest_analysis: Option<RequestSeq>,
    pub(super) latest_explanation: Option<RequestSeq>,
}

impl RequestLedger {
    pub(super) fn next_seq(&mut self) -> RequestSeq {
        self.next_seq += 1;
        self.next_seq
    }

    pub(super) fn issue_analysis(&mut self, params: AnalysisRequestParams) -> RequestSeq {
        let seq = self.next_seq();
        self.pending_analysis.insert(seq, params);
        self.latest_analysis = Some(seq);
        seq
    }

    /// Issued before the newest request, or no longer pending.
    pub(super) fn is_stale_analysis(&self, seq: RequestSeq) -> bool {
        let superseded = self.latest_analysis.is_some_and(|latest| seq < latest);
        superseded || !self.pending_analysis.contains_key(&seq)
    }

    /// Forgets a request whose answer will never be shown.
    pub(super) fn drop_analysis(&mut self, seq: RequestSeq) {
        self.pending_analysis.remove(&seq);
    }

    /// Settles `seq` and drops every request issued before it.
    pub(super) fn settle_analysis(&mut self, seq: RequestSeq) -> Option<AnalysisRequestParams> {
        let params = self.pending_analysis.remove(&seq);
        self.pending_analysis.retain(|pending, _| *pending > seq);
        params
    }
}

/// Session-wide memory shared across requests. Lives as long as the page.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    // Search box
    pub query: String,
    pub suggestions: Vec<TickerEntry>,
    pub dropdown_open: bool,

    // Request inputs
    pub mode: Mode,
    pub sensitivity: Sensitivity,

    // Main analysis
    pub loading: bool,
    pub phase: RequestPhase,
    pub last_result: Option<DisplayedAnalysis>,

    // Overlays
    pub overlay: Overlay,

    // Explanation (independent of `loading`)
    pub explanation: Option<String>,
    pub explanation_loading: bool,

    pub notice: Option<Notice>,

    pub(super) ledger: RequestLedger,
}

impl SessionState {
    pub fn new(query: impl Into<String>, sensitivity: Sensitivity) -> Self {
        Self {
            query: query.into(),
            sensitivity,
            ..Default::default()
        }
    }

    /// Ticker of the result currently on screen.
    pub fn displayed_ticker(&self) -> Option<&str> {
        self.last_result.as_ref().map(|d| d.result.ticker.as_str())
    }

    /// Mode of the result on screen, or the requested mode when nothing is shown yet.
    pub fn displayed_mode(&self) -> Mode {
        self.last_result
            .as_ref()
            .map(DisplayedAnalysis::mode)
            .unwrap_or(self.mode)
    }

    pub fn pending_requests(&self) -> usize {
        self.ledger.pending_analysis.len()
    }
}
