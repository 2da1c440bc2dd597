use crate::domain::{AnalysisRequestParams, AnalysisResult, Mode, Sensitivity, TickerCatalog, TickerSymbol};
use crate::service::ServiceError;

use super::messages::{Effect, RequestSeq, SessionAction};
use super::state::{DisplayedAnalysis, Notice, Overlay, RequestPhase, SessionState};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Shown in place of the narrative when the explanation call fails.
pub const EXPLANATION_FAILED_TEXT: &str = "AI Connection Failed. Please ensure Backend is running.";

/// Owns the session state and the ticker catalog. Every action is a total
/// transition: actions that make no sense in the current state are no-ops.
pub struct SessionEngine {
    state: SessionState,
    catalog: TickerCatalog,
}

impl SessionEngine {
    pub fn new(state: SessionState, catalog: TickerCatalog) -> Self {
        Self { state, catalog }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Applies one action and returns the work the host must carry out.
    pub fn apply(&mut self, action: SessionAction) -> Vec<Effect> {
        #[cfg(debug_assertions)]
        let label = if DEBUG_FLAGS.print_session_transitions {
            Some(format!("{:?}", action))
        } else {
            None
        };

        let effects = match action {
            SessionAction::EditQuery(text) => {
                self.edit_query(text);
                Vec::new()
            }
            SessionAction::FocusQuery => {
                self.state.dropdown_open = !self.state.suggestions.is_empty();
                Vec::new()
            }
            SessionAction::DismissSuggestions => {
                self.state.dropdown_open = false;
                Vec::new()
            }
            SessionAction::SelectSuggestion(symbol) => {
                self.edit_query(symbol);
                self.submit()
            }
            SessionAction::Submit => self.submit(),
            SessionAction::RequestDeepScan => {
                if TickerSymbol::parse(&self.state.query).is_some() {
                    self.open_overlay(Overlay::DeepScanConfirm);
                }
                Vec::new()
            }
            SessionAction::ConfirmDeepScan => self.confirm_deep_scan(),
            SessionAction::OpenSettings => {
                self.open_overlay(Overlay::Settings);
                Vec::new()
            }
            SessionAction::SetSensitivity(value) => {
                self.state.sensitivity = Sensitivity::new(value);
                Vec::new()
            }
            SessionAction::ApplySettings => self.apply_settings(),
            SessionAction::RequestExplanation => self.request_explanation(),
            SessionAction::ExpandChart => {
                if self.state.last_result.is_some() {
                    self.open_overlay(Overlay::ExpandedChart);
                }
                Vec::new()
            }
            SessionAction::CloseOverlay => {
                self.state.overlay = Overlay::None;
                Vec::new()
            }
            SessionAction::DismissNotice => {
                self.state.notice = None;
                Vec::new()
            }
            SessionAction::AnalysisSettled { seq, outcome } => self.settle_analysis(seq, outcome),
            SessionAction::ExplanationSettled { seq, outcome } => {
                self.settle_explanation(seq, outcome);
                Vec::new()
            }
        };

        #[cfg(debug_assertions)]
        if let Some(label) = label {
            log::info!("[session] {} -> {:?}", label, effects);
        }

        effects
    }

    // --- Search ---

    fn edit_query(&mut self, text: String) {
        self.state.suggestions = self.catalog.matches(&text);
        self.state.dropdown_open = !self.state.suggestions.is_empty();
        self.state.query = text;
    }

    /// Plain search always runs in Live mode.
    fn submit(&mut self) -> Vec<Effect> {
        self.state.dropdown_open = false;
        let Some(ticker) = TickerSymbol::parse(&self.state.query) else {
            return Vec::new();
        };

        self.state.mode = Mode::Live;
        vec![self.issue_analysis(ticker)]
    }

    // --- Overlays ---

    fn open_overlay(&mut self, overlay: Overlay) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions && self.state.overlay != Overlay::None {
            log::info!("Overlay {:?} replaced by {:?}", self.state.overlay, overlay);
        }
        self.state.overlay = overlay;
    }

    fn confirm_deep_scan(&mut self) -> Vec<Effect> {
        if self.state.overlay != Overlay::DeepScanConfirm {
            return Vec::new();
        }
        self.state.overlay = Overlay::None;

        let Some(ticker) = TickerSymbol::parse(&self.state.query) else {
            return Vec::new();
        };

        self.state.mode = Mode::DeepScan;
        vec![self.issue_analysis(ticker)]
    }

    /// Re-runs the current ticker and mode with the new sensitivity.
    fn apply_settings(&mut self) -> Vec<Effect> {
        if self.state.overlay != Overlay::Settings {
            return Vec::new();
        }
        self.state.overlay = Overlay::None;

        match TickerSymbol::parse(&self.state.query) {
            Some(ticker) => vec![self.issue_analysis(ticker)],
            None => Vec::new(),
        }
    }

    // --- Main analysis ---

    fn issue_analysis(&mut self, ticker: TickerSymbol) -> Effect {
        let params = AnalysisRequestParams::new(ticker, self.state.mode, self.state.sensitivity);
        let seq = self.state.ledger.issue_analysis(params.clone());
        self.state.loading = true;
        self.state.phase = RequestPhase::Requesting;

        log::info!(
            "Analysis #{} issued: {} ({}, sensitivity {})",
            seq,
            params.ticker,
            params.mode,
            params.sensitivity
        );

        Effect::FetchAnalysis { seq, params }
    }

    fn settle_analysis(
        &mut self,
        seq: RequestSeq,
        outcome: Result<AnalysisResult, ServiceError>,
    ) -> Vec<Effect> {
        // Only the newest request may touch the dashboard, whatever order answers arrive in
        if self.state.ledger.is_stale_analysis(seq) {
            log::info!("Analysis #{} discarded: superseded by a newer request", seq);
            self.state.ledger.drop_analysis(seq);
            self.state.loading = !self.state.ledger.pending_analysis.is_empty();
            return Vec::new();
        }

        let Some(params) = self.state.ledger.settle_analysis(seq) else {
            return Vec::new();
        };

        let effects = match outcome {
            Ok(result) => {
                log::info!(
                    "Analysis #{} accepted: {} points, {} anomalies",
                    seq,
                    result.total_points,
                    result.anomaly_count
                );
                self.state.phase = RequestPhase::Ready;

                let effect = Effect::AnimateCounters {
                    total_points: result.total_points,
                    anomaly_count: result.anomaly_count,
                };
                self.state.last_result = Some(DisplayedAnalysis {
                    seq,
                    params,
                    result,
                });
                vec![effect]
            }
            Err(error) => {
                // Stale data beats a blank dashboard: last_result stays as it was.
                log::warn!("Analysis #{} for {} failed: {}", seq, params.ticker, error);
                self.state.phase = RequestPhase::Failed;
                self.state.notice = Some(Notice::AnalysisFailed {
                    mode: params.mode,
                    message: error.to_string(),
                });
                Vec::new()
            }
        };

        self.state.loading = !self.state.ledger.pending_analysis.is_empty();
        effects
    }

    // --- Explanation ---

    fn request_explanation(&mut self) -> Vec<Effect> {
        let Some(displayed) = self.state.last_result.as_ref() else {
            self.state.notice = Some(Notice::SearchFirst);
            return Vec::new();
        };

        // Keyed off what is on screen, not what is typed in the search box
        let ticker = TickerSymbol::parse(&displayed.result.ticker)
            .unwrap_or_else(|| displayed.params.ticker.clone());
        let params = AnalysisRequestParams::new(ticker, Mode::Live, self.state.sensitivity);

        self.open_overlay(Overlay::Explanation);
        self.state.explanation = None;
        self.state.explanation_loading = true;

        let seq = self.state.ledger.next_seq();
        self.state.ledger.latest_explanation = Some(seq);
        log::info!("Explanation #{} issued for {}", seq, params.ticker);

        vec![Effect::FetchExplanation { seq, params }]
    }

    fn settle_explanation(&mut self, seq: RequestSeq, outcome: Result<Option<String>, ServiceError>) {
        if self.state.ledger.latest_explanation != Some(seq) {
            log::info!("Explanation #{} discarded: superseded", seq);
            return;
        }

        self.state.explanation_loading = false;
        self.state.explanation = match outcome {
            Ok(text) => text,
            Err(error) => {
                log::warn!("Explanation #{} failed: {}", seq, error);
                Some(EXPLANATION_FAILED_TEXT.to_string())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::risk_score;

    fn engine_with_query(query: &str) -> SessionEngine {
        SessionEngine::new(
            SessionState::new(query, Sensitivity::default()),
            TickerCatalog::builtin(),
        )
    }

    fn result_for(ticker: &str, anomaly_count: u32, total_points: u32) -> AnalysisResult {
        AnalysisResult {
            ticker: ticker.to_string(),
            prices: vec![10.0, 11.0, 12.0],
            timestamps: vec!["a".into(), "b".into(), "c".into()],
            anomaly_count,
            total_points,
            ..Default::default()
        }
    }

    fn fetch_seq(effects: &[Effect]) -> RequestSeq {
        match effects {
            [Effect::FetchAnalysis { seq, .. }] => *seq,
            other => panic!("expected a single FetchAnalysis, got {:?}", other),
        }
    }

    #[test]
    fn search_issues_live_request_and_scores_result() {
        let mut engine = engine_with_query("RELIANCE.NS");

        let effects = engine.apply(SessionAction::Submit);
        let seq = match &effects[..] {
            [Effect::FetchAnalysis { seq, params }] => {
                assert_eq!(params.ticker.as_str(), "RELIANCE.NS");
                assert_eq!(params.mode, Mode::Live);
                assert_eq!(params.sensitivity.value(), 50);
                *seq
            }
            other => panic!("unexpected effects {:?}", other),
        };
        assert!(engine.state().loading);
        assert_eq!(engine.state().phase, RequestPhase::Requesting);

        let effects = engine.apply(SessionAction::AnalysisSettled {
            seq,
            outcome: Ok(result_for("RELIANCE.NS", 12, 375)),
        });
        assert_eq!(
            effects,
            vec![Effect::AnimateCounters {
                total_points: 375,
                anomaly_count: 12
            }]
        );

        let state = engine.state();
        assert!(!state.loading);
        assert_eq!(state.phase, RequestPhase::Ready);
        let shown = state.last_result.as_ref().unwrap();
        assert_eq!(risk_score(shown.result.anomaly_count), 16);
    }

    #[test]
    fn blank_query_does_not_request() {
        let mut engine = engine_with_query("   ");
        assert!(engine.apply(SessionAction::Submit).is_empty());
        assert!(!engine.state().loading);
        assert_eq!(engine.state().phase, RequestPhase::Idle);
    }

    #[test]
    fn deep_scan_waits_for_confirmation() {
        let mut engine = engine_with_query("AAPL");

        assert!(engine.apply(SessionAction::RequestDeepScan).is_empty());
        assert_eq!(engine.state().overlay, Overlay::DeepScanConfirm);
        assert!(!engine.state().loading);
        assert_eq!(engine.state().mode, Mode::Live);

        let effects = engine.apply(SessionAction::ConfirmDeepScan);
        match &effects[..] {
            [Effect::FetchAnalysis { params, .. }] => assert_eq!(params.mode, Mode::DeepScan),
            other => panic!("unexpected effects {:?}", other),
        }
        assert_eq!(engine.state().overlay, Overlay::None);
        assert_eq!(engine.state().mode, Mode::DeepScan);
    }

    #[test]
    fn cancelled_deep_scan_sends_nothing() {
        let mut engine = engine_with_query("AAPL");
        engine.apply(SessionAction::RequestDeepScan);
        engine.apply(SessionAction::CloseOverlay);

        assert!(engine.apply(SessionAction::ConfirmDeepScan).is_empty());
        assert_eq!(engine.state().mode, Mode::Live);
    }

    #[test]
    fn deep_scan_needs_a_ticker() {
        let mut engine = engine_with_query("");
        engine.apply(SessionAction::RequestDeepScan);
        assert_eq!(engine.state().overlay, Overlay::None);
    }

    #[test]
    fn plain_search_resets_mode_to_live() {
        let mut engine = engine_with_query("AAPL");
        engine.apply(SessionAction::RequestDeepScan);
        engine.apply(SessionAction::ConfirmDeepScan);
        assert_eq!(engine.state().mode, Mode::DeepScan);

        engine.apply(SessionAction::Submit);
        assert_eq!(engine.state().mode, Mode::Live);
    }

    #[test]
    fn explanation_without_result_prompts_instead_of_requesting() {
        let mut engine = engine_with_query("AAPL");

        let effects = engine.apply(SessionAction::RequestExplanation);
        assert!(effects.is_empty());
        assert_eq!(engine.state().notice, Some(Notice::SearchFirst));
        assert_eq!(engine.state().overlay, Overlay::None);
        assert!(!engine.state().explanation_loading);
    }

    #[test]
    fn explanation_uses_displayed_ticker_and_own_flag() {
        let mut engine = engine_with_query("AAPL");
        let seq = fetch_seq(&engine.apply(SessionAction::Submit));
        engine.apply(SessionAction::AnalysisSettled {
            seq,
            outcome: Ok(result_for("AAPL", 3, 300)),
        });

        // Typing a new ticker must not redirect the explanation
        engine.apply(SessionAction::EditQuery("MSFT".into()));
        let follow_up = fetch_seq(&engine.apply(SessionAction::Submit));

        let effects = engine.apply(SessionAction::RequestExplanation);
        let explain_seq = match &effects[..] {
            [Effect::FetchExplanation { seq, params }] => {
                assert_eq!(params.ticker.as_str(), "AAPL");
                *seq
            }
            other => panic!("unexpected effects {:?}", other),
        };

        let state = engine.state();
        assert_eq!(state.overlay, Overlay::Explanation);
        assert!(state.explanation_loading);
        assert!(state.loading, "main request still in flight");

        engine.apply(SessionAction::ExplanationSettled {
            seq: explain_seq,
            outcome: Ok(Some("### Forensic Analysis".into())),
        });
        assert!(!engine.state().explanation_loading);
        assert!(engine.state().loading);
        assert_eq!(
            engine.state().explanation.as_deref(),
            Some("### Forensic Analysis")
        );

        engine.apply(SessionAction::AnalysisSettled {
            seq: follow_up,
            outcome: Ok(result_for("MSFT", 0, 300)),
        });
        assert!(!engine.state().loading);
    }

    #[test]
    fn explanation_failure_substitutes_message() {
        let mut engine = engine_with_query("AAPL");
        let seq = fetch_seq(&engine.apply(SessionAction::Submit));
        engine.apply(SessionAction::AnalysisSettled {
            seq,
            outcome: Ok(result_for("AAPL", 3, 300)),
        });

        let explain_seq = match &engine.apply(SessionAction::RequestExplanation)[..] {
            [Effect::FetchExplanation { seq, .. }] => *seq,
            other => panic!("unexpected effects {:?}", other),
        };
        engine.apply(SessionAction::ExplanationSettled {
            seq: explain_seq,
            outcome: Err(ServiceError::Status(502)),
        });

        assert_eq!(
            engine.state().explanation.as_deref(),
            Some(EXPLANATION_FAILED_TEXT)
        );
        assert_eq!(engine.state().notice, None);
    }

    #[test]
    fn failure_keeps_previous_result() {
        let mut engine = engine_with_query("AAPL");
        let first = fetch_seq(&engine.apply(SessionAction::Submit));
        engine.apply(SessionAction::AnalysisSettled {
            seq: first,
            outcome: Ok(result_for("AAPL", 5, 300)),
        });

        let second = fetch_seq(&engine.apply(SessionAction::Submit));
        let effects = engine.apply(SessionAction::AnalysisSettled {
            seq: second,
            outcome: Err(ServiceError::Transport("connection refused".into())),
        });

        assert!(effects.is_empty());
        let state = engine.state();
        assert!(!state.loading);
        assert_eq!(state.phase, RequestPhase::Failed);
        assert_eq!(state.last_result.as_ref().map(|d| d.seq), Some(first));
        assert!(matches!(
            state.notice,
            Some(Notice::AnalysisFailed { mode: Mode::Live, .. })
        ));

        engine.apply(SessionAction::DismissNotice);
        assert_eq!(engine.state().notice, None);
    }

    #[test]
    fn late_response_from_older_request_is_discarded() {
        let mut engine = engine_with_query("AAPL");
        let live = fetch_seq(&engine.apply(SessionAction::Submit));

        engine.apply(SessionAction::RequestDeepScan);
        let deep = fetch_seq(&engine.apply(SessionAction::ConfirmDeepScan));
        assert!(deep > live);

        // Deep scan lands first
        engine.apply(SessionAction::AnalysisSettled {
            seq: deep,
            outcome: Ok(result_for("AAPL", 40, 500)),
        });
        assert!(!engine.state().loading, "older request is superseded");
        assert_eq!(engine.state().pending_requests(), 0);

        // Live response arrives afterwards and must not overwrite
        let effects = engine.apply(SessionAction::AnalysisSettled {
            seq: live,
            outcome: Ok(result_for("AAPL", 1, 375)),
        });
        assert!(effects.is_empty());

        let shown = engine.state().last_result.as_ref().unwrap();
        assert_eq!(shown.seq, deep);
        assert_eq!(shown.mode(), Mode::DeepScan);
        assert_eq!(shown.result.anomaly_count, 40);
    }

    #[test]
    fn answer_to_an_older_request_is_dropped_while_newer_is_pending() {
        let mut engine = engine_with_query("AAPL");
        let first = fetch_seq(&engine.apply(SessionAction::Submit));
        let second = fetch_seq(&engine.apply(SessionAction::Submit));

        let effects = engine.apply(SessionAction::AnalysisSettled {
            seq: first,
            outcome: Ok(result_for("AAPL", 1, 10)),
        });
        assert!(effects.is_empty());
        assert!(engine.state().last_result.is_none());
        assert!(engine.state().loading);
        assert_eq!(engine.state().pending_requests(), 1);

        engine.apply(SessionAction::AnalysisSettled {
            seq: second,
            outcome: Ok(result_for("AAPL", 2, 20)),
        });
        assert!(!engine.state().loading);
        assert_eq!(engine.state().last_result.as_ref().unwrap().seq, second);
    }

    #[test]
    fn older_failure_does_not_alert_while_newer_is_pending() {
        let mut engine = engine_with_query("AAPL");
        let live = fetch_seq(&engine.apply(SessionAction::Submit));
        engine.apply(SessionAction::RequestDeepScan);
        let deep = fetch_seq(&engine.apply(SessionAction::ConfirmDeepScan));

        let effects = engine.apply(SessionAction::AnalysisSettled {
            seq: live,
            outcome: Err(ServiceError::Status(500)),
        });
        assert!(effects.is_empty());

        let state = engine.state();
        assert_eq!(state.notice, None);
        assert_eq!(state.phase, RequestPhase::Requesting);
        assert!(state.loading);
        assert_eq!(state.pending_requests(), 1);

        engine.apply(SessionAction::AnalysisSettled {
            seq: deep,
            outcome: Ok(result_for("AAPL", 40, 500)),
        });
        assert_eq!(engine.state().phase, RequestPhase::Ready);
        assert_eq!(engine.state().last_result.as_ref().unwrap().mode(), Mode::DeepScan);
    }

    #[test]
    fn older_success_after_newer_failure_is_dropped() {
        let mut engine = engine_with_query("AAPL");
        let live = fetch_seq(&engine.apply(SessionAction::Submit));
        engine.apply(SessionAction::RequestDeepScan);
        let deep = fetch_seq(&engine.apply(SessionAction::ConfirmDeepScan));

        engine.apply(SessionAction::AnalysisSettled {
            seq: deep,
            outcome: Err(ServiceError::Status(503)),
        });
        assert!(!engine.state().loading, "failure also retires older requests");
        assert_eq!(engine.state().pending_requests(), 0);

        let effects = engine.apply(SessionAction::AnalysisSettled {
            seq: live,
            outcome: Ok(result_for("AAPL", 1, 375)),
        });
        assert!(effects.is_empty());

        let state = engine.state();
        assert!(state.last_result.is_none());
        assert_eq!(state.phase, RequestPhase::Failed);
        assert_eq!(state.mode, Mode::DeepScan);
        assert!(matches!(
            state.notice,
            Some(Notice::AnalysisFailed { mode: Mode::DeepScan, .. })
        ));
    }

    #[test]
    fn stale_failure_is_silent() {
        let mut engine = engine_with_query("AAPL");
        let first = fetch_seq(&engine.apply(SessionAction::Submit));
        let second = fetch_seq(&engine.apply(SessionAction::Submit));

        engine.apply(SessionAction::AnalysisSettled {
            seq: second,
            outcome: Ok(result_for("AAPL", 2, 20)),
        });
        engine.apply(SessionAction::AnalysisSettled {
            seq: first,
            outcome: Err(ServiceError::Status(500)),
        });

        assert_eq!(engine.state().notice, None);
        assert_eq!(engine.state().phase, RequestPhase::Ready);
    }

    #[test]
    fn overlays_are_mutually_exclusive() {
        let mut engine = engine_with_query("AAPL");
        let seq = fetch_seq(&engine.apply(SessionAction::Submit));
        engine.apply(SessionAction::AnalysisSettled {
            seq,
            outcome: Ok(result_for("AAPL", 3, 300)),
        });

        engine.apply(SessionAction::OpenSettings);
        assert_eq!(engine.state().overlay, Overlay::Settings);

        engine.apply(SessionAction::ExpandChart);
        assert_eq!(engine.state().overlay, Overlay::ExpandedChart);

        engine.apply(SessionAction::RequestDeepScan);
        assert_eq!(engine.state().overlay, Overlay::DeepScanConfirm);

        engine.apply(SessionAction::RequestExplanation);
        assert_eq!(engine.state().overlay, Overlay::Explanation);

        // Confirm is only valid from its own overlay
        assert!(engine.apply(SessionAction::ConfirmDeepScan).is_empty());

        engine.apply(SessionAction::CloseOverlay);
        assert_eq!(engine.state().overlay, Overlay::None);
    }

    #[test]
    fn expand_chart_requires_a_result() {
        let mut engine = engine_with_query("AAPL");
        engine.apply(SessionAction::ExpandChart);
        assert_eq!(engine.state().overlay, Overlay::None);
    }

    #[test]
    fn apply_settings_reruns_with_new_sensitivity() {
        let mut engine = engine_with_query("TCS.NS");
        engine.apply(SessionAction::OpenSettings);
        engine.apply(SessionAction::SetSensitivity(80));

        let effects = engine.apply(SessionAction::ApplySettings);
        match &effects[..] {
            [Effect::FetchAnalysis { params, .. }] => {
                assert_eq!(params.sensitivity.value(), 80);
                assert_eq!(params.ticker.as_str(), "TCS.NS");
            }
            other => panic!("unexpected effects {:?}", other),
        }
        assert_eq!(engine.state().overlay, Overlay::None);
    }

    #[test]
    fn sensitivity_is_clamped_when_set() {
        let mut engine = engine_with_query("AAPL");
        engine.apply(SessionAction::SetSensitivity(200));
        assert_eq!(engine.state().sensitivity.value(), 100);
    }

    #[test]
    fn dropdown_follows_suggestions() {
        let mut engine = engine_with_query("");

        engine.apply(SessionAction::EditQuery("tata".into()));
        assert_eq!(engine.state().suggestions.len(), 2);
        assert!(engine.state().dropdown_open);

        engine.apply(SessionAction::EditQuery("zzzz".into()));
        assert!(engine.state().suggestions.is_empty());
        assert!(!engine.state().dropdown_open);

        engine.apply(SessionAction::EditQuery(String::new()));
        assert!(!engine.state().dropdown_open);
    }

    #[test]
    fn focus_reopens_and_blur_dismisses_the_dropdown() {
        let mut engine = engine_with_query("");
        engine.apply(SessionAction::EditQuery("tcs".into()));
        assert!(engine.state().dropdown_open);

        engine.apply(SessionAction::DismissSuggestions);
        assert!(!engine.state().dropdown_open);
        assert!(!engine.state().suggestions.is_empty(), "matches survive the blur");

        engine.apply(SessionAction::FocusQuery);
        assert!(engine.state().dropdown_open);

        engine.apply(SessionAction::EditQuery("zzzz".into()));
        engine.apply(SessionAction::FocusQuery);
        assert!(!engine.state().dropdown_open, "nothing to show");
    }

    #[test]
    fn selecting_a_suggestion_submits_it() {
        let mut engine = engine_with_query("");
        engine.apply(SessionAction::EditQuery("infy".into()));

        let effects = engine.apply(SessionAction::SelectSuggestion("INFY.NS".into()));
        match &effects[..] {
            [Effect::FetchAnalysis { params, .. }] => assert_eq!(params.ticker.as_str(), "INFY.NS"),
            other => panic!("unexpected effects {:?}", other),
        }
        assert_eq!(engine.state().query, "INFY.NS");
        assert!(!engine.state().dropdown_open);
    }
}
