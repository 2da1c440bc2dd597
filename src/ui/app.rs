use eframe::{Frame, egui};
use poll_promise::Promise;

use crate::config::{DEFAULT_TICKER, PRESENTATION};
use crate::domain::{AnalysisResult, Sensitivity, TickerCatalog};
use crate::engine::{RequestSeq, SessionAction, SessionEngine, SessionState};
use crate::service::{Executor, ServiceError, SharedService};
use crate::ui::counter::CounterBoard;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub(super) type AnalysisJob = (RequestSeq, Promise<Result<AnalysisResult, ServiceError>>);
pub(super) type ExplanationJob = (RequestSeq, Promise<Result<Option<String>, ServiceError>>);

/// Start-up choices, from the command line natively and defaults in the browser.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub initial_query: String,
    pub sensitivity: u8,
    pub scan_on_start: bool,
    pub dark_mode: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            initial_query: DEFAULT_TICKER.to_string(),
            sensitivity: PRESENTATION.sensitivity.default,
            scan_on_start: false,
            dark_mode: true,
        }
    }
}

pub struct ForensicApp {
    pub(super) engine: SessionEngine,
    pub(super) service: SharedService,
    pub(super) executor: Executor,

    // In-flight backend calls, tagged with the engine's sequence numbers
    pub(super) analysis_jobs: Vec<AnalysisJob>,
    pub(super) explanation_jobs: Vec<ExplanationJob>,

    pub(super) counters: CounterBoard,
    pub(super) dark_mode: bool,
    // Short-lived confirmation after "Generate Report"
    pub(super) toast: Option<(String, AppInstant)>,
}

impl ForensicApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        service: SharedService,
        executor: Executor,
        options: AppOptions,
    ) -> Self {
        let state = SessionState::new(
            options.initial_query.trim(),
            Sensitivity::new(options.sensitivity),
        );

        let mut app = Self {
            engine: SessionEngine::new(state, TickerCatalog::builtin()),
            service,
            executor,
            analysis_jobs: Vec::new(),
            explanation_jobs: Vec::new(),
            counters: CounterBoard::new(),
            dark_mode: options.dark_mode,
            toast: None,
        };

        setup_custom_visuals(&cc.egui_ctx, app.dark_mode);
        log::info!("Backend: {} ({})", app.service.signature(), options.initial_query);

        if options.scan_on_start {
            app.dispatch(&cc.egui_ctx, SessionAction::Submit);
        }

        app
    }

    /// Feeds one action into the engine and carries out whatever it asks for.
    pub(super) fn dispatch(&mut self, ctx: &egui::Context, action: SessionAction) {
        let effects = self.engine.apply(action);
        for effect in effects {
            self.run_effect(ctx, effect);
        }
    }

    pub(super) fn dispatch_all(&mut self, ctx: &egui::Context, actions: Vec<SessionAction>) {
        for action in actions {
            self.dispatch(ctx, action);
        }
    }

    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.dark_mode = !self.dark_mode;
        setup_custom_visuals(ctx, self.dark_mode);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Theme switched (dark: {})", self.dark_mode);
        }
    }
}

impl eframe::App for ForensicApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop outstanding promises before the runtime goes away
        self.analysis_jobs.clear();
        self.explanation_jobs.clear();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_jobs(ctx);
        self.advance_counters(ctx);

        self.render_header_panel(ctx);
        self.render_central_panel(ctx);
        self.render_overlays(ctx);
        self.render_notice(ctx);
    }
}
