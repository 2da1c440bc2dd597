use std::time::Duration;

use eframe::egui;

use crate::config::PRESENTATION;
use crate::domain::AnalysisRequestParams;
use crate::engine::{Effect, RequestSeq, SessionAction};
use crate::ui::app::ForensicApp;
use crate::ui::counter::CounterTarget;
use crate::utils::app_time::now;

impl ForensicApp {
    pub(super) fn run_effect(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::FetchAnalysis { seq, params } => self.spawn_analysis(ctx, seq, params),
            Effect::FetchExplanation { seq, params } => self.spawn_explanation(ctx, seq, params),
            Effect::AnimateCounters {
                total_points,
                anomaly_count,
            } => {
                let start = now();
                self.counters
                    .animate(CounterTarget::TotalPoints, total_points, start);
                self.counters
                    .animate(CounterTarget::AnomalyCount, anomaly_count, start);
                ctx.request_repaint();
            }
        }
    }

    fn spawn_analysis(&mut self, ctx: &egui::Context, seq: RequestSeq, params: AnalysisRequestParams) {
        let service = self.service.clone();
        let repaint = ctx.clone();

        let promise = self.executor.spawn(async move {
            let outcome = service.analyze(&params).await;
            repaint.request_repaint();
            outcome
        });

        self.analysis_jobs.push((seq, promise));
    }

    fn spawn_explanation(
        &mut self,
        ctx: &egui::Context,
        seq: RequestSeq,
        params: AnalysisRequestParams,
    ) {
        let service = self.service.clone();
        let repaint = ctx.clone();

        let promise = self.executor.spawn(async move {
            let outcome = service.explain(&params).await;
            repaint.request_repaint();
            outcome
        });

        self.explanation_jobs.push((seq, promise));
    }

    /// Moves every settled promise back into the engine as an action.
    pub(super) fn poll_jobs(&mut self, ctx: &egui::Context) {
        let mut settled = Vec::new();

        let mut still_running = Vec::with_capacity(self.analysis_jobs.len());
        for (seq, promise) in self.analysis_jobs.drain(..) {
            match promise.try_take() {
                Ok(outcome) => settled.push(SessionAction::AnalysisSettled { seq, outcome }),
                Err(promise) => still_running.push((seq, promise)),
            }
        }
        self.analysis_jobs = still_running;

        let mut still_running = Vec::with_capacity(self.explanation_jobs.len());
        for (seq, promise) in self.explanation_jobs.drain(..) {
            match promise.try_take() {
                Ok(outcome) => settled.push(SessionAction::ExplanationSettled { seq, outcome }),
                Err(promise) => still_running.push((seq, promise)),
            }
        }
        self.explanation_jobs = still_running;

        self.dispatch_all(ctx, settled);

        if self.is_waiting() {
            // The spawned task repaints on completion; this only keeps the spinner moving
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    pub(super) fn advance_counters(&mut self, ctx: &egui::Context) {
        if self.counters.advance(now()) {
            ctx.request_repaint_after(PRESENTATION.counter.tick);
        }
    }

    pub(super) fn is_waiting(&self) -> bool {
        !self.analysis_jobs.is_empty() || !self.explanation_jobs.is_empty()
    }
}
