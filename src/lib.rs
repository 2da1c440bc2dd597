#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod config;
pub mod domain;
pub mod engine;
pub mod service;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use domain::{AnalysisRequestParams, AnalysisResult, Mode, Sensitivity, TickerSymbol};
pub use engine::{Effect, SessionAction, SessionEngine, SessionState};
pub use service::{AnalysisService, Executor, HttpAnalysisService, ServiceError, SharedService};
pub use ui::{AppOptions, ForensicApp};
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

use crate::config::{DEFAULT_TICKER, PRESENTATION, SERVICE};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the analysis backend
    #[arg(long, default_value = SERVICE.default_api_base)]
    pub api_base: String,

    /// Ticker pre-filled in the search box
    #[arg(long, default_value = DEFAULT_TICKER)]
    pub ticker: String,

    /// Detection sensitivity, 0 (loose) to 100 (strict)
    #[arg(long, default_value_t = PRESENTATION.sensitivity.default, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub sensitivity: u8,

    /// Run a Live analysis of --ticker as soon as the window opens
    #[arg(long, default_value_t = false)]
    pub scan_on_start: bool,

    /// Start in the light theme
    #[arg(long, default_value_t = false)]
    pub light: bool,
}

impl Cli {
    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            initial_query: self.ticker.clone(),
            sensitivity: self.sensitivity,
            scan_on_start: self.scan_on_start,
            dark_mode: !self.light,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    service: SharedService,
    executor: Executor,
    options: AppOptions,
) -> Box<dyn eframe::App> {
    let app = ui::ForensicApp::new(cc, service, executor, options);
    Box::new(app)
}
