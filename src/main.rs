#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[allow(unused_imports)]
use forensic_lens::{
    AppOptions,
    Cli, // The struct from lib.rs
    Executor,
    HttpAnalysisService,
    SharedService,
    run_app, // The function from lib.rs
};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast; // <--- REQUIRED for .dyn_into()
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This keeps the WASM memory allocator from being stripped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

// The compiler still wants a main() for the binary even though 'start' is the entry point
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
fn init_web_logging() {
    console_error_panic_hook::set_once();

    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::Output::call(|record| {
            web_sys::console::log_1(&record.args().to_string().into());
        }))
        .apply();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    init_web_logging();
    log::info!("🚀 Forensic Lens starting in WASM mode...");

    // B. Backend client (browser build always uses the default base URL)
    let service: SharedService = std::sync::Arc::new(
        HttpAnalysisService::new(forensic_lens::config::SERVICE.default_api_base)
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
    );
    let executor = Executor::new();

    // C. Find the canvas element by ID
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document on window"))?;

    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or_else(|| JsValue::from_str("Failed to find canvas with id 'the_canvas_id'"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // D. Start the App
    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(run_app(cc, service, executor, AppOptions::default()))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
const NETWORK_WORKER_THREADS: usize = 2;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use eframe::NativeOptions;
    use std::sync::Arc;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Backend client and the runtime its requests run on
    let service: SharedService = Arc::new(
        HttpAnalysisService::new(&args.api_base)
            .with_context(|| format!("Bad --api-base '{}'", args.api_base))?,
    );
    let executor =
        Executor::new(NETWORK_WORKER_THREADS).context("Failed to create Tokio runtime")?;

    // D. Run Native App (no persistence_path: nothing survives a restart)
    let options = NativeOptions::default();
    let app_options = args.app_options();

    eframe::run_native(
        "Forensic Lens - Market Manipulation Scanner",
        options,
        Box::new(move |cc| Ok(run_app(cc, service, executor, app_options))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {}", e))
}
