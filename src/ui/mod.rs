// User interface components
pub mod app;
mod app_async;
pub mod config;
pub mod counter;
pub mod plot_layers;
pub mod styles;
mod ui_overlays;
pub mod ui_panels;
pub mod ui_plot_view;
mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::{AppOptions, ForensicApp};
pub use config::UI_CONFIG;
