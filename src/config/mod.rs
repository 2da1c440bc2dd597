//! Configuration module for the forensic dashboard.

pub mod catalog;
pub mod presentation;
pub mod service;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use catalog::{DEFAULT_TICKER, POPULAR_TICKERS};
pub use presentation::PRESENTATION;
pub use service::SERVICE;
