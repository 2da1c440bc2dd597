pub mod core;
pub mod messages;
pub mod state;

// Re-export key components
pub use core::{EXPLANATION_FAILED_TEXT, SessionEngine};
pub use messages::{Effect, RequestSeq, SessionAction};
pub use state::{DisplayedAnalysis, Notice, Overlay, RequestPhase, SessionState};
