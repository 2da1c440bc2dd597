pub mod analysis;
pub mod currency;
pub mod ticker;

// Re-export main domain types
pub use analysis::{AnalysisRequestParams, AnalysisResult, Mode, Sensitivity};
pub use currency::Currency;
pub use ticker::{TickerCatalog, TickerEntry, TickerSymbol};
