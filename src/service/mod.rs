// Backend access: the service seam, its HTTP implementation and the task executor
pub mod client;
pub mod error;
pub mod executor;

pub use client::{AnalysisService, Endpoint, HttpAnalysisService, SharedService};
pub use error::ServiceError;
pub use executor::Executor;
