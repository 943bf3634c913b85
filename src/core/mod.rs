//! Core aggregation and export pipeline

pub mod aggregate;
pub mod config;
pub mod dates;
pub mod export;
pub mod log;
pub mod normalize;
pub mod project;
pub mod rates;
pub mod selection;
pub mod session;

// Re-export main types for cleaner imports
pub use rates::{DailyRates, FetchError, RateProvider, RateSet};
pub use selection::Selection;
pub use session::Session;
