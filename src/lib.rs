//! `Code4Climate` - climate dashboard service
//!
//! This library provides the comfort index scoring, the synthetic forecast
//! generator and the export and HTTP surfaces the dashboard builds on.

pub mod api;
pub mod comfort;
pub mod config;
pub mod error;
pub mod export;
pub mod forecast;
pub mod logging;
pub mod models;
pub mod web;

// Re-export core types for public API
pub use comfort::{ComfortLevel, ComfortReading, score};
pub use config::ClimateConfig;
pub use error::ClimateError;
pub use export::ExportFormat;
pub use forecast::{ForecastReport, ForecastRequest, ForecastService, generate};
pub use models::{
    City, ComfortAnalysis, ComfortDistribution, Condition, DailyObservation, RecommendationTier,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ClimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
