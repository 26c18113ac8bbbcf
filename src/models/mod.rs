//! Data models for the Code4Climate service
//!
//! This module contains the core domain models organized by concern:
//! - Observation: one synthetic day of weather and its comfort index
//! - Analysis: summary statistics over a generated sequence
//! - Location: the selectable city catalog

pub mod analysis;
pub mod location;
pub mod observation;

// Re-export all public types for convenient access
pub use analysis::{ComfortAnalysis, ComfortDistribution, RecommendationTier};
pub use location::City;
pub use observation::{Condition, DailyObservation, WeatherSample};
