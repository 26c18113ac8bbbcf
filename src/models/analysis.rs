//! Comfort analysis over a generated sequence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DailyObservation;
use crate::forecast::round_half_up;
use crate::{ClimateError, Result};

/// Overall recommendation for a forecast period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationTier {
    /// Overall score above 80
    Excellent,
    /// Above 60
    Good,
    /// Above 40
    Moderate,
    Challenging,
}

impl RecommendationTier {
    #[must_use]
    pub fn from_score(overall_score: i32) -> Self {
        if overall_score > 80 {
            RecommendationTier::Excellent
        } else if overall_score > 60 {
            RecommendationTier::Good
        } else if overall_score > 40 {
            RecommendationTier::Moderate
        } else {
            RecommendationTier::Challenging
        }
    }

    #[must_use]
    pub fn recommendation(self) -> &'static str {
        match self {
            RecommendationTier::Excellent => {
                "Excellent weather conditions for outdoor activities!"
            }
            RecommendationTier::Good => "Good weather conditions, suitable for most activities.",
            RecommendationTier::Moderate => {
                "Moderate conditions, some activities may be uncomfortable."
            }
            RecommendationTier::Challenging => {
                "Challenging weather conditions, limit outdoor activities."
            }
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecommendationTier::Excellent => "Excellent",
            RecommendationTier::Good => "Good",
            RecommendationTier::Moderate => "Moderate",
            RecommendationTier::Challenging => "Challenging",
        };
        f.write_str(label)
    }
}

/// Number of days falling into each comfort bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComfortDistribution {
    /// 80-100
    pub excellent: usize,
    /// 60-79
    pub good: usize,
    /// 40-59
    pub moderate: usize,
    /// 0-39
    pub poor: usize,
}

impl ComfortDistribution {
    #[must_use]
    pub fn from_observations(observations: &[DailyObservation]) -> Self {
        let mut distribution = Self::default();
        for day in observations {
            distribution.record(day.comfort_index());
        }
        distribution
    }

    /// Count one day with the given comfort index
    pub fn record(&mut self, comfort_index: u8) {
        match comfort_index {
            80.. => self.excellent += 1,
            60..=79 => self.good += 1,
            40..=59 => self.moderate += 1,
            _ => self.poor += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.excellent + self.good + self.moderate + self.poor
    }
}

/// Rounded means of a forecast sequence and the resulting tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComfortAnalysis {
    pub overall_score: i32,
    pub mean_temperature: i32,
    pub mean_humidity: i32,
    pub mean_wind: i32,
    pub recommendation_tier: RecommendationTier,
    pub recommendation: String,
    pub distribution: ComfortDistribution,
}

impl ComfortAnalysis {
    /// Summarize a sequence of observations.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty sequence, which has no mean.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_observations(observations: &[DailyObservation]) -> Result<Self> {
        if observations.is_empty() {
            return Err(ClimateError::invalid_argument(
                "Cannot analyze an empty forecast",
            ));
        }

        let count = observations.len() as f64;
        let mean = |value: fn(&DailyObservation) -> i32| -> i32 {
            let sum: i64 = observations.iter().map(|o| i64::from(value(o))).sum();
            round_half_up(sum as f64 / count)
        };

        let overall_score = mean(|o: &DailyObservation| i32::from(o.comfort_index()));
        let recommendation_tier = RecommendationTier::from_score(overall_score);

        Ok(Self {
            overall_score,
            mean_temperature: mean(DailyObservation::temperature_c),
            mean_humidity: mean(DailyObservation::humidity_pct),
            mean_wind: mean(DailyObservation::wind_kmh),
            recommendation_tier,
            recommendation: recommendation_tier.recommendation().to_string(),
            distribution: ComfortDistribution::from_observations(observations),
        })
    }
}
