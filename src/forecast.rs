//! Synthetic forecast generation
//!
//! Fabricates a daily weather sequence for a location: a per-city base
//! temperature, one full seasonal sine cycle over the horizon and uniform
//! noise. Every day is scored with [`crate::comfort::score`] and the whole
//! sequence is summarized into a [`ComfortAnalysis`].
//!
//! The random source is always passed in, so a seeded generator reproduces
//! the exact same sequence.

use chrono::{Days, NaiveDate};
use rand::{RngExt, SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::f64::consts::TAU;
use tracing::{debug, info};

use crate::models::{City, ComfortAnalysis, Condition, DailyObservation, WeatherSample};
use crate::{ClimateError, Result};

/// Default number of days in a generated forecast
pub const DEFAULT_HORIZON_DAYS: usize = 90;

/// Longest forecast a service accepts unless configured otherwise
pub const DEFAULT_MAX_HORIZON_DAYS: usize = 366;

/// Base temperature used when no table entry matches the location
pub const DEFAULT_BASE_TEMPERATURE: i32 = 26;

/// Searched in order; the first key contained in the location name wins.
const BASE_TEMPERATURES: [(&str, i32); 3] = [("delhi", 25), ("mumbai", 28), ("bangalore", 22)];

const SEASONAL_AMPLITUDE_C: f64 = 8.0;
const NOISE_SPAN_C: f64 = 10.0;

/// Round half up, so `-2.5` becomes `-2` and `2.5` becomes `3`.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Base temperature in Celsius for a free-text location name
#[must_use]
pub fn base_temperature(location: &str) -> i32 {
    let location = location.to_lowercase();
    BASE_TEMPERATURES
        .iter()
        .find(|(key, _)| location.contains(key))
        .map_or(DEFAULT_BASE_TEMPERATURE, |&(_, temperature)| temperature)
}

/// Parse a `YYYY-MM-DD` start date
pub fn parse_start_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| {
        ClimateError::invalid_argument(format!(
            "Start date '{input}' is not a valid YYYY-MM-DD date: {e}"
        ))
    })
}

fn draw_sample<R: RngExt + ?Sized>(rng: &mut R, base: i32, day: usize, horizon_days: usize) -> WeatherSample {
    #[allow(clippy::cast_precision_loss)]
    let phase = day as f64 / horizon_days as f64;
    let seasonal = (phase * TAU).sin() * SEASONAL_AMPLITUDE_C;
    let noise = (rng.random::<f64>() - 0.5) * NOISE_SPAN_C;
    let temperature_c = round_half_up(f64::from(base) + seasonal + noise);

    let humidity_pct = round_half_up(50.0 + rng.random::<f64>() * 40.0);
    let wind_kmh = round_half_up(5.0 + rng.random::<f64>() * 15.0);
    let precipitation_mm = round_half_up(rng.random::<f64>() * 20.0);
    let condition = Condition::ALL[rng.random_range(0..Condition::ALL.len())];
    let air_quality = round_half_up(50.0 + rng.random::<f64>() * 50.0);
    let uv_index = round_half_up(3.0 + rng.random::<f64>() * 8.0);

    WeatherSample {
        temperature_c,
        humidity_pct,
        wind_kmh,
        precipitation_mm,
        condition,
        uv_index,
        air_quality,
    }
}

/// Generate `horizon_days` consecutive synthetic days starting at `start`.
///
/// # Errors
///
/// Returns `InvalidArgument` when the horizon is zero or the last day would
/// fall outside the supported calendar range.
#[tracing::instrument(level = "debug", skip(rng))]
pub fn generate<R: RngExt + ?Sized>(
    location: &str,
    start: NaiveDate,
    horizon_days: usize,
    rng: &mut R,
) -> Result<Vec<DailyObservation>> {
    if horizon_days == 0 {
        return Err(ClimateError::invalid_argument(
            "Forecast horizon must be at least one day",
        ));
    }

    let out_of_range = || {
        ClimateError::invalid_argument(format!(
            "A {horizon_days}-day forecast starting {start} runs past the supported calendar"
        ))
    };
    let last_offset = u64::try_from(horizon_days - 1).map_err(|_| out_of_range())?;
    start
        .checked_add_days(Days::new(last_offset))
        .ok_or_else(out_of_range)?;

    let base = base_temperature(location);
    debug!(base, "Resolved base temperature");

    let observations = (0..horizon_days)
        .zip(start.iter_days())
        .map(|(day, date)| DailyObservation::new(date, draw_sample(rng, base, day, horizon_days)))
        .collect();

    Ok(observations)
}

/// Parameters of a single forecast request
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub location: String,
    pub start: NaiveDate,
    pub horizon_days: usize,
    /// Seed for the random source; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl ForecastRequest {
    #[must_use]
    pub fn new(location: impl Into<String>, start: NaiveDate) -> Self {
        Self {
            location: location.into(),
            start,
            horizon_days: DEFAULT_HORIZON_DAYS,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_horizon(mut self, horizon_days: usize) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A generated forecast with its analysis
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub location: String,
    pub start_date: NaiveDate,
    pub horizon_days: usize,
    /// Seed that reproduces this exact report
    pub seed: u64,
    pub base_temperature: i32,
    /// Map pin `[latitude, longitude]` when the location is a catalog city
    pub coordinates: Option<[f64; 2]>,
    pub observations: Vec<DailyObservation>,
    pub analysis: ComfortAnalysis,
}

impl ForecastReport {
    /// First `days` observations, as plotted by the dashboard charts
    #[must_use]
    pub fn chart_window(&self, days: usize) -> &[DailyObservation] {
        &self.observations[..days.min(self.observations.len())]
    }
}

/// Validates requests and runs the generator with a seeded random source
#[derive(Debug, Clone)]
pub struct ForecastService {
    max_horizon_days: usize,
}

impl ForecastService {
    #[must_use]
    pub fn new(max_horizon_days: usize) -> Self {
        Self { max_horizon_days }
    }

    /// Generate and analyze a forecast.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty location, a horizon of zero or
    /// one above the configured maximum.
    pub fn forecast(&self, request: &ForecastRequest) -> Result<ForecastReport> {
        let location = request.location.trim();
        if location.is_empty() {
            return Err(ClimateError::invalid_argument("Location cannot be empty"));
        }
        if request.horizon_days > self.max_horizon_days {
            return Err(ClimateError::invalid_argument(format!(
                "Forecast horizon of {} days exceeds the maximum of {}",
                request.horizon_days, self.max_horizon_days
            )));
        }

        let seed = request
            .seed
            .unwrap_or_else(|| rand::rng().random::<u64>());
        let mut rng = StdRng::seed_from_u64(seed);

        let observations = generate(location, request.start, request.horizon_days, &mut rng)?;
        let analysis = ComfortAnalysis::from_observations(&observations)?;

        info!(
            location,
            start = %request.start,
            days = request.horizon_days,
            seed,
            overall_score = analysis.overall_score,
            "Generated forecast"
        );

        Ok(ForecastReport {
            location: location.to_string(),
            start_date: request.start,
            horizon_days: request.horizon_days,
            seed,
            base_temperature: base_temperature(location),
            coordinates: City::find(location).map(|c| [c.latitude, c.longitude]),
            observations,
            analysis,
        })
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HORIZON_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comfort;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(2.5, 3)]
    #[case(2.4, 2)]
    #[case(-2.5, -2)]
    #[case(-2.6, -3)]
    #[case(0.0, 0)]
    fn test_round_half_up(#[case] value: f64, #[case] expected: i32) {
        assert_eq!(round_half_up(value), expected);
    }

    #[rstest]
    #[case("Delhi", 25)]
    #[case("NEW DELHI", 25)]
    #[case("mumbai suburbs", 28)]
    #[case("Bangalore", 22)]
    #[case("Chennai", 26)]
    #[case("", 26)]
    #[case("Mumbai to Delhi", 25)]
    fn test_base_temperature(#[case] location: &str, #[case] expected: i32) {
        assert_eq!(base_temperature(location), expected);
    }

    #[test]
    fn test_ninety_consecutive_days() {
        let mut rng = StdRng::seed_from_u64(7);
        let days = generate("Delhi", date(2024, 1, 1), 90, &mut rng).unwrap();

        assert_eq!(days.len(), 90);
        assert_eq!(days[0].date(), date(2024, 1, 1));
        assert_eq!(days[89].date(), date(2024, 3, 30));
        for pair in days.windows(2) {
            assert_eq!(pair[1].date(), pair[0].date().succ_opt().unwrap());
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let first = generate("Mumbai", date(2024, 6, 1), 90, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = generate("Mumbai", date(2024, 6, 1), 90, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_values_stay_in_draw_ranges() {
        let mut rng = StdRng::seed_from_u64(1234);
        let days = generate("Bangalore", date(2024, 1, 1), 365, &mut rng).unwrap();
        let base = base_temperature("Bangalore");

        for day in &days {
            assert!((base - 13..=base + 13).contains(&day.temperature_c()));
            assert!((50..=90).contains(&day.humidity_pct()));
            assert!((5..=20).contains(&day.wind_kmh()));
            assert!((0..=20).contains(&day.precipitation_mm()));
            assert!((50..=100).contains(&day.air_quality()));
            assert!((3..=11).contains(&day.uv_index()));
            assert_eq!(
                day.comfort_index(),
                comfort::score(day.temperature_c(), day.humidity_pct(), day.wind_kmh())
            );
        }
    }

    #[test]
    fn test_zero_horizon_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate("Delhi", date(2024, 1, 1), 0, &mut rng).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_calendar_overflow_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate("Delhi", NaiveDate::MAX, 2, &mut rng).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[rstest]
    #[case("2024-02-29", true)]
    #[case(" 2024-01-01 ", true)]
    #[case("2023-02-29", false)]
    #[case("01/02/2024", false)]
    #[case("", false)]
    fn test_parse_start_date(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(parse_start_date(input).is_ok(), valid);
    }

    #[test]
    fn test_service_reports_seed_and_analysis() {
        let service = ForecastService::default();
        let request = ForecastRequest::new("Delhi", date(2024, 1, 1)).with_seed(99);
        let report = service.forecast(&request).unwrap();

        assert_eq!(report.seed, 99);
        assert_eq!(report.horizon_days, DEFAULT_HORIZON_DAYS);
        assert_eq!(report.base_temperature, 25);
        assert_eq!(report.coordinates, Some([28.7041, 77.1025]));
        assert_eq!(report.chart_window(30).len(), 30);
        assert_eq!(report.chart_window(500).len(), 90);

        let sum: f64 = report
            .observations
            .iter()
            .map(|o| f64::from(o.comfort_index()))
            .sum();
        let mean = sum / 90.0;
        assert!((f64::from(report.analysis.overall_score) - mean).abs() <= 1.0);

        let again = service.forecast(&request).unwrap();
        assert_eq!(again.observations, report.observations);
    }

    #[test]
    fn test_service_draws_seed_when_absent() {
        let service = ForecastService::default();
        let request = ForecastRequest::new("Pune", date(2024, 1, 1)).with_horizon(5);
        let report = service.forecast(&request).unwrap();

        let replay = service
            .forecast(&request.clone().with_seed(report.seed))
            .unwrap();
        assert_eq!(replay.observations, report.observations);
    }

    #[test]
    fn test_default_service_accepts_max_horizon() {
        let request =
            ForecastRequest::new("Delhi", date(2024, 1, 1)).with_horizon(DEFAULT_MAX_HORIZON_DAYS);
        let report = ForecastService::default().forecast(&request).unwrap();
        assert_eq!(report.observations.len(), DEFAULT_MAX_HORIZON_DAYS);
    }

    #[rstest]
    #[case("   ", 10)]
    #[case("Delhi", DEFAULT_MAX_HORIZON_DAYS + 1)]
    #[case("Delhi", 0)]
    fn test_service_rejects_invalid_requests(#[case] location: &str, #[case] days: usize) {
        let service = ForecastService::default();
        let request = ForecastRequest::new(location, date(2024, 1, 1)).with_horizon(days);
        assert!(service.forecast(&request).unwrap_err().is_invalid_argument());
    }
}
