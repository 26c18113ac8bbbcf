//! Daily observation model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::comfort;

/// Sky condition label attached to each synthetic day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
}

impl Condition {
    /// All labels in draw order
    pub const ALL: [Condition; 4] = [
        Condition::Sunny,
        Condition::PartlyCloudy,
        Condition::Cloudy,
        Condition::Rainy,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw weather values drawn for one day, before scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherSample {
    /// Temperature in Celsius
    pub temperature_c: i32,
    /// Relative humidity in percent
    pub humidity_pct: i32,
    /// Wind speed in km/h
    pub wind_kmh: i32,
    /// Precipitation amount in mm
    pub precipitation_mm: i32,
    pub condition: Condition,
    pub uv_index: i32,
    pub air_quality: i32,
}

/// One synthetic day. The comfort index is always derived from the
/// temperature, humidity and wind it was built with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyObservation {
    date: NaiveDate,
    temperature_c: i32,
    humidity_pct: i32,
    wind_kmh: i32,
    precipitation_mm: i32,
    #[serde(rename = "conditionLabel")]
    condition: Condition,
    comfort_index: u8,
    uv_index: i32,
    air_quality: i32,
}

impl DailyObservation {
    #[must_use]
    pub fn new(date: NaiveDate, sample: WeatherSample) -> Self {
        let comfort_index =
            comfort::score(sample.temperature_c, sample.humidity_pct, sample.wind_kmh);
        Self {
            date,
            temperature_c: sample.temperature_c,
            humidity_pct: sample.humidity_pct,
            wind_kmh: sample.wind_kmh,
            precipitation_mm: sample.precipitation_mm,
            condition: sample.condition,
            comfort_index,
            uv_index: sample.uv_index,
            air_quality: sample.air_quality,
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn temperature_c(&self) -> i32 {
        self.temperature_c
    }

    #[must_use]
    pub fn humidity_pct(&self) -> i32 {
        self.humidity_pct
    }

    #[must_use]
    pub fn wind_kmh(&self) -> i32 {
        self.wind_kmh
    }

    #[must_use]
    pub fn precipitation_mm(&self) -> i32 {
        self.precipitation_mm
    }

    #[must_use]
    pub fn condition(&self) -> Condition {
        self.condition
    }

    #[must_use]
    pub fn comfort_index(&self) -> u8 {
        self.comfort_index
    }

    #[must_use]
    pub fn uv_index(&self) -> i32 {
        self.uv_index
    }

    #[must_use]
    pub fn air_quality(&self) -> i32 {
        self.air_quality
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature_c)
    }

    /// One-line summary used by the text report
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {}, {}% humidity, {}% comfort",
            self.date,
            self.format_temperature(),
            self.humidity_pct,
            self.comfort_index
        )
    }
}
