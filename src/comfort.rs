//! Comfort index scoring
//!
//! A day starts at 100 points and loses a fixed penalty for each of
//! temperature, humidity and wind that falls outside its comfortable band.
//! Only the harshest matching band of each factor applies.

use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_SCORE: u8 = 100;

fn temperature_penalty(temperature_c: i32) -> u8 {
    if !(15..=35).contains(&temperature_c) {
        30
    } else if !(20..=30).contains(&temperature_c) {
        15
    } else {
        0
    }
}

fn humidity_penalty(humidity_pct: i32) -> u8 {
    if !(20..=80).contains(&humidity_pct) {
        25
    } else if !(30..=70).contains(&humidity_pct) {
        10
    } else {
        0
    }
}

fn wind_penalty(wind_kmh: i32) -> u8 {
    if wind_kmh > 25 {
        20
    } else if wind_kmh > 15 {
        10
    } else if wind_kmh < 2 {
        5
    } else {
        0
    }
}

/// Score how pleasant a day is, from 0 (harsh) to 100 (ideal).
///
/// Total over every input: out-of-range readings are scored, not rejected.
#[must_use]
pub fn score(temperature_c: i32, humidity_pct: i32, wind_kmh: i32) -> u8 {
    let penalty = temperature_penalty(temperature_c)
        + humidity_penalty(humidity_pct)
        + wind_penalty(wind_kmh);
    MAX_SCORE.saturating_sub(penalty)
}

/// Five-band label for a single comfort score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComfortLevel {
    /// 80 and above
    Excellent,
    /// 70-79
    Comfortable,
    /// 50-69
    Moderate,
    /// 30-49
    Uncomfortable,
    /// Below 30
    Harsh,
}

impl ComfortLevel {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ComfortLevel::Excellent,
            70..=79 => ComfortLevel::Comfortable,
            50..=69 => ComfortLevel::Moderate,
            30..=49 => ComfortLevel::Uncomfortable,
            _ => ComfortLevel::Harsh,
        }
    }

    /// Activity advice shown next to the score
    #[must_use]
    pub fn advice(self) -> &'static [&'static str] {
        match self {
            ComfortLevel::Excellent => &[
                "Perfect day for outdoor activities",
                "Ideal conditions for hiking and sports",
                "Great weather for outdoor events",
                "Optimal for gardening and yard work",
            ],
            ComfortLevel::Comfortable => &[
                "Good conditions for outdoor activities",
                "Light clothing recommended",
                "Stay hydrated during extended outdoor time",
                "Consider sunscreen for prolonged exposure",
            ],
            ComfortLevel::Moderate => &[
                "Moderate outdoor conditions",
                "Dress in layers for comfort",
                "Monitor weather changes",
                "Consider indoor alternatives if sensitive",
            ],
            ComfortLevel::Uncomfortable => &[
                "Challenging outdoor conditions",
                "Limit outdoor activities",
                "Dress appropriately for conditions",
                "Consider indoor activities",
            ],
            ComfortLevel::Harsh => &[
                "Avoid outdoor activities if possible",
                "Stay indoors with climate control",
                "Monitor health conditions",
                "Check weather alerts regularly",
            ],
        }
    }
}

impl fmt::Display for ComfortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComfortLevel::Excellent => "Excellent",
            ComfortLevel::Comfortable => "Comfortable",
            ComfortLevel::Moderate => "Moderate",
            ComfortLevel::Uncomfortable => "Uncomfortable",
            ComfortLevel::Harsh => "Harsh",
        };
        f.write_str(label)
    }
}

/// A scored set of conditions together with its label
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComfortReading {
    pub temperature_c: i32,
    pub humidity_pct: i32,
    pub wind_kmh: i32,
    pub comfort_index: u8,
    pub level: ComfortLevel,
    pub advice: Vec<String>,
}

impl ComfortReading {
    #[must_use]
    pub fn evaluate(temperature_c: i32, humidity_pct: i32, wind_kmh: i32) -> Self {
        let comfort_index = score(temperature_c, humidity_pct, wind_kmh);
        let level = ComfortLevel::from_score(comfort_index);
        Self {
            temperature_c,
            humidity_pct,
            wind_kmh,
            comfort_index,
            level,
            advice: level.advice().iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(25, 50, 10, 100)]
    #[case(5, 50, 10, 70)]
    #[case(25, 10, 30, 55)]
    #[case(40, 90, 0, 40)]
    #[case(18, 50, 10, 85)]
    #[case(32, 75, 20, 65)]
    #[case(-40, 150, 200, 25)]
    fn test_score_bands(
        #[case] temperature: i32,
        #[case] humidity: i32,
        #[case] wind: i32,
        #[case] expected: u8,
    ) {
        assert_eq!(score(temperature, humidity, wind), expected);
    }

    #[rstest]
    #[case(15, 15)]
    #[case(14, 30)]
    #[case(20, 0)]
    #[case(30, 0)]
    #[case(31, 15)]
    #[case(35, 15)]
    #[case(36, 30)]
    fn test_temperature_band_edges(#[case] temperature: i32, #[case] penalty: u8) {
        assert_eq!(temperature_penalty(temperature), penalty);
    }

    #[rstest]
    #[case(19, 25)]
    #[case(20, 10)]
    #[case(29, 10)]
    #[case(30, 0)]
    #[case(70, 0)]
    #[case(71, 10)]
    #[case(80, 10)]
    #[case(81, 25)]
    fn test_humidity_band_edges(#[case] humidity: i32, #[case] penalty: u8) {
        assert_eq!(humidity_penalty(humidity), penalty);
    }

    #[rstest]
    #[case(1, 5)]
    #[case(2, 0)]
    #[case(15, 0)]
    #[case(16, 10)]
    #[case(25, 10)]
    #[case(26, 20)]
    fn test_wind_band_edges(#[case] wind: i32, #[case] penalty: u8) {
        assert_eq!(wind_penalty(wind), penalty);
    }

    #[test]
    fn test_score_is_bounded() {
        for temperature in (-20..=60).step_by(3) {
            for humidity in (0..=100).step_by(7) {
                for wind in 0..=40 {
                    assert!(score(temperature, humidity, wind) <= 100);
                }
            }
        }
    }

    #[rstest]
    #[case(100, ComfortLevel::Excellent)]
    #[case(80, ComfortLevel::Excellent)]
    #[case(79, ComfortLevel::Comfortable)]
    #[case(50, ComfortLevel::Moderate)]
    #[case(30, ComfortLevel::Uncomfortable)]
    #[case(29, ComfortLevel::Harsh)]
    #[case(0, ComfortLevel::Harsh)]
    fn test_comfort_level_from_score(#[case] score: u8, #[case] expected: ComfortLevel) {
        assert_eq!(ComfortLevel::from_score(score), expected);
    }

    #[test]
    fn test_reading_carries_level_and_advice() {
        let reading = ComfortReading::evaluate(5, 50, 10);
        assert_eq!(reading.comfort_index, 70);
        assert_eq!(reading.level, ComfortLevel::Comfortable);
        assert_eq!(reading.advice.len(), 4);
        assert_eq!(reading.advice[1], "Light clothing recommended");
    }
}
