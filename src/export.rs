//! Forecast report export
//!
//! Renders a [`ForecastReport`] as JSON, CSV or a short human-readable
//! report that lists the analysis and the first few days.

use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::forecast::ForecastReport;
use crate::{ClimateError, Result};

const CSV_HEADER: &str = "date,temperature_c,humidity_pct,wind_kmh,precipitation_mm,condition,comfort_index,uv_index,air_quality";

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Text,
}

impl ExportFormat {
    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Text => "text/plain; charset=utf-8",
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "txt",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ClimateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "text" | "txt" => Ok(ExportFormat::Text),
            other => Err(ClimateError::invalid_argument(format!(
                "Unknown export format '{other}'. Must be one of: json, csv, text"
            ))),
        }
    }
}

/// Suggested download file name, e.g. `weather-prediction-delhi-2024-01-01.csv`
#[must_use]
pub fn file_name(report: &ForecastReport, format: ExportFormat) -> String {
    let slug: String = report
        .location
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!(
        "weather-prediction-{}-{}.{}",
        slug.trim_matches('-'),
        report.start_date,
        format.extension()
    )
}

/// Render a report in the requested format
pub fn render(report: &ForecastReport, format: ExportFormat, preview_days: usize) -> Result<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ExportFormat::Csv => render_csv(report),
        ExportFormat::Text => render_text(report, preview_days),
    }
}

/// Write a rendered report to `path`, replacing any existing file
pub fn write_report(path: &Path, rendered: &str) -> Result<()> {
    std::fs::write(path, rendered)?;
    Ok(())
}

fn render_csv(report: &ForecastReport) -> Result<String> {
    let mut out = String::with_capacity(64 * (report.observations.len() + 1));
    let fmt_err = |e: std::fmt::Error| ClimateError::export(e.to_string());

    writeln!(out, "{CSV_HEADER}").map_err(fmt_err)?;
    for day in &report.observations {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            day.date(),
            day.temperature_c(),
            day.humidity_pct(),
            day.wind_kmh(),
            day.precipitation_mm(),
            day.condition(),
            day.comfort_index(),
            day.uv_index(),
            day.air_quality()
        )
        .map_err(fmt_err)?;
    }
    Ok(out)
}

fn render_text(report: &ForecastReport, preview_days: usize) -> Result<String> {
    let analysis = &report.analysis;
    let mut out = String::new();
    let fmt_err = |e: std::fmt::Error| ClimateError::export(e.to_string());

    writeln!(out, "Code4Climate Weather Prediction Report").map_err(fmt_err)?;
    writeln!(out).map_err(fmt_err)?;
    writeln!(out, "Location: {}", report.location).map_err(fmt_err)?;
    writeln!(
        out,
        "Period: {} ({} days, seed {})",
        report.start_date, report.horizon_days, report.seed
    )
    .map_err(fmt_err)?;
    writeln!(out).map_err(fmt_err)?;
    writeln!(out, "Comfort Analysis:").map_err(fmt_err)?;
    writeln!(out, "Overall Comfort Index: {}%", analysis.overall_score).map_err(fmt_err)?;
    writeln!(out, "Average Temperature: {}°C", analysis.mean_temperature).map_err(fmt_err)?;
    writeln!(out, "Average Humidity: {}%", analysis.mean_humidity).map_err(fmt_err)?;
    writeln!(out, "Average Wind Speed: {} km/h", analysis.mean_wind).map_err(fmt_err)?;
    writeln!(
        out,
        "Recommendation ({}): {}",
        analysis.recommendation_tier, analysis.recommendation
    )
    .map_err(fmt_err)?;
    let distribution = &analysis.distribution;
    writeln!(
        out,
        "Comfort Distribution: {} excellent, {} good, {} moderate, {} poor",
        distribution.excellent, distribution.good, distribution.moderate, distribution.poor
    )
    .map_err(fmt_err)?;

    let preview = report.chart_window(preview_days);
    if !preview.is_empty() {
        writeln!(out).map_err(fmt_err)?;
        writeln!(out, "Weather Predictions (First {} days):", preview.len()).map_err(fmt_err)?;
        for day in preview {
            writeln!(out, "{}", day.summary_line()).map_err(fmt_err)?;
        }
    }

    Ok(out)
}
