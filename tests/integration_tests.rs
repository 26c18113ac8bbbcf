//! Integration tests for the Code4Climate CLI

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_code4climate"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help with the explicit flag
#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("code4climate"));
    assert!(stdout.contains("forecast"));
    assert!(stdout.contains("score"));
}

/// Test default CLI output shows the status banner
#[test]
fn test_default_output_shows_banner() {
    let output = run_cli(&[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Code4Climate"));
    assert!(stdout.contains("no external data source required"));
}

/// Test verbose output shows configuration details
#[test]
fn test_verbose_output_shows_config_details() {
    let output = run_cli(&["--verbose"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using config from"));
    assert!(stdout.contains("Forecast horizon"));
    assert!(stdout.contains("Log level"));
}

/// Test scoring a set of conditions from the command line
#[test]
fn test_score_command() {
    let output = run_cli(&["score", "--temperature", "5", "--humidity", "50", "--wind", "10"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Comfort index: 70 (Comfortable)"));
}

/// Test negative temperatures are accepted
#[test]
fn test_score_command_negative_temperature() {
    let output = run_cli(&["score", "--temperature", "-5", "--humidity", "10", "--wind", "30"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Comfort index: 25 (Harsh)"));
}

/// Test a seeded forecast is reproducible across runs
#[test]
fn test_forecast_is_reproducible_with_seed() {
    let args = [
        "forecast", "--location", "Delhi", "--start", "2024-01-01", "--seed", "42", "--format",
        "csv",
    ];
    let first = run_cli(&args);
    let second = run_cli(&args);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let stdout = String::from_utf8_lossy(&first.stdout);
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 91);
    assert!(rows[1].starts_with("2024-01-01,"));
    assert!(rows[90].starts_with("2024-03-30,"));
}

/// Test the text report
#[test]
fn test_forecast_text_report() {
    let output = run_cli(&[
        "forecast", "--location", "Mumbai", "--start", "2024-05-01", "--days", "14", "--seed", "1",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Location: Mumbai"));
    assert!(stdout.contains("Overall Comfort Index"));
    assert!(stdout.contains("Weather Predictions (First 10 days):"));
}

/// Test error handling for an invalid start date
#[test]
fn test_forecast_invalid_date_error() {
    let output = run_cli(&["forecast", "--location", "Delhi", "--start", "2024-13-40"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input"));
}

/// Test error handling for an empty location
#[test]
fn test_forecast_empty_location_error() {
    let output = run_cli(&["forecast", "--location", "", "--start", "2024-01-01"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Location cannot be empty"));
}

/// Test error handling for a zero-day horizon
#[test]
fn test_forecast_zero_days_error() {
    let output = run_cli(&[
        "forecast", "--location", "Delhi", "--start", "2024-01-01", "--days", "0",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least one day"));
}

/// Test error handling when the output file cannot be written
#[test]
fn test_forecast_unwritable_output_error() {
    let path = std::env::temp_dir()
        .join("code4climate-missing-dir")
        .join("report.csv");
    let output = run_cli(&[
        "forecast", "--location", "Delhi", "--start", "2024-01-01", "--days", "3",
        "--format", "csv", "--output", path.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File operation failed"));
}

/// Test the city listing
#[test]
fn test_cities_command() {
    let output = run_cli(&["cities"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.contains("Bangalore"));
}
