//! Code4Climate CLI - synthetic climate forecasts and comfort scoring.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use code4climate::{
    City, ClimateConfig, ClimateError, ComfortReading, ExportFormat, ForecastRequest,
    ForecastService, export, forecast::parse_start_date, logging, web,
};

/// Climate dashboard service with synthetic forecasts and comfort index scoring.
#[derive(Parser)]
#[command(name = "code4climate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging and configuration details.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single set of conditions.
    Score {
        /// Temperature in Celsius.
        #[arg(long, allow_negative_numbers = true)]
        temperature: i32,

        /// Relative humidity in percent.
        #[arg(long)]
        humidity: i32,

        /// Wind speed in km/h.
        #[arg(long)]
        wind: i32,
    },

    /// Generate a synthetic daily forecast.
    Forecast {
        /// Location name, free text or a catalog city.
        #[arg(short, long)]
        location: String,

        /// First day of the forecast (YYYY-MM-DD).
        #[arg(short, long)]
        start: String,

        /// Number of days; defaults to the configured horizon.
        #[arg(short, long)]
        days: Option<usize>,

        /// Random seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: json, csv or text.
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write the export to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the selectable cities.
    Cities,

    /// Run the HTTP API.
    Serve {
        /// Override the configured port.
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn print_status(config: &ClimateConfig, config_path: Option<&PathBuf>, verbose: bool) {
    println!("Code4Climate {}", code4climate::VERSION);
    println!("Synthetic climate forecasts, no external data source required.");
    println!("Run `code4climate --help` for available commands.");

    if verbose {
        let path = config_path
            .cloned()
            .or_else(ClimateConfig::get_config_path)
            .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
        println!();
        println!("Using config from: {path}");
        println!("Server address: {}:{}", config.server.host, config.server.port);
        println!(
            "Forecast horizon: {} days (max {})",
            config.forecast.default_horizon_days, config.forecast.max_horizon_days
        );
        println!("Log level: {}", config.logging.level);
    }
}

fn print_reading(reading: &ComfortReading) {
    println!(
        "Comfort index: {} ({})",
        reading.comfort_index, reading.level
    );
    for line in &reading.advice {
        println!("  - {line}");
    }
}

fn run_forecast(
    config: &ClimateConfig,
    location: &str,
    start: &str,
    days: Option<usize>,
    seed: Option<u64>,
    format: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let start = parse_start_date(start)?;
    let mut request = ForecastRequest::new(location, start)
        .with_horizon(days.unwrap_or(config.forecast.default_horizon_days));
    request.seed = seed;

    let service = ForecastService::new(config.forecast.max_horizon_days);
    let report = service.forecast(&request)?;
    let rendered = export::render(&report, format, config.export.preview_days)?;

    match output {
        Some(path) => {
            export::write_report(&path, &rendered)?;
            tracing::info!("Wrote report to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ClimateConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.verbose)?;

    match cli.command {
        None => print_status(&config, cli.config.as_ref(), cli.verbose),
        Some(Commands::Score {
            temperature,
            humidity,
            wind,
        }) => print_reading(&ComfortReading::evaluate(temperature, humidity, wind)),
        Some(Commands::Forecast {
            location,
            start,
            days,
            seed,
            format,
            output,
        }) => run_forecast(&config, &location, &start, days, seed, &format, output)?,
        Some(Commands::Cities) => {
            for city in City::all() {
                println!(
                    "{:<10} {}  ({})",
                    city.name,
                    city.format_coordinates(),
                    city.population
                );
            }
        }
        Some(Commands::Serve { port }) => {
            if let Some(port) = port {
                config.server.port = port;
            }
            web::run(&config).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ClimateError>() {
                Some(climate_err) => eprintln!("Error: {}", climate_err.user_message()),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
