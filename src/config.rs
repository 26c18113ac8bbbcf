//! Configuration management for the `Code4Climate` service
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::ClimateError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `Code4Climate` service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClimateConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Forecast generation limits
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Report export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_server_host")]
    pub host: String,
    /// TCP port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Forecast generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Horizon used when a request does not name one
    #[serde(default = "default_horizon_days")]
    pub default_horizon_days: usize,
    /// Largest horizon a request may ask for
    #[serde(default = "default_max_horizon_days")]
    pub max_horizon_days: usize,
}

/// Report export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Days listed in the text report
    #[serde(default = "default_preview_days")]
    pub preview_days: usize,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty, json or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_horizon_days() -> usize {
    crate::forecast::DEFAULT_HORIZON_DAYS
}

fn default_max_horizon_days() -> usize {
    crate::forecast::DEFAULT_MAX_HORIZON_DAYS
}

fn default_preview_days() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_horizon_days: default_horizon_days(),
            max_horizon_days: default_max_horizon_days(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            preview_days: default_preview_days(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ClimateConfig {
    /// Load configuration from `config_path`, or the default file location,
    /// overlaid with environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. CODE4CLIMATE_SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("CODE4CLIMATE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: ClimateConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("code4climate").join("config.toml"))
    }

    /// Apply default values to empty or zero configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.forecast.default_horizon_days == 0 {
            self.forecast.default_horizon_days = default_horizon_days();
        }
        if self.forecast.max_horizon_days == 0 {
            self.forecast.max_horizon_days = default_max_horizon_days();
        }
        if self.export.preview_days == 0 {
            self.export.preview_days = default_preview_days();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.forecast.max_horizon_days > 3660 {
            return Err(ClimateError::config(
                "Maximum forecast horizon cannot exceed 3660 days"
            ).into());
        }

        if self.forecast.default_horizon_days > self.forecast.max_horizon_days {
            return Err(ClimateError::config(format!(
                "Default forecast horizon ({}) cannot exceed the maximum ({})",
                self.forecast.default_horizon_days, self.forecast.max_horizon_days
            )).into());
        }

        if self.export.preview_days > 366 {
            return Err(ClimateError::config(
                "Report preview cannot exceed 366 days"
            ).into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ClimateError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json", "compact"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(ClimateError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        Ok(())
    }
}
