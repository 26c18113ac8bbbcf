//! Error types and handling for the `Code4Climate` service

use thiserror::Error;

/// Main error type for the `Code4Climate` service
#[derive(Error, Debug)]
pub enum ClimateError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Rejected caller input (zero horizon, malformed date, unknown format)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Report rendering errors
    #[error("Export error: {message}")]
    Export { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ClimateError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new export error
    pub fn export<S: Into<String>>(message: S) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    /// True when the error was caused by the caller's input
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ClimateError::InvalidArgument { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ClimateError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            ClimateError::InvalidArgument { message } => {
                format!("Invalid input: {message}")
            }
            ClimateError::Export { .. } => {
                "Unable to export the forecast report.".to_string()
            }
            ClimateError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for ClimateError {
    fn from(err: serde_json::Error) -> Self {
        ClimateError::export(err.to_string())
    }
}
