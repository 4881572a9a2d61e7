//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Mapping template is missing required keys or is malformed.
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Trial balance input could not be read or parsed.
    #[error("Input error: {0}")]
    Input(String),

    /// Business rule violation (e.g., unmapped accounts under a deny policy).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Report could not be rendered or written.
    #[error("Output error: {0}")]
    Output(String),

    /// File system error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error (BSD `sysexits` values).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) | Self::Mapping(_) => 78,
            Self::Input(_) | Self::Validation(_) => 65,
            Self::Output(_) => 73,
            Self::Io(_) => 74,
            Self::Internal(_) => 70,
        }
    }

    /// Returns the stable error code used in logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Mapping(_) => "MAPPING_ERROR",
            Self::Input(_) => "INPUT_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Output(_) => "OUTPUT_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
