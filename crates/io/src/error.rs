//! Load and render error types.

use std::path::PathBuf;

use statera_core::MappingError;
use statera_shared::AppError;
use thiserror::Error;

/// Errors that can occur while loading inputs.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be opened or read.
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV.
    #[error("Malformed CSV at line {line}: {message}")]
    Csv {
        /// 1-based line number.
        line: u64,
        /// Parser message.
        message: String,
    },

    /// No header matched a required column.
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// Amount cell is not a decimal number.
    #[error("Invalid amount {value:?} in column {column} at line {line}")]
    InvalidAmount {
        /// 1-based line number.
        line: u64,
        /// Normalised column name.
        column: String,
        /// Raw cell text.
        value: String,
    },

    /// Mapping document is malformed.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        Self::Csv {
            line,
            message: err.to_string(),
        }
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Mapping(e) => Self::Mapping(e.to_string()),
            LoadError::Io { .. } => Self::Io(err.to_string()),
            other => Self::Input(other.to_string()),
        }
    }
}

/// Errors that can occur while rendering or writing a report.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writer failed.
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer failed.
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failed.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        Self::Output(err.to_string())
    }
}
