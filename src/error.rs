use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the synchrony analysis
#[derive(Debug, Error)]
pub enum SynchronyError {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or header error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Date string that does not parse as day/month/year
    #[error("invalid date '{raw}': {source}")]
    Date {
        raw: String,
        source: chrono::ParseError,
    },

    /// Unexpected value in the Departure/Arrival column
    #[error("unknown season '{0}' (expected 'Arrival' or 'Departure')")]
    Season(String),

    /// Input file parsed but held no data rows
    #[error("input file {0} contains no observations")]
    EmptyDataset(PathBuf),

    /// Chart rendering error
    #[error("plot rendering failed: {0}")]
    Plot(String),
}

/// Type alias for Results using SynchronyError
pub type Result<T> = std::result::Result<T, SynchronyError>;
