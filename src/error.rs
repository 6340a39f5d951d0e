//! Error types for forecast runs and their inputs/outputs

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while preparing, running or exporting a forecast
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Horizon is not one of the supported month counts
    #[error("Unsupported forecast horizon: {0} months. Must be one of 12, 24, 36, 48, 60")]
    UnsupportedHorizon(u32),

    /// A monthly figure overflowed or became NaN
    #[error("Non-finite {field} in simulation month {month}")]
    NonFiniteValue {
        /// Absolute simulation month (1-indexed)
        month: u32,
        /// Which figure went non-finite
        field: &'static str,
    },

    /// Request body or file could not be decoded
    #[error("Invalid forecast request: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
