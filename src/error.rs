//! Error types for the bikeshare explorer
//!
//! This module provides structured error handling using thiserror. Invalid
//! menu input is never represented here: the prompt loop recovers from it
//! locally. Everything below aborts the session when it propagates to main.

use thiserror::Error;

/// Main error type for explorer operations
#[derive(Error, Debug)]
pub enum ExploreError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Backing CSV for the selected city is absent
    #[error("No data file for {city}: expected {path}")]
    MissingDataFile { city: String, path: String },

    /// Column not found in data
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Start Time cell that does not parse as a timestamp
    #[error("Invalid timestamp in Start Time column: '{value}'")]
    InvalidTimestamp { value: String },
}

/// Result type alias for explorer operations
pub type Result<T> = std::result::Result<T, ExploreError>;
