//! Error handling module for the simt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the simt CLI application.
#[derive(Error, Debug)]
pub enum SimtError {
    /// Error when the configuration cannot be found or read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a source file does not parse cleanly.
    #[error("{path}: {count} parse error(s)")]
    Parse {
        /// File that was parsed
        path: String,
        /// Number of diagnostics reported
        count: usize,
    },
}

/// Result type alias using SimtError.
pub type Result<T> = std::result::Result<T, SimtError>;
