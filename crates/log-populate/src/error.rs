//! Error types for the log populator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing log files.
#[derive(Error, Debug)]
pub enum PopulatorError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A line could not be appended to an output file.
    #[error("Failed to write to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
