//! Error types for the fixture harness.

use thiserror::Error;

/// Errors that can occur while loading or running fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture header.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A header error located in a fixture file.
    #[error("{path}:{line}: {message}")]
    Fixture {
        path: String,
        line: usize,
        message: String,
    },

    /// Error loading a fixture or failures file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// The fixture body could not be run.
    #[error("failed to run fixture: {message}")]
    Run { message: String },
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;
