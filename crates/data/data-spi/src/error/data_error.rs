//! Data error types.

use thiserror::Error;

/// Errors raised while loading or preparing revenue data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// Input file does not exist
    #[error("Input file not found: {0}")]
    FileNotFound(String),

    /// Input file exists but could not be read
    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    /// Input is not a JSON array of chunks
    #[error("JSON error: {0}")]
    JsonError(String),

    /// A monthly summary chunk lacks a required field
    #[error("Chunk {index} is missing field '{field}'")]
    MissingField { index: usize, field: String },

    /// Month string is not `YYYY-MM` or `YYYY-MM-DD`
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Same month appears more than once
    #[error("Duplicate month: {0}")]
    DuplicateMonth(String),

    /// Revenue is negative or not a finite number
    #[error("Invalid revenue for {month}: {value}")]
    InvalidValue { month: String, value: f64 },

    /// Too few observations to build a series
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
