//! Error types for data operations
//!
//! Provides unified error handling for table loading, decoding and
//! analysis. Malformed cells are never errors; they are coerced.

use thiserror::Error;

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File is too large to load
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    /// Too many rows to load
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// File is empty
    #[error("Empty file")]
    EmptyFile,

    /// No columns found in data
    #[error("No columns found")]
    NoColumns,

    /// Fewer than a header row plus one data row
    #[error("File contains no usable data ({rows} rows)")]
    InsufficientData { rows: usize },

    /// Axis refers to a header that is not in the table
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// File extension has no decoder
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Session operation before any table was loaded
    #[error("No table loaded")]
    NoTableLoaded,

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Settings file could not be read or written
    #[error("Settings error: {0}")]
    Settings(String),
}

impl DataError {
    /// Message suitable for showing to the person who picked the file
    pub fn user_message(&self) -> String {
        match self {
            DataError::InsufficientData { .. } | DataError::EmptyFile | DataError::NoColumns => {
                "File contains no usable data".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
