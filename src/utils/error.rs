// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("The input file '{}' was not found. Please verify the path and file name.", .0.display())]
    SourceNotFound(PathBuf),

    #[error("CSV file is missing one or more required headers. Expected headers: {expected:?}. Found headers: {found:?}")]
    MissingColumns {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Malformed CSV input: {0}")]
    MalformedSource(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ExtractError {
    /// Maps a csv error raised while reading the header or a row.
    /// The csv error text already carries the record/line position.
    pub fn from_csv(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Utf8 { .. } | csv::ErrorKind::UnequalLengths { .. } => {
                ExtractError::MalformedSource(err.to_string())
            }
            _ => ExtractError::Unexpected(err.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
