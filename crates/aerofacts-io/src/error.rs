//! Error types for the spreadsheet boundary

use thiserror::Error;

/// Errors from reading ad tables or writing the output workbook
#[derive(Error, Debug)]
pub enum IoError {
    /// Input file could not be opened or parsed
    #[error("Failed to read '{path}': {reason}")]
    Read {
        /// Input path
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// A required column is missing from the input table
    #[error("Input table has no '{0}' column")]
    MissingColumn(String),

    /// Unsupported input file extension
    #[error("Unsupported input format: '{0}' (expected .xlsx, .xls, .ods or .csv)")]
    UnsupportedFormat(String),

    /// Output workbook could not be written
    #[error("Failed to write '{path}': {reason}")]
    Write {
        /// Output path
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
