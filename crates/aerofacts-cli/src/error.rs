//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input or output file error
    #[error(transparent)]
    Io(#[from] aerofacts_io::IoError),

    /// Provider setup error
    #[error("Provider error: {0}")]
    Provider(#[from] aerofacts_llm::LlmError),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    File(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
