//! Error types for the extractor
//!
//! These never escape `LlmExtractor::extract` - the `FactExtractor`
//! contract is infallible - but they classify what went wrong for logging
//! and for unit tests of the parse path.

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Ad text exceeds the configured maximum length
    #[error("Ad text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Response is not the expected LEFT/RIGHT object shape
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
