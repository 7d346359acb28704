//! Aerofacts LLM Provider Layer
//!
//! Pluggable implementations of the `LlmProvider` trait from
//! `aerofacts-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing and offline runs
//! - `OpenAiProvider`: chat-completions HTTP API integration
//!
//! # Examples
//!
//! ```
//! use aerofacts_llm::MockProvider;
//! use aerofacts_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::for_engines(r#"{"TimeSinceNew": 8467}"#, "{}");
//! let result = provider.generate("instructions", "ad text").unwrap();
//! assert!(result.contains("LEFT"));
//! ```

#![warn(missing_docs)]

pub mod openai;

use aerofacts_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing or rejected API credentials
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// What the mock answers for one specific ad
#[derive(Debug, Clone)]
enum CannedReply {
    Text(String),
    Fail,
}

/// Mock LLM provider for deterministic testing and offline runs
///
/// Answers every call with a fixed response, optionally overridden per ad:
/// replies are keyed by the `user` message (the ad content), since the
/// system instructions are the same for every call. No network involved.
///
/// # Examples
///
/// ```
/// use aerofacts_llm::MockProvider;
/// use aerofacts_domain::traits::LlmProvider;
///
/// let mut provider = MockProvider::new("default");
/// provider.add_reply("ad one", "response one");
/// assert_eq!(provider.generate("sys", "ad one").unwrap(), "response one");
/// assert_eq!(provider.generate("sys", "any other ad").unwrap(), "default");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    replies: Arc<Mutex<HashMap<String, CannedReply>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a provider with a fixed response for every call
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            replies: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider whose fixed response wraps the given per-engine
    /// field objects in the LEFT/RIGHT wire shape.
    ///
    /// `left` and `right` are JSON object bodies (or `null`), e.g.
    /// `r#"{"TimeSinceNew": 8467}"#.
    pub fn for_engines(left: &str, right: &str) -> Self {
        Self::new(format!(r#"{{"LEFT": {}, "RIGHT": {}}}"#, left, right))
    }

    /// Override the response for one specific ad (user message)
    pub fn add_reply(&mut self, user: impl Into<String>, response: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(user.into(), CannedReply::Text(response.into()));
    }

    /// Make calls for one specific ad (user message) fail
    pub fn add_failure(&mut self, user: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(user.into(), CannedReply::Fail);
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    /// Two engines, no facts
    fn default() -> Self {
        Self::for_engines("{}", "{}")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, _system: &str, user: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        match self.replies.lock().unwrap().get(user) {
            Some(CannedReply::Text(response)) => Ok(response.clone()),
            Some(CannedReply::Fail) => Err(LlmError::Other("Mock failure".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_fixed_response() {
        let provider = MockProvider::new("Test response");
        assert_eq!(
            provider.generate("sys", "any ad").unwrap(),
            "Test response"
        );
    }

    #[test]
    fn test_for_engines_wraps_wire_shape() {
        let provider = MockProvider::for_engines(r#"{"TimeSinceNew": 7000}"#, "null");
        assert_eq!(
            provider.generate("sys", "ad").unwrap(),
            r#"{"LEFT": {"TimeSinceNew": 7000}, "RIGHT": null}"#
        );
    }

    #[test]
    fn test_mock_provider_per_ad_replies() {
        let mut provider = MockProvider::default();
        provider.add_reply("hello", "world");

        assert_eq!(provider.generate("sys", "hello").unwrap(), "world");
        assert_eq!(
            provider.generate("sys", "unknown").unwrap(),
            r#"{"LEFT": {}, "RIGHT": {}}"#
        );
    }

    #[test]
    fn test_replies_ignore_system_instructions() {
        let mut provider = MockProvider::default();
        provider.add_reply("the ad", "matched");

        // Keyed by the user message only
        assert_eq!(provider.generate("one set of rules", "the ad").unwrap(), "matched");
        assert_eq!(provider.generate("other rules", "the ad").unwrap(), "matched");
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.generate("sys", "ad 1").unwrap();
        provider.generate("sys", "ad 2").unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_mock_provider_failure() {
        let mut provider = MockProvider::default();
        provider.add_failure("bad ad");

        let result = provider.generate("sys", "bad ad");
        assert!(matches!(result, Err(LlmError::Other(_))));
    }

    #[test]
    fn test_mock_provider_clone_shares_count() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("sys", "ad").unwrap();
        assert_eq!(provider2.call_count(), 1);
    }
}
