//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::facts::RawFacts;
use crate::position::EnginePosition;

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (aerofacts-llm).
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for a standing-instructions / request pair.
    ///
    /// `system` carries the instructions that apply to every call (the
    /// extraction contract); `user` carries the per-call content (one ad).
    /// Providers that have no role separation may concatenate the two.
    fn generate(&self, system: &str, user: &str) -> Result<String, Self::Error>;
}

/// Trait for extracting per-engine facts from ad text
///
/// Implemented by the application layer (aerofacts-extractor).
///
/// The contract is deliberately infallible: an implementation that hits a
/// network error, a malformed response, or anything else internal must log
/// and return an empty vector. "No facts extracted" is a valid, non-fatal
/// outcome the pipeline handles by producing no records for the ad.
pub trait FactExtractor {
    /// Extract zero, one, or two per-engine fact sets from ad text.
    ///
    /// Each returned entry pairs an engine position with the facts found
    /// for it; a position appears at most once.
    fn extract(&self, ad_text: &str, ad_id: &str) -> Vec<(EnginePosition, RawFacts)>;
}
