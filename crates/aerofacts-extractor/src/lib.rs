//! Aerofacts Extractor
//!
//! Converts free-form aircraft-sale ad text into per-engine `RawFacts`
//! using an LLM behind the `LlmProvider` seam.
//!
//! # Overview
//!
//! ```text
//! Ad text → PromptBuilder → LLM → LEFT/RIGHT JSON → parser → RawFacts
//! ```
//!
//! The LLM is advisory input, not a contract: any internal failure - a
//! network error, a malformed response, an unexpected wire shape - is
//! logged and degrades to an empty extraction. The pipeline treats "no
//! facts for this ad" as a valid outcome and moves on.
//!
//! # Wire format
//!
//! The model must return a single JSON object with top-level `LEFT` and
//! `RIGHT` keys, each an object whose recognized keys are the `RawFacts`
//! attributes (`TotalAirframeHours`, `TimeSinceNew`, ...), with ISO-8601
//! dates, unquoted numbers, and `null` for unknowns. Unrecognized keys are
//! ignored; a field that fails to parse is treated as absent.
//!
//! # Example
//!
//! ```
//! use aerofacts_extractor::{ExtractorConfig, LlmExtractor};
//! use aerofacts_domain::traits::FactExtractor;
//! use aerofacts_llm::MockProvider;
//!
//! let provider = MockProvider::for_engines(
//!     r#"{"TimeSinceNew": 8467}"#,
//!     r#"{"TimeSinceNew": 8470}"#,
//! );
//! let extractor = LlmExtractor::new(provider, ExtractorConfig::default());
//! let engines = extractor.extract("Two TAY 611-8 engines...", "ad-1");
//! assert_eq!(engines.len(), 2);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::LlmExtractor;
pub use prompt::PromptBuilder;
