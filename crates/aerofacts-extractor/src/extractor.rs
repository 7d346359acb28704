//! The LlmExtractor adapter

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_response;
use crate::prompt::PromptBuilder;
use aerofacts_domain::traits::{FactExtractor, LlmProvider};
use aerofacts_domain::{EnginePosition, RawFacts};
use tracing::{debug, warn};

/// Extracts per-engine facts from ad text via an LLM provider.
///
/// Implements the infallible `FactExtractor` contract: every internal
/// failure (provider error, unparseable response, oversized ad) is logged
/// and degrades to an empty extraction.
pub struct LlmExtractor<L: LlmProvider> {
    provider: L,
    config: ExtractorConfig,
}

impl<L> LlmExtractor<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new extractor over the given provider
    pub fn new(provider: L, config: ExtractorConfig) -> Self {
        Self { provider, config }
    }

    fn try_extract(
        &self,
        ad_text: &str,
        ad_id: &str,
    ) -> Result<Vec<(EnginePosition, RawFacts)>, ExtractorError> {
        if ad_text.len() > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(
                ad_text.len(),
                self.config.max_text_length,
            ));
        }

        let prompt = PromptBuilder::new(ad_text);
        let user = prompt.user();
        debug!(ad_id, user_len = user.len(), "calling extraction provider");

        let response = self
            .provider
            .generate(prompt.system(), &user)
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!(ad_id, response_len = response.len(), "provider responded");

        let mut engines = parse_response(&response)?;
        engines.sort_by_key(|(position, _)| *position);
        self.dedup_airframe_hours(ad_text, &mut engines);
        Ok(engines)
    }

    /// Airframe hours are a per-ad figure, not a per-engine one. When both
    /// sides carry a value, LEFT's copy is kept as the shared figure and
    /// RIGHT's is dropped; when neither side has one, the regex fallback
    /// scans the ad and the result lands on LEFT.
    fn dedup_airframe_hours(
        &self,
        ad_text: &str,
        engines: &mut [(EnginePosition, RawFacts)],
    ) {
        let have_left = engines
            .iter()
            .any(|(p, f)| *p == EnginePosition::Left && f.total_airframe_hours.is_some());

        for (position, facts) in engines.iter_mut() {
            match position {
                EnginePosition::Left => {
                    if facts.total_airframe_hours.is_none() && self.config.airframe_hours_fallback {
                        facts.total_airframe_hours =
                            aerofacts_patterns::total_airframe_hours(ad_text);
                    }
                }
                EnginePosition::Right => {
                    if have_left {
                        facts.total_airframe_hours = None;
                    }
                }
            }
        }
    }
}

impl<L> FactExtractor for LlmExtractor<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    fn extract(&self, ad_text: &str, ad_id: &str) -> Vec<(EnginePosition, RawFacts)> {
        match self.try_extract(ad_text, ad_id) {
            Ok(engines) => engines,
            Err(e) => {
                warn!(ad_id, error = %e, "extraction failed, yielding no facts");
                Vec::new()
            }
        }
    }
}
