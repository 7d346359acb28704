//! Configuration for the extractor

use serde::{Deserialize, Serialize};

/// Configuration for `LlmExtractor`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum ad text length (characters); longer ads are rejected before
    /// the provider is called
    pub max_text_length: usize,

    /// When the structured response carries no airframe hours at all, scan
    /// the ad text with the TTAF regex fallback and attach the result to
    /// the LEFT engine
    pub airframe_hours_fallback: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_text_length: 20_000,
            airframe_hours_fallback: true,
        }
    }
}
