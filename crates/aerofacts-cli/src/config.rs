//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use aerofacts_domain::LifecyclePolicy;
use aerofacts_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level CLI configuration.
///
/// Every section falls back to its defaults when absent, so a partial
/// config file (or none) is always usable. The provider API key is never
/// read from here; it comes from the `OPENAI_API_KEY` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AerofactsConfig {
    /// Engine lifecycle constants the rule engine computes against
    #[serde(default)]
    pub policy: LifecyclePolicy,

    /// LLM provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Extractor settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// LLM provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Model to request completions from
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Retry attempts per request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_endpoint() -> String {
    aerofacts_llm::openai::DEFAULT_ENDPOINT.to_string()
}

fn default_max_retries() -> u32 {
    aerofacts_llm::openai::DEFAULT_MAX_RETRIES
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            max_retries: default_max_retries(),
        }
    }
}

impl Default for AerofactsConfig {
    fn default() -> Self {
        Self {
            policy: LifecyclePolicy::default(),
            provider: ProviderConfig::default(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl AerofactsConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AerofactsConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<()> {
        self.policy.validate().map_err(CliError::Config)?;
        self.extractor.validate().map_err(CliError::Config)?;
        if self.provider.model.is_empty() {
            return Err(CliError::Config("provider.model must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AerofactsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.policy.tbo_hours, 8000);
        assert_eq!(config.provider.model, "gpt-4o-mini");
    }

    #[test]
    fn test_partial_file_uses_section_defaults() {
        let config: AerofactsConfig = toml::from_str(
            r#"
            [policy]
            tbo_hours = 6000
            midlife_hours = 3000
            annual_usage_hours = 400
            overhaul_calendar_years = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.policy.tbo_hours, 6000);
        assert_eq!(config.provider.model, "gpt-4o-mini");
        assert_eq!(config.extractor.max_text_length, 20_000);
    }

    #[test]
    fn test_load_rejects_invalid_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [policy]
            tbo_hours = 4000
            midlife_hours = 8000
            annual_usage_hours = 450
            overhaul_calendar_years = 20
            "#,
        )
        .unwrap();

        let result = AerofactsConfig::load(&path);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = AerofactsConfig::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(CliError::File(_))));
    }
}
