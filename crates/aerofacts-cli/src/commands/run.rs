//! The run command: input table -> extraction -> rules -> output workbook.

use crate::cli::RunArgs;
use crate::config::AerofactsConfig;
use crate::error::{CliError, Result};
use aerofacts_domain::traits::LlmProvider;
use aerofacts_domain::{Ad, EngineMetrics};
use aerofacts_extractor::LlmExtractor;
use aerofacts_io::{read_ads, write_metrics};
use aerofacts_llm::openai::API_KEY_ENV;
use aerofacts_llm::{MockProvider, OpenAiProvider};
use aerofacts_pipeline::{Assembler, AssemblyReport};
use std::fs;
use tracing::info;

/// Execute the run command.
pub fn execute_run(args: RunArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => AerofactsConfig::load(path)?,
        None => AerofactsConfig::default(),
    };
    if let Some(model) = &args.model {
        config.provider.model = model.clone();
    }

    let ads = read_ads(&args.input, args.sheet.as_deref())?;
    info!(ads = ads.len(), input = %args.input.display(), "loaded ad listing");

    let (records, report) = match &args.mock_response {
        Some(path) => {
            let canned = fs::read_to_string(path)?;
            info!(response = %path.display(), "running offline with a mock provider");
            run_pipeline(MockProvider::new(canned), &config, &ads)
        }
        None => {
            let api_key = std::env::var(API_KEY_ENV)
                .map_err(|_| CliError::Config(format!("{} is not set", API_KEY_ENV)))?;
            let provider = OpenAiProvider::new(
                config.provider.endpoint.as_str(),
                config.provider.model.as_str(),
                api_key,
            )?
            .with_max_retries(config.provider.max_retries);
            run_pipeline(provider, &config, &ads)
        }
    };

    write_metrics(&args.output, &ads, &records)?;

    info!(
        ads_processed = report.ads_processed,
        records_produced = report.records_produced,
        ads_without_facts = report.ads_without_facts,
        output = %args.output.display(),
        "run complete"
    );
    Ok(())
}

fn run_pipeline<L>(
    provider: L,
    config: &AerofactsConfig,
    ads: &[Ad],
) -> (Vec<EngineMetrics>, AssemblyReport)
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    let extractor = LlmExtractor::new(provider, config.extractor.clone());
    let assembler = Assembler::new(extractor, config.policy);
    assembler.run(ads)
}
