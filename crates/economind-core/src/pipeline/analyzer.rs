//! Orchestrates one request: credential → description → relevance → report.

use super::describe::{DescriptionOutcome, Describer};
use super::encode::{ImageEncoder, ImageSource};
use super::relevance::RelevanceFilter;
use super::report::{ReportOutcome, Reporter};
use crate::config::{Config, ProviderConfig};
use crate::error::PipelineError;
use crate::llm::{ApiKey, LlmProvider, LlmProviderFactory};
use crate::types::{AnalysisOutput, AnalysisStatus, DESCRIPTION_HEADER, REPORT_HEADER};

/// Runs the description and report pipeline.
///
/// Holds only immutable configuration. Every call builds its own provider
/// from the caller's key, so one `Analyzer` can serve concurrent requests
/// carrying different credentials.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: Config,
    filter: RelevanceFilter,
}

impl Analyzer {
    pub fn new(config: Config) -> Self {
        let filter = RelevanceFilter::from_config(&config.analysis);
        Self { config, filter }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full pipeline with a caller-supplied key.
    ///
    /// Never fails: every failure is rendered into the returned pair.
    pub async fn analyze(
        &self,
        api_key: &str,
        image: &ImageSource,
        prompt: Option<&str>,
    ) -> AnalysisOutput {
        let provider = match ApiKey::new(api_key)
            .and_then(|key| LlmProviderFactory::create(&self.config.llm, &key))
        {
            Ok(provider) => provider,
            Err(e) => {
                tracing::warn!("Could not set up LLM client: {e}");
                return AnalysisOutput::authentication_failed();
            }
        };

        self.analyze_with(provider.as_ref(), image, prompt).await
    }

    /// Run the pipeline against an already-authenticated provider.
    pub async fn analyze_with(
        &self,
        provider: &dyn LlmProvider,
        image: &ImageSource,
        prompt: Option<&str>,
    ) -> AnalysisOutput {
        let models = self.models();

        let image = match ImageEncoder::encode(image).await {
            Ok(image) => image,
            Err(e) => {
                tracing::error!("{e}");
                return AnalysisOutput::halted(
                    AnalysisStatus::ImageUnreadable,
                    format!("Error reading image: {}", image_read_reason(&e)),
                );
            }
        };

        let describer = Describer::new(
            provider,
            &models.vision_model,
            &self.config.analysis.default_prompt,
        );
        let description = match describer.describe(image, prompt).await {
            DescriptionOutcome::Described(text) => text,
            DescriptionOutcome::AuthenticationFailed => {
                return AnalysisOutput::authentication_failed();
            }
            failed @ DescriptionOutcome::Failed(_) => {
                return AnalysisOutput::halted(
                    AnalysisStatus::DescriptionFailed,
                    failed.to_string(),
                );
            }
        };

        let report = match self.filter.matched_keyword(&description) {
            Some(keyword) => {
                tracing::debug!("Description matched keyword {keyword:?}");
                Reporter::new(
                    provider,
                    &models.report_model,
                    &self.config.analysis.report_system_prompt,
                )
                .report(&description)
                .await
            }
            None => {
                tracing::info!("Description matched no domain keyword, skipping report");
                ReportOutcome::Rejected
            }
        };

        let description = format!("{DESCRIPTION_HEADER}\n{description}");
        match report {
            ReportOutcome::Reported(text) => AnalysisOutput {
                description,
                report: format!("{REPORT_HEADER}\n{text}"),
                status: AnalysisStatus::Reported,
            },
            rejected @ ReportOutcome::Rejected => AnalysisOutput {
                description,
                report: rejected.to_string(),
                status: AnalysisStatus::Rejected,
            },
            failed @ ReportOutcome::Failed(_) => AnalysisOutput {
                description,
                report: failed.to_string(),
                status: AnalysisStatus::ReportFailed,
            },
        }
    }

    fn models(&self) -> &ProviderConfig {
        self.config.llm.active().unwrap_or(&self.config.llm.groq)
    }
}

fn image_read_reason(err: &PipelineError) -> String {
    match err {
        PipelineError::ImageRead { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
