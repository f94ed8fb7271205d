//! Report stage: text model turns an accepted description into a review.

use crate::error::PipelineError;
use crate::llm::{generate_with_timeout, LlmProvider, LlmRequest};
use crate::types::IRRELEVANT_IMAGE_MESSAGE;
use std::fmt;

/// Result of the report stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Reported(String),
    /// The relevance filter turned the description away
    Rejected,
    Failed(String),
}

impl From<PipelineError> for ReportOutcome {
    fn from(err: PipelineError) -> Self {
        ReportOutcome::Failed(err.to_string())
    }
}

impl fmt::Display for ReportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportOutcome::Reported(text) => f.write_str(text),
            ReportOutcome::Rejected => f.write_str(IRRELEVANT_IMAGE_MESSAGE),
            ReportOutcome::Failed(message) => write!(f, "Error generating report: {message}"),
        }
    }
}

/// Asks the text model for an econometrics report.
pub struct Reporter<'a> {
    provider: &'a dyn LlmProvider,
    model: &'a str,
    system_prompt: &'a str,
}

impl<'a> Reporter<'a> {
    pub fn new(provider: &'a dyn LlmProvider, model: &'a str, system_prompt: &'a str) -> Self {
        Self {
            provider,
            model,
            system_prompt,
        }
    }

    /// Generate a report for an already-accepted description.
    pub async fn report(&self, description: &str) -> ReportOutcome {
        let request = LlmRequest::write_report(self.model, self.system_prompt, description);

        match generate_with_timeout(self.provider, &request, "report").await {
            Ok(response) => {
                tracing::info!(
                    provider = self.provider.name(),
                    model = %response.model,
                    latency_ms = response.latency_ms,
                    tokens = ?response.tokens_used,
                    "Report generated"
                );
                ReportOutcome::Reported(response.text)
            }
            Err(e) => {
                tracing::warn!(provider = self.provider.name(), "Report failed: {e}");
                e.into()
            }
        }
    }
}
