//! Image description stage: multimodal model call.

use crate::error::PipelineError;
use crate::llm::{generate_with_timeout, ImageInput, LlmProvider, LlmRequest};
use crate::types::AUTH_ERROR_MESSAGE;
use std::fmt;

/// Result of the description stage. Failures are values, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionOutcome {
    Described(String),
    AuthenticationFailed,
    Failed(String),
}

impl From<PipelineError> for DescriptionOutcome {
    fn from(err: PipelineError) -> Self {
        if err.is_authentication() {
            DescriptionOutcome::AuthenticationFailed
        } else {
            DescriptionOutcome::Failed(err.to_string())
        }
    }
}

impl fmt::Display for DescriptionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptionOutcome::Described(text) => f.write_str(text),
            DescriptionOutcome::AuthenticationFailed => f.write_str(AUTH_ERROR_MESSAGE),
            DescriptionOutcome::Failed(message) => {
                write!(f, "Error generating text from image: {message}")
            }
        }
    }
}

/// Asks the vision model to describe an image.
pub struct Describer<'a> {
    provider: &'a dyn LlmProvider,
    model: &'a str,
    default_prompt: &'a str,
}

impl<'a> Describer<'a> {
    pub fn new(provider: &'a dyn LlmProvider, model: &'a str, default_prompt: &'a str) -> Self {
        Self {
            provider,
            model,
            default_prompt,
        }
    }

    /// Describe `image`. A blank or missing `prompt` falls back to the
    /// default instruction.
    pub async fn describe(&self, image: ImageInput, prompt: Option<&str>) -> DescriptionOutcome {
        let prompt = prompt
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(self.default_prompt);
        let request = LlmRequest::describe_image(self.model, image, prompt);

        match generate_with_timeout(self.provider, &request, "describe").await {
            Ok(response) => {
                tracing::info!(
                    provider = self.provider.name(),
                    model = %response.model,
                    latency_ms = response.latency_ms,
                    tokens = ?response.tokens_used,
                    "Image described"
                );
                DescriptionOutcome::Described(response.text)
            }
            Err(e) => {
                tracing::warn!(provider = self.provider.name(), "Description failed: {e}");
                e.into()
            }
        }
    }
}
