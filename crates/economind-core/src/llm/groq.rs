//! Groq provider (OpenAI-compatible API).
//!
//! Groq serves LLaVA and Llama behind the Chat Completions format, so this
//! delegates to `OpenAiProvider` with the Groq endpoint.

use super::openai::OpenAiProvider;
use super::provider::{ApiKey, LlmProvider, LlmRequest, LlmResponse};
use crate::error::PipelineError;
use async_trait::async_trait;
use std::time::Duration;

/// Groq provider wrapping an OpenAI-compatible endpoint.
pub struct GroqProvider {
    inner: OpenAiProvider,
}

impl GroqProvider {
    pub fn new(endpoint: &str, api_key: &ApiKey, timeout: Duration) -> Result<Self, PipelineError> {
        Ok(Self {
            inner: OpenAiProvider::new("Groq", endpoint, api_key, timeout)?,
        })
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, PipelineError> {
        self.inner.generate(request).await
    }

    fn timeout(&self) -> Duration {
        self.inner.timeout()
    }
}
