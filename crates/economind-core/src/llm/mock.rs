//! Scripted provider for exercising pipeline stages without a network.

use super::provider::{LlmProvider, LlmRequest, LlmResponse};
use crate::error::PipelineError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Replays a fixed queue of results, one per `generate` call, and records
/// every request it sees.
pub(crate) struct MockProvider {
    script: Mutex<VecDeque<Result<String, PipelineError>>>,
    requests: Arc<Mutex<Vec<LlmRequest>>>,
    delay: Option<Duration>,
    timeout: Duration,
}

impl MockProvider {
    pub(crate) fn scripted(script: Vec<Result<String, PipelineError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
            timeout: Duration::from_secs(60),
        }
    }

    pub(crate) fn replying(texts: &[&str]) -> Self {
        Self::scripted(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub(crate) fn with_delay(mut self, delay: Duration, timeout: Duration) -> Self {
        self.delay = Some(delay);
        self.timeout = timeout;
        self
    }

    /// Shared handle to the recorded requests (clone before moving the provider).
    pub(crate) fn requests_handle(&self) -> Arc<Mutex<Vec<LlmRequest>>> {
        self.requests.clone()
    }
}

pub(crate) fn llm_error(message: &str) -> PipelineError {
    PipelineError::Llm {
        message: message.to_string(),
        status_code: None,
    }
}

pub(crate) fn auth_error(message: &str) -> PipelineError {
    PipelineError::Authentication {
        message: message.to_string(),
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, PipelineError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(llm_error("mock script exhausted")));
        next.map(|text| LlmResponse {
            text,
            model: request.model.clone(),
            tokens_used: Some(42),
            latency_ms: 10,
        })
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
