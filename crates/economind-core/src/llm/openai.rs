//! OpenAI-compatible provider using the Chat Completions API.
//!
//! Images travel as data URLs inside the user message content array; plain
//! text messages use the string content form.

use super::provider::{ApiKey, ContentPart, LlmProvider, LlmRequest, LlmResponse, Message};
use crate::error::PipelineError;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Substring hosted OpenAI-compatible services put in the body when a key is rejected.
const INVALID_KEY_MARKER: &str = "Invalid API Key";

/// Provider for any endpoint speaking the OpenAI Chat Completions protocol.
pub struct OpenAiProvider {
    label: &'static str,
    auth_header: HeaderValue,
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl OpenAiProvider {
    /// Bind a client to `base_url` and the request's credential.
    ///
    /// `label` prefixes error messages ("OpenAI", "Groq").
    pub fn new(
        label: &'static str,
        base_url: &str,
        api_key: &ApiKey,
        timeout: Duration,
    ) -> Result<Self, PipelineError> {
        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", api_key.expose()))
            .map_err(|_| PipelineError::Authentication {
                message: "API key contains characters that cannot be sent in a header"
                    .to_string(),
            })?;
        auth_header.set_sensitive(true);

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| PipelineError::Llm {
                message: format!("Failed to build HTTP client: {e}"),
                status_code: None,
            })?;

        Ok(Self {
            label,
            auth_header,
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            timeout,
        })
    }
}

// --- Request types ---

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: ChatContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ChatContent {
    Text(String),
    Parts(Vec<ChatPart>),
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum ChatPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        let content = match message.parts.as_slice() {
            [ContentPart::Text(text)] => ChatContent::Text(text.clone()),
            parts => ChatContent::Parts(
                parts
                    .iter()
                    .map(|part| match part {
                        ContentPart::Text(text) => ChatPart::Text { text: text.clone() },
                        ContentPart::Image(image) => ChatPart::ImageUrl {
                            image_url: ImageUrl {
                                url: image.data_url(),
                            },
                        },
                    })
                    .collect(),
            ),
        };
        Self {
            role: message.role.as_str(),
            content,
        }
    }
}

// --- Response types ---

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    model: String,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull the human-readable message out of an error body, falling back to
/// the raw text.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

fn serialize_request(request: &LlmRequest) -> ChatRequest {
    ChatRequest {
        model: request.model.clone(),
        messages: request.messages.iter().map(ChatMessage::from).collect(),
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, PipelineError> {
        let start = Instant::now();
        let body = serialize_request(request);

        let resp = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.auth_header.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::Llm {
                message: format!("{} request failed: {e}", self.label),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let detail = error_detail(&text);
            if status == reqwest::StatusCode::UNAUTHORIZED || detail.contains(INVALID_KEY_MARKER) {
                return Err(PipelineError::Authentication { message: detail });
            }
            return Err(PipelineError::Llm {
                message: format!("{} HTTP {status}: {detail}", self.label),
                status_code: Some(status.as_u16()),
            });
        }

        let chat_resp: ChatResponse = resp.json().await.map_err(|e| PipelineError::Llm {
            message: format!("Failed to parse {} response: {e}", self.label),
            status_code: None,
        })?;

        let text = chat_resp
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| PipelineError::Llm {
                message: format!("{} returned no content", self.label),
                status_code: None,
            })?;

        Ok(LlmResponse {
            text,
            model: chat_resp.model,
            tokens_used: chat_resp.usage.map(|u| u.total_tokens),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
