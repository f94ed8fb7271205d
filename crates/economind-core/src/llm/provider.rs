//! LLM provider trait and request/response types.
//!
//! Defines the interface that all chat-completion providers implement, the
//! per-request credential, and the factory that binds a provider to it.

use crate::config::LlmConfig;
use crate::error::PipelineError;
use async_trait::async_trait;
use base64::Engine;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Caller-supplied API key, scoped to a single request.
///
/// Never persisted, and redacted from `Debug` output so it cannot leak into
/// logs.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Accept a raw key, rejecting blank input.
    pub fn new(raw: &str) -> Result<Self, PipelineError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(PipelineError::Authentication {
                message: "API key is empty".to_string(),
            });
        }
        Ok(Self(key.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Base64-encoded image ready to send to an LLM API.
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type used in the data URL
    pub media_type: String,
}

impl ImageInput {
    /// Encode raw bytes. The hosted vision endpoint is always told the
    /// payload is JPEG, whatever the actual container format.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: "image/jpeg".to_string(),
        }
    }

    /// Return a data URL suitable for OpenAI-style APIs.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

/// Chat role of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

/// One piece of message content.
#[derive(Debug, Clone)]
pub enum ContentPart {
    Text(String),
    Image(ImageInput),
}

/// A chat message made of one or more content parts.
#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub parts: Vec<ContentPart>,
}

impl Message {
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![ContentPart::Text(text.into())],
        }
    }
}

/// A provider-neutral chat completion request.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// Model identifier
    pub model: String,
    /// Conversation to complete
    pub messages: Vec<Message>,
}

impl LlmRequest {
    /// Build a description request: one user message carrying the
    /// instruction followed by the image.
    pub fn describe_image(model: &str, image: ImageInput, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![Message {
                role: Role::User,
                parts: vec![
                    ContentPart::Text(prompt.to_string()),
                    ContentPart::Image(image),
                ],
            }],
        }
    }

    /// Build a report request from a system instruction and an image
    /// description.
    pub fn write_report(model: &str, system_prompt: &str, description: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                Message::text(Role::System, system_prompt),
                Message::text(Role::User, description),
            ],
        }
    }
}

/// The response from an LLM call.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Generated text
    pub text: String,
    /// Model identifier used
    pub model: String,
    /// Number of tokens used (input + output), if reported
    pub tokens_used: Option<u32>,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Trait that all LLM providers implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Arc<dyn LlmProvider>` for dynamic dispatch).
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging (e.g., "groq", "openai").
    fn name(&self) -> &str;

    /// Run one chat completion.
    ///
    /// A rejected credential must be reported as
    /// [`PipelineError::Authentication`].
    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, PipelineError>;

    /// Per-request timeout for this provider.
    fn timeout(&self) -> Duration;
}

/// Run `generate`, giving up after the provider's timeout.
///
/// `stage` names the pipeline step in the resulting timeout error.
pub async fn generate_with_timeout(
    provider: &dyn LlmProvider,
    request: &LlmRequest,
    stage: &str,
) -> Result<LlmResponse, PipelineError> {
    let timeout = provider.timeout();
    match tokio::time::timeout(timeout, provider.generate(request)).await {
        Ok(result) => result,
        Err(_) => Err(PipelineError::Timeout {
            stage: stage.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }),
    }
}

/// Factory that binds a provider to a request's credential.
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create the configured provider for one request.
    ///
    /// # Arguments
    /// * `config` - The full LLM config section
    /// * `api_key` - Credential for this request only
    pub fn create(
        config: &LlmConfig,
        api_key: &ApiKey,
    ) -> Result<Arc<dyn LlmProvider>, PipelineError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        match config.provider.as_str() {
            "groq" => Ok(Arc::new(super::groq::GroqProvider::new(
                &config.groq.endpoint,
                api_key,
                timeout,
            )?)),
            "openai" => Ok(Arc::new(super::openai::OpenAiProvider::new(
                "OpenAI",
                &config.openai.endpoint,
                api_key,
                timeout,
            )?)),
            other => Err(PipelineError::Llm {
                message: format!("Unknown LLM provider: {other}"),
                status_code: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    #[test]
    fn test_image_input_round_trips() {
        let bytes: Vec<u8> = (0..=255u8).chain([0, 0, 255]).collect();
        let input = ImageInput::from_bytes(&bytes);
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&input.data)
            .unwrap();
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_image_input_empty_bytes() {
        let input = ImageInput::from_bytes(&[]);
        assert_eq!(input.data, "");
        assert_eq!(input.data_url(), "data:image/jpeg;base64,");
    }

    #[test]
    fn test_image_input_data_url() {
        let input = ImageInput::from_bytes(&[0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(input.data_url(), "data:image/jpeg;base64,iVBORw==");
    }

    #[test]
    fn test_describe_image_puts_prompt_before_image() {
        let image = ImageInput::from_bytes(&[1, 2, 3]);
        let request = LlmRequest::describe_image("llava", image, "Describe this image in detail.");
        assert_eq!(request.model, "llava");
        assert_eq!(request.messages.len(), 1);
        let message = &request.messages[0];
        assert_eq!(message.role, Role::User);
        assert!(matches!(&message.parts[0], ContentPart::Text(t) if t == "Describe this image in detail."));
        assert!(matches!(&message.parts[1], ContentPart::Image(_)));
    }

    #[test]
    fn test_write_report_has_system_then_user() {
        let request = LlmRequest::write_report("llama", "be an economist", "a bar chart");
        let roles: Vec<Role> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User]);
        assert!(matches!(&request.messages[1].parts[0], ContentPart::Text(t) if t == "a bar chart"));
    }

    #[test]
    fn test_api_key_rejects_blank() {
        let err = ApiKey::new("   ").unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn test_api_key_is_trimmed_and_redacted() {
        let key = ApiKey::new("  gsk_secret \n").unwrap();
        assert_eq!(key.expose(), "gsk_secret");
        assert!(!format!("{key:?}").contains("secret"));
    }

    #[test]
    fn test_factory_rejects_unknown_provider() {
        let mut config = LlmConfig::default();
        config.provider = "nope".to_string();
        let key = ApiKey::new("k").unwrap();
        let err = LlmProviderFactory::create(&config, &key).err().unwrap();
        assert!(err.to_string().contains("Unknown LLM provider"));
    }

    #[test]
    fn test_factory_builds_default_provider() {
        let key = ApiKey::new("gsk_test").unwrap();
        let provider = LlmProviderFactory::create(&LlmConfig::default(), &key).unwrap();
        assert_eq!(provider.name(), "groq");
        assert_eq!(provider.timeout(), Duration::from_secs(60));
    }
}
