//! Sub-configuration structs with defaults matching the hosted Groq setup.

use serde::{Deserialize, Deserializer, Serialize};

/// Instruction sent with the image when the caller supplies no prompt.
pub const DEFAULT_DESCRIBE_PROMPT: &str = "Describe this image in detail.";

/// System instruction for the report model.
pub const DEFAULT_REPORT_SYSTEM_PROMPT: &str = "You are a professional econometrics. \
     Write a complete review and report about the scene depicted in this image.";

/// Domain terms that mark a description as in scope.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "econometrics",
    "finance",
    "marketing",
    "stock",
    "prediction",
    "chart",
    "graph",
    "time series",
];

/// LLM provider configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Active provider: "groq" or "openai"
    pub provider: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Groq (OpenAI-compatible) configuration
    #[serde(deserialize_with = "groq_overrides")]
    pub groq: ProviderConfig,

    /// OpenAI configuration
    #[serde(deserialize_with = "openai_overrides")]
    pub openai: ProviderConfig,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            timeout_ms: 60_000,
            groq: ProviderConfig::groq(),
            openai: ProviderConfig::openai(),
        }
    }
}

impl LlmConfig {
    /// Settings for the currently selected provider, if the name is known.
    pub fn active(&self) -> Option<&ProviderConfig> {
        match self.provider.as_str() {
            "groq" => Some(&self.groq),
            "openai" => Some(&self.openai),
            _ => None,
        }
    }
}

/// Endpoint and model names for one chat-completions backend.
///
/// The API key is deliberately absent: it arrives with each request. In a
/// config file every field is optional; missing ones keep the backend's
/// built-in value.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderConfig {
    /// API base URL (the `/chat/completions` path is appended)
    pub endpoint: String,

    /// Multimodal model used to describe the image
    pub vision_model: String,

    /// Text model used to write the report
    pub report_model: String,
}

impl ProviderConfig {
    pub fn groq() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            vision_model: "llava-v1.5-7b-4096-preview".to_string(),
            report_model: "llama-3.1-70b-versatile".to_string(),
        }
    }

    pub fn openai() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1".to_string(),
            vision_model: "gpt-4o-mini".to_string(),
            report_model: "gpt-4o".to_string(),
        }
    }
}

/// A `[llm.<provider>]` table as written, before defaults are filled in.
#[derive(Deserialize)]
struct ProviderOverrides {
    endpoint: Option<String>,
    vision_model: Option<String>,
    report_model: Option<String>,
}

impl ProviderOverrides {
    fn apply(self, base: ProviderConfig) -> ProviderConfig {
        ProviderConfig {
            endpoint: self.endpoint.unwrap_or(base.endpoint),
            vision_model: self.vision_model.unwrap_or(base.vision_model),
            report_model: self.report_model.unwrap_or(base.report_model),
        }
    }
}

fn groq_overrides<'de, D: Deserializer<'de>>(d: D) -> Result<ProviderConfig, D::Error> {
    Ok(ProviderOverrides::deserialize(d)?.apply(ProviderConfig::groq()))
}

fn openai_overrides<'de, D: Deserializer<'de>>(d: D) -> Result<ProviderConfig, D::Error> {
    Ok(ProviderOverrides::deserialize(d)?.apply(ProviderConfig::openai()))
}

/// Prompts and the relevance keyword list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Instruction sent with the image when none is supplied
    pub default_prompt: String,

    /// System role instruction for report generation
    pub report_system_prompt: String,

    /// Case-insensitive substrings; a description must contain one of them
    pub keywords: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_prompt: DEFAULT_DESCRIBE_PROMPT.to_string(),
            report_system_prompt: DEFAULT_REPORT_SYSTEM_PROMPT.to_string(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Web server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Maximum accepted upload size in megabytes
    pub max_upload_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7860,
            max_upload_mb: 20,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
