//! LLM integration for chart description and report generation.
//!
//! Provides a provider abstraction over OpenAI-compatible backends (Groq,
//! OpenAI). Providers are created per request, bound to that request's key.

pub(crate) mod groq;
#[cfg(test)]
pub(crate) mod mock;
pub(crate) mod openai;
pub(crate) mod provider;

pub use provider::{
    generate_with_timeout, ApiKey, ContentPart, ImageInput, LlmProvider, LlmProviderFactory,
    LlmRequest, LlmResponse, Message, Role,
};
