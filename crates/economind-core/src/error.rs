//! Error types for the EconoMind pipeline.
//!
//! Config loading and the pipeline fail independently, so each gets its own
//! enum. Pipeline errors are organized by stage so the orchestrator can map
//! each failure site to the right user-facing message without inspecting
//! message text.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The image could not be read from disk
    #[error("Failed to read image {path}: {message}")]
    ImageRead { path: PathBuf, message: String },

    /// The credential was rejected (blank key, client construction, or HTTP 401)
    #[error("{message}")]
    Authentication { message: String },

    /// Any other remote model failure
    #[error("{message}")]
    Llm {
        message: String,
        status_code: Option<u16>,
    },

    /// Operation timed out
    #[error("Timeout in {stage} stage after {timeout_ms}ms")]
    Timeout { stage: String, timeout_ms: u64 },
}

impl PipelineError {
    /// Whether this error means the credential itself was rejected.
    pub fn is_authentication(&self) -> bool {
        matches!(self, PipelineError::Authentication { .. })
    }
}
