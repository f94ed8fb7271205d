//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let Some(provider) = self.llm.active() else {
            return Err(ConfigError::ValidationError(format!(
                "llm.provider must be \"groq\" or \"openai\", got \"{}\"",
                self.llm.provider
            )));
        };
        if self.llm.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "llm.timeout_ms must be > 0".into(),
            ));
        }
        if provider.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "llm.{}.endpoint must not be empty",
                self.llm.provider
            )));
        }
        if provider.vision_model.trim().is_empty() || provider.report_model.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "llm.{} model names must not be empty",
                self.llm.provider
            )));
        }
        if self.analysis.keywords.is_empty() {
            return Err(ConfigError::ValidationError(
                "analysis.keywords must contain at least one keyword".into(),
            ));
        }
        if self.analysis.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "analysis.keywords must not contain blank entries".into(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be > 0".into(),
            ));
        }
        if self.server.max_upload_mb == 0 {
            return Err(ConfigError::ValidationError(
                "server.max_upload_mb must be > 0".into(),
            ));
        }
        Ok(())
    }
}
