//! Configuration management for EconoMind.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. Credentials never live here; they are supplied per request.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for EconoMind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider settings
    pub llm: LlmConfig,

    /// Prompts and relevance keywords
    pub analysis: AnalysisConfig,

    /// Web server settings
    pub server: ServerConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    ///
    /// A leading `~` in the path is expanded to the home directory.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_path(path);
        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.economind.economind/config.toml
    /// - Linux: ~/.config/economind/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\economind\config\config.toml
    ///
    /// Falls back to ~/.economind/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "economind", "economind")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".economind").join("config.toml")
            })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Expand `~` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::tilde(&path_str);
    PathBuf::from(expanded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.provider, "groq");
        assert_eq!(config.llm.timeout_ms, 60_000);
        assert_eq!(config.server.port, 7860);
        assert_eq!(config.analysis.keywords.len(), 8);
    }

    #[test]
    fn test_default_models() {
        let config = Config::default();
        let groq = config.llm.active().unwrap();
        assert_eq!(groq.vision_model, "llava-v1.5-7b-4096-preview");
        assert_eq!(groq.report_model, "llama-3.1-70b-versatile");
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[llm]"));
        assert!(toml.contains("[analysis]"));
        assert!(toml.contains("[server]"));
        assert!(!toml.contains("api_key"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[analysis]\nkeywords = [\"inflation\", \"GDP\"]\n\n[server]\nport = 9000\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.analysis.keywords, vec!["inflation", "GDP"]);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.analysis.default_prompt, DEFAULT_DESCRIBE_PROMPT);
    }

    #[test]
    fn test_partial_provider_table_keeps_model_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[llm.groq]\nendpoint = \"http://localhost:9\"\n\n[llm.openai]\nreport_model = \"gpt-4.1\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.llm.groq.endpoint, "http://localhost:9");
        assert_eq!(config.llm.groq.vision_model, "llava-v1.5-7b-4096-preview");
        assert_eq!(config.llm.groq.report_model, "llama-3.1-70b-versatile");
        assert_eq!(config.llm.openai.endpoint, "https://api.openai.com/v1");
        assert_eq!(config.llm.openai.vision_model, "gpt-4o-mini");
        assert_eq!(config.llm.openai.report_model, "gpt-4.1");
    }

    #[test]
    fn test_load_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[llm]\ntimeout_ms = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_unknown_provider_has_no_active_config() {
        let mut config = Config::default();
        config.llm.provider = "bedrock".to_string();
        assert!(config.llm.active().is_none());
    }
}
