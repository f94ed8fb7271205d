//! Keyword gate deciding whether a description is in the app's domain.

use crate::config::AnalysisConfig;

/// Case-insensitive substring match against a configurable keyword list.
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    keywords: Vec<String>,
}

impl RelevanceFilter {
    /// Build a filter; keywords are lowercased once here.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(&config.keywords)
    }

    /// First keyword found in `description`, if any.
    pub fn matched_keyword(&self, description: &str) -> Option<&str> {
        let lowered = description.to_lowercase();
        self.keywords
            .iter()
            .find(|k| lowered.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn is_relevant(&self, description: &str) -> bool {
        self.matched_keyword(description).is_some()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for RelevanceFilter {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}
