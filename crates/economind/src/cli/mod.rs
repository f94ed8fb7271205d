//! Command implementations.

pub mod analyze;
pub mod config;
pub mod serve;

use anyhow::Context;
use economind_core::Config;
use std::path::Path;

/// Load the explicit config file if given, otherwise the default location.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load()?),
    }
}
