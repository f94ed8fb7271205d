//! EconoMind Core - chart description and econometrics report pipeline.
//!
//! Takes an image and a caller-supplied API key, asks a hosted multimodal
//! model to describe the image, and, if the description is about charts,
//! finance or similar, asks a text model for an econometrics report.
//!
//! # Architecture
//!
//! ```text
//! Key + Image → Encode → Describe (LLaVA) → Relevance gate → Report (Llama) → (description, report)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use economind_core::{Analyzer, Config, ImageSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), economind_core::ConfigError> {
//!     let analyzer = Analyzer::new(Config::load()?);
//!     let output = analyzer
//!         .analyze("gsk_...", &ImageSource::Path("chart.png".into()), None)
//!         .await;
//!     println!("{}\n\n{}", output.description, output.report);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, PipelineError};
pub use llm::{ApiKey, LlmProvider, LlmProviderFactory};
pub use pipeline::{Analyzer, ImageSource, RelevanceFilter};
pub use types::{AnalysisOutput, AnalysisStatus};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
