//! Analysis pipeline components.
//!
//! - **encode**: Read image bytes and base64-encode them
//! - **describe**: Multimodal model call producing a description
//! - **relevance**: Keyword gate on the description
//! - **report**: Text model call producing the report
//! - **analyzer**: Orchestrates the stages for one request

pub mod analyzer;
pub mod describe;
pub mod encode;
pub mod relevance;
pub mod report;

// Re-exports for convenient access
pub use analyzer::Analyzer;
pub use describe::{DescriptionOutcome, Describer};
pub use encode::{ImageEncoder, ImageSource};
pub use relevance::RelevanceFilter;
pub use report::{ReportOutcome, Reporter};
