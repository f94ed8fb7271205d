//! Output types and user-facing messages for the analysis pipeline.

use serde::{Deserialize, Serialize};

/// Shown whenever the credential is rejected.
pub const AUTH_ERROR_MESSAGE: &str = "Please enter a correct API key and try again.";

/// Shown in place of a report when the description is out of domain.
pub const IRRELEVANT_IMAGE_MESSAGE: &str =
    "The image is not related to the area this app covers. Please input a relevant image.";

/// Header line prefixed to a successful description.
pub const DESCRIPTION_HEADER: &str = "--- Image Description ---";

/// Header line prefixed to a successful report.
pub const REPORT_HEADER: &str = "--- GroqLLaVAMA EconoMind Report ---";

/// How far the pipeline got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    /// Both model calls succeeded
    Reported,
    /// Description was out of domain; no report was requested
    Rejected,
    /// Credential missing or rejected
    AuthenticationFailed,
    /// Description call failed for another reason
    DescriptionFailed,
    /// Report call failed
    ReportFailed,
    /// The image could not be read
    ImageUnreadable,
}

/// The two display strings produced for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutput {
    /// Text for the "Image Description" box
    pub description: String,

    /// Text for the "Report" box; empty when the description stage failed
    pub report: String,

    pub status: AnalysisStatus,
}

impl AnalysisOutput {
    /// A failure before any report could be attempted.
    pub(crate) fn halted(status: AnalysisStatus, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            report: String::new(),
            status,
        }
    }

    pub(crate) fn authentication_failed() -> Self {
        Self::halted(AnalysisStatus::AuthenticationFailed, AUTH_ERROR_MESSAGE)
    }
}
