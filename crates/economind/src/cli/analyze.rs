//! The `economind analyze` command: one image, one report, printed to stdout.

use clap::Args;
use economind_core::config::expand_path;
use economind_core::{AnalysisOutput, AnalysisStatus, Analyzer, Config, ImageSource};
use std::path::PathBuf;

/// Arguments for the `analyze` command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Image to describe
    pub image: PathBuf,

    /// API key for the configured provider
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Instruction for the vision model (defaults to the configured prompt)
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Print the result as a JSON object
    #[arg(long)]
    pub json: bool,
}

/// Execute the analyze command.
///
/// Exits non-zero when the pipeline halted on an error; a relevance
/// rejection still counts as success.
pub async fn execute(args: AnalyzeArgs, config: Config) -> anyhow::Result<()> {
    let image = ImageSource::Path(expand_path(&args.image));
    let analyzer = Analyzer::new(config);

    tracing::info!("Analyzing {}", args.image.display());
    let output = analyzer
        .analyze(&args.api_key, &image, args.prompt.as_deref())
        .await;

    println!("{}", render(&output, args.json)?);

    if is_failure(output.status) {
        anyhow::bail!("analysis did not complete ({:?})", output.status);
    }
    Ok(())
}

fn render(output: &AnalysisOutput, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(output)?);
    }
    if output.report.is_empty() {
        Ok(output.description.clone())
    } else {
        Ok(format!("{}\n\n{}", output.description, output.report))
    }
}

fn is_failure(status: AnalysisStatus) -> bool {
    !matches!(status, AnalysisStatus::Reported | AnalysisStatus::Rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(status: AnalysisStatus, report: &str) -> AnalysisOutput {
        AnalysisOutput {
            description: "--- Image Description ---\nA chart".to_string(),
            report: report.to_string(),
            status,
        }
    }

    #[test]
    fn test_render_plain_separates_sections() {
        let text = render(&output(AnalysisStatus::Reported, "R"), false).unwrap();
        assert_eq!(text, "--- Image Description ---\nA chart\n\nR");
    }

    #[test]
    fn test_render_plain_omits_empty_report() {
        let text = render(&output(AnalysisStatus::DescriptionFailed, ""), false).unwrap();
        assert_eq!(text, "--- Image Description ---\nA chart");
    }

    #[test]
    fn test_render_json() {
        let text = render(&output(AnalysisStatus::Rejected, "no"), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"], "rejected");
        assert_eq!(value["report"], "no");
    }

    #[test]
    fn test_failure_statuses() {
        assert!(!is_failure(AnalysisStatus::Reported));
        assert!(!is_failure(AnalysisStatus::Rejected));
        assert!(is_failure(AnalysisStatus::AuthenticationFailed));
        assert!(is_failure(AnalysisStatus::ImageUnreadable));
    }
}
