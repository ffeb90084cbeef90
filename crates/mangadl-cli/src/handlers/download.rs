//! Download handler: runs the orchestrator and reports the batch.

use std::time::Duration;

use anyhow::Result;
use mangadl_core::{DownloadFormat, DownloadOptions, DownloadQuality, MatchPolicy};
use mangadl_download::{BatchRequest, DownloadOrchestrator, OrchestratorConfig, PollConfig};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Arguments for the download command.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone)]
pub struct DownloadArgs {
    pub manga: String,
    pub chapters: Vec<String>,
    pub alt_titles: Vec<String>,
    pub format: DownloadFormat,
    pub quality: DownloadQuality,
    pub include_metadata: bool,
    pub validate_first: bool,
    pub wait: bool,
    pub fallback: bool,
    pub poll_interval: Duration,
    pub max_wait: Duration,
}

impl DownloadArgs {
    fn config(&self) -> OrchestratorConfig {
        let policy = if self.fallback {
            MatchPolicy::FuzzyWithFallback
        } else {
            MatchPolicy::Fuzzy
        };
        OrchestratorConfig::new()
            .with_match_policy(policy)
            .with_wait_for_jobs(self.wait)
            .with_poll(
                PollConfig::default()
                    .with_interval(self.poll_interval)
                    .with_max_wait(self.max_wait),
            )
    }

    fn request(&self, source_id: &str) -> BatchRequest {
        BatchRequest::new(source_id, self.manga.as_str(), self.chapters.iter().map(String::as_str))
            .with_alternative_titles(self.alt_titles.iter().map(String::as_str))
            .with_format(self.format)
            .with_options(DownloadOptions {
                quality: self.quality,
                include_metadata: self.include_metadata,
            })
            .with_validate_first(self.validate_first)
    }
}

/// Execute the download command.
///
/// Prints the batch result as JSON on stdout, then the file URL of every
/// completed job.
pub async fn execute(ctx: &CliContext, args: DownloadArgs) -> Result<()> {
    if args.poll_interval.is_zero() {
        return Err(CliError::Arguments("--poll-interval must be at least 1 second".to_string()).into());
    }

    let orchestrator = DownloadOrchestrator::new(ctx.api(), args.config());
    let result = orchestrator
        .download_chapters(&args.request(&ctx.source_id))
        .await
        .map_err(CliError::from)?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    if args.wait {
        for done in &result.downloaded {
            println!("{}: {}", done.requested, ctx.client().download_file_url(&done.job_id));
        }
    }

    if result.success {
        Ok(())
    } else {
        let reason = result
            .error
            .as_ref()
            .map(ToString::to_string)
            .or_else(|| result.message.clone())
            .unwrap_or_else(|| format!("all {} chapters failed", result.total_chapters));
        Err(CliError::Failed(reason).into())
    }
}
