//! Download job polling.
//!
//! Observes a server-side job until it reaches a terminal state or the wait
//! budget runs out. Polling tolerates failures that the transport layer
//! gives up on: a failed status check is logged and retried on the next
//! tick, because the job is expected to settle eventually. Unknown status
//! strings are treated as still in progress.

use std::sync::Arc;
use std::time::Duration;

use mangadl_core::{ContentApiPort, DownloadError, JobSnapshot, JobStatus};
use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::PollConfig;

/// A job that finished successfully.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedJob {
    /// Server job id
    pub job_id: String,
    /// `fileUrl` or `filePath` reported by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_location: Option<String>,
    /// Page count reported by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

impl CompletedJob {
    fn from_snapshot(snapshot: JobSnapshot) -> Self {
        Self {
            job_id: snapshot.id,
            file_location: snapshot.file_location,
            page_count: snapshot.page_count,
        }
    }
}

/// How polling ended.
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    /// The job completed.
    Completed(CompletedJob),
    /// The job reached a failing terminal state.
    Failed {
        /// Server job id
        job_id: String,
        /// Terminal status
        status: JobStatus,
        /// Server message, or a generic one
        message: String,
    },
    /// The client stopped waiting. The job may still be running.
    TimedOut {
        /// Server job id
        job_id: String,
        /// Time spent polling
        waited: Duration,
    },
}

impl JobOutcome {
    /// Convert into a result, mapping failures onto `DownloadError`.
    pub fn into_result(self) -> Result<CompletedJob, DownloadError> {
        match self {
            Self::Completed(job) => Ok(job),
            Self::Failed {
                job_id,
                status,
                message,
            } => Err(DownloadError::job_failed(job_id, status.as_str(), message)),
            Self::TimedOut { job_id, waited } => Err(DownloadError::timeout(job_id, waited.as_secs())),
        }
    }
}

/// Settle a snapshot that is already terminal.
pub(crate) fn terminal_outcome(snapshot: JobSnapshot) -> JobOutcome {
    if snapshot.status.is_success() {
        return JobOutcome::Completed(CompletedJob::from_snapshot(snapshot));
    }
    let message = snapshot
        .error
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("download ended with status '{}'", snapshot.status));
    JobOutcome::Failed {
        job_id: snapshot.id,
        status: snapshot.status,
        message,
    }
}

/// Polls download jobs through the content API.
#[derive(Clone)]
pub struct JobPoller {
    api: Arc<dyn ContentApiPort>,
    config: PollConfig,
}

impl JobPoller {
    /// Create a poller.
    pub fn new(api: Arc<dyn ContentApiPort>, config: PollConfig) -> Self {
        Self { api, config }
    }

    /// Poll `job_id` until it settles or `max_wait` would be exceeded.
    ///
    /// The first check happens immediately. No check is scheduled past the
    /// deadline and a check still pending at the deadline is abandoned, so
    /// the total wait never exceeds `max_wait`.
    pub async fn wait_for_completion(&self, job_id: &str) -> JobOutcome {
        let started = Instant::now();
        let deadline = started + self.config.max_wait;

        loop {
            let Ok(status) =
                tokio::time::timeout_at(deadline, self.api.download_status(job_id)).await
            else {
                return timed_out(job_id, started);
            };

            match status {
                Ok(snapshot) if snapshot.status.is_terminal() => {
                    let outcome = terminal_outcome(snapshot);
                    info!(
                        job_id,
                        success = matches!(outcome, JobOutcome::Completed(_)),
                        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                        "Download job settled"
                    );
                    return outcome;
                }
                Ok(snapshot) if !snapshot.status.is_known() => {
                    warn!(job_id, status = %snapshot.status, "Unrecognized job status, still waiting");
                }
                Ok(snapshot) => {
                    debug!(job_id, status = %snapshot.status, progress = ?snapshot.progress, "Job in progress");
                }
                Err(e) => {
                    warn!(job_id, error = %e, "Status check failed, will retry on next tick");
                }
            }

            if Instant::now() + self.config.interval > deadline {
                return timed_out(job_id, started);
            }
            tokio::time::sleep(self.config.interval).await;
        }
    }
}

fn timed_out(job_id: &str, started: Instant) -> JobOutcome {
    let waited = started.elapsed();
    warn!(
        job_id,
        waited_secs = waited.as_secs(),
        "Gave up waiting for download job"
    );
    JobOutcome::TimedOut {
        job_id: job_id.to_string(),
        waited,
    }
}
