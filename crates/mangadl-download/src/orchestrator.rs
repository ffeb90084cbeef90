//! Batch chapter downloads.
//!
//! [`DownloadOrchestrator::download_chapters`] resolves a manga (trying
//! alternative titles in order), fetches its chapter list once, optionally
//! validates every request against it, then submits and tracks one job per
//! chapter. A failing chapter is recorded and the batch moves on.

use std::sync::Arc;

use mangadl_core::{
    ChapterRecord, ContentApiPort, DownloadError, DownloadFormat, DownloadOptions,
    DownloadRequest, IdNormalizers, JobSnapshot, JobStatus, MangaRecord, MatchKind, MatchPolicy,
    resolve_requested_chapter,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, ResolvedManga};
use crate::config::OrchestratorConfig;
use crate::poller::{JobOutcome, JobPoller, terminal_outcome};
use crate::validator::check_chapters;

// ============================================================================
// Request / result types
// ============================================================================

/// What to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    /// Source to search
    pub source_id: String,
    /// Primary title
    pub manga_title: String,
    /// Titles tried in order when the primary one does not resolve
    pub alternative_titles: Vec<String>,
    /// Chapter ids, numbers or labels
    pub chapters: Vec<String>,
    /// Output format
    pub format: DownloadFormat,
    /// Download options
    pub options: DownloadOptions,
    /// Abort before submitting anything if a chapter is missing
    pub validate_first: bool,
}

impl BatchRequest {
    /// Create a request with default format and options.
    pub fn new(
        source_id: impl Into<String>,
        manga_title: impl Into<String>,
        chapters: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            manga_title: manga_title.into(),
            alternative_titles: Vec::new(),
            chapters: chapters.into_iter().map(Into::into).collect(),
            format: DownloadFormat::default(),
            options: DownloadOptions::default(),
            validate_first: false,
        }
    }

    /// Add fallback titles.
    #[must_use]
    pub fn with_alternative_titles(
        mut self,
        titles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.alternative_titles.extend(titles.into_iter().map(Into::into));
        self
    }

    /// Set the output format.
    #[must_use]
    pub const fn with_format(mut self, format: DownloadFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the download options.
    #[must_use]
    pub const fn with_options(mut self, options: DownloadOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate every chapter before submitting any.
    #[must_use]
    pub const fn with_validate_first(mut self, validate_first: bool) -> Self {
        self.validate_first = validate_first;
        self
    }

    fn titles(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.manga_title.as_str())
            .chain(self.alternative_titles.iter().map(String::as_str))
    }

    /// Requested chapters, trimmed, without blanks or duplicates.
    fn unique_chapters(&self) -> Vec<String> {
        let mut unique: Vec<String> = Vec::new();
        for chapter in &self.chapters {
            let chapter = chapter.trim();
            if !chapter.is_empty() && !unique.iter().any(|c| c == chapter) {
                unique.push(chapter.to_string());
            }
        }
        unique
    }
}

/// A chapter whose job was submitted and, when waiting, completed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSuccess {
    /// Identifier as requested
    pub requested: String,
    /// Resolved chapter id
    pub chapter_id: String,
    /// Resolved chapter title
    pub chapter_title: String,
    /// Server job id
    pub job_id: String,
    /// Last observed job status
    pub status: JobStatus,
    /// Where the server stored the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_location: Option<String>,
    /// Page count reported by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

/// A chapter that could not be downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterFailure {
    /// Identifier as requested
    pub requested: String,
    /// Resolved chapter id, if resolution got that far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<String>,
    /// Why it failed
    pub error: DownloadError,
}

/// Outcome of a batch.
///
/// `success` is true when at least one chapter succeeded;
/// `failed_downloads` carries the shortfall.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// At least one chapter succeeded
    pub success: bool,
    /// The resolved manga
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manga: Option<MangaRecord>,
    /// Strategy that resolved the manga
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manga_match: Option<MatchKind>,
    /// Title that resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_title: Option<String>,
    /// Distinct chapters requested
    pub total_chapters: usize,
    /// Chapters that succeeded
    pub successful_downloads: usize,
    /// Chapters that failed
    pub failed_downloads: usize,
    /// Per-chapter successes, in request order
    pub downloaded: Vec<ChapterSuccess>,
    /// Per-chapter failures, in request order
    pub failed: Vec<ChapterFailure>,
    /// Requested chapters absent from the manga
    pub missing_chapters: Vec<String>,
    /// Batch-level failure, when the batch stopped before its chapters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DownloadError>,
    /// Summary of chapter failures, when any chapter failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BatchResult {
    fn aborted(total_chapters: usize, error: DownloadError) -> Self {
        Self {
            total_chapters,
            error: Some(error),
            ..Self::default()
        }
    }

    fn with_manga(mut self, resolved: &ResolvedManga) -> Self {
        self.manga = Some(resolved.record.clone());
        self.manga_match = Some(resolved.match_kind);
        self.matched_title = Some(resolved.query.clone());
        self
    }

    fn record(&mut self, outcome: Result<ChapterSuccess, ChapterFailure>) {
        match outcome {
            Ok(done) => self.downloaded.push(done),
            Err(failure) => {
                if matches!(failure.error, DownloadError::NotFound { .. }) {
                    self.missing_chapters.push(failure.requested.clone());
                }
                self.failed.push(failure);
            }
        }
        self.successful_downloads = self.downloaded.len();
        self.failed_downloads = self.failed.len();
        self.success = self.successful_downloads > 0;
        self.message = match (self.successful_downloads, self.failed_downloads) {
            (_, 0) => None,
            (0, _) => Some("All chapter downloads failed".to_string()),
            (_, failed) => Some(format!("Partial success: {failed} chapters failed")),
        };
    }
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Drives batch downloads through the content API.
#[derive(Clone)]
pub struct DownloadOrchestrator {
    api: Arc<dyn ContentApiPort>,
    catalog: Catalog,
    poller: JobPoller,
    normalizers: IdNormalizers,
    config: OrchestratorConfig,
}

impl DownloadOrchestrator {
    /// Create an orchestrator.
    pub fn new(api: Arc<dyn ContentApiPort>, config: OrchestratorConfig) -> Self {
        Self {
            catalog: Catalog::new(Arc::clone(&api), config.search),
            poller: JobPoller::new(Arc::clone(&api), config.poll),
            api,
            normalizers: IdNormalizers::default(),
            config,
        }
    }

    /// Use a custom id normalizer registry.
    #[must_use]
    pub fn with_normalizers(mut self, normalizers: IdNormalizers) -> Self {
        self.normalizers = normalizers;
        self
    }

    /// Download every requested chapter of a manga.
    ///
    /// Returns `Err` only for requests that cannot be attempted at all.
    /// Everything else, including a manga that does not resolve, is reported
    /// in the [`BatchResult`].
    pub async fn download_chapters(&self, request: &BatchRequest) -> Result<BatchResult, DownloadError> {
        if request.source_id.trim().is_empty() {
            return Err(DownloadError::configuration("source id must not be empty"));
        }
        let requested = request.unique_chapters();
        if requested.is_empty() {
            return Err(DownloadError::configuration("no chapters requested"));
        }
        let total = requested.len();
        let source_id = request.source_id.as_str();

        info!(
            source_id,
            manga = %request.manga_title,
            alternatives = request.alternative_titles.len(),
            chapters = total,
            "Starting batch download"
        );

        // Validation only trusts an exact or normalized title
        let policy = if request.validate_first {
            MatchPolicy::ExactOnly
        } else {
            self.config.match_policy
        };

        let resolved = match self
            .catalog
            .resolve_first(source_id, request.titles(), policy)
            .await
        {
            Ok(Some(resolved)) => resolved,
            Ok(None) => {
                warn!(source_id, manga = %request.manga_title, "Manga not found under any title");
                return Ok(BatchResult::aborted(
                    total,
                    DownloadError::not_found(format!("manga '{}'", request.manga_title)),
                ));
            }
            Err(e) => return Ok(BatchResult::aborted(total, e)),
        };

        let chapters = match self.api.list_chapters(source_id, &resolved.record.id).await {
            Ok(chapters) => chapters,
            Err(e) => return Ok(BatchResult::aborted(total, e.into()).with_manga(&resolved)),
        };
        debug!(manga_id = %resolved.record.id, available = chapters.len(), "Fetched chapter list");

        let normalizer = self.normalizers.for_source(source_id);

        if request.validate_first {
            let validation =
                check_chapters(resolved.record.clone(), &chapters, &requested, normalizer);
            if !validation.missing_requested.is_empty() {
                warn!(
                    source_id,
                    missing = ?validation.missing_requested,
                    "Chapters missing, nothing submitted"
                );
                let mut result = BatchResult::aborted(
                    total,
                    DownloadError::validation(validation.missing_requested.clone()),
                )
                .with_manga(&resolved);
                result.missing_chapters = validation.missing_requested;
                return Ok(result);
            }
        }

        let mut result = BatchResult {
            total_chapters: total,
            ..BatchResult::default()
        }
        .with_manga(&resolved);

        for wanted in &requested {
            let outcome = match resolve_requested_chapter(&chapters, wanted, normalizer) {
                Some(chapter) => self.download_one(request, &resolved.record, wanted, chapter).await,
                None => {
                    warn!(source_id, chapter = %wanted, "Chapter not found");
                    Err(ChapterFailure {
                        requested: wanted.clone(),
                        chapter_id: None,
                        error: DownloadError::not_found(format!("chapter '{wanted}'")),
                    })
                }
            };
            result.record(outcome);
        }

        info!(
            source_id,
            manga = %resolved.record.title,
            succeeded = result.successful_downloads,
            failed = result.failed_downloads,
            summary = result.message.as_deref().unwrap_or("all chapters downloaded"),
            "Batch download finished"
        );
        Ok(result)
    }

    /// Submit one chapter and, if configured, wait for its job.
    async fn download_one(
        &self,
        request: &BatchRequest,
        manga: &MangaRecord,
        wanted: &str,
        chapter: &ChapterRecord,
    ) -> Result<ChapterSuccess, ChapterFailure> {
        let failure = |error: DownloadError| ChapterFailure {
            requested: wanted.to_string(),
            chapter_id: Some(chapter.id.clone()),
            error,
        };

        let submission = DownloadRequest::new(
            request.source_id.as_str(),
            manga.id.as_str(),
            [chapter.id.clone()],
        )
        .with_format(request.format)
        .with_options(request.options);

        let handle = match self.api.create_download(&submission).await {
            Ok(handle) => handle,
            Err(e) => {
                warn!(chapter = %wanted, error = %e, "Download submission failed");
                return Err(failure(e.into()));
            }
        };
        info!(chapter = %wanted, job_id = %handle.id, status = %handle.status, "Download job submitted");

        let outcome = if handle.status.is_terminal() {
            let mut snapshot = JobSnapshot::new(handle.id, handle.status);
            snapshot.error = handle.error;
            terminal_outcome(snapshot)
        } else if self.config.wait_for_jobs {
            self.poller.wait_for_completion(&handle.id).await
        } else {
            return Ok(ChapterSuccess {
                requested: wanted.to_string(),
                chapter_id: chapter.id.clone(),
                chapter_title: chapter.title.clone(),
                job_id: handle.id,
                status: handle.status,
                file_location: None,
                page_count: None,
            });
        };

        if let JobOutcome::Failed { ref message, .. } = outcome {
            warn!(chapter = %wanted, message = %message, "Download job failed");
        }
        let job = outcome.into_result().map_err(failure)?;
        Ok(ChapterSuccess {
            requested: wanted.to_string(),
            chapter_id: chapter.id.clone(),
            chapter_title: chapter.title.clone(),
            job_id: job.job_id,
            status: JobStatus::Completed,
            file_location: job.file_location,
            page_count: job.page_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PollConfig;
    use mangadl_core::{ApiPortError, JobHandle, MatchPolicy, MockContentApiPort, SearchPage};
    use std::time::Duration;

    fn search_returns(mock: &mut MockContentApiPort, titles: &'static [&'static str]) {
        mock.expect_search_manga().returning(move |q| {
            Ok(SearchPage {
                items: titles
                    .iter()
                    .enumerate()
                    .map(|(i, t)| MangaRecord::new(format!("m{i}"), *t, q.source_id.clone()))
                    .collect(),
                page: q.page,
                total_pages: None,
            })
        });
    }

    fn chapters_return(mock: &mut MockContentApiPort) {
        mock.expect_list_chapters().times(1).returning(|_, _| {
            Ok(vec![
                ChapterRecord::new("c1", "Vol.01 Ch.001").with_number(1.0),
                ChapterRecord::new("c2", "Vol.01 Ch.002"),
                ChapterRecord::new("c3", "Vol.01 Ch.003"),
            ])
        });
    }

    fn orchestrator(mock: MockContentApiPort, config: OrchestratorConfig) -> DownloadOrchestrator {
        DownloadOrchestrator::new(Arc::new(mock), config)
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_each_job() {
        let mut mock = MockContentApiPort::new();
        search_returns(&mut mock, &["Berserk"]);
        chapters_return(&mut mock);
        mock.expect_create_download()
            .times(2)
            .returning(|req| {
                Ok(JobHandle::new(format!("job-{}", req.chapter_ids[0]), JobStatus::Queued))
            });
        mock.expect_download_status().returning(|id| {
            let mut snapshot = JobSnapshot::new(id, JobStatus::Completed);
            snapshot.file_location = Some(format!("/files/{id}.cbz"));
            Ok(snapshot)
        });

        let request = BatchRequest::new("src", "Berserk", ["1", "3"]);
        let result = orchestrator(mock, OrchestratorConfig::new())
            .download_chapters(&request)
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.total_chapters, 2);
        assert_eq!(result.successful_downloads, 2);
        assert_eq!(result.manga_match, Some(MatchKind::Exact));
        assert_eq!(result.downloaded[1].chapter_id, "c3");
        assert_eq!(
            result.downloaded[1].file_location.as_deref(),
            Some("/files/job-c3.cbz")
        );
    }

    #[tokio::test]
    async fn test_no_wait_returns_after_submission() {
        let mut mock = MockContentApiPort::new();
        search_returns(&mut mock, &["Berserk"]);
        chapters_return(&mut mock);
        mock.expect_create_download().returning(|_| {
            Ok(JobHandle::new("job-1", JobStatus::Queued))
        });
        mock.expect_download_status().never();

        let request = BatchRequest::new("src", "Berserk", ["2"]);
        let result = orchestrator(mock, OrchestratorConfig::new().with_wait_for_jobs(false))
            .download_chapters(&request)
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.downloaded[0].status, JobStatus::Queued);
        assert_eq!(result.downloaded[0].chapter_title, "Vol.01 Ch.002");
    }

    #[tokio::test]
    async fn test_terminal_handle_is_not_polled() {
        let mut mock = MockContentApiPort::new();
        search_returns(&mut mock, &["Berserk"]);
        chapters_return(&mut mock);
        mock.expect_create_download().returning(|_| {
            Ok(JobHandle::new("job-1", JobStatus::Failed))
        });
        mock.expect_download_status().never();

        let result = orchestrator(mock, OrchestratorConfig::new())
            .download_chapters(&BatchRequest::new("src", "Berserk", ["1"]))
            .await
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.failed_downloads, 1);
        assert!(matches!(
            result.failed[0].error,
            DownloadError::JobFailed { ref status, .. } if status == "failed"
        ));
        assert_eq!(result.message.as_deref(), Some("All chapter downloads failed"));
    }

    #[tokio::test]
    async fn test_terminal_handle_keeps_server_message() {
        let mut mock = MockContentApiPort::new();
        search_returns(&mut mock, &["Berserk"]);
        chapters_return(&mut mock);
        mock.expect_create_download().returning(|_| {
            Ok(JobHandle::new("job-1", JobStatus::Failed).with_error("chapter is licensed"))
        });
        mock.expect_download_status().never();

        let result = orchestrator(mock, OrchestratorConfig::new())
            .download_chapters(&BatchRequest::new("src", "Berserk", ["1"]))
            .await
            .unwrap();

        assert_eq!(
            result.failed[0].error,
            DownloadError::job_failed("job-1", "failed", "chapter is licensed")
        );
    }

    #[tokio::test]
    async fn test_validate_first_requires_exact_title() {
        let mut mock = MockContentApiPort::new();
        search_returns(&mut mock, &["Berserk: The Prototype"]);
        mock.expect_list_chapters().never();
        mock.expect_create_download().never();

        let request = BatchRequest::new("src", "Berserk", ["1"]).with_validate_first(true);
        let result = orchestrator(mock, OrchestratorConfig::new())
            .download_chapters(&request)
            .await
            .unwrap();

        assert!(!result.success);
        assert!(result.manga.is_none());
        assert!(matches!(result.error, Some(DownloadError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_validate_first_aborts_without_submitting() {
        let mut mock = MockContentApiPort::new();
        search_returns(&mut mock, &["Berserk"]);
        chapters_return(&mut mock);
        mock.expect_create_download().never();

        let request = BatchRequest::new("src", "Berserk", ["1", "99"]).with_validate_first(true);
        let result = orchestrator(mock, OrchestratorConfig::new())
            .download_chapters(&request)
            .await
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.missing_chapters, vec!["99"]);
        assert_eq!(
            result.error,
            Some(DownloadError::validation(vec!["99".to_string()]))
        );
        assert!(result.downloaded.is_empty());
    }

    #[tokio::test]
    async fn test_missing_chapter_does_not_stop_batch() {
        let mut mock = MockContentApiPort::new();
        search_returns(&mut mock, &["Berserk"]);
        chapters_return(&mut mock);
        mock.expect_create_download().times(1).returning(|_| {
            Ok(JobHandle::new("job-1", JobStatus::Completed))
        });

        let result = orchestrator(mock, OrchestratorConfig::new())
            .download_chapters(&BatchRequest::new("src", "Berserk", ["99", "2"]))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.successful_downloads, 1);
        assert_eq!(result.failed_downloads, 1);
        assert_eq!(result.missing_chapters, vec!["99"]);
        assert_eq!(result.failed[0].chapter_id, None);
        assert_eq!(result.message.as_deref(), Some("Partial success: 1 chapters failed"));
    }

    #[tokio::test]
    async fn test_unresolved_manga_is_structural() {
        let mut mock = MockContentApiPort::new();
        search_returns(&mut mock, &["Vagabond"]);
        mock.expect_list_chapters().never();

        let request = BatchRequest::new("src", "Berserk", ["1"]).with_alternative_titles(["Beruseruku"]);
        let result = orchestrator(mock, OrchestratorConfig::new())
            .download_chapters(&request)
            .await
            .unwrap();

        assert!(!result.success);
        assert!(result.manga.is_none());
        assert!(matches!(result.error, Some(DownloadError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_chapter_list_failure_is_structural() {
        let mut mock = MockContentApiPort::new();
        search_returns(&mut mock, &["Berserk"]);
        mock.expect_list_chapters()
            .returning(|_, _| Err(ApiPortError::RateLimited));

        let result = orchestrator(mock, OrchestratorConfig::new())
            .download_chapters(&BatchRequest::new("src", "Berserk", ["1"]))
            .await
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.manga.unwrap().id, "m0");
        assert!(matches!(
            result.error,
            Some(DownloadError::Transport { status_code: Some(429), .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_request_is_rejected() {
        let mock = MockContentApiPort::new();
        let err = orchestrator(mock, OrchestratorConfig::new())
            .download_chapters(&BatchRequest::new("src", "Berserk", [" ", ""]))
            .await
            .unwrap_err();
        assert!(matches!(err, DownloadError::Configuration { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_recorded_per_chapter() {
        let mut mock = MockContentApiPort::new();
        search_returns(&mut mock, &["Berserk"]);
        chapters_return(&mut mock);
        mock.expect_create_download().returning(|_| {
            Ok(JobHandle::new("job-1", JobStatus::Queued))
        });
        mock.expect_download_status()
            .returning(|id| Ok(JobSnapshot::new(id, JobStatus::Processing)));

        let config = OrchestratorConfig::new()
            .with_match_policy(MatchPolicy::ExactOnly)
            .with_poll(PollConfig::default().with_max_wait(Duration::from_secs(5)));
        let result = orchestrator(mock, config)
            .download_chapters(&BatchRequest::new("src", "Berserk", ["1"]))
            .await
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.failed[0].error, DownloadError::timeout("job-1", 4));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let mut result = BatchResult {
            total_chapters: 1,
            ..BatchResult::default()
        };
        result.record(Ok(ChapterSuccess {
            requested: "1".to_string(),
            chapter_id: "c1".to_string(),
            chapter_title: "Chapter 1".to_string(),
            job_id: "job-1".to_string(),
            status: JobStatus::Completed,
            file_location: None,
            page_count: Some(20),
        }));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["successfulDownloads"], 1);
        assert_eq!(json["failedDownloads"], 0);
        assert_eq!(json["downloaded"][0]["jobId"], "job-1");
        assert_eq!(json["downloaded"][0]["status"], "completed");
        assert!(json.get("error").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_summary_message_tracks_failures() {
        let failure = |requested: &str| ChapterFailure {
            requested: requested.to_string(),
            chapter_id: Some(format!("c{requested}")),
            error: DownloadError::transport_with_status("service unavailable", 503),
        };
        let success = ChapterSuccess {
            requested: "1".to_string(),
            chapter_id: "c1".to_string(),
            chapter_title: "Chapter 1".to_string(),
            job_id: "job-1".to_string(),
            status: JobStatus::Completed,
            file_location: None,
            page_count: None,
        };

        let mut result = BatchResult::default();
        result.record(Err(failure("2")));
        assert_eq!(result.message.as_deref(), Some("All chapter downloads failed"));

        result.record(Ok(success));
        result.record(Err(failure("3")));
        assert!(result.success);
        assert_eq!(result.message.as_deref(), Some("Partial success: 2 chapters failed"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["message"], "Partial success: 2 chapters failed");
    }

    #[test]
    fn test_unique_chapters_keeps_order() {
        let request = BatchRequest::new("src", "x", ["2", " 1 ", "2", "", "1"]);
        assert_eq!(request.unique_chapters(), vec!["2", "1"]);
    }
}
