//! Content API port trait.

use async_trait::async_trait;

use super::error::ApiPortResult;
use crate::domain::{ChapterRecord, DownloadRequest, JobHandle, JobSnapshot, MangaRecord, SearchPage, SearchQuery};

/// Port trait for the remote content API.
///
/// # Design
///
/// - Uses core-owned DTOs, never wire types
/// - Returns `ApiPortError` for all failures
/// - Implementations apply their retry policy internally; an error here
///   means retries are exhausted or the failure was not retryable
/// - Ids are passed raw; implementations percent-encode them
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ContentApiPort: Send + Sync {
    /// Fetch one page of search results.
    async fn search_manga(&self, query: &SearchQuery) -> ApiPortResult<SearchPage>;

    /// Fetch a single manga's detail record.
    async fn get_manga(&self, source_id: &str, manga_id: &str) -> ApiPortResult<MangaRecord>;

    /// Fetch the full chapter list of a manga.
    async fn list_chapters(
        &self,
        source_id: &str,
        manga_id: &str,
    ) -> ApiPortResult<Vec<ChapterRecord>>;

    /// Submit a download job.
    async fn create_download(&self, request: &DownloadRequest) -> ApiPortResult<JobHandle>;

    /// Fetch the current state of a download job.
    async fn download_status(&self, job_id: &str) -> ApiPortResult<JobSnapshot>;
}
