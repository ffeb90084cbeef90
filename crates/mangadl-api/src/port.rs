//! Port trait implementation for `ContentApiClient`.
//!
//! Converts internal `ApiError`s into the core `ApiPortError`.

use async_trait::async_trait;
use mangadl_core::{
    ApiPortError, ApiPortResult, ChapterRecord, ContentApiPort, DownloadRequest, JobHandle,
    JobSnapshot, MangaRecord, SearchPage, SearchQuery,
};

use crate::client::ContentApiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `ApiPortError`.
fn map_error(err: ApiError) -> ApiPortError {
    match err {
        ApiError::ApiRequestFailed { status, url, body } => match status {
            404 => ApiPortError::NotFound { resource: url },
            429 => ApiPortError::RateLimited,
            _ => ApiPortError::Http {
                status,
                message: if body.trim().is_empty() { url } else { body },
            },
        },
        ApiError::InvalidResponse { message } => ApiPortError::InvalidResponse { message },
        ApiError::ApiReported { message } => ApiPortError::Rejected { message },
        ApiError::Network(e) => ApiPortError::Network {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => ApiPortError::InvalidResponse {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => ApiPortError::Configuration {
            message: e.to_string(),
        },
        ApiError::Configuration { message } => ApiPortError::Configuration { message },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> ContentApiPort for ContentApiClient<B> {
    async fn search_manga(&self, query: &SearchQuery) -> ApiPortResult<SearchPage> {
        self.fetch_search_page(query).await.map_err(map_error)
    }

    async fn get_manga(&self, source_id: &str, manga_id: &str) -> ApiPortResult<MangaRecord> {
        self.fetch_manga(source_id, manga_id).await.map_err(map_error)
    }

    async fn list_chapters(
        &self,
        source_id: &str,
        manga_id: &str,
    ) -> ApiPortResult<Vec<ChapterRecord>> {
        self.fetch_chapters(source_id, manga_id)
            .await
            .map_err(map_error)
    }

    async fn create_download(&self, request: &DownloadRequest) -> ApiPortResult<JobHandle> {
        self.submit_download(request).await.map_err(map_error)
    }

    async fn download_status(&self, job_id: &str) -> ApiPortResult<JobSnapshot> {
        self.fetch_job_status(job_id).await.map_err(map_error)
    }
}
