//! Download job submission and status.

use mangadl_core::{DownloadRequest, JobHandle, JobSnapshot};
use tracing::info;
use url::Url;

use super::ContentApiClient;
use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::parsing::{parse_job_handle, parse_job_snapshot};
use crate::url::{build_download_file_url, build_download_status_url, build_downloads_url};

impl<B: HttpBackend> ContentApiClient<B> {
    /// Submit a download job.
    pub(crate) async fn submit_download(&self, request: &DownloadRequest) -> ApiResult<JobHandle> {
        let url = build_downloads_url(&self.config);
        let body = serde_json::to_value(request)?;
        let payload = self.post("create_download", &url, &body).await?;
        let handle = parse_job_handle(&payload.data)?;

        info!(
            job_id = %handle.id,
            manga_id = %request.manga_id,
            chapters = request.chapter_ids.len(),
            status = %handle.status,
            "Download job created"
        );
        Ok(handle)
    }

    /// Fetch the current state of a download job.
    pub(crate) async fn fetch_job_status(&self, job_id: &str) -> ApiResult<JobSnapshot> {
        let url = build_download_status_url(&self.config, job_id);
        let payload = self.get("download_status", &url).await?;
        parse_job_snapshot(&payload.data, job_id)
    }

    /// URL of the finished file of a job (`GET /downloads/{id}/file`).
    pub fn download_file_url(&self, job_id: &str) -> Url {
        build_download_file_url(&self.config, job_id)
    }
}
