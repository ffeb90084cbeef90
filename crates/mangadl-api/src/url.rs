//! URL construction helpers for the content API.
//!
//! Every id interpolated into a path is percent-encoded, including `/`, so
//! ids such as `/manga/one_piece/` or serialized JSON objects stay one
//! segment.

use mangadl_core::SearchQuery;
use url::Url;

use crate::config::ApiConfig;

/// Append already-encoded path segments to the API root.
fn join(config: &ApiConfig, segments: &[&str]) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{}", segments.join("/")));
    url
}

fn encode(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// `GET /sources/{sourceId}/search?q=&page=&limit=`
pub fn build_search_url(config: &ApiConfig, query: &SearchQuery) -> Url {
    let source = encode(&query.source_id);
    let mut url = join(config, &["sources", &source, "search"]);
    url.query_pairs_mut()
        .append_pair("q", query.text.trim())
        .append_pair("page", &query.page.to_string())
        .append_pair("limit", &query.page_size.to_string());
    url
}

/// `GET /sources/{sourceId}/manga/{mangaId}`
pub fn build_manga_url(config: &ApiConfig, source_id: &str, manga_id: &str) -> Url {
    join(config, &["sources", &encode(source_id), "manga", &encode(manga_id)])
}

/// `GET /sources/{sourceId}/manga/{mangaId}/chapters`
pub fn build_chapters_url(config: &ApiConfig, source_id: &str, manga_id: &str) -> Url {
    join(
        config,
        &["sources", &encode(source_id), "manga", &encode(manga_id), "chapters"],
    )
}

/// `POST /downloads`
pub fn build_downloads_url(config: &ApiConfig) -> Url {
    join(config, &["downloads"])
}

/// `GET /downloads/{id}`
pub fn build_download_status_url(config: &ApiConfig, job_id: &str) -> Url {
    join(config, &["downloads", &encode(job_id)])
}

/// `GET /downloads/{id}/file`
pub fn build_download_file_url(config: &ApiConfig, job_id: &str) -> Url {
    join(config, &["downloads", &encode(job_id), "file"])
}
