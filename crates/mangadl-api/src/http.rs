//! HTTP backend abstraction for the content API.
//!
//! A backend performs exactly one attempt per call and reports non-2xx
//! answers as [`ApiError::ApiRequestFailed`]. Retry and envelope decoding
//! happen one layer up, in the client, so they apply identically to every
//! backend.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Response bodies longer than this are cut in error messages.
const MAX_ERROR_BODY: usize = 500;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the content API.
///
/// This is an implementation detail - external code should use the
/// `ContentApiPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// `GET` a URL and return the JSON body.
    async fn get_json(&self, url: &Url) -> ApiResult<Value>;

    /// `POST` a JSON body and return the JSON response.
    async fn post_json(&self, url: &Url, body: &Value) -> ApiResult<Value>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(Duration::from_secs(10)))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::Configuration {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &Url) -> ApiResult<Value> {
        let response = request.header("Accept", "application/json").send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
                body: truncate(body, MAX_ERROR_BODY),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

fn truncate(mut text: String, max: usize) -> String {
    if text.len() > max {
        let mut cut = max;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
    }
    text
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json(&self, url: &Url) -> ApiResult<Value> {
        self.send(self.client.get(url.as_str()), url).await
    }

    async fn post_json(&self, url: &Url, body: &Value) -> ApiResult<Value> {
        self.send(self.client.post(url.as_str()).json(body), url).await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short".to_string(), 10), "short");
        assert_eq!(truncate("abcdef".to_string(), 3), "abc");
        // 'é' is two bytes; cutting at 2 would split it
        assert_eq!(truncate("aé".to_string(), 2), "a");
    }

    #[test]
    fn test_reqwest_backend_creation() {
        let backend = ReqwestBackend::new(&ApiConfig::default());
        assert!(backend.is_ok());
    }

    mod fake_backend_tests {
        use super::super::testing::*;
        use super::*;
        use serde_json::json;

        fn url(path: &str) -> Url {
            Url::parse(&format!("http://localhost:3000/api/v1{path}")).unwrap()
        }

        #[tokio::test]
        async fn test_fake_backend_replays_in_order_then_repeats() {
            let backend = FakeBackend::new()
                .on_get("/downloads/j1", CannedResponse::Status(503))
                .on_get("/downloads/j1", CannedResponse::Json(json!({"n": 1})));

            let target = url("/downloads/j1");
            assert!(matches!(
                backend.get_json(&target).await,
                Err(ApiError::ApiRequestFailed { status: 503, .. })
            ));
            assert_eq!(backend.get_json(&target).await.unwrap(), json!({"n": 1}));
            assert_eq!(backend.get_json(&target).await.unwrap(), json!({"n": 1}));
        }

        #[tokio::test]
        async fn test_fake_backend_returns_404_for_unknown_url() {
            let backend = FakeBackend::new();
            let result = backend.get_json(&url("/unknown")).await;
            assert!(matches!(
                result,
                Err(ApiError::ApiRequestFailed { status: 404, .. })
            ));
        }

        #[tokio::test]
        async fn test_fake_backend_records_post_body() {
            let backend = FakeBackend::new().on_post("/downloads", CannedResponse::Json(json!({})));
            let body = json!({"mangaId": "m1"});
            backend.post_json(&url("/downloads"), &body).await.unwrap();

            let requests = backend.requests();
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0].method, "POST");
            assert_eq!(requests[0].body, Some(body));
        }
    }
}
