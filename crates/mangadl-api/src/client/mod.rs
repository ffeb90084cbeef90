//! Content API client.
//!
//! Every request goes through [`ContentApiClient::get`] or
//! [`ContentApiClient::post`], which apply the retry policy and decode the
//! response envelope.

mod catalog;
mod downloads;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::{ApiClientConfig, ApiConfig};
use crate::error::ApiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::parsing::{Payload, decode_envelope};
use crate::retry::retry_with_backoff;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default content API client using the reqwest HTTP backend.
pub type DefaultContentApiClient = ContentApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the content API.
///
/// Generic over an HTTP backend so tests can script responses. Use
/// [`DefaultContentApiClient`] in production and talk to it through the
/// `ContentApiPort` trait.
pub struct ContentApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
}

impl DefaultContentApiClient {
    /// Create a client. Fails if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let config = ApiConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self { backend, config })
    }

    /// Create a client with default configuration.
    pub fn default_client() -> ApiResult<Self> {
        Self::new(&ApiClientConfig::default())
    }
}

impl<B: HttpBackend> ContentApiClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// The validated API root.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    pub(crate) async fn get(&self, operation: &str, url: &Url) -> ApiResult<Payload> {
        debug!(operation, %url, "GET");
        let backend = &self.backend;
        let raw = retry_with_backoff(&self.config.retry, operation, move || backend.get_json(url))
            .await?;
        decode_envelope(raw)
    }

    pub(crate) async fn post(&self, operation: &str, url: &Url, body: &Value) -> ApiResult<Payload> {
        debug!(operation, %url, "POST");
        let backend = &self.backend;
        let raw = retry_with_backoff(&self.config.retry, operation, move || {
            backend.post_json(url, body)
        })
        .await?;
        decode_envelope(raw)
    }
}
