//! Public configuration for the content API client.
//!
//! The internal config is derived from this and validated once, when the
//! client is built.

use std::time::Duration;

use url::Url;

use crate::error::{ApiError, ApiResult};
use crate::retry::RetryPolicy;

/// Default API root of a locally running content server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Configuration for the content API client.
///
/// # Example
///
/// ```
/// use mangadl_api::ApiClientConfig;
/// use std::time::Duration;
///
/// let config = ApiClientConfig::new()
///     .with_base_url("http://media-box:3000/api/v1")
///     .with_timeout(Duration::from_secs(30))
///     .with_max_retries(5);
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// API root, e.g. `http://localhost:3000/api/v1`
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout
    pub(crate) timeout: Duration,
    /// Retries after the first attempt for transient errors
    pub(crate) max_retries: u32,
    /// Base delay for exponential backoff
    pub(crate) retry_initial_delay: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        let retry = RetryPolicy::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("mangadl/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(15),
            max_retries: retry.max_retries,
            retry_initial_delay: retry.initial_delay,
        }
    }
}

impl ApiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root.
    ///
    /// Defaults to `http://localhost:3000/api/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 15 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for transient errors.
    ///
    /// Defaults to 10.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff.
    ///
    /// Defaults to 3 seconds.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_initial_delay = delay;
        self
    }

    /// The configured API root, unvalidated.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Validated client configuration.
#[derive(Debug, Clone)]
pub(crate) struct ApiConfig {
    /// API root; always ends without a trailing slash in its path
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl ApiConfig {
    pub fn from_public(config: &ApiClientConfig) -> ApiResult<Self> {
        let mut base_url = Url::parse(config.base_url.trim())?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::Configuration {
                message: format!("unsupported URL scheme '{}'", base_url.scheme()),
            });
        }
        let trimmed = base_url.path().trim_end_matches('/').to_string();
        base_url.set_path(&trimmed);
        base_url.set_query(None);

        Ok(Self {
            base_url,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            retry: RetryPolicy::new(config.max_retries, config.retry_initial_delay),
        })
    }
}

#[cfg(test)]
impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_public(&ApiClientConfig::default()).expect("default config is valid")
    }
}
