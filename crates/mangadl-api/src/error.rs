//! Internal error types for content API operations.
//!
//! These errors are mapped to `ApiPortError` at the port boundary; only
//! client construction surfaces them directly.

use thiserror::Error;

use crate::retry::Retryable;

/// Result type alias for content API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP statuses worth another attempt.
pub(crate) const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Errors related to content API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// API request failed with an HTTP error status.
    #[error("Content API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Response body, possibly truncated
        body: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from content API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// API answered with `success: false`.
    #[error("Content API reported an error: {message}")]
    ApiReported {
        /// Server-supplied message
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The client could not be set up.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong
        message: String,
    },
}

impl ApiError {
    pub(crate) fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// HTTP status of the failed request, if the server answered.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ApiRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl Retryable for ApiError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::ApiRequestFailed { status, .. } => RETRYABLE_STATUSES.contains(status),
            // A request or body error without a status means the connection
            // broke before the server answered
            Self::Network(e) => {
                e.is_connect()
                    || e.is_timeout()
                    || (e.status().is_none() && (e.is_request() || e.is_body()))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(status: u16) -> ApiError {
        ApiError::ApiRequestFailed {
            status,
            url: "http://localhost:3000/api/v1/downloads".to_string(),
            body: String::new(),
        }
    }

    #[test]
    fn test_api_request_failed_error_message() {
        let msg = failed(502).to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("/downloads"));
    }

    #[test]
    fn test_retryable_statuses() {
        for status in [429, 500, 502, 503, 504] {
            assert!(failed(status).is_retryable(), "{status} should retry");
        }
        for status in [400, 401, 403, 404, 409, 422, 501] {
            assert!(!failed(status).is_retryable(), "{status} should not retry");
        }
    }

    #[test]
    fn test_decode_and_reported_errors_are_fatal() {
        assert!(!ApiError::invalid_response("missing id").is_retryable());
        assert!(
            !ApiError::ApiReported {
                message: "Unknown source".to_string()
            }
            .is_retryable()
        );
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!ApiError::from(parse_err).is_retryable());
    }

    #[tokio::test]
    async fn test_connection_dropped_before_response_is_retryable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            drop(socket);
        });

        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let err = client
            .get(format!("http://{addr}/api/v1/downloads/job-1"))
            .send()
            .await
            .unwrap_err();
        assert!(err.status().is_none());
        assert!(!err.is_connect());

        assert!(ApiError::Network(err).is_retryable());
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(failed(404).status(), Some(404));
        assert_eq!(ApiError::invalid_response("x").status(), None);
    }
}
