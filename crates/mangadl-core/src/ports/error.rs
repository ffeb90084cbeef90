//! Error types for content API port operations.

use thiserror::Error;

/// Errors from content API port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these after the
/// transport retry policy has been exhausted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiPortError {
    /// The requested resource does not exist.
    #[error("Not found: {resource}")]
    NotFound {
        /// What was requested
        resource: String,
    },

    /// The API kept answering 429.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// The API answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body or URL
        message: String,
    },

    /// Connection failure or timeout.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The response could not be decoded.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The API answered `success: false`.
    #[error("Request rejected by API: {message}")]
    Rejected {
        /// Server-supplied error message
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for content API port operations.
pub type ApiPortResult<T> = Result<T, ApiPortError>;
