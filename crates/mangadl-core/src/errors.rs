//! Download error types.
//!
//! These errors are serializable so that batch results can carry them per
//! item. They do not hold transport-level error types; those are flattened
//! to messages at the port boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ports::ApiPortError;

/// Error type for resolution, validation and download operations.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DownloadError {
    /// Network/HTTP failure that survived the transport retry policy.
    #[error("Transport error: {message}")]
    Transport {
        /// Detailed error message.
        message: String,
        /// HTTP status code if available.
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
    },

    /// Manga or chapter could not be resolved by any strategy.
    #[error("Not found: {message}")]
    NotFound {
        /// What was not found.
        message: String,
    },

    /// One or more requested chapters are absent.
    #[error("Missing chapters: {}", missing.join(", "))]
    Validation {
        /// Requested identifiers that did not resolve.
        missing: Vec<String>,
    },

    /// The remote job reached a failing terminal state.
    #[error("Job {job_id} ended as {status}: {message}")]
    JobFailed {
        /// Server job id.
        job_id: String,
        /// Terminal status reported by the server.
        status: String,
        /// Server-supplied or generic message.
        message: String,
    },

    /// The client stopped polling; the job may still be running remotely.
    #[error("Gave up waiting for job {job_id} after {waited_secs}s")]
    Timeout {
        /// Server job id.
        job_id: String,
        /// How long the client waited.
        waited_secs: u64,
    },

    /// Malformed configuration or an identifier that cannot be used.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong.
        message: String,
    },
}

impl DownloadError {
    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a transport error with HTTP status code.
    pub fn transport_with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::Transport {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a validation error.
    #[must_use]
    pub const fn validation(missing: Vec<String>) -> Self {
        Self::Validation { missing }
    }

    /// Create a job failed error.
    pub fn job_failed(
        job_id: impl Into<String>,
        status: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::JobFailed {
            job_id: job_id.into(),
            status: status.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error.
    pub fn timeout(job_id: impl Into<String>, waited_secs: u64) -> Self {
        Self::Timeout {
            job_id: job_id.into(),
            waited_secs,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether retrying the whole operation later could succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

impl From<ApiPortError> for DownloadError {
    fn from(err: ApiPortError) -> Self {
        match err {
            ApiPortError::NotFound { resource } => Self::not_found(resource),
            ApiPortError::RateLimited => {
                Self::transport_with_status("rate limit exceeded", 429)
            }
            ApiPortError::Http { status, message } => Self::transport_with_status(message, status),
            ApiPortError::Network { message }
            | ApiPortError::InvalidResponse { message }
            | ApiPortError::Rejected { message } => Self::transport(message),
            ApiPortError::Configuration { message } => Self::configuration(message),
        }
    }
}
