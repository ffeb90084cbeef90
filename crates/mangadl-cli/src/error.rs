//! CLI-specific error types and exit code mapping.

use mangadl_api::ApiError;
use mangadl_core::DownloadError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The operation ran but did not succeed.
    #[error("{0}")]
    Failed(String),

    /// Argument error not caught by the parser.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// - 1: General failure (nothing downloaded, validation failed)
    /// - 2: Invalid arguments (`EX_USAGE` as used by clap)
    /// - 78: Configuration error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Failed(_) => 1,
            Self::Arguments(_) => 2,
            Self::Config(_) => 78,
        }
    }
}

impl From<DownloadError> for CliError {
    fn from(err: DownloadError) -> Self {
        match err {
            DownloadError::Configuration { message } => Self::Config(message),
            other => Self::Failed(other.to_string()),
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Configuration { .. } | ApiError::InvalidUrl(_) => Self::Config(err.to_string()),
            other => Self::Failed(other.to_string()),
        }
    }
}

/// Exit code for an error returned from a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
