//! HTTP client for the manga content API.
//!
//! Implements `mangadl_core::ContentApiPort` over JSON/HTTP with retry and
//! exponential backoff for transient failures. Construct a
//! [`DefaultContentApiClient`] once per process and share it behind an
//! `Arc<dyn ContentApiPort>`.
//!
//! ```no_run
//! use std::sync::Arc;
//! use mangadl_api::{ApiClientConfig, DefaultContentApiClient};
//! use mangadl_core::ContentApiPort;
//!
//! # fn main() -> Result<(), mangadl_api::ApiError> {
//! let client = DefaultContentApiClient::new(&ApiClientConfig::new())?;
//! let port: Arc<dyn ContentApiPort> = Arc::new(client);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultContentApiClient is meant to be used through ContentApiPort, not
// through its generic backend parameter
#![allow(private_interfaces)]
#![allow(private_bounds)]

mod client;
mod config;
mod error;
mod http;
mod parsing;
mod port;
mod retry;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultContentApiClient;

// Configuration
pub use config::{ApiClientConfig, DEFAULT_BASE_URL};

// Errors
pub use error::{ApiError, ApiResult};

// Retry policy
pub use retry::{RetryPolicy, Retryable, retry_with_backoff};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
