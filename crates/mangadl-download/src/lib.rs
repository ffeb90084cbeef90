//! Validation, job polling and batch orchestration for mangadl.
//!
//! Everything here talks to the remote API through
//! `Arc<dyn ContentApiPort>` and performs its calls one at a time.
//!
//! ```no_run
//! use std::sync::Arc;
//! use mangadl_core::ContentApiPort;
//! use mangadl_download::{BatchRequest, DownloadOrchestrator, OrchestratorConfig};
//!
//! # async fn run(api: Arc<dyn ContentApiPort>) -> Result<(), mangadl_core::DownloadError> {
//! let orchestrator = DownloadOrchestrator::new(api, OrchestratorConfig::new());
//! let request = BatchRequest::new("mangadex", "Berserk", ["1", "2", "3"])
//!     .with_alternative_titles(["Beruseruku"]);
//! let result = orchestrator.download_chapters(&request).await?;
//! println!("{} of {} chapters downloaded", result.successful_downloads, result.total_chapters);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod catalog;
mod config;
mod orchestrator;
mod poller;
mod validator;

// ============================================================================
// Public API
// ============================================================================

pub use catalog::{Catalog, ResolvedManga};
pub use config::{OrchestratorConfig, PollConfig, SearchConfig};
pub use orchestrator::{BatchRequest, BatchResult, ChapterFailure, ChapterSuccess, DownloadOrchestrator};
pub use poller::{CompletedJob, JobOutcome, JobPoller};
pub use validator::{BatchValidator, MatchedChapter, ValidationResult, check_chapters};

// Silence unused dev-dependency warnings (used by integration tests)
#[cfg(test)]
use tokio_test as _;
