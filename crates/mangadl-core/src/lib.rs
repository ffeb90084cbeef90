//! Core domain for mangadl.
//!
//! Pure types and logic shared by every adapter: manga/chapter records, the
//! download request and job-status model, the title/chapter matching rules and
//! the `ContentApiPort` trait implemented by `mangadl-api`.
//!
//! Nothing in this crate performs I/O.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod errors;
pub mod matching;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    ChapterRecord, DownloadFormat, DownloadOptions, DownloadQuality, DownloadRequest,
    IdNormalizer, IdNormalizers, JobHandle, JobSnapshot, JobStatus, MangaRecord, RawIdNormalizer,
    SearchPage, SearchQuery, StructuredIdNormalizer,
};
pub use errors::DownloadError;
pub use matching::{
    ChapterSelector, MangaMatch, MatchKind, MatchPolicy, extract_chapter_number, normalize_title,
    resolve_chapter, resolve_manga, resolve_requested_chapter,
};
pub use ports::{ApiPortError, ApiPortResult, ContentApiPort};

#[cfg(feature = "test-utils")]
pub use ports::MockContentApiPort;

// tokio is only needed by the async port tests
#[cfg(test)]
use tokio as _;
