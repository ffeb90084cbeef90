//! Domain types.
//!
//! Plain data with serde derives. These are the DTOs that cross the port
//! boundary; wire-format quirks of the content API stay in `mangadl-api`.

mod download;
mod ids;
mod manga;

pub use download::{
    DownloadFormat, DownloadOptions, DownloadQuality, DownloadRequest, JobHandle, JobSnapshot,
    JobStatus,
};
pub use ids::{IdNormalizer, IdNormalizers, RawIdNormalizer, StructuredIdNormalizer};
pub use manga::{ChapterRecord, MangaRecord, SearchPage, SearchQuery};
