//! Download request and server-side job model.
//!
//! The client never drives job transitions; it only observes them through
//! `GET /downloads/{id}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format requested from the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    /// Loose page images
    Images,
    /// Comic book zip
    #[default]
    Cbz,
    /// PDF document
    Pdf,
    /// EPUB book
    Epub,
}

impl DownloadFormat {
    /// Wire name of the format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Cbz => "cbz",
            Self::Pdf => "pdf",
            Self::Epub => "epub",
        }
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DownloadFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "images" => Ok(Self::Images),
            "cbz" => Ok(Self::Cbz),
            "pdf" => Ok(Self::Pdf),
            "epub" => Ok(Self::Epub),
            other => Err(format!("unknown download format '{other}'")),
        }
    }
}

/// Image quality requested from the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadQuality {
    /// Reduced size
    Low,
    /// Original quality
    #[default]
    High,
}

impl std::str::FromStr for DownloadQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            other => Err(format!("unknown quality '{other}'")),
        }
    }
}

/// Options attached to a download request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadOptions {
    /// Image quality
    pub quality: DownloadQuality,
    /// Embed series metadata in the archive
    pub include_metadata: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            quality: DownloadQuality::High,
            include_metadata: true,
        }
    }
}

/// Body of `POST /downloads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    /// Source the manga belongs to
    pub source_id: String,
    /// Opaque manga identifier
    pub manga_id: String,
    /// Chapters to download, without duplicates, in request order
    pub chapter_ids: Vec<String>,
    /// Output format
    pub format: DownloadFormat,
    /// Download options
    pub options: DownloadOptions,
}

impl DownloadRequest {
    /// Create a request. Duplicate chapter ids are dropped, keeping the first occurrence.
    pub fn new(
        source_id: impl Into<String>,
        manga_id: impl Into<String>,
        chapter_ids: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for id in chapter_ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }

        Self {
            source_id: source_id.into(),
            manga_id: manga_id.into(),
            chapter_ids: unique,
            format: DownloadFormat::default(),
            options: DownloadOptions::default(),
        }
    }

    /// Set the output format.
    #[must_use]
    pub const fn with_format(mut self, format: DownloadFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the download options.
    #[must_use]
    pub const fn with_options(mut self, options: DownloadOptions) -> Self {
        self.options = options;
        self
    }
}

/// Lifecycle state of a server-side download job.
///
/// `Queued` and the in-progress states loop until one of the terminal states
/// is reached. Strings the client does not know are kept in `Unknown` and
/// treated as in-progress.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Queued,
    Downloading,
    Processing,
    Pending,
    Completed,
    Failed,
    Error,
    Cancelled,
    /// A status string this client does not recognise
    Unknown(String),
}

impl JobStatus {
    /// Parse a status string as reported by the server (case-insensitive).
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "queued" => Self::Queued,
            "downloading" => Self::Downloading,
            "processing" => Self::Processing,
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            "error" => Self::Error,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Unknown(raw.to_string()),
        }
    }

    /// Wire name of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Queued => "queued",
            Self::Downloading => "downloading",
            Self::Processing => "processing",
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Error => "error",
            Self::Cancelled => "cancelled",
            Self::Unknown(raw) => raw,
        }
    }

    /// Whether the job will not change state any more.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Error | Self::Cancelled
        )
    }

    /// Whether this is the successful terminal state.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Whether the status string was recognised.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for JobStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JobStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Response to job creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHandle {
    /// Server-assigned job id
    pub id: String,
    /// Status at creation time
    pub status: JobStatus,
    /// Server-supplied error message, when creation already failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobHandle {
    /// Create a handle with no error message.
    pub fn new(id: impl Into<String>, status: JobStatus) -> Self {
        Self {
            id: id.into(),
            status,
            error: None,
        }
    }

    /// Attach the server's error message.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// One observation of a job's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSnapshot {
    /// Job id
    pub id: String,
    /// Current status
    pub status: JobStatus,
    /// Progress as reported by the server (usually 0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    /// `fileUrl` or `filePath` of the finished artifact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_location: Option<String>,
    /// Number of pages in the finished artifact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Server-supplied error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobSnapshot {
    /// Create a snapshot with only id and status set.
    pub fn new(id: impl Into<String>, status: JobStatus) -> Self {
        Self {
            id: id.into(),
            status,
            progress: None,
            file_location: None,
            page_count: None,
            error: None,
        }
    }
}
