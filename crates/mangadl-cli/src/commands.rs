//! Subcommands.

use clap::Subcommand;
use mangadl_core::{DownloadFormat, DownloadQuality};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search a source for manga
    Search {
        /// Title or keywords
        query: String,
        /// Result page to fetch
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Results per page
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
    },

    /// Resolve a manga and list its chapters
    Chapters {
        /// Manga title
        manga: String,
    },

    /// Check that chapters exist without downloading anything
    Validate {
        /// Manga title (must match exactly or after normalization)
        manga: String,
        /// Chapter ids or numbers, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        chapters: Vec<String>,
    },

    /// Download chapters of a manga
    Download {
        /// Manga title
        manga: String,
        /// Chapter ids or numbers, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        chapters: Vec<String>,
        /// Alternative title to try when the main one does not resolve (repeatable)
        #[arg(long = "alt-title")]
        alt_titles: Vec<String>,
        /// Output format: images, cbz, pdf, epub
        #[arg(short, long, default_value = "cbz")]
        format: DownloadFormat,
        /// Image quality: low, high
        #[arg(short, long, default_value = "high")]
        quality: DownloadQuality,
        /// Do not embed series metadata
        #[arg(long)]
        no_metadata: bool,
        /// Submit chapters without checking them all first
        #[arg(long)]
        no_validate: bool,
        /// Return once jobs are submitted instead of waiting for them
        #[arg(long)]
        no_wait: bool,
        /// Accept the first search result when no title matches
        #[arg(long)]
        fallback: bool,
        /// Seconds between job status checks
        #[arg(long, default_value_t = 2)]
        poll_interval: u64,
        /// Seconds to wait for each job before giving up
        #[arg(long, default_value_t = 600)]
        max_wait: u64,
    },
}
