//! Matching of human-supplied identifiers against source records.
//!
//! - `title` - title canonicalization for fuzzy equality
//! - `chapter_number` - chapter number extraction from display titles
//! - `resolver` - manga and chapter resolution cascades

mod chapter_number;
mod resolver;
mod title;

pub use chapter_number::extract_chapter_number;
pub use resolver::{
    ChapterSelector, MangaMatch, MatchKind, MatchPolicy, resolve_chapter, resolve_manga,
    resolve_requested_chapter,
};
pub use title::normalize_title;
