//! Manga and chapter records plus the search query that produces them.

use serde::{Deserialize, Serialize};

/// A manga as listed by a source.
///
/// `id` is opaque and source-specific; some sources encode a JSON object in
/// it. Never parse it outside of an [`IdNormalizer`](super::IdNormalizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaRecord {
    /// Source-specific identifier
    pub id: String,
    /// Display title (empty when the source did not provide one)
    #[serde(default)]
    pub title: String,
    /// Source the record was fetched from
    #[serde(default)]
    pub source_id: String,
}

impl MangaRecord {
    /// Create a new record.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        source_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            source_id: source_id.into(),
        }
    }

    /// Whether the record carries a usable title.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// A chapter of a manga.
///
/// When `number` is present it is authoritative; otherwise the number is
/// extracted from `title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterRecord {
    /// Source-specific identifier
    pub id: String,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Declared chapter number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
}

impl ChapterRecord {
    /// Create a chapter without a declared number.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            number: None,
        }
    }

    /// Set the declared chapter number.
    #[must_use]
    pub const fn with_number(mut self, number: f64) -> Self {
        self.number = Some(number);
        self
    }
}

/// Search parameters for `GET /sources/{sourceId}/search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Source to search
    pub source_id: String,
    /// Free-text query
    pub text: String,
    /// 1-based page number
    pub page: u32,
    /// Results per page
    pub page_size: u32,
}

impl SearchQuery {
    /// Default page size, large enough that the wanted title is usually on page 1.
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Create a query for the first page.
    pub fn new(source_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            text: text.into(),
            page: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the page number (clamped to at least 1).
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the page size (clamped to at least 1).
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// Records on this page, in server order
    pub items: Vec<MangaRecord>,
    /// Page number that was requested
    pub page: u32,
    /// Total number of pages, when the server reports it
    pub total_pages: Option<u32>,
}

impl SearchPage {
    /// Whether a following page may exist.
    ///
    /// Without a reported page count, a non-empty page is assumed to have a successor.
    #[must_use]
    pub fn has_more(&self) -> bool {
        match self.total_pages {
            Some(total) => self.page < total,
            None => !self.items.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_defaults() {
        let query = SearchQuery::new("mangahere", "berserk");
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 100);
    }

    #[test]
    fn test_search_query_clamps() {
        let query = SearchQuery::new("s", "q").with_page(0).with_page_size(0);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 1);
    }

    #[test]
    fn test_has_title() {
        assert!(MangaRecord::new("1", "Berserk", "s").has_title());
        assert!(!MangaRecord::new("1", "   ", "s").has_title());
    }

    #[test]
    fn test_search_page_has_more() {
        let page = SearchPage {
            items: vec![MangaRecord::new("1", "A", "s")],
            page: 1,
            total_pages: Some(3),
        };
        assert!(page.has_more());

        let last = SearchPage {
            page: 3,
            ..page.clone()
        };
        assert!(!last.has_more());

        let unknown_empty = SearchPage::default();
        assert!(!unknown_empty.has_more());
    }

    #[test]
    fn test_chapter_serialization_skips_missing_number() {
        let json = serde_json::to_value(ChapterRecord::new("c1", "Ch.1")).unwrap();
        assert!(json.get("number").is_none());

        let json = serde_json::to_value(ChapterRecord::new("c1", "Ch.1").with_number(1.5)).unwrap();
        assert_eq!(json["number"], 1.5);
    }
}
