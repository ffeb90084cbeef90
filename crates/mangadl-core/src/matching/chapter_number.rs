//! Chapter number extraction from display titles.
//!
//! Titles often carry a volume number before the chapter number
//! (`"Vol.01 Ch.008 - Nami"`), so taking the first number in the title is
//! wrong. The chapter label is the primary signal; positional patterns are
//! only consulted when no label is present.

use std::sync::LazyLock;

use regex::Regex;

/// Patterns in priority order. Each captures the number in group 1.
static CHAPTER_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // "Chapter 1", "Ch.828", "ch 12.5", "Episode 3", "Ep.4"
        // The label must not continue a word ("Watch 5", "Deep 3").
        Regex::new(r"(?i)(?:^|[^\p{L}])(?:chapter|ch|episode|ep)\.?\s*(\d+(?:\.\d+)?)")
            .expect("label pattern is valid"),
        // "12 - Title", "1.5: Title"
        Regex::new(r"^(\d+(?:\.\d+)?)\s*[-:]").expect("leading pattern is valid"),
        // "42"
        Regex::new(r"^(\d+(?:\.\d+)?)$").expect("bare pattern is valid"),
    ]
});

/// Extract the chapter number from a chapter's display title.
///
/// Returns the value captured by the first matching pattern, or `None` when
/// no pattern matches.
///
/// ```
/// use mangadl_core::extract_chapter_number;
///
/// assert_eq!(extract_chapter_number("Vol.01 Ch.008 - Nami"), Some(8.0));
/// assert_eq!(extract_chapter_number("Ch.132.5 Extra"), Some(132.5));
/// assert_eq!(extract_chapter_number("Prologue"), None);
/// ```
pub fn extract_chapter_number(title: &str) -> Option<f64> {
    let title = title.trim();

    CHAPTER_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(title)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
    })
}
