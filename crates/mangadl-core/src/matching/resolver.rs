//! Entity resolution.
//!
//! # Manga cascade
//!
//! First matching strategy wins:
//!
//! 1. Exact - trimmed, case-insensitive title equality
//! 2. Normalized - equality after [`normalize_title`]
//! 3. Partial - query is a substring of the title; shortest title wins
//! 4. First result - first usable candidate in caller order
//!
//! [`MatchPolicy`] limits how far down the cascade a caller is willing to go,
//! and every match reports its [`MatchKind`] so a weak guess can be detected.
//!
//! # Chapter cascade
//!
//! Numeric requests compare against the declared `number` first, then
//! against [`extract_chapter_number`] applied to each title. Comparison is
//! exact float equality: `8` matches `8.0` but never `8.1`. Non-numeric
//! requests match titles exactly (case-insensitive), then by substring.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::chapter_number::extract_chapter_number;
use super::title::normalize_title;
use crate::domain::{ChapterRecord, IdNormalizer, MangaRecord};

/// Which strategy produced a manga match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Case-insensitive title equality
    Exact,
    /// Equality after title normalization
    Normalized,
    /// Query contained in the title
    Partial,
    /// No strategy matched; first candidate returned as a guess
    FirstResult,
}

impl MatchKind {
    /// Whether the match should be confirmed by a human before use.
    #[must_use]
    pub const fn is_weak(self) -> bool {
        matches!(self, Self::FirstResult)
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::Normalized => "normalized",
            Self::Partial => "partial",
            Self::FirstResult => "first_result",
        })
    }
}

/// How far down the manga cascade resolution may go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Exact and normalized matches only
    ExactOnly,
    /// Exact, normalized and partial matches
    #[default]
    Fuzzy,
    /// Everything, including the first-result guess
    FuzzyWithFallback,
}

impl MatchPolicy {
    const fn allows(self, kind: MatchKind) -> bool {
        match self {
            Self::ExactOnly => matches!(kind, MatchKind::Exact | MatchKind::Normalized),
            Self::Fuzzy => !matches!(kind, MatchKind::FirstResult),
            Self::FuzzyWithFallback => true,
        }
    }
}

/// A resolved manga and the strategy that found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MangaMatch<'a> {
    /// The selected candidate
    pub record: &'a MangaRecord,
    /// Strategy that selected it
    pub kind: MatchKind,
}

/// Select the best candidate for `query`.
///
/// Candidates without a title are skipped.
pub fn resolve_manga<'a>(
    candidates: &'a [MangaRecord],
    query: &str,
    policy: MatchPolicy,
) -> Option<MangaMatch<'a>> {
    let usable: Vec<&MangaRecord> = candidates.iter().filter(|c| c.has_title()).collect();
    let wanted = query.trim().to_lowercase();

    let found = |record: &'a MangaRecord, kind: MatchKind| MangaMatch { record, kind };

    if let Some(record) = usable
        .iter()
        .copied()
        .find(|c| c.title.trim().to_lowercase() == wanted)
    {
        return Some(found(record, MatchKind::Exact));
    }

    let normalized_query = normalize_title(query);
    if !normalized_query.is_empty() {
        if let Some(record) = usable
            .iter()
            .copied()
            .find(|c| normalize_title(&c.title) == normalized_query)
        {
            return Some(found(record, MatchKind::Normalized));
        }
    }

    if policy.allows(MatchKind::Partial) && !wanted.is_empty() {
        // Shorter titles are more likely the main series than a spin-off
        if let Some(record) = usable
            .iter()
            .copied()
            .filter(|c| c.title.to_lowercase().contains(&wanted))
            .min_by_key(|c| c.title.chars().count())
        {
            return Some(found(record, MatchKind::Partial));
        }
    }

    if policy.allows(MatchKind::FirstResult) {
        return usable.first().copied().map(|record| {
            debug!(query, title = %record.title, "No title strategy matched, guessing first result");
            found(record, MatchKind::FirstResult)
        });
    }

    None
}

/// A user-supplied chapter reference.
#[derive(Debug, Clone, PartialEq)]
pub enum ChapterSelector {
    /// Chapter number, compared by exact float equality
    Number(f64),
    /// Free-text chapter label
    Label(String),
}

impl ChapterSelector {
    /// Interpret user input: anything that parses as a finite number is a number.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => Self::Number(number),
            _ => Self::Label(trimmed.to_string()),
        }
    }
}

impl From<f64> for ChapterSelector {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for ChapterSelector {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl fmt::Display for ChapterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

/// Find the chapter referenced by `selector`.
#[allow(clippy::float_cmp)] // Exact equality is the contract: 8 must not match 8.1
pub fn resolve_chapter<'a>(
    chapters: &'a [ChapterRecord],
    selector: &ChapterSelector,
) -> Option<&'a ChapterRecord> {
    match selector {
        ChapterSelector::Number(wanted) => chapters
            .iter()
            .find(|c| c.number == Some(*wanted))
            .or_else(|| {
                chapters
                    .iter()
                    .find(|c| extract_chapter_number(&c.title) == Some(*wanted))
            }),
        ChapterSelector::Label(label) => {
            let wanted = label.trim().to_lowercase();
            if wanted.is_empty() {
                return None;
            }
            chapters
                .iter()
                .find(|c| c.title.trim().to_lowercase() == wanted)
                .or_else(|| {
                    chapters
                        .iter()
                        .find(|c| c.title.to_lowercase().contains(&wanted))
                })
        }
    }
}

/// Find the chapter for a raw request that may be a chapter id or a chapter reference.
///
/// A numeric request is a chapter number first and an id only when no
/// chapter carries that number. Any other request is compared against ids
/// through `normalizer` first, then matched as a label.
pub fn resolve_requested_chapter<'a>(
    chapters: &'a [ChapterRecord],
    requested: &str,
    normalizer: &dyn IdNormalizer,
) -> Option<&'a ChapterRecord> {
    let by_id = move || {
        let wanted_key = normalizer.normalize(requested);
        chapters
            .iter()
            .find(|c| normalizer.normalize(&c.id) == wanted_key)
    };

    let selector = ChapterSelector::parse(requested);
    match selector {
        ChapterSelector::Number(_) => resolve_chapter(chapters, &selector).or_else(by_id),
        ChapterSelector::Label(_) => by_id().or_else(|| resolve_chapter(chapters, &selector)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawIdNormalizer;
    use crate::domain::StructuredIdNormalizer;

    fn manga(titles: &[&str]) -> Vec<MangaRecord> {
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| MangaRecord::new(format!("m{i}"), *t, "src"))
            .collect()
    }

    #[test]
    fn test_exact_match_wins_over_everything() {
        let candidates = manga(&["Berserk: The Prototype", "berserk", "Berserk!"]);
        let m = resolve_manga(&candidates, "  Berserk ", MatchPolicy::Fuzzy).unwrap();
        assert_eq!(m.record.id, "m1");
        assert_eq!(m.kind, MatchKind::Exact);
    }

    #[test]
    fn test_normalized_match() {
        let candidates = manga(&["Cheeky Brat", "Namaikizakari."]);
        let m = resolve_manga(&candidates, "Namaikizakari", MatchPolicy::ExactOnly).unwrap();
        assert_eq!(m.record.title, "Namaikizakari.");
        assert_eq!(m.kind, MatchKind::Normalized);
    }

    #[test]
    fn test_partial_prefers_shortest_title() {
        let candidates = manga(&[
            "One Punch Man (Webcomic)",
            "One Punch Man: Extra",
            "One Punch Man Official Anthology",
        ]);
        let m = resolve_manga(&candidates, "one punch man", MatchPolicy::Fuzzy).unwrap();
        assert_eq!(m.record.title, "One Punch Man: Extra");
        assert_eq!(m.kind, MatchKind::Partial);
    }

    #[test]
    fn test_shorter_title_returned_for_exact_prefix() {
        let candidates = manga(&["One Punch Man: Extra", "One Punch Man"]);
        let m = resolve_manga(&candidates, "one punch man", MatchPolicy::Fuzzy).unwrap();
        assert_eq!(m.record.title, "One Punch Man");
    }

    #[test]
    fn test_partial_tie_keeps_caller_order() {
        let candidates = manga(&["Blame! Alpha", "Blame! Omega"]);
        let m = resolve_manga(&candidates, "blame!", MatchPolicy::Fuzzy).unwrap();
        assert_eq!(m.record.id, "m0");
    }

    #[test]
    fn test_exact_only_policy_rejects_partial() {
        let candidates = manga(&["One Punch Man: Extra"]);
        assert!(resolve_manga(&candidates, "one punch man", MatchPolicy::ExactOnly).is_none());
    }

    #[test]
    fn test_first_result_fallback_is_flagged() {
        let candidates = manga(&["", "Vagabond", "Monster"]);
        assert!(resolve_manga(&candidates, "berserk", MatchPolicy::Fuzzy).is_none());

        let m = resolve_manga(&candidates, "berserk", MatchPolicy::FuzzyWithFallback).unwrap();
        assert_eq!(m.record.title, "Vagabond");
        assert_eq!(m.kind, MatchKind::FirstResult);
        assert!(m.kind.is_weak());
    }

    #[test]
    fn test_untitled_candidates_skipped() {
        let candidates = manga(&["   ", "Berserk"]);
        let m = resolve_manga(&candidates, "berserk", MatchPolicy::ExactOnly).unwrap();
        assert_eq!(m.record.id, "m1");
    }

    #[test]
    fn test_empty_candidates() {
        assert!(resolve_manga(&[], "berserk", MatchPolicy::FuzzyWithFallback).is_none());
    }

    #[test]
    fn test_resolution_is_stable_for_normalized_query() {
        let candidates = manga(&["One-Punch Man", "One Piece"]);
        let query = normalize_title("One Punch-Man");
        let first = resolve_manga(&candidates, &query, MatchPolicy::Fuzzy).unwrap();
        for _ in 0..3 {
            let again = resolve_manga(&candidates, &query, MatchPolicy::Fuzzy).unwrap();
            assert_eq!(again, first);
        }
        assert_eq!(first.kind, MatchKind::Normalized);
        assert_eq!(first.record.title, "One-Punch Man");
    }

    fn chapters() -> Vec<ChapterRecord> {
        vec![
            ChapterRecord::new("c132", "Vol.14 Ch.132 - Main"),
            ChapterRecord::new("c132.5", "Vol.14 Ch.132.5 - Extra"),
            ChapterRecord::new("c8.1", "Side").with_number(8.1),
            ChapterRecord::new("c8", "Eight").with_number(8.0),
        ]
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(ChapterSelector::parse(" 8 "), ChapterSelector::Number(8.0));
        assert_eq!(ChapterSelector::parse("8.1"), ChapterSelector::Number(8.1));
        assert_eq!(
            ChapterSelector::parse("Prologue"),
            ChapterSelector::Label("Prologue".to_string())
        );
        assert_eq!(ChapterSelector::parse("inf"), ChapterSelector::Label("inf".to_string()));
    }

    #[test]
    fn test_integer_request_matches_declared_number_only_exactly() {
        let list = chapters();
        assert_eq!(resolve_chapter(&list, &ChapterSelector::Number(8.0)).unwrap().id, "c8");
        assert_eq!(resolve_chapter(&list, &ChapterSelector::Number(8.1)).unwrap().id, "c8.1");
    }

    #[test]
    fn test_integer_request_does_not_match_fraction_in_title() {
        let list = chapters();
        assert_eq!(resolve_chapter(&list, &ChapterSelector::Number(132.0)).unwrap().id, "c132");
        assert_eq!(resolve_chapter(&list, &ChapterSelector::Number(132.5)).unwrap().id, "c132.5");
        assert!(resolve_chapter(&list, &ChapterSelector::Number(14.0)).is_none());
    }

    #[test]
    fn test_declared_number_preferred_over_title() {
        let list = vec![
            ChapterRecord::new("by-title", "Chapter 5"),
            ChapterRecord::new("by-number", "Bonus").with_number(5.0),
        ];
        assert_eq!(resolve_chapter(&list, &ChapterSelector::Number(5.0)).unwrap().id, "by-number");
    }

    #[test]
    fn test_label_exact_then_substring() {
        let list = vec![
            ChapterRecord::new("a", "Prologue - Part 2"),
            ChapterRecord::new("b", "Prologue"),
        ];
        assert_eq!(resolve_chapter(&list, &"prologue".into()).unwrap().id, "b");
        assert_eq!(resolve_chapter(&list, &"part 2".into()).unwrap().id, "a");
        assert!(resolve_chapter(&list, &"epilogue".into()).is_none());
    }

    #[test]
    fn test_requested_chapter_by_structured_id() {
        let list = vec![
            ChapterRecord::new(r#"{"post":"1","slug":"ch-1"}"#, "Chapter 1"),
            ChapterRecord::new(r#"{"post":"2","slug":"ch-2"}"#, "Chapter 2"),
        ];
        let normalizer = StructuredIdNormalizer;

        let found = resolve_requested_chapter(&list, r#"{"slug":"ch-2","post":"2"}"#, &normalizer);
        assert_eq!(found.unwrap().title, "Chapter 2");

        let found = resolve_requested_chapter(&list, "1", &normalizer);
        assert_eq!(found.unwrap().title, "Chapter 1");

        assert!(resolve_requested_chapter(&list, "nonexistent", &normalizer).is_none());
    }

    #[test]
    fn test_numeric_request_prefers_chapter_number_over_id() {
        let list = vec![
            ChapterRecord::new("10", "Chapter 1"),
            ChapterRecord::new("1", "Chapter 10"),
            ChapterRecord::new("9001", "Omake"),
        ];
        let normalizer = RawIdNormalizer;

        assert_eq!(resolve_requested_chapter(&list, "1", &normalizer).unwrap().title, "Chapter 1");
        assert_eq!(resolve_requested_chapter(&list, "10", &normalizer).unwrap().title, "Chapter 10");
        // No chapter is numbered 9001, so the id is used
        assert_eq!(resolve_requested_chapter(&list, "9001", &normalizer).unwrap().title, "Omake");
    }
}
