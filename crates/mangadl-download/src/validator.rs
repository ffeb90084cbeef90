//! Batch validation: which requested chapters exist for a manga.
//!
//! Validation never mutates anything and keeps no cache; every call
//! re-fetches, since source data may change between calls.

use std::collections::BTreeSet;
use std::sync::Arc;

use mangadl_core::{
    ChapterRecord, ContentApiPort, DownloadError, IdNormalizer, IdNormalizers, MangaRecord,
    MatchPolicy, resolve_requested_chapter,
};
use serde::Serialize;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::SearchConfig;

/// A requested identifier and the chapter it resolved to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedChapter {
    /// Identifier as requested
    pub requested: String,
    /// Chapter it resolved to
    pub chapter: ChapterRecord,
}

/// Outcome of a validation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// The manga the query resolved to, if any
    pub resolved_manga: Option<MangaRecord>,
    /// Normalized ids of every chapter the manga has
    pub available_chapter_ids: BTreeSet<String>,
    /// Requested identifiers that did not resolve, in request order
    pub missing_requested: Vec<String>,
    /// Requested identifiers that resolved, in request order
    pub matched: Vec<MatchedChapter>,
}

impl ValidationResult {
    /// The manga resolved and every requested chapter exists.
    pub fn is_success(&self) -> bool {
        self.resolved_manga.is_some() && self.missing_requested.is_empty()
    }

    /// Convert into a result: `Err(NotFound)` or `Err(Validation)` on failure.
    pub fn into_result(self) -> Result<Self, DownloadError> {
        if self.resolved_manga.is_none() {
            return Err(DownloadError::not_found("manga could not be resolved"));
        }
        if !self.missing_requested.is_empty() {
            return Err(DownloadError::validation(self.missing_requested));
        }
        Ok(self)
    }
}

/// Classify requested identifiers against a chapter list.
///
/// Numeric requests match chapter numbers before ids; other requests match
/// ids through `normalizer` before labels.
pub fn check_chapters(
    manga: MangaRecord,
    chapters: &[ChapterRecord],
    requested: &[String],
    normalizer: &dyn IdNormalizer,
) -> ValidationResult {
    let available_chapter_ids = chapters.iter().map(|c| normalizer.normalize(&c.id)).collect();

    let mut missing_requested = Vec::new();
    let mut matched = Vec::new();
    for request in requested {
        match resolve_requested_chapter(chapters, request, normalizer) {
            Some(chapter) => matched.push(MatchedChapter {
                requested: request.clone(),
                chapter: chapter.clone(),
            }),
            None => missing_requested.push(request.clone()),
        }
    }

    ValidationResult {
        resolved_manga: Some(manga),
        available_chapter_ids,
        missing_requested,
        matched,
    }
}

/// Checks chapter availability before committing to a download.
#[derive(Clone)]
pub struct BatchValidator {
    api: Arc<dyn ContentApiPort>,
    catalog: Catalog,
    normalizers: IdNormalizers,
}

impl BatchValidator {
    /// Create a validator.
    pub fn new(api: Arc<dyn ContentApiPort>, search: SearchConfig) -> Self {
        Self {
            catalog: Catalog::new(Arc::clone(&api), search),
            api,
            normalizers: IdNormalizers::default(),
        }
    }

    /// Use a custom id normalizer registry.
    #[must_use]
    pub fn with_normalizers(mut self, normalizers: IdNormalizers) -> Self {
        self.normalizers = normalizers;
        self
    }

    /// Validate `requested` against the manga `manga_query` resolves to.
    ///
    /// The title must match exactly or after normalization; a partial match
    /// is not accepted here. If nothing matches, every request is reported
    /// missing. Only transport failures return `Err`.
    pub async fn validate(
        &self,
        source_id: &str,
        manga_query: &str,
        requested: &[String],
    ) -> Result<ValidationResult, DownloadError> {
        let Some(found) = self
            .catalog
            .resolve(source_id, manga_query, MatchPolicy::ExactOnly)
            .await?
        else {
            info!(source_id, manga_query, "Validation failed: manga not found");
            return Ok(ValidationResult {
                missing_requested: requested.to_vec(),
                ..ValidationResult::default()
            });
        };

        let chapters = self.api.list_chapters(source_id, &found.record.id).await?;
        let result = check_chapters(
            found.record,
            &chapters,
            requested,
            self.normalizers.for_source(source_id),
        );

        info!(
            source_id,
            manga_query,
            available = result.available_chapter_ids.len(),
            matched = result.matched.len(),
            missing = result.missing_requested.len(),
            "Validated chapters"
        );
        Ok(result)
    }
}
