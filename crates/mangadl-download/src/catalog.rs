//! Paged catalog search and manga resolution.

use std::sync::Arc;

use mangadl_core::{
    ContentApiPort, DownloadError, MangaRecord, MatchKind, MatchPolicy, SearchQuery,
    resolve_manga,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::SearchConfig;

/// A manga picked from search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedManga {
    /// The selected record
    pub record: MangaRecord,
    /// Strategy that selected it
    pub match_kind: MatchKind,
    /// Title that produced the match
    pub query: String,
}

/// Searches a source and resolves titles against the results.
#[derive(Clone)]
pub struct Catalog {
    api: Arc<dyn ContentApiPort>,
    config: SearchConfig,
}

impl Catalog {
    /// Create a catalog over the given API.
    pub fn new(api: Arc<dyn ContentApiPort>, config: SearchConfig) -> Self {
        Self { api, config }
    }

    /// Collect search results across up to `max_pages` pages.
    ///
    /// Stops early on an empty page or once the server-reported page count
    /// is reached, and pauses `page_delay` between pages.
    pub async fn search(&self, source_id: &str, text: &str) -> Result<Vec<MangaRecord>, DownloadError> {
        let mut results = Vec::new();

        for page in 1..=self.config.max_pages {
            if page > 1 {
                tokio::time::sleep(self.config.page_delay).await;
            }

            let query = SearchQuery::new(source_id, text)
                .with_page(page)
                .with_page_size(self.config.page_size);
            let found = self.api.search_manga(&query).await?;
            debug!(source_id, text, page, items = found.items.len(), "Fetched search page");

            if found.items.is_empty() {
                break;
            }
            let last_page = found.total_pages.is_some_and(|total| page >= total);
            results.extend(found.items);
            if last_page {
                break;
            }
        }

        Ok(results)
    }

    /// Search for `title` and pick the best candidate under `policy`.
    ///
    /// `Ok(None)` means the search worked but nothing matched.
    pub async fn resolve(
        &self,
        source_id: &str,
        title: &str,
        policy: MatchPolicy,
    ) -> Result<Option<ResolvedManga>, DownloadError> {
        let candidates = self.search(source_id, title).await?;

        let Some(found) = resolve_manga(&candidates, title, policy) else {
            debug!(source_id, title, candidates = candidates.len(), "No manga matched");
            return Ok(None);
        };

        if found.kind.is_weak() {
            warn!(
                query = title,
                selected = %found.record.title,
                "No title matched; using the first search result"
            );
        } else {
            info!(
                query = title,
                selected = %found.record.title,
                match_kind = %found.kind,
                "Resolved manga"
            );
        }

        Ok(Some(ResolvedManga {
            record: found.record.clone(),
            match_kind: found.kind,
            query: title.to_string(),
        }))
    }

    /// Try `titles` in order; the first one that resolves wins.
    pub async fn resolve_first<'t>(
        &self,
        source_id: &str,
        titles: impl IntoIterator<Item = &'t str>,
        policy: MatchPolicy,
    ) -> Result<Option<ResolvedManga>, DownloadError> {
        for title in titles {
            if title.trim().is_empty() {
                continue;
            }
            if let Some(found) = self.resolve(source_id, title, policy).await? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mangadl_core::{ApiPortError, MockContentApiPort, SearchPage};
    use std::time::Duration;
    use tokio::time::Instant;

    fn page(titles: &[&str], page: u32, total_pages: Option<u32>) -> SearchPage {
        SearchPage {
            items: titles
                .iter()
                .map(|t| MangaRecord::new(format!("id-{t}"), *t, "src"))
                .collect(),
            page,
            total_pages,
        }
    }

    fn catalog(mock: MockContentApiPort, config: SearchConfig) -> Catalog {
        Catalog::new(Arc::new(mock), config)
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_paginates_with_courtesy_delay() {
        let mut mock = MockContentApiPort::new();
        mock.expect_search_manga()
            .withf(|q| q.page == 1)
            .times(1)
            .returning(|_| Ok(page(&["A"], 1, Some(2))));
        mock.expect_search_manga()
            .withf(|q| q.page == 2)
            .times(1)
            .returning(|_| Ok(page(&["B"], 2, Some(2))));

        let config = SearchConfig::default().with_max_pages(5);
        let started = Instant::now();
        let results = catalog(mock, config).search("src", "x").await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(started.elapsed(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_stops_on_empty_page() {
        let mut mock = MockContentApiPort::new();
        mock.expect_search_manga()
            .withf(|q| q.page == 1)
            .returning(|_| Ok(page(&["A", "B"], 1, None)));
        mock.expect_search_manga()
            .withf(|q| q.page == 2)
            .times(1)
            .returning(|_| Ok(page(&[], 2, None)));

        let config = SearchConfig::default().with_max_pages(5);
        let results = catalog(mock, config).search("src", "x").await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_single_page_by_default() {
        let mut mock = MockContentApiPort::new();
        mock.expect_search_manga()
            .times(1)
            .returning(|q| {
                assert_eq!(q.page_size, 100);
                Ok(page(&["A"], 1, Some(9)))
            });

        let results = catalog(mock, SearchConfig::default()).search("src", "x").await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_first_tries_alternatives_in_order() {
        let mut mock = MockContentApiPort::new();
        mock.expect_search_manga()
            .withf(|q| q.text == "Shingeki no Kyojin")
            .returning(|_| Ok(page(&["Attack on Titan"], 1, None)));
        mock.expect_search_manga()
            .withf(|q| q.text == "Attack on Titan")
            .times(1)
            .returning(|_| Ok(page(&["Attack on Titan", "Attack on Titan: Junior High"], 1, None)));
        mock.expect_search_manga()
            .withf(|q| q.text == "AoT")
            .never();

        let found = catalog(mock, SearchConfig::default())
            .resolve_first(
                "src",
                ["Shingeki no Kyojin", "Attack on Titan", "AoT"],
                MatchPolicy::Fuzzy,
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.record.title, "Attack on Titan");
        assert_eq!(found.match_kind, MatchKind::Exact);
        assert_eq!(found.query, "Attack on Titan");
    }

    #[tokio::test]
    async fn test_search_error_propagates() {
        let mut mock = MockContentApiPort::new();
        mock.expect_search_manga()
            .returning(|_| Err(ApiPortError::RateLimited));

        let err = catalog(mock, SearchConfig::default())
            .resolve("src", "x", MatchPolicy::Fuzzy)
            .await
            .unwrap_err();
        assert!(matches!(err, DownloadError::Transport { status_code: Some(429), .. }));
    }
}
