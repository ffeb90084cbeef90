//! Search, manga detail and chapter listing.

use mangadl_core::{ChapterRecord, MangaRecord, SearchPage, SearchQuery};

use super::ContentApiClient;
use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::parsing::{parse_chapter_list, parse_manga, parse_manga_list};
use crate::url::{build_chapters_url, build_manga_url, build_search_url};

impl<B: HttpBackend> ContentApiClient<B> {
    /// Fetch one page of search results.
    pub(crate) async fn fetch_search_page(&self, query: &SearchQuery) -> ApiResult<SearchPage> {
        let url = build_search_url(&self.config, query);
        let payload = self.get("search", &url).await?;
        let items = parse_manga_list(&payload.data, &query.source_id)?;

        Ok(SearchPage {
            items,
            page: query.page,
            total_pages: payload.total_pages,
        })
    }

    /// Fetch a manga's detail record.
    pub(crate) async fn fetch_manga(&self, source_id: &str, manga_id: &str) -> ApiResult<MangaRecord> {
        let url = build_manga_url(&self.config, source_id, manga_id);
        let payload = self.get("manga", &url).await?;
        parse_manga(&payload.data, source_id)
    }

    /// Fetch the full chapter list of a manga.
    pub(crate) async fn fetch_chapters(
        &self,
        source_id: &str,
        manga_id: &str,
    ) -> ApiResult<Vec<ChapterRecord>> {
        let url = build_chapters_url(&self.config, source_id, manga_id);
        let payload = self.get("chapters", &url).await?;
        parse_chapter_list(&payload.data)
    }
}
