//! Search handler.

use anyhow::{Result, anyhow};
use mangadl_core::SearchQuery;

use crate::bootstrap::CliContext;

/// Execute the search command: print one page of results.
pub async fn execute(ctx: &CliContext, query: &str, page: u32, limit: u32) -> Result<()> {
    let request = SearchQuery::new(ctx.source_id.as_str(), query)
        .with_page(page)
        .with_page_size(limit);

    let found = ctx
        .api()
        .search_manga(&request)
        .await
        .map_err(|e| anyhow!("Search failed: {e}"))?;

    if found.items.is_empty() {
        println!("No manga found for '{query}' on {}", ctx.source_id);
        return Ok(());
    }

    for manga in &found.items {
        println!("{:<40}  {}", manga.title, manga.id);
    }
    match found.total_pages {
        Some(total) => println!("\nPage {} of {total}", found.page),
        None => println!("\n{} results", found.items.len()),
    }
    Ok(())
}
