//! Chapters handler: resolve a manga and list what it has.

use anyhow::Result;
use mangadl_core::{ChapterRecord, MatchPolicy, extract_chapter_number};
use mangadl_download::{Catalog, SearchConfig};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the chapters command.
pub async fn execute(ctx: &CliContext, manga: &str) -> Result<()> {
    let api = ctx.api();
    let catalog = Catalog::new(api.clone(), SearchConfig::default());

    let Some(resolved) = catalog
        .resolve(&ctx.source_id, manga, MatchPolicy::FuzzyWithFallback)
        .await?
    else {
        return Err(CliError::Failed(format!("No manga matching '{manga}' on {}", ctx.source_id)).into());
    };

    let detail = api.get_manga(&ctx.source_id, &resolved.record.id).await?;
    let chapters = api.list_chapters(&ctx.source_id, &resolved.record.id).await?;

    println!("{} ({})", detail.title, detail.id);
    if resolved.match_kind.is_weak() {
        println!("Note: no title matched '{manga}'; this is the first search result.");
    }
    println!("{} chapters\n", chapters.len());
    for chapter in &chapters {
        println!("{}", chapter_line(chapter));
    }
    Ok(())
}

/// One line of the chapter listing: number (declared or extracted), title, id.
fn chapter_line(chapter: &ChapterRecord) -> String {
    let number = chapter
        .number
        .or_else(|| extract_chapter_number(&chapter.title))
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    format!("{number:>7}  {:<40}  {}", chapter.title, chapter.id)
}
