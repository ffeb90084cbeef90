//! Validate handler.

use anyhow::Result;
use mangadl_download::{BatchValidator, SearchConfig};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the validate command.
pub async fn execute(ctx: &CliContext, manga: &str, chapters: &[String]) -> Result<()> {
    let validator = BatchValidator::new(ctx.api(), SearchConfig::default());
    let result = validator.validate(&ctx.source_id, manga, chapters).await?;

    let Some(resolved) = &result.resolved_manga else {
        return Err(CliError::Failed(format!(
            "No manga titled '{manga}' on {} (exact match required)",
            ctx.source_id
        ))
        .into());
    };

    println!("{} ({})", resolved.title, resolved.id);
    println!("{} chapters available", result.available_chapter_ids.len());
    for found in &result.matched {
        println!("  ok       {:<10} -> {}", found.requested, found.chapter.title);
    }
    for missing in &result.missing_requested {
        println!("  missing  {missing}");
    }

    if result.is_success() {
        Ok(())
    } else {
        Err(CliError::Failed(format!(
            "{} of {} chapters missing",
            result.missing_requested.len(),
            chapters.len()
        ))
        .into())
    }
}
