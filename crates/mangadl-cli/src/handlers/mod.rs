//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Build the library call from CLI input, run it, format the result
//! - Report "ran but failed" outcomes as `CliError::Failed` after printing
//!
//! Handlers hold no matching or download logic of their own.

pub mod chapters;
pub mod download;
pub mod search;
pub mod validate;
