//! Main CLI parser and top-level argument handling.
//!
//! Global options are accepted before or after the subcommand.

use clap::Parser;

use crate::commands::Commands;

/// Source used when neither `--source` nor `MANGADL_SOURCE` is given.
pub const DEFAULT_SOURCE: &str = "mangahere";

/// Command-line interface for the manga download client.
#[derive(Parser)]
#[command(name = "mangadl")]
#[command(about = "Resolve and download manga chapters through a content API")]
#[command(version)]
pub struct Cli {
    /// Content API base URL
    #[arg(long = "url", env = "MANGADL_API_URL", global = true)]
    pub url: Option<String>,

    /// Source to query
    #[arg(long = "source", env = "MANGADL_SOURCE", default_value = DEFAULT_SOURCE, global = true)]
    pub source: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "mangadl",
            "--verbose",
            "--url",
            "http://api.local/api/v1",
            "search",
            "berserk",
            "--source",
            "mangadex",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.url.as_deref(), Some("http://api.local/api/v1"));
        assert_eq!(cli.source, "mangadex");
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["mangadl"]).is_err());
    }
}
