//! CLI entry point - the composition root.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mangadl_cli::handlers::{self, download::DownloadArgs};
use mangadl_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = bootstrap(CliConfig::from_cli(&cli))?;

    match cli.command {
        Commands::Search { query, page, limit } => {
            handlers::search::execute(&ctx, &query, page, limit).await
        }
        Commands::Chapters { manga } => handlers::chapters::execute(&ctx, &manga).await,
        Commands::Validate { manga, chapters } => {
            handlers::validate::execute(&ctx, &manga, &chapters).await
        }
        Commands::Download {
            manga,
            chapters,
            alt_titles,
            format,
            quality,
            no_metadata,
            no_validate,
            no_wait,
            fallback,
            poll_interval,
            max_wait,
        } => {
            let args = DownloadArgs {
                manga,
                chapters,
                alt_titles,
                format,
                quality,
                include_metadata: !no_metadata,
                validate_first: !no_validate,
                wait: !no_wait,
                fallback,
                poll_interval: Duration::from_secs(poll_interval),
                max_wait: Duration::from_secs(max_wait),
            };
            handlers::download::execute(&ctx, args).await
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env before parsing so clap sees MANGADL_* variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}
