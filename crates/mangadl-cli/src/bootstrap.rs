//! Composition root: builds the API client the handlers share.

use std::sync::Arc;

use mangadl_api::{ApiClientConfig, DefaultContentApiClient};
use mangadl_core::ContentApiPort;
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Settings taken from global flags and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Content API base URL, or the client default
    pub api_url: Option<String>,
    /// Source every command queries
    pub source_id: String,
}

impl CliConfig {
    /// Read the global options of a parsed command line.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_url: cli.url.clone(),
            source_id: cli.source.trim().to_string(),
        }
    }
}

/// Dependencies shared by all handlers.
pub struct CliContext {
    client: Arc<DefaultContentApiClient>,
    /// Source every command queries
    pub source_id: String,
}

impl CliContext {
    /// The client as a port, for the orchestration layer.
    pub fn api(&self) -> Arc<dyn ContentApiPort> {
        self.client.clone()
    }

    /// The concrete client, for endpoints outside the port.
    pub fn client(&self) -> &DefaultContentApiClient {
        &self.client
    }
}

/// Build the handler context.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    if config.source_id.is_empty() {
        return Err(CliError::Config("source must not be empty".to_string()));
    }

    let mut api_config = ApiClientConfig::new();
    if let Some(url) = config.api_url {
        api_config = api_config.with_base_url(url);
    }
    let client = DefaultContentApiClient::new(&api_config)?;
    debug!(base_url = %client.base_url(), source_id = %config.source_id, "Content API client ready");

    Ok(CliContext {
        client: Arc::new(client),
        source_id: config.source_id,
    })
}
