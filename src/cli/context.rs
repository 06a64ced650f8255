//! Command execution context
//!
//! Loads config, picks the API key and builds the client once per command.

use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::ZnClient;
use crate::config::Config;
use crate::error::Result;
use crate::ops::Resolver;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// API client carrying the resolved key
    pub client: Arc<ZnClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable, no API key is
    /// available, or the key fails the sanity checks.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default_at(opts.config_ref())?;

        if let Some(source) = config.key_source(opts.key_file_ref(), opts.api_key_ref()) {
            debug!("Using API key from {}", source);
        }
        let api_key = config.api_key_from(opts.key_file_ref(), opts.api_key_ref())?;

        let api_url = opts
            .api_url
            .clone()
            .or_else(|| config.api_url.clone());
        let client = Arc::new(ZnClient::with_base_url(api_key, api_url)?);
        debug!("API root: {}", client.base_url());

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }

    /// Resolver using the configured page size.
    pub fn resolver(&self) -> Resolver<'_, ZnClient> {
        Resolver::new(self.client.as_ref()).page_size(self.config.preferences.page_size)
    }
}
