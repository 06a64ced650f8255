//! Global CLI options shared across all commands
//!
//! Consolidates the global flags so handlers take one argument instead of
//! threading each flag separately.

use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.znops/config.yaml)
    pub config: Option<String>,

    /// File holding the API key
    pub key_file: Option<PathBuf>,

    /// API key from the environment
    pub api_key: Option<String>,

    /// API root override
    pub api_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            key_file: cli.key_file.clone(),
            api_key: cli.api_key.clone(),
            api_url: cli.api_url.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get key file path as `Option<&Path>`.
    pub fn key_file_ref(&self) -> Option<&Path> {
        self.key_file.as_deref()
    }

    /// Get the environment API key as `Option<&str>`.
    pub fn api_key_ref(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get API root override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}
