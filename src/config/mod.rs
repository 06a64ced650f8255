//! Configuration management for znops

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::pagination::DEFAULT_PAGE_SIZE;
use crate::error::{ConfigError, Result};

mod credential;

pub use credential::{ApiKey, KeySource, MIN_API_KEY_LEN};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API key stored inline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Path to a file whose sole contents are the API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_file: Option<PathBuf>,

    /// API root override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Defaults for waiting on jobs and exports
    #[serde(default)]
    pub poll: PollSettings,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Polling defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollSettings {
    /// Seconds between status queries
    #[serde(default = "default_poll_interval")]
    pub interval_secs: u64,

    /// Give up after this many seconds (unset waits forever)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_poll_interval() -> u64 {
    10
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_poll_interval(),
            timeout_secs: None,
        }
    }
}

impl PollSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default page size for list requests
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".znops").join("config.yaml"))
    }

    /// Resolve an optional override path to the path actually used
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// A config file is optional: the API key can come from the environment.
    pub fn load_or_default_at(path: Option<&str>) -> Result<Self> {
        match Self::load_from(&Self::resolve_path(path)?) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // The file may hold the API key
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Save configuration to the override path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Effective API root
    pub fn api_url(&self) -> &str {
        self.api_url
            .as_deref()
            .unwrap_or(crate::client::DEFAULT_API_URL)
    }
}
