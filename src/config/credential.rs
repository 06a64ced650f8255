//! API key loading and sanity checks

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use super::Config;

/// Keys shorter than this are almost certainly truncated or the wrong file.
///
/// This is a plausibility check, not validation.
pub const MIN_API_KEY_LEN: usize = 1000;

/// API key passed explicitly to the client
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Trim and sanity-check a raw key.
    pub fn new(raw: &str) -> Result<Self> {
        let key = raw.trim();

        if key.is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }
        if key.len() < MIN_API_KEY_LEN {
            return Err(ConfigError::InvalidApiKey(format!(
                "only {} bytes, expected at least {}",
                key.len(),
                MIN_API_KEY_LEN
            ))
            .into());
        }
        if key.chars().any(char::is_whitespace) {
            return Err(
                ConfigError::InvalidApiKey("contains embedded whitespace".to_string()).into(),
            );
        }

        Ok(Self(key.to_string()))
    }

    /// Read a key file whose sole contents are the key.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Invalid(format!("Cannot read key file {}: {}", path.display(), e))
        })?;
        Self::new(&contents)
    }

    /// Raw header value
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tail: String = self
            .0
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        write!(f, "ApiKey(****{}, {} bytes)", tail, self.0.len())
    }
}

/// Where the key came from, for `status` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    KeyFileFlag(PathBuf),
    Environment,
    ConfigKeyFile(PathBuf),
    ConfigInline,
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::KeyFileFlag(p) => write!(f, "--key-file {}", p.display()),
            KeySource::Environment => write!(f, "ZN_API_KEY environment variable"),
            KeySource::ConfigKeyFile(p) => write!(f, "api_key_file {}", p.display()),
            KeySource::ConfigInline => write!(f, "api_key in config file"),
        }
    }
}

impl Config {
    /// Pick the API key source.
    ///
    /// Precedence: `--key-file` > `ZN_API_KEY` > `api_key_file` > `api_key`.
    pub fn key_source(&self, key_file: Option<&Path>, env_key: Option<&str>) -> Option<KeySource> {
        if let Some(path) = key_file {
            return Some(KeySource::KeyFileFlag(path.to_path_buf()));
        }
        if env_key.is_some_and(|k| !k.trim().is_empty()) {
            return Some(KeySource::Environment);
        }
        if let Some(ref path) = self.api_key_file {
            return Some(KeySource::ConfigKeyFile(path.clone()));
        }
        if self.api_key.is_some() {
            return Some(KeySource::ConfigInline);
        }
        None
    }

    /// Load the API key from the highest-precedence source.
    pub fn api_key_from(&self, key_file: Option<&Path>, env_key: Option<&str>) -> Result<ApiKey> {
        match self.key_source(key_file, env_key) {
            Some(KeySource::KeyFileFlag(path)) | Some(KeySource::ConfigKeyFile(path)) => {
                ApiKey::from_file(&path)
            }
            Some(KeySource::Environment) => ApiKey::new(env_key.unwrap_or_default()),
            Some(KeySource::ConfigInline) => ApiKey::new(self.api_key.as_deref().unwrap_or_default()),
            None => Err(ConfigError::MissingApiKey.into()),
        }
    }
}
