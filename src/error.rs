//! Error types for znops

use std::time::Duration;
use thiserror::Error;

use crate::client::models::{OperationKind, ResourceKind, ResourceMatch};

/// Result type alias for znops operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Poll(#[from] PollError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API transport and protocol errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the API key (run `znops init` or set ZN_API_KEY).")]
    Unauthorized,

    #[error("Access denied. The API key lacks permission for this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    /// Any other non-2xx response; keeps the raw status and body for diagnosis.
    #[error("API returned HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    /// The response did not have the shape we expected.
    #[error("Unexpected API response: {0}")]
    Protocol(String),
}

impl ApiError {
    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::RateLimit(_) => Some(429),
            ApiError::Transport { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Protocol(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Resource lookup-or-create failures
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{kind} not found: {name}\n\nUse 'znops {cmd} list' to see available resources.", cmd = .kind.command())]
    NotFound { kind: ResourceKind, name: String },

    #[error("{kind} name '{name}' is ambiguous, {} candidates match:\n{}", .candidates.len(), format_candidates(.candidates))]
    Ambiguous {
        kind: ResourceKind,
        name: String,
        candidates: Vec<ResourceMatch>,
    },

    #[error("Failed to create {kind} '{name}': {source}")]
    CreateFailed {
        kind: ResourceKind,
        name: String,
        #[source]
        source: ApiError,
    },
}

fn format_candidates(candidates: &[ResourceMatch]) -> String {
    candidates
        .iter()
        .map(|c| format!("  {}  {}", c.id, c.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Asynchronous operation wait failures
#[derive(Debug, Error)]
pub enum PollError {
    #[error("{kind} {id} failed with status '{status}'")]
    Failed {
        kind: OperationKind,
        id: String,
        status: String,
    },

    #[error("Timed out after {elapsed:?} waiting for {kind} {id} (still running on the server)")]
    Timeout {
        kind: OperationKind,
        id: String,
        elapsed: Duration,
    },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `znops init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API key not configured. Run `znops init`, set ZN_API_KEY, or pass --key-file.")]
    MissingApiKey,

    #[error("API key looks invalid: {0}")]
    InvalidApiKey(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
