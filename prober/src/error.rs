//! Prober error types

use thiserror::Error;
use settings::{ConfigError, ProviderId};

/// Result type for prober operations
pub type ProberResult<T> = Result<T, ProberError>;

/// Failure building a provider client or making a provider call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("{} API key is not set", provider.display_name())]
    MissingApiKey { provider: ProviderId },

    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP client initialisation failed: {0}")]
    ClientInit(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed (HTTP {status})")]
    Authentication { status: u16 },

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Model unavailable or endpoint not found: {model} at {url}")]
    ModelUnavailable { model: String, url: String },

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Top-level errors surfaced by the prober binary
#[derive(Error, Debug)]
pub enum ProberError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for ProberError {
    fn from(e: serde_json::Error) -> Self {
        ProberError::SerializationError { message: e.to_string() }
    }
}
