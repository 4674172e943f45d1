//! Configuration error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// One or more required settings are absent. All messages are collected
    /// before failing so the operator sees every problem at once.
    #[error("{}", messages.join("\n"))]
    MissingRequired { messages: Vec<String> },

    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Failed to read env file {path}: {message}")]
    EnvFile { path: String, message: String },
}

impl ConfigError {
    /// Individual messages carried by a validation failure.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ConfigError::MissingRequired { messages } => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
