//! Error types shared by the widget crates.

use thiserror::Error;

/// Failure talking to a host capability (record store or metadata store).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The host SDK call itself failed (rejected promise, missing SDK, ...).
    #[error("host call failed: {0}")]
    Host(String),

    /// The host answered, but with a non-success code.
    #[error("request rejected with code {code}: {message}")]
    Rejected { code: String, message: String },

    /// The host answered with an empty result list.
    #[error("host returned an empty response")]
    EmptyResponse,

    /// The response could not be decoded into the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Decode(e.to_string())
    }
}

/// Failure loading widget configuration overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("configuration value `{key}` is invalid: {message}")]
    Value { key: &'static str, message: String },
}
