//! Error types for the FAIR Data Point server.

use thiserror::Error;

/// Main error type for fairpoint operations.
#[derive(Error, Debug)]
pub enum FdpError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Errors talking to the tranSMART REST API.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Request to tranSMART failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("tranSMART answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Token exchange failed: {0}")]
    Token(String),

    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
}

/// Errors in the upstream study metadata itself.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Study record is missing required field '{0}'")]
    MissingField(String),
}

/// Result type alias for fairpoint operations.
pub type Result<T> = std::result::Result<T, FdpError>;
