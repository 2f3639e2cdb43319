//! Error types for godaddy-ddns.

use thiserror::Error;

/// Result type alias for godaddy-ddns.
pub type Result<T> = std::result::Result<T, UpdateError>;

/// Updater error types.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// Configuration error (missing or invalid CLI input).
    #[error("{0}")]
    Config(String),

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// The IP-echo service returned something that is not a dotted-quad
    /// IPv4 address.
    #[error("Public IP response is not an IPv4 address: {0:?}")]
    InvalidPublicIp(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for UpdateError {
    fn from(e: reqwest::Error) -> Self {
        UpdateError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for UpdateError {
    fn from(e: serde_json::Error) -> Self {
        UpdateError::Serialization(e.to_string())
    }
}
