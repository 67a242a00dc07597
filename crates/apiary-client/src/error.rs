//! Error types for apiary-client

use thiserror::Error;

/// Result type alias for apiary-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in apiary-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from apiary-core (missing parameters, registry problems)
    #[error(transparent)]
    Core(#[from] apiary_core::Error),

    /// The request was sent but no response came back
    /// (connection refused, DNS failure, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The request could not be built or dispatched.
    #[error("Request error: {0}")]
    Request(String),

    /// The headlines endpoint failed, including upstream-reported errors.
    #[error("Failed to fetch news headlines: {0}")]
    Headlines(String),

    /// HTTP client construction error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Classify a failed `send()` into a network or request error.
    ///
    /// Builder errors never reached the wire; everything else did.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        let message = error_chain(err);
        if err.is_builder() {
            Error::Request(message)
        } else {
            Error::Network(message)
        }
    }

    /// Creates a headlines error.
    pub fn headlines<S: Into<String>>(message: S) -> Self {
        Error::Headlines(message.into())
    }

    /// Returns `true` if no response was obtained.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}

/// Render an error and its sources as `outer: inner: root`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
