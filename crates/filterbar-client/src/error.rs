//! Error types for filterbar-client

use thiserror::Error;

/// Result type alias for filterbar-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in filterbar-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from filterbar-core (dataset parsing and validation)
    #[error("Core error: {0}")]
    Core(#[from] filterbar_core::Error),

    /// HTTP client error (connection, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Request to {url} failed with HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// Response status code
        status: u16,
    },

    /// Base URL or endpoint path could not be parsed
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parser message
        message: String,
    },

    /// Response body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while saving an artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns whether the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Status { status: 404, .. })
    }
}
