//! Error types for filterbar-cli

use std::path::Path;

use thiserror::Error;

/// Result type alias for filterbar-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in filterbar-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from filterbar-core
    #[error("Core error: {0}")]
    Core(#[from] filterbar_core::Error),

    /// Error from filterbar-client
    #[error("Client error: {0}")]
    Client(#[from] filterbar_client::Error),

    /// Error from filterbar-page
    #[error("Page error: {0}")]
    Page(#[from] filterbar_page::Error),

    /// Error from filterbar-api
    #[error("Server error: {0}")]
    Api(#[from] filterbar_api::Error),

    /// I/O error with the path involved
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File or directory being accessed
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Description
        message: String,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap an I/O error with the path it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_with_path_display() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            "/tmp/x.toml",
        );
        assert_eq!(err.to_string(), "I/O error at /tmp/x.toml: missing");
    }

    #[test]
    fn test_config_display() {
        assert_eq!(
            Error::config("bad key").to_string(),
            "Configuration error: bad key"
        );
    }
}
