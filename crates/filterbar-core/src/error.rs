//! Error types for filterbar-core

use thiserror::Error;

/// Result type alias for filterbar-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in filterbar-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The dataset document is structurally invalid
    #[error("Invalid dataset: {message}")]
    InvalidDataset {
        /// What went wrong
        message: String,
    },

    /// A category name appears twice in one dataset
    #[error("Duplicate category: {name}")]
    DuplicateCategory {
        /// The repeated category name
        name: String,
    },

    /// A collection name failed validation
    #[error("Invalid collection name '{name}': {reason}")]
    InvalidCollectionName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates a new invalid-dataset error.
    pub fn invalid_dataset<S: Into<String>>(message: S) -> Self {
        Error::InvalidDataset {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether the error came from malformed input data
    /// (as opposed to the environment).
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidDataset { .. }
                | Error::DuplicateCategory { .. }
                | Error::InvalidCollectionName { .. }
                | Error::Serialization(_)
        )
    }
}
