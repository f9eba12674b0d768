//! Error types for filterbar-page

use thiserror::Error;

/// Result type alias for filterbar-page operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in filterbar-page
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from filterbar-core
    #[error("Core error: {0}")]
    Core(#[from] filterbar_core::Error),

    /// The document lacks an element the page needs
    #[error("Element #{id} not found in page")]
    MissingElement {
        /// Id that was looked up
        id: &'static str,
    },

    /// Unknown sequencing policy name
    #[error("Unknown sequencing policy '{0}' (expected load-then-render, render-then-load or render-then-refresh)")]
    UnknownSequencing(String),
}
