//! Error types for filterbar-api

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for filterbar-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in filterbar-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from filterbar-core
    #[error("Core error: {0}")]
    Core(#[from] filterbar_core::Error),

    /// Error from filterbar-page
    #[error("Page error: {0}")]
    Page(#[from] filterbar_page::Error),

    /// Error from filterbar-client
    #[error("Client error: {0}")]
    Client(#[from] filterbar_client::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required query parameter was not supplied
    #[error("Missing query parameter '{0}'")]
    MissingParameter(&'static str),

    /// No collection with this name is loaded
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// A collection file could not be parsed
    #[error("Invalid collection file {path}: {source}")]
    InvalidCollectionFile {
        /// Offending file
        path: String,
        /// Parse error
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Error::Core(e) if e.is_data_error() => StatusCode::BAD_REQUEST,
            Error::CollectionNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        let body = serde_json::json!({ "detail": self.to_string() });
        (status, Json(body)).into_response()
    }
}
