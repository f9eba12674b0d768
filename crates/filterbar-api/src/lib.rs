//! # filterbar-api
//!
//! HTTP server for Filterbar.
//!
//! Routes:
//! - `GET /static/record.json`: the current filter record, verbatim
//! - `GET /get_resume_data?collection=<name>`: a stored collection analysis
//! - `GET /download_analysis?collection=<name>`: the same analysis as a
//!   `<name>_analysis.json` attachment
//! - `GET /static/...`: files under the static directory
//! - `GET /filtering_window[?collection=<name>]`: the server-rendered filter page
//! - `GET /health`: liveness and catalog size
//!
//! Collections are read once at start from `<collections_dir>/<name>.json`
//! and served read-only.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use catalog::CollectionCatalog;
pub use config::ServerConfig;
pub use error::{Error, Result};
pub use routes::router;
pub use server::Server;
pub use state::AppState;
