//! # filterbar-client
//!
//! Client side of the filter page:
//! - [`FilterbarClient`]: HTTP access to the record and the stored analyses
//! - [`DatasetLoader`]: best-effort dataset replacement with fallback
//! - [`DownloadHandler`]: export of a collection as `<name>_analysis.json`
//!
//! The fetch seams are the [`DatasetSource`] and [`CollectionSource`]
//! traits, so the page model can run against files or in-memory fixtures.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod loader;
pub mod source;

pub use client::FilterbarClient;
pub use config::ClientConfig;
pub use download::{
    DirectorySink, DownloadArtifact, DownloadHandler, DownloadSink, MemorySink, SavedArtifact,
};
pub use error::{Error, Result};
pub use loader::{DatasetLoader, LoadOutcome};
pub use source::{CollectionSource, DatasetSource, FileDatasetSource, StaticDatasetSource};
