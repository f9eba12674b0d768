//! Shared handler state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::CollectionCatalog;
use crate::config::ServerConfig;

/// Immutable state shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    static_dir: PathBuf,
    record_path: PathBuf,
    catalog: CollectionCatalog,
}

impl AppState {
    /// State serving `catalog` and the record under `config.static_dir`.
    pub fn new(config: &ServerConfig, catalog: CollectionCatalog) -> Self {
        Self {
            inner: Arc::new(Inner {
                static_dir: config.static_dir.clone(),
                record_path: config.record_path(),
                catalog,
            }),
        }
    }

    /// Directory served under `/static`.
    pub fn static_dir(&self) -> &Path {
        &self.inner.static_dir
    }

    /// Path of the filter record.
    pub fn record_path(&self) -> &Path {
        &self.inner.record_path
    }

    /// The collection catalog.
    pub fn catalog(&self) -> &CollectionCatalog {
        &self.inner.catalog
    }
}
