//! Read-only catalog of stored collection analyses.
//!
//! Each `<name>.json` file in the collections directory becomes one entry
//! keyed by its file stem. Files whose stem is not a valid collection name
//! are skipped. The catalog is never written back.

use std::collections::BTreeMap;
use std::path::Path;

use filterbar_core::CollectionName;
use serde_json::Value;

use crate::{Error, Result};

/// In-memory collections, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct CollectionCatalog {
    entries: BTreeMap<CollectionName, Value>,
}

impl CollectionCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_collection(mut self, name: CollectionName, data: Value) -> Self {
        self.entries.insert(name, data);
        self
    }

    /// Load every `*.json` file in `dir`.
    ///
    /// A missing directory yields an empty catalog. A file that is not
    /// valid JSON is an error.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut catalog = Self::new();
        if !dir.exists() {
            log::warn!(
                "Collections directory {} does not exist; serving no collections",
                dir.display()
            );
            return Ok(catalog);
        }

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let name = match CollectionName::new(stem) {
                Ok(name) => name,
                Err(e) => {
                    log::warn!("Skipping {}: {e}", path.display());
                    continue;
                }
            };

            let bytes = std::fs::read(&path)?;
            let data = serde_json::from_slice(&bytes).map_err(|source| {
                Error::InvalidCollectionFile {
                    path: path.display().to_string(),
                    source,
                }
            })?;
            log::debug!("Loaded collection '{name}' from {}", path.display());
            catalog.entries.insert(name, data);
        }

        log::info!(
            "Loaded {} collections from {}",
            catalog.len(),
            dir.display()
        );
        Ok(catalog)
    }

    /// Stored analysis for `name`.
    pub fn get(&self, name: &CollectionName) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Collection names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &CollectionName> {
        self.entries.keys()
    }

    /// Number of collections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no collections are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
