//! Fetch seams for datasets and stored analyses.

use std::path::PathBuf;

use async_trait::async_trait;
use filterbar_core::{CollectionName, FilterDataset};
use serde_json::Value;

use crate::{FilterbarClient, Result};

/// Something that can produce a fresh [`FilterDataset`].
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch the dataset. One attempt, no retry.
    async fn fetch_dataset(&self) -> Result<FilterDataset>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

/// Something that can produce the stored analysis of a collection.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// Fetch the analysis data for `collection`.
    async fn fetch_collection(&self, collection: &CollectionName) -> Result<Value>;
}

#[async_trait]
impl DatasetSource for FilterbarClient {
    async fn fetch_dataset(&self) -> Result<FilterDataset> {
        self.get_record().await
    }

    fn describe(&self) -> String {
        self.dataset_url().to_string()
    }
}

#[async_trait]
impl CollectionSource for FilterbarClient {
    async fn fetch_collection(&self, collection: &CollectionName) -> Result<Value> {
        self.get_resume_data(collection).await
    }
}

/// Reads the dataset from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    /// Source backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch_dataset(&self) -> Result<FilterDataset> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(FilterDataset::from_json_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Always yields the same dataset.
#[derive(Debug, Clone)]
pub struct StaticDatasetSource {
    dataset: FilterDataset,
}

impl StaticDatasetSource {
    /// Source that returns a clone of `dataset` on every fetch.
    pub fn new(dataset: FilterDataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl DatasetSource for StaticDatasetSource {
    async fn fetch_dataset(&self) -> Result<FilterDataset> {
        Ok(self.dataset.clone())
    }

    fn describe(&self) -> String {
        "in-memory dataset".to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;

    #[tokio::test]
    async fn test_file_source_reads_dataset() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("record.json");
        std::fs::write(&path, r#"{"tools": ["git", "jira"]}"#).unwrap();

        let source = FileDatasetSource::new(&path);
        let dataset = source.fetch_dataset().await.unwrap();
        assert_eq!(dataset.get("tools").unwrap().len(), 2);
        assert!(source.describe().ends_with("record.json"));
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileDatasetSource::new("/nonexistent/record.json");
        let err = source.fetch_dataset().await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[tokio::test]
    async fn test_file_source_empty_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("record.json");
        std::fs::write(&path, "").unwrap();

        let err = FileDatasetSource::new(&path).fetch_dataset().await.unwrap_err();
        assert!(matches!(err, Error::Core(_)));
    }

    #[tokio::test]
    async fn test_static_source() {
        let dataset = FilterDataset::new().with_category("a", ["b"]).unwrap();
        let source = StaticDatasetSource::new(dataset.clone());
        assert_eq!(source.fetch_dataset().await.unwrap(), dataset);
    }
}
