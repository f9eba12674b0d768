//! Dataset loader.
//!
//! Holds the active [`FilterDataset`] and replaces it wholesale when a fetch
//! succeeds. A failed fetch is logged and leaves the active dataset as it
//! was, so the built-in default stays in effect until a load succeeds.

use filterbar_core::{FilterDataset, default_dataset};

use crate::Error;
use crate::source::DatasetSource;

/// Result of one load attempt.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The fetched dataset replaced the previous one.
    Replaced,
    /// The fetch failed; the previous dataset is still active.
    Kept(Error),
}

impl LoadOutcome {
    /// Returns `true` if the dataset was replaced.
    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced)
    }
}

/// Owner of the active dataset.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    dataset: FilterDataset,
}

impl DatasetLoader {
    /// Start from `initial`.
    pub fn new(initial: FilterDataset) -> Self {
        Self { dataset: initial }
    }

    /// The active dataset.
    pub fn dataset(&self) -> &FilterDataset {
        &self.dataset
    }

    /// Consume the loader, returning the active dataset.
    pub fn into_dataset(self) -> FilterDataset {
        self.dataset
    }

    /// Try once to replace the active dataset from `source`.
    pub async fn load(&mut self, source: &dyn DatasetSource) -> LoadOutcome {
        match source.fetch_dataset().await {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} categories ({} labels) from {}",
                    dataset.len(),
                    dataset.label_count(),
                    source.describe()
                );
                self.dataset = dataset;
                LoadOutcome::Replaced
            }
            Err(e) => {
                log::warn!(
                    "Error fetching dataset from {}: {e}; keeping the active dataset",
                    source.describe()
                );
                LoadOutcome::Kept(e)
            }
        }
    }
}

impl Default for DatasetLoader {
    /// Starts from the built-in taxonomy.
    fn default() -> Self {
        Self::new(default_dataset())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Result;
    use crate::source::StaticDatasetSource;
    use async_trait::async_trait;

    struct FailingSource;

    #[async_trait]
    impl DatasetSource for FailingSource {
        async fn fetch_dataset(&self) -> Result<FilterDataset> {
            Err(Error::Status {
                url: "http://test/static/record.json".to_string(),
                status: 503,
            })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[tokio::test]
    async fn test_default_starts_with_taxonomy() {
        let loader = DatasetLoader::default();
        assert_eq!(loader.dataset(), &default_dataset());
    }

    #[tokio::test]
    async fn test_success_replaces() {
        let fetched = FilterDataset::new().with_category("Languages", ["go"]).unwrap();
        let mut loader = DatasetLoader::default();
        let outcome = loader.load(&StaticDatasetSource::new(fetched.clone())).await;
        assert!(outcome.is_replaced());
        assert_eq!(loader.into_dataset(), fetched);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous() {
        let mut loader = DatasetLoader::default();
        let outcome = loader.load(&FailingSource).await;
        assert!(matches!(
            outcome,
            LoadOutcome::Kept(Error::Status { status: 503, .. })
        ));
        assert_eq!(loader.dataset(), &default_dataset());
    }

    #[tokio::test]
    async fn test_failure_after_success_keeps_fetched() {
        let fetched = FilterDataset::new().with_category("a", ["b"]).unwrap();
        let mut loader = DatasetLoader::default();
        loader.load(&StaticDatasetSource::new(fetched.clone())).await;
        loader.load(&FailingSource).await;
        assert_eq!(loader.dataset(), &fetched);
    }
}
