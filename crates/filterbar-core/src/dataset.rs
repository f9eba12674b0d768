//! The filter dataset: an ordered mapping from category name to labels.
//!
//! A [`FilterDataset`] is what drives the sidebar. Its JSON form is a plain
//! object whose keys are category names and whose values are arrays of label
//! strings:
//!
//! ```json
//! { "programming_languages": ["python", "go"], "databases": ["redis"] }
//! ```
//!
//! Key order in the document is the display order of the sections, so the
//! dataset keeps categories in a `Vec` rather than a hash map, and the serde
//! impls walk the JSON object entry by entry.
//!
//! # Example
//!
//! ```
//! use filterbar_core::FilterDataset;
//!
//! let dataset = FilterDataset::from_json_slice(br#"{"Languages": ["python", "go"]}"#).unwrap();
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.get("Languages").unwrap().labels(), ["python", "go"]);
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

// ============================================================================
// Category
// ============================================================================

/// One category of the dataset and its labels, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    labels: Vec<String>,
}

impl Category {
    /// Create a category. Repeated labels are dropped after their first
    /// occurrence.
    pub fn new<N, I, L>(name: N, labels: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let name = name.into();
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for label in labels {
            let label = label.into();
            if seen.insert(label.clone()) {
                kept.push(label);
            } else {
                log::debug!("Dropping repeated label '{label}' in category '{name}'");
            }
        }
        Self { name, labels: kept }
    }

    /// The category name (section title).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The labels, in display order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the category has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ============================================================================
// FilterDataset
// ============================================================================

/// Mapping from category name to an ordered list of labels.
///
/// Category names are unique. The dataset is only ever replaced as a whole;
/// there is no merge operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterDataset {
    categories: Vec<Category>,
}

impl FilterDataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from categories that are known to have unique names.
    pub(crate) fn from_unique(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Append a category at the end of the mapping.
    ///
    /// Fails with [`Error::DuplicateCategory`] if the name is already present.
    pub fn push(&mut self, category: Category) -> Result<()> {
        if self.contains(category.name()) {
            return Err(Error::DuplicateCategory {
                name: category.name,
            });
        }
        self.categories.push(category);
        Ok(())
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with_category<N, I, L>(mut self, name: N, labels: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.push(Category::new(name, labels))?;
        Ok(self)
    }

    /// Parse a dataset from a JSON document.
    ///
    /// An empty (or whitespace-only) document is rejected with
    /// [`Error::InvalidDataset`]; anything that is not an object of string
    /// arrays is rejected with [`Error::Serialization`].
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::invalid_dataset("empty document"));
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Iterate over categories in mapping order.
    pub fn categories(&self) -> impl ExactSizeIterator<Item = &Category> {
        self.categories.iter()
    }

    /// Look up a category by name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Returns `true` if a category with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of labels across all categories.
    pub fn label_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }
}

// ============================================================================
// Serde
// ============================================================================

impl Serialize for FilterDataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.labels)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FilterDataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DatasetVisitor;

        impl<'de> Visitor<'de> for DatasetVisitor {
            type Value = FilterDataset;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category names to arrays of label strings")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut dataset = FilterDataset::new();
                while let Some((name, labels)) = access.next_entry::<String, Vec<String>>()? {
                    dataset
                        .push(Category::new(name, labels))
                        .map_err(de::Error::custom)?;
                }
                Ok(dataset)
            }
        }

        deserializer.deserialize_map(DatasetVisitor)
    }
}
