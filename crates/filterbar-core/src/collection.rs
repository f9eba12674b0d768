//! Validated names of stored analysis collections.
//!
//! A collection name travels in a query string and ends up in a file name
//! (`<name>_analysis.json`), so only ASCII letters, digits, `_` and `-` are
//! accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Upper bound on collection name length.
pub const MAX_COLLECTION_NAME_LEN: usize = 128;

/// Suffix appended to a collection name to form the download file name.
pub const ARTIFACT_SUFFIX: &str = "_analysis.json";

/// Name of a stored analysis collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionName(String);

impl CollectionName {
    /// Validate and wrap a collection name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidCollectionName {
                name,
                reason: "must not be empty",
            });
        }
        if name.len() > MAX_COLLECTION_NAME_LEN {
            return Err(Error::InvalidCollectionName {
                name,
                reason: "too long",
            });
        }
        if !name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            return Err(Error::InvalidCollectionName {
                name,
                reason: "only ASCII letters, digits, '_' and '-' are allowed",
            });
        }
        Ok(Self(name))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the downloadable analysis artifact.
    ///
    /// ```
    /// use filterbar_core::CollectionName;
    ///
    /// let name = CollectionName::new("demo").unwrap();
    /// assert_eq!(name.artifact_file_name(), "demo_analysis.json");
    /// ```
    pub fn artifact_file_name(&self) -> String {
        format!("{}{ARTIFACT_SUFFIX}", self.0)
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CollectionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for CollectionName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CollectionName> for String {
    fn from(name: CollectionName) -> Self {
        name.0
    }
}
