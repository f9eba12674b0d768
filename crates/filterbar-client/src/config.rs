//! Client configuration.

use serde::{Deserialize, Serialize};

/// Default server address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the dataset record.
pub const DEFAULT_DATASET_PATH: &str = "/static/record.json";

/// Path of the stored-analysis endpoint.
pub const DEFAULT_RESUME_DATA_PATH: &str = "/get_resume_data";

/// Where the client finds its endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server base URL.
    pub base_url: String,
    /// Path of the dataset record, relative to `base_url`.
    pub dataset_path: String,
    /// Path of the stored-analysis endpoint, relative to `base_url`.
    pub resume_data_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            dataset_path: DEFAULT_DATASET_PATH.to_string(),
            resume_data_path: DEFAULT_RESUME_DATA_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default paths against another server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.dataset_path, "/static/record.json");
        assert_eq!(config.resume_data_path, "/get_resume_data");
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://example.test"}"#).unwrap();
        assert_eq!(config.base_url, "http://example.test");
        assert_eq!(config.dataset_path, DEFAULT_DATASET_PATH);
    }
}
