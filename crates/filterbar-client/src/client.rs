//! HTTP client for the Filterbar server.

use filterbar_core::{CollectionName, FilterDataset};
use reqwest::Url;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::{Error, Result};

/// Async client for the record and stored-analysis endpoints.
///
/// Cheap to clone (the underlying `reqwest::Client` is reference counted).
#[derive(Debug, Clone)]
pub struct FilterbarClient {
    http: reqwest::Client,
    dataset_url: Url,
    resume_data_url: Url,
}

impl FilterbarClient {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client with default paths against `base_url`.
    pub fn from_base_url(base_url: &str) -> Result<Self> {
        Self::new(&ClientConfig::with_base_url(base_url))
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client, config: &ClientConfig) -> Result<Self> {
        let base = parse_url(&config.base_url)?;
        Ok(Self {
            http,
            dataset_url: join(&base, &config.dataset_path)?,
            resume_data_url: join(&base, &config.resume_data_path)?,
        })
    }

    /// URL of the dataset record.
    pub fn dataset_url(&self) -> &Url {
        &self.dataset_url
    }

    /// URL of the stored-analysis data for one collection.
    pub fn resume_data_url(&self, collection: &CollectionName) -> Url {
        let mut url = self.resume_data_url.clone();
        url.query_pairs_mut()
            .append_pair("collection", collection.as_str());
        url
    }

    /// Fetch and parse the dataset record.
    ///
    /// Fails on transport errors, non-2xx statuses, empty bodies, and
    /// anything that is not a valid [`FilterDataset`] document.
    pub async fn get_record(&self) -> Result<FilterDataset> {
        let body = self.get_bytes(self.dataset_url.clone()).await?;
        Ok(FilterDataset::from_json_slice(&body)?)
    }

    /// Fetch the stored analysis of a collection as raw JSON.
    pub async fn get_resume_data(&self, collection: &CollectionName) -> Result<Value> {
        let body = self.get_bytes(self.resume_data_url(collection)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>> {
        log::debug!("GET {url}");
        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })
}

fn join(base: &Url, path: &str) -> Result<Url> {
    base.join(path).map_err(|e| Error::InvalidUrl {
        url: format!("{base}{path}"),
        message: e.to_string(),
    })
}
