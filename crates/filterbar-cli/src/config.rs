//! Configuration file.
//!
//! `filterbar` reads a TOML file with three sections:
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//! static_dir = "static"
//! collections_dir = "collections"
//!
//! [client]
//! base_url = "http://localhost:8000"
//! dataset_path = "/static/record.json"
//! resume_data_path = "/get_resume_data"
//!
//! [download]
//! out_dir = "."
//! ```
//!
//! The file lives at `<config_dir>/filterbar/config.toml` unless `--config`
//! or `FILTERBAR_CONFIG` names another one. A missing file means defaults.

use std::path::{Path, PathBuf};

use filterbar_api::ServerConfig;
use filterbar_client::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Name used for the config directory.
pub const PROJECT_NAME: &str = "filterbar";

/// Config file name inside the project directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// `[download]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Directory artifacts are written into.
    pub out_dir: PathBuf,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
        }
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterbarConfig {
    /// `[server]`
    pub server: ServerConfig,
    /// `[client]`
    pub client: ClientConfig,
    /// `[download]`
    pub download: DownloadConfig,
}

impl FilterbarConfig {
    /// `<config_dir>/filterbar/config.toml`, if the platform has a config
    /// directory.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE_NAME))
    }

    /// The explicit path if given, otherwise the default one.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load from the resolved path, falling back to defaults when the file
    /// does not exist.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                log::debug!("No config file at {}; using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
