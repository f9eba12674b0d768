//! Server configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name of the filter record inside the static directory.
pub const RECORD_FILE_NAME: &str = "record.json";

/// `[server]` section of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Directory served under `/static`; holds `record.json`.
    pub static_dir: PathBuf,
    /// Directory of `<name>.json` collection files.
    pub collections_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            collections_dir: PathBuf::from("collections"),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Path of the filter record.
    pub fn record_path(&self) -> PathBuf {
        self.static_dir.join(RECORD_FILE_NAME)
    }
}
