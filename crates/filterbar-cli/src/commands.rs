//! `serve`, `render` and `download`.

use std::path::PathBuf;
use std::sync::Arc;

use filterbar_api::Server;
use filterbar_client::{
    ClientConfig, DatasetSource, DirectorySink, DownloadHandler, FileDatasetSource,
    FilterbarClient, SavedArtifact,
};
use filterbar_core::{CollectionName, FILTER_CONTAINER_ID};
use filterbar_page::{Error as PageError, FilterPage, Sequencing};

use crate::Result;
use crate::config::FilterbarConfig;

/// Where `render` gets its dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderSource {
    /// The built-in taxonomy, no fetch.
    Default,
    /// A JSON file.
    File(PathBuf),
    /// A running server.
    Server(String),
}

impl RenderSource {
    /// Pick the source from the `render` flags.
    pub fn from_args(dataset: Option<PathBuf>, url: Option<String>) -> Self {
        match (dataset, url) {
            (Some(path), _) => Self::File(path),
            (None, Some(url)) => Self::Server(url),
            (None, None) => Self::Default,
        }
    }
}

/// Run the HTTP server until Ctrl-C.
pub async fn cmd_serve(config: &FilterbarConfig, port: Option<u16>) -> Result<()> {
    let mut server_config = config.server.clone();
    if let Some(port) = port {
        server_config.port = port;
    }

    let listener = tokio::net::TcpListener::bind(server_config.bind_addr())
        .await
        .map_err(|e| crate::Error::io_with_path(e, server_config.bind_addr()))?;
    let server = Server::new(server_config)?;
    server
        .serve(listener, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl-C: {e}");
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down");
        })
        .await?;
    Ok(())
}

/// Render the sidebar (or the whole page) and return the HTML.
pub async fn cmd_render(
    config: &FilterbarConfig,
    source: RenderSource,
    policy: Sequencing,
    whole_page: bool,
) -> Result<String> {
    let mut page = FilterPage::for_collection(None).with_sequencing(policy);

    let fetcher: Option<Box<dyn DatasetSource>> = match source {
        RenderSource::Default => None,
        RenderSource::File(path) => Some(Box::new(FileDatasetSource::new(path))),
        RenderSource::Server(url) => {
            let client_config = ClientConfig {
                base_url: url,
                ..config.client.clone()
            };
            Some(Box::new(FilterbarClient::new(&client_config)?))
        }
    };

    let summary = match fetcher {
        Some(fetcher) => page.on_ready(&*fetcher).await?.render,
        None => page.render()?,
    };
    log::info!(
        "Rendered {} sections with {} checkboxes",
        summary.sections,
        summary.checkboxes
    );

    if whole_page {
        return Ok(page.to_html());
    }
    let container = page
        .document()
        .element_by_id(FILTER_CONTAINER_ID)
        .ok_or(PageError::MissingElement {
            id: FILTER_CONTAINER_ID,
        })?;
    Ok(container.to_html())
}

/// Export `collection` into the output directory.
pub async fn cmd_download(
    config: &FilterbarConfig,
    collection: &str,
    url: Option<String>,
    out: Option<PathBuf>,
) -> Result<SavedArtifact> {
    let collection = CollectionName::new(collection)?;

    let mut client_config = config.client.clone();
    if let Some(url) = url {
        client_config.base_url = url;
    }
    let out_dir = out.unwrap_or_else(|| config.download.out_dir.clone());

    let client = FilterbarClient::new(&client_config)?;
    let handler = DownloadHandler::new(Arc::new(client), Arc::new(DirectorySink::new(out_dir)));
    Ok(handler.download(&collection).await?)
}
