//! API server implementation

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::Result;
use crate::catalog::CollectionCatalog;
use crate::config::ServerConfig;
use crate::routes::router;
use crate::state::AppState;

/// Filterbar HTTP server
#[derive(Debug, Clone)]
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Load the collection catalog and prepare the server.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let catalog = CollectionCatalog::load_dir(&config.collections_dir)?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Server over an already loaded catalog.
    pub fn with_catalog(config: ServerConfig, catalog: CollectionCatalog) -> Self {
        let state = AppState::new(&config, catalog);
        Self { config, state }
    }

    /// Server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Handler state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The application router.
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Bind the configured address and serve until the process ends.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        self.serve(listener, std::future::pending()).await
    }

    /// Serve on `listener` until `shutdown` completes.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        tracing::info!(
            %addr,
            static_dir = %self.config.static_dir.display(),
            collections = self.state.catalog().len(),
            "filterbar server listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("filterbar server stopped");
        Ok(())
    }
}
