//! Page model.
//!
//! [`FilterPage`] owns the document and the active dataset. The dataset is
//! never shared: it changes only through [`FilterPage::reload`] and
//! [`FilterPage::on_ready`], and it reaches the renderer as a parameter.

use filterbar_client::{
    DatasetLoader, DatasetSource, DownloadHandler, LoadOutcome, SavedArtifact,
};
use filterbar_core::{CollectionName, DOWNLOAD_TRIGGER_ID, FILTER_CONTAINER_ID, FilterDataset};
use filterbar_render::page::COLLECTION_ATTR;
use filterbar_render::{Document, RenderSummary, SidebarRenderer, filter_window_document};

use crate::sequencing::Sequencing;
use crate::{Error, Result};

/// What happened during [`FilterPage::on_ready`].
#[derive(Debug)]
pub struct ReadyReport {
    /// Policy that was applied.
    pub sequencing: Sequencing,
    /// Outcome of the single fetch attempt.
    pub load: LoadOutcome,
    /// Summary of the last render pass.
    pub render: RenderSummary,
    /// Number of render passes (2 when a refresh followed the fetch).
    pub render_passes: usize,
}

/// The filter page: document, active dataset, and sequencing policy.
#[derive(Debug, Clone)]
pub struct FilterPage {
    document: Document,
    loader: DatasetLoader,
    renderer: SidebarRenderer,
    sequencing: Sequencing,
}

impl FilterPage {
    /// Wrap an existing document.
    ///
    /// The document must contain both the sidebar container and the
    /// download trigger. The active dataset starts as the built-in default.
    pub fn new(document: Document) -> Result<Self> {
        for id in [FILTER_CONTAINER_ID, DOWNLOAD_TRIGGER_ID] {
            if document.element_by_id(id).is_none() {
                return Err(Error::MissingElement { id });
            }
        }
        Ok(Self {
            document,
            loader: DatasetLoader::default(),
            renderer: SidebarRenderer::default(),
            sequencing: Sequencing::default(),
        })
    }

    /// The standard filtering page for `collection`.
    pub fn for_collection(collection: Option<&CollectionName>) -> Self {
        Self {
            document: filter_window_document(collection),
            loader: DatasetLoader::default(),
            renderer: SidebarRenderer::default(),
            sequencing: Sequencing::default(),
        }
    }

    /// Builder-style: choose the sequencing policy.
    pub fn with_sequencing(mut self, sequencing: Sequencing) -> Self {
        self.sequencing = sequencing;
        self
    }

    /// Builder-style: replace the initial dataset.
    pub fn with_dataset(mut self, dataset: FilterDataset) -> Self {
        self.loader = DatasetLoader::new(dataset);
        self
    }

    /// Builder-style: use a custom renderer.
    pub fn with_renderer(mut self, renderer: SidebarRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// The page document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The active dataset.
    pub fn dataset(&self) -> &FilterDataset {
        self.loader.dataset()
    }

    /// The sequencing policy.
    pub fn sequencing(&self) -> Sequencing {
        self.sequencing
    }

    /// Collection named on the download trigger, if any.
    pub fn collection(&self) -> Option<CollectionName> {
        self.document
            .element_by_id(DOWNLOAD_TRIGGER_ID)
            .and_then(|trigger| trigger.attr(COLLECTION_ATTR))
            .and_then(|name| match CollectionName::new(name) {
                Ok(name) => Some(name),
                Err(e) => {
                    log::warn!("Ignoring collection on download trigger: {e}");
                    None
                }
            })
    }

    /// Render the active dataset into the container, replacing whatever was
    /// rendered before.
    pub fn render(&mut self) -> Result<RenderSummary> {
        let container = self
            .document
            .element_by_id_mut(FILTER_CONTAINER_ID)
            .ok_or(Error::MissingElement {
                id: FILTER_CONTAINER_ID,
            })?;
        Ok(self.renderer.render_sidebar(container, self.loader.dataset()))
    }

    /// Fetch once and replace the active dataset on success.
    ///
    /// The rendered sidebar is not touched; call [`render`](Self::render) to
    /// show the new dataset.
    pub async fn reload(&mut self, source: &dyn DatasetSource) -> LoadOutcome {
        self.loader.load(source).await
    }

    /// Run the page-ready sequence under the configured policy.
    pub async fn on_ready(&mut self, source: &dyn DatasetSource) -> Result<ReadyReport> {
        log::debug!("Page ready ({})", self.sequencing);

        let (load, render, render_passes) = match self.sequencing {
            Sequencing::LoadThenRender => {
                let load = self.reload(source).await;
                let render = self.render()?;
                (load, render, 1)
            }
            Sequencing::RenderThenLoad => {
                let render = self.render()?;
                let load = self.reload(source).await;
                if load.is_replaced() {
                    log::debug!("Dataset replaced after render; sidebar left unchanged");
                }
                (load, render, 1)
            }
            Sequencing::RenderThenRefresh => {
                let first = self.render()?;
                let load = self.reload(source).await;
                if load.is_replaced() {
                    (load, self.render()?, 2)
                } else {
                    (load, first, 1)
                }
            }
        };

        Ok(ReadyReport {
            sequencing: self.sequencing,
            load,
            render,
            render_passes,
        })
    }

    /// Download trigger click: export the page's collection through
    /// `handler`. Logs and returns `None` when the page names no collection
    /// or the download fails.
    pub async fn on_download_click(&self, handler: &DownloadHandler) -> Option<SavedArtifact> {
        let Some(collection) = self.collection() else {
            log::error!("Error downloading data: page has no collection");
            return None;
        };
        handler.on_click(&collection).await
    }

    /// Serialize the page.
    pub fn to_html(&self) -> String {
        self.document.to_html()
    }
}
