//! Route handlers.

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use filterbar_client::{DownloadArtifact, FileDatasetSource};
use filterbar_core::{CollectionName, DOWNLOAD_ROUTE, default_dataset};
use filterbar_page::FilterPage;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::{Error, Result};

/// Path of the record route.
pub const RECORD_ROUTE: &str = "/static/record.json";

/// Prefix the static directory is mounted under.
pub const STATIC_PREFIX: &str = "/static";

/// Build the application router.
///
/// Everything under the static directory is served at [`STATIC_PREFIX`];
/// [`RECORD_ROUTE`] takes precedence so a missing record still answers with
/// the default taxonomy.
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(state.static_dir());
    Router::new()
        .route(RECORD_ROUTE, get(record))
        .route("/get_resume_data", get(get_resume_data))
        .route(DOWNLOAD_ROUTE, get(download_analysis))
        .route("/filtering_window", get(filtering_window))
        .route("/health", get(health))
        .nest_service(STATIC_PREFIX, assets)
        .with_state(state)
}

/// `?collection=` query.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionQuery {
    /// Collection name, unvalidated.
    pub collection: Option<String>,
}

impl CollectionQuery {
    fn required(&self) -> Result<CollectionName> {
        let raw = self
            .collection
            .as_deref()
            .ok_or(Error::MissingParameter("collection"))?;
        Ok(CollectionName::new(raw)?)
    }

    fn optional(&self) -> Result<Option<CollectionName>> {
        match self.collection.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => Ok(Some(CollectionName::new(raw)?)),
        }
    }
}

/// `/health` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"`.
    pub status: String,
    /// Crate name.
    pub name: String,
    /// Crate version.
    pub version: String,
    /// Number of loaded collections.
    pub collections: usize,
}

async fn record(State(state): State<AppState>) -> Result<Response> {
    let body = match tokio::fs::read(state.record_path()).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %state.record_path().display(), "record missing; serving default taxonomy");
            default_dataset().to_json_pretty()?.into_bytes()
        }
        Err(e) => return Err(e.into()),
    };
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// `{"status":"success","data":...}` for the requested collection.
fn resume_envelope(
    state: &AppState,
    query: &CollectionQuery,
) -> Result<(CollectionName, Value)> {
    let name = query.required()?;
    let data = state
        .catalog()
        .get(&name)
        .ok_or_else(|| Error::CollectionNotFound(name.to_string()))?;
    let envelope = json!({ "status": "success", "data": data });
    Ok((name, envelope))
}

async fn get_resume_data(
    State(state): State<AppState>,
    Query(query): Query<CollectionQuery>,
) -> Result<Json<Value>> {
    let (name, envelope) = resume_envelope(&state, &query)?;
    tracing::info!(collection = %name, "serving collection");
    Ok(Json(envelope))
}

async fn download_analysis(
    State(state): State<AppState>,
    Query(query): Query<CollectionQuery>,
) -> Result<Response> {
    let (name, envelope) = resume_envelope(&state, &query)?;
    let artifact = DownloadArtifact::from_json(&name, &envelope)?;
    tracing::info!(collection = %name, bytes = artifact.len(), "serving analysis download");
    let disposition = format!("attachment; filename=\"{}\"", artifact.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    )
        .into_response())
}

async fn filtering_window(
    State(state): State<AppState>,
    Query(query): Query<CollectionQuery>,
) -> Result<Html<String>> {
    let collection = query.optional()?;
    let mut page = FilterPage::for_collection(collection.as_ref());
    let source = FileDatasetSource::new(state.record_path());
    let report = page.on_ready(&source).await?;
    tracing::debug!(
        sections = report.render.sections,
        checkboxes = report.render.checkboxes,
        fetched = report.load.is_replaced(),
        "rendered filtering window"
    );
    Ok(Html(page.to_html()))
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            collections: state.catalog().len(),
        }),
    )
}
