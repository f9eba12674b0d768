//! `render` and `download` against a live filterbar server.

#![allow(clippy::unwrap_used)]

use filterbar_api::{CollectionCatalog, Server, ServerConfig};
use filterbar_cli::FilterbarConfig;
use filterbar_cli::commands::{RenderSource, cmd_download, cmd_render};
use filterbar_core::CollectionName;
use filterbar_page::Sequencing;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Start a server on an ephemeral port; returns its base URL.
async fn spawn_server(static_dir: &std::path::Path) -> String {
    let catalog = CollectionCatalog::new()
        .with_collection(CollectionName::new("demo").unwrap(), json!({"a": 1}));
    let config = ServerConfig {
        static_dir: static_dir.to_path_buf(),
        ..ServerConfig::default()
    };
    let server = Server::with_catalog(config, catalog);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(server.serve(listener, std::future::pending()));
    base
}

fn record_dir(record: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("record.json"), record).unwrap();
    dir
}

// ----------------------------------------------------------------------------
// render
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_render_from_file() {
    let dir = record_dir(r#"{"Languages": ["python", "go"]}"#);
    let html = cmd_render(
        &FilterbarConfig::default(),
        RenderSource::File(dir.path().join("record.json")),
        Sequencing::LoadThenRender,
        false,
    )
    .await
    .unwrap();

    assert_eq!(html.matches("<h3").count(), 1);
    assert!(html.contains(">Languages</h3>"));
    assert!(html.contains(r#"id="filter-Languages-python""#));
    assert!(html.contains(r#"for="filter-Languages-go""#));
}

#[tokio::test]
async fn test_render_from_server() {
    let dir = record_dir(r#"{"tools": ["git", "docker"]}"#);
    let base = spawn_server(dir.path()).await;

    let html = cmd_render(
        &FilterbarConfig::default(),
        RenderSource::Server(base),
        Sequencing::default(),
        true,
    )
    .await
    .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"id="filter-tools-docker""#));
}

#[tokio::test]
async fn test_render_legacy_policy_shows_default() {
    let dir = record_dir(r#"{"tools": ["git"]}"#);
    let html = cmd_render(
        &FilterbarConfig::default(),
        RenderSource::File(dir.path().join("record.json")),
        Sequencing::RenderThenLoad,
        false,
    )
    .await
    .unwrap();

    assert!(!html.contains("filter-tools-git\""));
    assert!(html.contains("filter-programming_languages-python"));
}

#[tokio::test]
async fn test_render_unreadable_file_falls_back() {
    let dir = TempDir::new().unwrap();
    let html = cmd_render(
        &FilterbarConfig::default(),
        RenderSource::File(dir.path().join("missing.json")),
        Sequencing::default(),
        false,
    )
    .await
    .unwrap();
    assert!(html.contains("filter-programming_languages-python"));
}

// ----------------------------------------------------------------------------
// download
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_download_writes_artifact() {
    let dir = record_dir("");
    let base = spawn_server(dir.path()).await;
    let out = TempDir::new().unwrap();

    let saved = cmd_download(
        &FilterbarConfig::default(),
        "demo",
        Some(base),
        Some(out.path().to_path_buf()),
    )
    .await
    .unwrap();

    let path = out.path().join("demo_analysis.json");
    assert_eq!(saved.location, path.display().to_string());
    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, json!({"status": "success", "data": {"a": 1}}));
}

#[tokio::test]
async fn test_download_unknown_collection_writes_nothing() {
    let dir = record_dir("");
    let base = spawn_server(dir.path()).await;
    let out = TempDir::new().unwrap();

    let err = cmd_download(
        &FilterbarConfig::default(),
        "other",
        Some(base),
        Some(out.path().to_path_buf()),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("404"));
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_download_uses_configured_out_dir() {
    let dir = record_dir("");
    let base = spawn_server(dir.path()).await;
    let out = TempDir::new().unwrap();

    let mut config = FilterbarConfig::default();
    config.client.base_url = base;
    config.download.out_dir = out.path().join("exports");

    cmd_download(&config, "demo", None, None).await.unwrap();
    assert!(out.path().join("exports/demo_analysis.json").exists());
}
