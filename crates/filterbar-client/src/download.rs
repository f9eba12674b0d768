//! Analysis download.
//!
//! The download flow fetches a collection's stored analysis, re-serializes it
//! as pretty-printed JSON, and hands the result to a [`DownloadSink`] under
//! the name `<collection>_analysis.json`. Any failure is logged and produces
//! nothing; a sink never sees a partially built artifact.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use filterbar_core::CollectionName;
use serde_json::Value;

use crate::Result;
use crate::source::CollectionSource;

/// Content type of every artifact.
pub const JSON_CONTENT_TYPE: &str = "application/json";

// ============================================================================
// DownloadArtifact
// ============================================================================

/// A file ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    /// Suggested file name (`<collection>_analysis.json`).
    pub file_name: String,
    /// MIME type of `bytes`.
    pub content_type: &'static str,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl DownloadArtifact {
    /// Pretty-print `data` (two-space indent) into the artifact for
    /// `collection`.
    pub fn from_json(collection: &CollectionName, data: &Value) -> Result<Self> {
        let text = serde_json::to_string_pretty(data)?;
        Ok(Self {
            file_name: collection.artifact_file_name(),
            content_type: JSON_CONTENT_TYPE,
            bytes: text.into_bytes(),
        })
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the artifact has no content.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Where a saved artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifact {
    /// File name of the artifact.
    pub file_name: String,
    /// Sink-specific location (a path for [`DirectorySink`]).
    pub location: String,
    /// Number of bytes written.
    pub size: usize,
}

// ============================================================================
// Sinks
// ============================================================================

/// Receives finished artifacts.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Store the artifact, returning where it went.
    async fn save(&self, artifact: &DownloadArtifact) -> Result<String>;
}

/// Writes artifacts into a directory.
///
/// Content goes to a hidden `.part` file first and is renamed into place, so
/// an interrupted write never leaves a truncated `<name>_analysis.json`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Sink writing into `dir` (created on first save).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl DownloadSink for DirectorySink {
    async fn save(&self, artifact: &DownloadArtifact) -> Result<String> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let target = self.dir.join(&artifact.file_name);
        let partial = self.dir.join(format!(".{}.part", artifact.file_name));

        let written = match tokio::fs::write(&partial, &artifact.bytes).await {
            Ok(()) => tokio::fs::rename(&partial, &target).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&partial).await {
                log::debug!("Could not remove {}: {cleanup}", partial.display());
            }
            return Err(e.into());
        }

        Ok(target.display().to_string())
    }
}

/// Keeps artifacts in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    saved: Arc<Mutex<Vec<DownloadArtifact>>>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything saved so far, oldest first.
    pub fn artifacts(&self) -> Vec<DownloadArtifact> {
        self.saved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl DownloadSink for MemorySink {
    async fn save(&self, artifact: &DownloadArtifact) -> Result<String> {
        self.saved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(artifact.clone());
        Ok(format!("memory:{}", artifact.file_name))
    }
}

// ============================================================================
// DownloadHandler
// ============================================================================

/// Runs the download flow for the page's trigger.
#[derive(Clone)]
pub struct DownloadHandler {
    source: Arc<dyn CollectionSource>,
    sink: Arc<dyn DownloadSink>,
}

impl DownloadHandler {
    /// Handler fetching from `source` and saving into `sink`.
    pub fn new(source: Arc<dyn CollectionSource>, sink: Arc<dyn DownloadSink>) -> Self {
        Self { source, sink }
    }

    /// Fetch, serialize, and save the analysis of `collection`.
    pub async fn download(&self, collection: &CollectionName) -> Result<SavedArtifact> {
        let data = self.source.fetch_collection(collection).await?;
        let artifact = DownloadArtifact::from_json(collection, &data)?;
        let location = self.sink.save(&artifact).await?;

        log::info!(
            "Saved {} ({} bytes) to {location}",
            artifact.file_name,
            artifact.len()
        );

        Ok(SavedArtifact {
            file_name: artifact.file_name,
            location,
            size: artifact.bytes.len(),
        })
    }

    /// Click handler: like [`download`](Self::download), but failures are
    /// logged and swallowed.
    pub async fn on_click(&self, collection: &CollectionName) -> Option<SavedArtifact> {
        match self.download(collection).await {
            Ok(saved) => Some(saved),
            Err(e) => {
                log::error!("Error downloading data for '{collection}': {e}");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    struct FixedSource(Value);

    #[async_trait]
    impl CollectionSource for FixedSource {
        async fn fetch_collection(&self, _collection: &CollectionName) -> Result<Value> {
            Ok(self.0.clone())
        }
    }

    struct MissingSource;

    #[async_trait]
    impl CollectionSource for MissingSource {
        async fn fetch_collection(&self, collection: &CollectionName) -> Result<Value> {
            Err(Error::Status {
                url: format!("http://test/get_resume_data?collection={collection}"),
                status: 404,
            })
        }
    }

    fn demo() -> CollectionName {
        CollectionName::new("demo").unwrap()
    }

    #[test]
    fn test_artifact_pretty_prints() {
        let artifact = DownloadArtifact::from_json(&demo(), &json!({"a": 1})).unwrap();
        assert_eq!(artifact.file_name, "demo_analysis.json");
        assert_eq!(artifact.content_type, "application/json");
        assert_eq!(artifact.bytes, b"{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_artifact_nested_indentation() {
        let artifact =
            DownloadArtifact::from_json(&demo(), &json!([{"skills": ["go"]}])).unwrap();
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert_eq!(text, "[\n  {\n    \"skills\": [\n      \"go\"\n    ]\n  }\n]");
    }

    #[test]
    fn test_artifact_keeps_key_order() {
        let data: Value = serde_json::from_str(
            r#"{"status":"success","data":[{"name":"Ada","email":"ada@example.com"}]}"#,
        )
        .unwrap();
        let artifact = DownloadArtifact::from_json(&demo(), &data).unwrap();
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert_eq!(
            text,
            "{\n  \"status\": \"success\",\n  \"data\": [\n    {\n      \"name\": \"Ada\",\n      \"email\": \"ada@example.com\"\n    }\n  ]\n}"
        );
    }

    #[tokio::test]
    async fn test_handler_saves_to_memory() {
        let sink = MemorySink::new();
        let handler = DownloadHandler::new(
            Arc::new(FixedSource(json!({"a": 1}))),
            Arc::new(sink.clone()),
        );

        let saved = handler.on_click(&demo()).await.unwrap();
        assert_eq!(saved.file_name, "demo_analysis.json");
        assert_eq!(saved.location, "memory:demo_analysis.json");

        let artifacts = sink.artifacts();
        assert_eq!(artifacts.len(), 1);
        let parsed: Value = serde_json::from_slice(&artifacts[0].bytes).unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_handler_failure_produces_nothing() {
        let sink = MemorySink::new();
        let handler = DownloadHandler::new(Arc::new(MissingSource), Arc::new(sink.clone()));

        assert!(handler.on_click(&demo()).await.is_none());
        assert!(sink.artifacts().is_empty());

        let err = handler.download(&demo()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_directory_sink_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("exports");
        let handler = DownloadHandler::new(
            Arc::new(FixedSource(json!({"a": 1}))),
            Arc::new(DirectorySink::new(&out)),
        );

        let saved = handler.download(&demo()).await.unwrap();
        let path = out.join("demo_analysis.json");
        assert_eq!(saved.location, path.display().to_string());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\n  \"a\": 1\n}");
        assert!(!out.join(".demo_analysis.json.part").exists());
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_directory_sink_write_error_removes_partial() {
        // Writes through the partial path hit /dev/full and fail with ENOSPC.
        if !Path::new("/dev/full").exists() {
            return;
        }
        let dir = tempfile::TempDir::new().unwrap();
        let partial = dir.path().join(".demo_analysis.json.part");
        std::os::unix::fs::symlink("/dev/full", &partial).unwrap();

        let sink = DirectorySink::new(dir.path());
        let artifact = DownloadArtifact::from_json(&demo(), &json!({"a": 1})).unwrap();
        assert!(sink.save(&artifact).await.is_err());

        assert!(std::fs::symlink_metadata(&partial).is_err());
        assert!(!dir.path().join("demo_analysis.json").exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_directory_sink_rename_error_removes_partial() {
        let dir = tempfile::TempDir::new().unwrap();
        // A non-empty directory in the way makes the rename fail.
        let blocker = dir.path().join("demo_analysis.json");
        std::fs::create_dir(&blocker).unwrap();
        std::fs::write(blocker.join("keep"), "x").unwrap();

        let sink = DirectorySink::new(dir.path());
        let artifact = DownloadArtifact::from_json(&demo(), &json!({"a": 1})).unwrap();
        assert!(sink.save(&artifact).await.is_err());
        assert!(!dir.path().join(".demo_analysis.json.part").exists());
    }

    #[tokio::test]
    async fn test_directory_sink_failure_leaves_no_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let handler = DownloadHandler::new(
            Arc::new(MissingSource),
            Arc::new(DirectorySink::new(dir.path())),
        );

        assert!(handler.on_click(&demo()).await.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
