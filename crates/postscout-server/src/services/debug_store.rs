//! File-backed debug artifact store.
//!
//! Raw fetched HTML lands here when a query asks for debug mode, and
//! `GET /api/linkedin/debug/{filename}` serves it back. Artifact names
//! are sanitized so a reference can never escape the debug directory.

use std::path::PathBuf;

use async_trait::async_trait;

use postscout::{DebugArtifactStore, SearchError};

pub struct FileDebugStore {
    dir: PathBuf,
}

impl FileDebugStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Replace path separators and reject traversal so artifact names map
/// to exactly one file inside the debug directory. A bad name is a
/// `Validation` error; IO failures stay `Extraction`.
fn sanitize_name(name: &str) -> Result<String, SearchError> {
    let cleaned = name.replace(['/', '\\'], "_");
    if cleaned.is_empty() || cleaned.contains("..") {
        return Err(SearchError::validation(format!(
            "invalid artifact name: {}",
            name
        )));
    }
    Ok(cleaned)
}

#[async_trait]
impl DebugArtifactStore for FileDebugStore {
    async fn store(&self, name: &str, contents: &[u8]) -> Result<String, SearchError> {
        let cleaned = sanitize_name(name)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SearchError::extraction(format!("create debug dir failed: {}", e)))?;

        let path = self.dir.join(&cleaned);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| SearchError::extraction(format!("write of {} failed: {}", cleaned, e)))?;

        tracing::debug!(artifact = %cleaned, "debug artifact written");
        Ok(cleaned)
    }

    async fn open(&self, name: &str) -> Result<Option<Vec<u8>>, SearchError> {
        let cleaned = sanitize_name(name)?;
        match tokio::fs::read(self.dir.join(&cleaned)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SearchError::extraction(format!(
                "read of {} failed: {}",
                cleaned, e
            ))),
        }
    }
}
