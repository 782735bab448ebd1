//! Debug Artifact Store Port
//!
//! Side-channel for raw-HTML dumps written when a query requests debug
//! mode. Write failures never fail a search; the orchestrator logs them
//! and leaves `debug_reference` absent.

use async_trait::async_trait;

use crate::domain::errors::SearchError;

/// Storage for debug artifacts, addressed by artifact name.
#[async_trait]
pub trait DebugArtifactStore: Send + Sync {
    /// Persist an artifact and return the reference name it can be
    /// retrieved under.
    async fn store(&self, name: &str, contents: &[u8]) -> Result<String, SearchError>;

    /// Read a previously stored artifact. `Ok(None)` when absent.
    async fn open(&self, name: &str) -> Result<Option<Vec<u8>>, SearchError>;
}
