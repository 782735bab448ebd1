//! Content Extractor Port
//!
//! Fetches a post page and extracts its readable body.

use async_trait::async_trait;

use crate::domain::errors::SearchError;

/// Outcome of fetching one post page.
#[derive(Debug, Clone)]
pub struct ExtractedContent {
    /// Readable post body, when one could be located. `None` when the
    /// page loaded but held no recognizable post content (login walls).
    pub body: Option<String>,
    /// The raw HTML as fetched, kept for debug artifacts.
    pub raw_html: String,
}

/// Service interface for page fetching and body extraction.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// Fetch `url` and extract the post body.
    ///
    /// Failures here are per-hit: the orchestrator logs them and returns
    /// the post without content rather than failing the batch.
    async fn extract(&self, url: &str) -> Result<ExtractedContent, SearchError>;
}
