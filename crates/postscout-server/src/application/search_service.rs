//! Search orchestration.
//!
//! One stateless pass per request: validate the query, dispatch to the
//! selected provider backend, filter by the publish-date window, then
//! scatter per-hit content extraction (bounded by a per-task timeout)
//! and gather normalized posts in filter order. Per-hit failures drop
//! that hit only; provider failures propagate untouched. Cancellation
//! is dropping the returned future; in-flight fetches are abandoned
//! with it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use postscout::{
    filter_by_window, normalize, post_id, CanonicalPost, ContentExtractor, DebugArtifactStore,
    ProviderKind, RawHit, SearchBackend, SearchError, SearchQuery, SearchResponse,
};

pub struct SearchService {
    backends: HashMap<ProviderKind, Arc<dyn SearchBackend>>,
    extractor: Arc<dyn ContentExtractor>,
    debug_store: Arc<dyn DebugArtifactStore>,
    fetch_timeout: Duration,
}

impl SearchService {
    pub fn new(
        backends: Vec<Arc<dyn SearchBackend>>,
        extractor: Arc<dyn ContentExtractor>,
        debug_store: Arc<dyn DebugArtifactStore>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            backends: backends
                .into_iter()
                .map(|backend| (backend.provider(), backend))
                .collect(),
            extractor,
            debug_store,
            fetch_timeout,
        }
    }

    /// Run one search pass and assemble the response envelope.
    pub async fn run(&self, query: SearchQuery) -> Result<SearchResponse, SearchError> {
        query.validate()?;

        let backend = self.backends.get(&query.provider).ok_or_else(|| {
            SearchError::validation(format!("provider {} is not available", query.provider))
        })?;

        // Provider choice is explicit and final; errors pass through.
        let hits = backend.search(&query).await?;
        tracing::info!(provider = %query.provider, count = hits.len(), "provider returned hits");

        let hits = filter_by_window(hits, query.min_publish_date, query.max_publish_date);

        // Scatter: each hit's fetch+extract is independent and bounded
        // by the per-task timeout. Gather preserves filter order.
        let tasks = hits.iter().map(|hit| self.enrich(hit, &query));
        let outcomes = futures::future::join_all(tasks).await;

        let mut posts: Vec<CanonicalPost> = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                Ok(post) => posts.push(post),
                Err(e) => tracing::warn!(error = %e, "dropping hit that failed normalization"),
            }
        }

        Ok(SearchResponse::new(posts, &query))
    }

    async fn enrich(
        &self,
        hit: &RawHit,
        query: &SearchQuery,
    ) -> Result<CanonicalPost, SearchError> {
        let extracted =
            match tokio::time::timeout(self.fetch_timeout, self.extractor.extract(&hit.url)).await
            {
                Ok(Ok(content)) => Some(content),
                Ok(Err(e)) => {
                    tracing::warn!(url = %hit.url, error = %e, "content extraction failed");
                    None
                }
                Err(_) => {
                    tracing::warn!(url = %hit.url, timeout = ?self.fetch_timeout, "content extraction timed out");
                    None
                }
            };

        let debug_reference = match &extracted {
            Some(content) if query.debug_html => {
                let name = format!(
                    "{}_raw.html",
                    post_id(&hit.url).unwrap_or_else(|| Uuid::new_v4().to_string())
                );
                // Artifact write failure never fails the post.
                match self.debug_store.store(&name, content.raw_html.as_bytes()).await {
                    Ok(reference) => Some(reference),
                    Err(e) => {
                        tracing::warn!(url = %hit.url, error = %e, "debug artifact write failed");
                        None
                    }
                }
            }
            _ => None,
        };

        normalize(
            hit,
            extracted.as_ref().and_then(|c| c.body.as_deref()),
            debug_reference,
        )
    }
}
