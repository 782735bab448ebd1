//! Search Backend Port
//!
//! Abstract interface over one external search capability. Three
//! implementations exist in `postscout-server`: crawl (generic search +
//! LLM extraction), keyword (search engine scrape) and semantic (neural
//! search API).

use async_trait::async_trait;

use crate::domain::entities::{RawHit, SearchQuery};
use crate::domain::errors::SearchError;
use crate::domain::value_objects::ProviderKind;

/// One pluggable search backend.
///
/// Invocations are independent and safely repeatable; implementations
/// hold no mutable state beyond a configured HTTP client and read-only
/// credentials. A backend whose credential is absent fails fast with
/// [`SearchError::Configuration`] before any network call. Transport
/// failures are not retried internally; they surface as
/// [`SearchError::Provider`] carrying this backend's identity.
/// Individually malformed hits are skipped (logged), never fatal.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Perform the search and return raw hits, provider-ordered.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawHit>, SearchError>;

    /// Which provider variant this backend implements.
    fn provider(&self) -> ProviderKind;
}
