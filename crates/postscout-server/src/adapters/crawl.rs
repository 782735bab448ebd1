//! Crawl provider - generic web search plus LLM extraction.
//!
//! Searches Google for public LinkedIn posts (with the date range pushed
//! into the query when given), reduces the results page to readable
//! text, and asks a chat model to extract structured post fields.
//! Slowest and highest-recall variant. Requires `TOGETHER_API_KEY`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use postscout::{ProviderKind, RawHit, SearchBackend, SearchError, SearchQuery};

use crate::adapters::is_linkedin_post_url;
use crate::http;
use crate::services::extraction_llm::ExtractionClient;
use crate::services::markdown::html_to_markdown;

pub struct CrawlSearchBackend {
    client: Client,
    llm: Option<ExtractionClient>,
    default_model: String,
    max_results: usize,
}

impl CrawlSearchBackend {
    pub fn new(
        together_api_key: Option<String>,
        default_model: impl Into<String>,
        timeout: Duration,
        max_results: usize,
    ) -> Self {
        Self {
            client: http::build_client(timeout),
            llm: together_api_key.map(|key| ExtractionClient::new(key, timeout)),
            default_model: default_model.into(),
            max_results,
        }
    }
}

#[async_trait]
impl SearchBackend for CrawlSearchBackend {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawHit>, SearchError> {
        // Credential check comes before any network call.
        let llm = self.llm.as_ref().ok_or_else(|| {
            SearchError::missing_credential("TOGETHER_API_KEY", ProviderKind::Crawl)
        })?;

        let search_url = build_search_url(
            &query.keywords,
            query.min_publish_date,
            query.max_publish_date,
        );
        tracing::debug!(url = %search_url, "crawl search");

        let html = self
            .client
            .get(&search_url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                SearchError::provider(ProviderKind::Crawl, format!("search fetch failed: {}", e))
            })?
            .error_for_status()
            .map_err(|e| {
                SearchError::provider(ProviderKind::Crawl, format!("search HTTP error: {}", e))
            })?
            .text()
            .await
            .map_err(|e| {
                SearchError::provider(ProviderKind::Crawl, format!("search read failed: {}", e))
            })?;

        let page_text = html_to_markdown(&html, Some(&search_url));
        let model = query.llm_model.as_deref().unwrap_or(&self.default_model);
        let hits = llm.extract_posts(&page_text, model).await?;

        let hits: Vec<RawHit> = hits
            .into_iter()
            .filter(|hit| {
                let keep = is_linkedin_post_url(&hit.url);
                if !keep {
                    tracing::warn!(url = %hit.url, "skipping non-post URL from LLM extraction");
                }
                keep
            })
            .take(self.max_results)
            .collect();

        tracing::debug!(count = hits.len(), "crawl results extracted");
        Ok(hits)
    }

    fn provider(&self) -> ProviderKind {
        ProviderKind::Crawl
    }
}

/// Build the Google query URL restricted to LinkedIn posts, with the
/// date window expressed through the `tbs=cdr` custom-range parameters
/// (Google expects MM/DD/YYYY there).
pub(crate) fn build_search_url(
    keywords: &str,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
) -> String {
    let formatted_keywords = keywords.split_whitespace().collect::<Vec<_>>().join("+");
    let mut url = format!(
        "https://www.google.com/search?q=site:linkedin.com/posts+{}",
        formatted_keywords
    );

    if min_date.is_some() || max_date.is_some() {
        url.push_str("&tbs=cdr:1");
        if let Some(min) = min_date {
            url.push_str(&format!(",cd_min:{}", min.format("%m/%d/%Y")));
        }
        if let Some(max) = max_date {
            url.push_str(&format!(",cd_max:{}", max.format("%m/%d/%Y")));
        }
    }

    url
}
