//! Semantic provider - Exa neural search.
//!
//! Exa returns relevance-ranked hits with structured publish dates and
//! supports date-range narrowing natively, so the window is pushed into
//! the request (the post-filter still applies afterwards). Requires
//! `EXA_API_KEY`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use postscout::{ProviderKind, RawHit, SearchBackend, SearchError, SearchQuery};

use crate::adapters::is_linkedin_post_url;
use crate::http;

const BASE_URL: &str = "https://api.exa.ai/search";

/// Cap on the text excerpt requested per result.
const MAX_EXCERPT_CHARS: u32 = 1_000;

pub struct SemanticSearchBackend {
    client: Client,
    api_key: Option<String>,
    max_results: usize,
}

impl SemanticSearchBackend {
    pub fn new(api_key: Option<String>, timeout: Duration, max_results: usize) -> Self {
        Self {
            client: http::build_api_client(timeout),
            api_key,
            max_results,
        }
    }
}

#[async_trait]
impl SearchBackend for SemanticSearchBackend {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawHit>, SearchError> {
        // Credential check comes before any network call.
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            SearchError::missing_credential("EXA_API_KEY", ProviderKind::Semantic)
        })?;

        let request = ExaSearchRequest {
            query: format!("LinkedIn post about {}", query.keywords.trim()),
            search_type: "neural",
            num_results: self.max_results,
            include_domains: vec!["linkedin.com"],
            start_published_date: query.min_publish_date.map(start_of_day),
            end_published_date: query.max_publish_date.map(end_of_day),
            contents: ExaContents {
                text: ExaTextOptions {
                    max_characters: MAX_EXCERPT_CHARS,
                },
            },
        };

        tracing::debug!(query = %request.query, "semantic search");

        let response = self
            .client
            .post(BASE_URL)
            .header("x-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                SearchError::provider(ProviderKind::Semantic, format!("request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: ExaSearchResponse = response.json().await.map_err(|e| {
            SearchError::provider(ProviderKind::Semantic, format!("response malformed: {}", e))
        })?;

        Ok(map_results(payload, self.max_results))
    }

    fn provider(&self) -> ProviderKind {
        ProviderKind::Semantic
    }
}

fn map_http_error(status: StatusCode, body: String) -> SearchError {
    let message = if status == StatusCode::TOO_MANY_REQUESTS {
        "rate limited".to_string()
    } else {
        format!("API error ({}): {}", status.as_u16(), body)
    };
    SearchError::provider(ProviderKind::Semantic, message)
}

fn start_of_day(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}

fn end_of_day(date: NaiveDate) -> String {
    format!("{}T23:59:59.999Z", date.format("%Y-%m-%d"))
}

/// Map the Exa payload into raw hits, skipping entries without a title
/// or outside linkedin.com/posts.
pub(crate) fn map_results(payload: ExaSearchResponse, max_results: usize) -> Vec<RawHit> {
    let mut hits = Vec::new();
    for result in payload.results {
        if !is_linkedin_post_url(&result.url) {
            tracing::debug!(url = %result.url, "skipping non-post result");
            continue;
        }
        let Some(title) = result.title.filter(|t| !t.trim().is_empty()) else {
            tracing::warn!(url = %result.url, "skipping untitled result");
            continue;
        };
        hits.push(RawHit {
            title,
            url: result.url,
            description: result.text,
            date: result.published_date,
            author: result.author,
            tags: None,
        });
        if hits.len() >= max_results {
            break;
        }
    }
    hits
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaSearchRequest {
    query: String,
    #[serde(rename = "type")]
    search_type: &'static str,
    num_results: usize,
    include_domains: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_published_date: Option<String>,
    contents: ExaContents,
}

#[derive(Serialize)]
struct ExaContents {
    text: ExaTextOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaTextOptions {
    max_characters: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExaSearchResponse {
    pub(crate) results: Vec<ExaResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExaResult {
    #[serde(default)]
    pub(crate) title: Option<String>,
    pub(crate) url: String,
    #[serde(default)]
    pub(crate) published_date: Option<String>,
    #[serde(default)]
    pub(crate) author: Option<String>,
    #[serde(default)]
    pub(crate) text: Option<String>,
}
