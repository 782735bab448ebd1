//! Page fetching and post-body extraction.
//!
//! Fetches a post page and pulls the body out of LinkedIn's public
//! post markup; anything else falls back to Readability markdown of
//! the whole page. Failures here are per-hit: the orchestrator logs
//! them and returns the post without content.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use postscout::{ContentExtractor, ExtractedContent, SearchError};

use crate::http;
use crate::services::markdown::html_to_markdown;

/// CSS selector for the public LinkedIn post body text segments.
const POST_BODY_SELECTOR: &str = ".attributed-text-segment-list__content";

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: http::build_client(timeout),
        }
    }
}

#[async_trait]
impl ContentExtractor for PageFetcher {
    async fn extract(&self, url: &str) -> Result<ExtractedContent, SearchError> {
        tracing::debug!(url, "fetching post page");

        let response = self
            .client
            .get(url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::extraction(format!("fetch of {} failed: {}", url, e)))?
            .error_for_status()
            .map_err(|e| SearchError::extraction(format!("fetch of {} failed: {}", url, e)))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::extraction(format!("read of {} failed: {}", url, e)))?;

        let body = extract_post_body(&html).or_else(|| {
            let markdown = html_to_markdown(&html, Some(url));
            let trimmed = markdown.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        });

        Ok(ExtractedContent {
            body,
            raw_html: html,
        })
    }
}

/// Pull the post body out of LinkedIn's public post markup. Returns
/// `None` when the page holds no recognizable post content (login
/// walls, consent pages).
pub(crate) fn extract_post_body(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(POST_BODY_SELECTOR).ok()?;

    let segments: Vec<String> = document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("\n\n"))
    }
}
