//! Keyword provider - DuckDuckGo HTML scrape.
//!
//! Queries the HTML-only endpoint at `html.duckduckgo.com/html/`, which
//! requires no JavaScript, no credential, and is tolerant of automated
//! requests. Hit fields come straight from result snippets; no page is
//! fetched and no LLM is involved, so this is the fastest variant and
//! the one with the lowest content fidelity.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use postscout::{parse_publish_date, ProviderKind, RawHit, SearchBackend, SearchError, SearchQuery};

use crate::adapters::is_linkedin_post_url;
use crate::http;

pub struct KeywordSearchBackend {
    client: Client,
    max_results: usize,
}

impl KeywordSearchBackend {
    pub fn new(timeout: Duration, max_results: usize) -> Self {
        Self {
            client: http::build_client(timeout),
            max_results,
        }
    }

    /// Extract the actual URL from DuckDuckGo's redirect wrapper
    /// (`//duckduckgo.com/l/?uddg=<encoded>&rut=...`).
    fn extract_url(href: &str) -> Option<String> {
        let full_href = if href.starts_with("//") {
            format!("https:{href}")
        } else {
            href.to_string()
        };

        let parsed = Url::parse(&full_href).ok()?;

        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        } else {
            Some(full_href)
        }
    }
}

#[async_trait]
impl SearchBackend for KeywordSearchBackend {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawHit>, SearchError> {
        let q = format!("site:linkedin.com/posts {}", query.keywords.trim());
        tracing::debug!(query = %q, "keyword search");

        let response = self
            .client
            .post("https://html.duckduckgo.com/html/")
            .form(&[("q", q.as_str())])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                SearchError::provider(ProviderKind::Keyword, format!("request failed: {}", e))
            })?
            .error_for_status()
            .map_err(|e| {
                SearchError::provider(ProviderKind::Keyword, format!("HTTP error: {}", e))
            })?;

        let html = response.text().await.map_err(|e| {
            SearchError::provider(ProviderKind::Keyword, format!("response read failed: {}", e))
        })?;

        parse_result_html(&html, self.max_results)
    }

    fn provider(&self) -> ProviderKind {
        ProviderKind::Keyword
    }
}

/// Parse the DuckDuckGo HTML response into raw hits. Separate function
/// for testability with mock HTML.
pub(crate) fn parse_result_html(html: &str, max_results: usize) -> Result<Vec<RawHit>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse(
        ".result.results_links.results_links_deep:not(.result--ad), .web-result:not(.result--ad)",
    )
    .map_err(|e| {
        SearchError::provider(ProviderKind::Keyword, format!("invalid result selector: {e:?}"))
    })?;
    let title_sel = Selector::parse(".result__a").map_err(|e| {
        SearchError::provider(ProviderKind::Keyword, format!("invalid title selector: {e:?}"))
    })?;
    let snippet_sel = Selector::parse(".result__snippet").map_err(|e| {
        SearchError::provider(ProviderKind::Keyword, format!("invalid snippet selector: {e:?}"))
    })?;

    let mut hits = Vec::new();

    for element in document.select(&result_sel) {
        let title_el = match element.select(&title_sel).next() {
            Some(el) => el,
            None => continue,
        };

        let title = title_el.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }

        let href = match title_el.value().attr("href") {
            Some(h) => h,
            None => continue,
        };

        let url = match KeywordSearchBackend::extract_url(href) {
            Some(u) => u,
            None => continue,
        };

        if !is_linkedin_post_url(&url) {
            tracing::debug!(url = %url, "skipping non-post result");
            continue;
        }

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let (date, description) = split_snippet_date(&snippet);

        hits.push(RawHit {
            title,
            url,
            description,
            date,
            author: None,
            tags: None,
        });

        if hits.len() >= max_results {
            break;
        }
    }

    tracing::debug!(count = hits.len(), "keyword results parsed");
    Ok(hits)
}

/// DuckDuckGo prefixes dated snippets with the publish date, as in
/// "Mar 5, 2024 — Excited to share...". Peel that prefix off as the raw
/// date token when it parses; otherwise keep the snippet whole.
fn split_snippet_date(snippet: &str) -> (Option<String>, Option<String>) {
    for separator in [" — ", " – ", " · "] {
        if let Some((prefix, rest)) = snippet.split_once(separator) {
            if parse_publish_date(prefix).is_some() {
                return (
                    Some(prefix.trim().to_string()),
                    Some(rest.trim().to_string()).filter(|r| !r.is_empty()),
                );
            }
        }
    }
    (None, Some(snippet.to_string()).filter(|s| !s.is_empty()))
}
