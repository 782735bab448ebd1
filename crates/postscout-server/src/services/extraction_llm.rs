//! Together AI extraction client.
//!
//! The crawl provider reduces a search results page to readable text and
//! asks a chat model to pull structured post fields out of it. This
//! client owns that single chat-completions call and the lenient parsing
//! of what comes back.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use postscout::{ProviderKind, RawHit, SearchError};

use crate::http;

const BASE_URL: &str = "https://api.together.xyz/v1/chat/completions";

/// Chat models happily exceed context limits on raw search pages; cap
/// what we send.
const MAX_PAGE_CHARS: usize = 24_000;

const EXTRACTION_INSTRUCTION: &str = "\
From the crawled content, extract up to a maximum of 15 LinkedIn post details \
as a JSON array. Each post should include:
- title: The post title or headline
- url: The LinkedIn post URL
- description: Brief description or preview of the post
- date: The publication date
- author: The post author's name
- tags: List of hashtags mentioned in the post

Important: Return no more than 15 posts, prioritizing the most relevant ones. \
Respond with the JSON array only.";

/// Client for the Together AI chat-completions endpoint.
pub struct ExtractionClient {
    client: Client,
    api_key: String,
}

impl ExtractionClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: http::build_api_client(timeout),
            api_key: api_key.into(),
        }
    }

    /// Ask the model to extract post records from `page_text`.
    pub async fn extract_posts(
        &self,
        page_text: &str,
        model: &str,
    ) -> Result<Vec<RawHit>, SearchError> {
        let truncated: String = page_text.chars().take(MAX_PAGE_CHARS).collect();

        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: EXTRACTION_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: truncated,
                },
            ],
            max_tokens: 4096,
            temperature: 0.0,
        };

        let response = self
            .client
            .post(BASE_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                SearchError::provider(ProviderKind::Crawl, format!("LLM request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: ChatCompletionResponse = response.json().await.map_err(|e| {
            SearchError::provider(ProviderKind::Crawl, format!("LLM response malformed: {}", e))
        })?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                SearchError::provider(ProviderKind::Crawl, "LLM returned no choices")
            })?;

        parse_llm_posts(&content)
    }
}

fn map_http_error(status: StatusCode, body: String) -> SearchError {
    let message = if status == StatusCode::TOO_MANY_REQUESTS {
        "LLM rate limited".to_string()
    } else {
        format!("LLM API error ({}): {}", status.as_u16(), body)
    };
    SearchError::provider(ProviderKind::Crawl, message)
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// One post record as the model emits it. Everything is optional;
/// entries without a title and URL are skipped rather than failing the
/// whole batch.
#[derive(Debug, Default, Deserialize)]
struct LlmPost {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct LlmPostEnvelope {
    posts: Vec<LlmPost>,
}

/// Parse the model's reply into raw hits. Tolerates markdown code
/// fences and a `{"posts": [...]}` wrapper; skips entries missing a
/// title or URL.
pub(crate) fn parse_llm_posts(content: &str) -> Result<Vec<RawHit>, SearchError> {
    let stripped = strip_code_fences(content);

    let posts: Vec<LlmPost> = match serde_json::from_str(stripped) {
        Ok(posts) => posts,
        Err(_) => serde_json::from_str::<LlmPostEnvelope>(stripped)
            .map(|envelope| envelope.posts)
            .map_err(|e| {
                SearchError::provider(
                    ProviderKind::Crawl,
                    format!("LLM extraction output is not valid JSON: {}", e),
                )
            })?,
    };

    let mut hits = Vec::new();
    for post in posts {
        match (post.title, post.url) {
            (Some(title), Some(url)) if !title.trim().is_empty() && !url.trim().is_empty() => {
                hits.push(RawHit {
                    title,
                    url,
                    description: post.description,
                    date: post.date,
                    author: post.author,
                    tags: post.tags,
                });
            }
            _ => {
                tracing::warn!("skipping LLM post entry without title/url");
            }
        }
    }
    Ok(hits)
}

/// Strip a surrounding markdown code fence, with or without a language tag.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_LLM_REPLY: &str = r#"```json
[
  {
    "title": "Scaling n8n workflows",
    "url": "https://www.linkedin.com/posts/jane_n8n-123",
    "description": "How we scaled #n8n",
    "date": "2024-02-10",
    "author": "Jane Doe",
    "tags": ["n8n", "automation"]
  },
  {
    "title": "Entry without a url is skipped"
  },
  {
    "title": "Second post",
    "url": "https://www.linkedin.com/posts/bob_ai-456"
  }
]
```"#;

    #[test]
    fn parses_fenced_json_array() {
        let hits = parse_llm_posts(MOCK_LLM_REPLY).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Scaling n8n workflows");
        assert_eq!(hits[0].author.as_deref(), Some("Jane Doe"));
        assert_eq!(hits[0].tags.as_deref(), Some(["n8n".to_string(), "automation".to_string()].as_slice()));
        assert_eq!(hits[1].url, "https://www.linkedin.com/posts/bob_ai-456");
    }

    #[test]
    fn accepts_posts_envelope() {
        let reply = r#"{"posts": [{"title": "T", "url": "https://linkedin.com/posts/x"}]}"#;
        let hits = parse_llm_posts(reply).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn bare_array_without_fences() {
        let reply = r#"[{"title": "T", "url": "https://linkedin.com/posts/x"}]"#;
        assert_eq!(parse_llm_posts(reply).unwrap().len(), 1);
    }

    #[test]
    fn non_json_reply_is_a_provider_error() {
        let err = parse_llm_posts("I could not find any posts.").unwrap_err();
        assert!(matches!(
            err,
            SearchError::Provider {
                provider: ProviderKind::Crawl,
                ..
            }
        ));
    }

    #[test]
    fn blank_title_entries_are_skipped() {
        let reply = r#"[{"title": "  ", "url": "https://linkedin.com/posts/x"}]"#;
        assert!(parse_llm_posts(reply).unwrap().is_empty());
    }
}
