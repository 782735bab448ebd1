//! API request/response DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use postscout::{ProviderKind, SearchQuery};

/// Search request body for `POST /api/linkedin/search`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Search keywords for LinkedIn posts.
    pub keywords: String,
    /// Minimum publish date (YYYY-MM-DD), inclusive.
    pub min_publish_date: Option<NaiveDate>,
    /// Maximum publish date (YYYY-MM-DD), inclusive.
    pub max_publish_date: Option<NaiveDate>,
    /// Write raw-HTML debug artifacts during extraction.
    #[serde(default)]
    pub debug_html: bool,
    /// LLM model override for the crawl provider's extraction step.
    pub llm_provider: Option<String>,
    /// Which search backend to use. Defaults to `crawl`.
    #[serde(default)]
    pub provider: ProviderKind,
}

impl From<SearchRequest> for SearchQuery {
    fn from(request: SearchRequest) -> Self {
        Self {
            keywords: request.keywords,
            min_publish_date: request.min_publish_date,
            max_publish_date: request.max_publish_date,
            provider: request.provider,
            debug_html: request.debug_html,
            llm_model: request.llm_provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_request_defaults() {
        let request: SearchRequest =
            serde_json::from_str(r#"{"keywords": "n8n automation"}"#).unwrap();
        assert_eq!(request.provider, ProviderKind::Crawl);
        assert!(!request.debug_html);
        assert!(request.min_publish_date.is_none());

        let query: SearchQuery = request.into();
        assert_eq!(query.keywords, "n8n automation");
        assert!(query.validate().is_ok());
    }

    #[test]
    fn full_request_parses() {
        let request: SearchRequest = serde_json::from_str(
            r#"{
                "keywords": "n8n",
                "min_publish_date": "2024-01-01",
                "max_publish_date": "2024-03-31",
                "debug_html": true,
                "llm_provider": "meta-llama/Meta-Llama-3.1-70B-Instruct-Turbo",
                "provider": "semantic"
            }"#,
        )
        .unwrap();
        assert_eq!(request.provider, ProviderKind::Semantic);
        assert!(request.debug_html);

        let query: SearchQuery = request.into();
        assert_eq!(
            query.llm_model.as_deref(),
            Some("meta-llama/Meta-Llama-3.1-70B-Instruct-Turbo")
        );
    }

    #[test]
    fn unknown_provider_is_rejected_at_deserialization() {
        let result = serde_json::from_str::<SearchRequest>(
            r#"{"keywords": "n8n", "provider": "bing"}"#,
        );
        assert!(result.is_err());
    }
}
