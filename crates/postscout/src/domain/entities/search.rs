//! SearchQuery and SearchResponse - the envelope of one orchestration pass

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::CanonicalPost;
use crate::domain::errors::SearchError;
use crate::domain::value_objects::ProviderKind;

/// Immutable search request value. Validated once by the orchestrator
/// before any network call is made.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Search keywords; must be non-empty after trimming.
    pub keywords: String,
    /// Inclusive lower bound on publish date.
    pub min_publish_date: Option<NaiveDate>,
    /// Inclusive upper bound on publish date.
    pub max_publish_date: Option<NaiveDate>,
    /// Which backend handles this call.
    pub provider: ProviderKind,
    /// Write raw-HTML debug artifacts during extraction.
    pub debug_html: bool,
    /// LLM model override for the crawl provider's extraction step.
    pub llm_model: Option<String>,
}

impl SearchQuery {
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            min_publish_date: None,
            max_publish_date: None,
            provider: ProviderKind::default(),
            debug_html: false,
            llm_model: None,
        }
    }

    pub fn with_provider(mut self, provider: ProviderKind) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_window(mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        self.min_publish_date = min;
        self.max_publish_date = max;
        self
    }

    /// Check the query invariants: non-empty keywords and, when both
    /// bounds are present, min <= max.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.keywords.trim().is_empty() {
            return Err(SearchError::validation("keywords must not be empty"));
        }
        if let (Some(min), Some(max)) = (self.min_publish_date, self.max_publish_date) {
            if min > max {
                return Err(SearchError::validation(format!(
                    "min_publish_date {} is after max_publish_date {}",
                    min, max
                )));
            }
        }
        Ok(())
    }
}

/// Echo of the query fields plus a generation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchMetadata {
    pub keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_publish_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_publish_date: Option<NaiveDate>,
    pub provider: ProviderKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_model: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Response envelope: ordered posts plus metadata. `total_posts` is
/// always recomputed from the sequence in [`SearchResponse::new`], never
/// tracked independently, so the two cannot drift.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub posts: Vec<CanonicalPost>,
    pub total_posts: usize,
    pub search_metadata: SearchMetadata,
}

impl SearchResponse {
    pub fn new(posts: Vec<CanonicalPost>, query: &SearchQuery) -> Self {
        let total_posts = posts.len();
        Self {
            posts,
            total_posts,
            search_metadata: SearchMetadata {
                keywords: query.keywords.clone(),
                min_publish_date: query.min_publish_date,
                max_publish_date: query.max_publish_date,
                provider: query.provider,
                llm_model: query.llm_model.clone(),
                timestamp: Utc::now(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn post(url: &str) -> CanonicalPost {
        CanonicalPost {
            title: "A post".into(),
            url: url.into(),
            id: None,
            author: None,
            date: None,
            content: None,
            tags: vec![],
            debug_reference: None,
        }
    }

    #[test]
    fn empty_keywords_fail_validation() {
        assert!(SearchQuery::new("").validate().is_err());
        assert!(SearchQuery::new("   ").validate().is_err());
    }

    #[test]
    fn inverted_window_fails_validation() {
        let query = SearchQuery::new("n8n automation")
            .with_window(Some(date(2024, 3, 31)), Some(date(2024, 1, 1)));
        let err = query.validate().unwrap_err();
        assert!(matches!(err, SearchError::Validation(_)));
    }

    #[test]
    fn equal_bounds_are_valid() {
        let query = SearchQuery::new("n8n automation")
            .with_window(Some(date(2024, 1, 1)), Some(date(2024, 1, 1)));
        assert!(query.validate().is_ok());
    }

    #[test]
    fn half_open_windows_are_valid() {
        let query = SearchQuery::new("n8n").with_window(Some(date(2024, 1, 1)), None);
        assert!(query.validate().is_ok());
        let query = SearchQuery::new("n8n").with_window(None, Some(date(2024, 1, 1)));
        assert!(query.validate().is_ok());
    }

    #[test]
    fn total_posts_equals_sequence_length() {
        let query = SearchQuery::new("n8n");
        let response = SearchResponse::new(vec![post("https://a"), post("https://b")], &query);
        assert_eq!(response.total_posts, response.posts.len());
        assert_eq!(response.total_posts, 2);

        let empty = SearchResponse::new(vec![], &query);
        assert_eq!(empty.total_posts, 0);
        assert!(empty.posts.is_empty());
    }

    #[test]
    fn metadata_echoes_the_query() {
        let query = SearchQuery::new("rust jobs")
            .with_provider(ProviderKind::Semantic)
            .with_window(Some(date(2024, 1, 1)), Some(date(2024, 3, 31)));
        let response = SearchResponse::new(vec![], &query);
        let meta = &response.search_metadata;
        assert_eq!(meta.keywords, "rust jobs");
        assert_eq!(meta.provider, ProviderKind::Semantic);
        assert_eq!(meta.min_publish_date, Some(date(2024, 1, 1)));
        assert_eq!(meta.max_publish_date, Some(date(2024, 3, 31)));
    }
}
