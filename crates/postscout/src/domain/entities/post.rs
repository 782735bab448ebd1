//! CanonicalPost - normalized output record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The uniform post record returned to API callers. Constructed once per
/// `RawHit` that survives filtering, immutable thereafter, owned solely
/// by the response envelope that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CanonicalPost {
    /// Post title, trimmed.
    pub title: String,
    /// Post URL, verbatim (no canonicalization; identity across
    /// providers is not guaranteed by this layer).
    pub url: String,
    /// Slug after the last slash of the URL, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Author name, trimmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Parsed publish date. `None` when the provider's raw token was
    /// absent or unparseable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Markdown-formatted post content. Present only when page
    /// extraction succeeded; never synthesized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Hashtags, lowercased and deduplicated.
    pub tags: Vec<String>,
    /// Name of the debug artifact written for this post, when debug mode
    /// was requested and the write succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_reference: Option<String>,
}
