//! RawHit - unnormalized provider result

/// A single search hit as returned by a provider backend, before date
/// filtering and normalization. Exists only within one orchestration
/// call and is never serialized out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHit {
    /// Post title or headline.
    pub title: String,
    /// LinkedIn post URL, verbatim as the provider returned it.
    pub url: String,
    /// Free-text snippet or preview of the post.
    pub description: Option<String>,
    /// Raw publish-date token. Format varies by provider (ISO date,
    /// RFC 3339 timestamp, English snippet date) and may be garbage.
    pub date: Option<String>,
    /// Post author's name, when the provider surfaced one.
    pub author: Option<String>,
    /// Structured tag list, when the provider supplied one. When absent,
    /// normalization derives hashtags from the text instead.
    pub tags: Option<Vec<String>>,
}

impl RawHit {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }
}
