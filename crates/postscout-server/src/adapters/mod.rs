//! Provider adapters - one `SearchBackend` implementation per variant.

pub mod crawl;
pub mod keyword;
pub mod semantic;

pub use crawl::CrawlSearchBackend;
pub use keyword::KeywordSearchBackend;
pub use semantic::SemanticSearchBackend;

/// Only LinkedIn post URLs survive a provider; search engines mix in
/// profile and company pages even under a `site:` restriction.
pub(crate) fn is_linkedin_post_url(url: &str) -> bool {
    url.to_lowercase().contains("linkedin.com/posts")
}
