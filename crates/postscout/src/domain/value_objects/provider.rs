//! ProviderKind - search backend selector

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Search provider variant. One backend is selected per request; the
/// choice is explicit and final for that call (no fallback).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Generic web search plus LLM extraction of structured post fields.
    /// Slowest, highest recall, the only variant that can recover full
    /// post content when the target page is not directly fetchable.
    #[default]
    Crawl,
    /// Keyword search engine scrape. Fastest, credential-free, lowest
    /// content fidelity.
    Keyword,
    /// Semantic/neural search API with structured date metadata.
    Semantic,
}

impl ProviderKind {
    /// All selectable variants.
    pub fn all() -> &'static [ProviderKind] {
        &[Self::Crawl, Self::Keyword, Self::Semantic]
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Crawl => write!(f, "crawl"),
            ProviderKind::Keyword => write!(f, "keyword"),
            ProviderKind::Semantic => write!(f, "semantic"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crawl" => Ok(ProviderKind::Crawl),
            "keyword" => Ok(ProviderKind::Keyword),
            "semantic" => Ok(ProviderKind::Semantic),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}
