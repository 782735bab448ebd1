//! Postscout Domain Library
//!
//! Core domain types and interfaces for the Postscout LinkedIn post
//! search service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business types and logic
//!   - `entities/`: Core domain models (SearchQuery, RawHit, CanonicalPost, SearchResponse)
//!   - `value_objects/`: Immutable value types (ProviderKind, publish-date parsing)
//!   - `filter`: publish-date window filtering
//!   - `normalize`: RawHit -> CanonicalPost normalization
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Search backend, content extraction and debug artifact interfaces
//!
//! The concrete provider adapters (crawl, keyword, semantic) and the HTTP
//! surface live in `postscout-server`.

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    filter_by_window, normalize, parse_publish_date, post_id, CanonicalPost, ProviderKind, RawHit,
    SearchError, SearchMetadata, SearchQuery, SearchResponse,
};
pub use ports::{ContentExtractor, DebugArtifactStore, ExtractedContent, SearchBackend};
