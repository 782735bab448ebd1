//! Domain Entities
//!
//! Core models flowing through one orchestration pass:
//! `SearchQuery` in, provider-specific `RawHit`s in the middle,
//! `CanonicalPost`s inside a `SearchResponse` out.

pub mod hit;
pub mod post;
pub mod search;

pub use hit::RawHit;
pub use post::CanonicalPost;
pub use search::{SearchMetadata, SearchQuery, SearchResponse};
