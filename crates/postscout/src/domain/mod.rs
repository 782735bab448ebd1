//! Domain Layer
//!
//! Pure types and logic for the search pipeline: query validation,
//! date-window filtering and hit normalization. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod filter;
pub mod normalize;
pub mod value_objects;

pub use entities::{CanonicalPost, RawHit, SearchMetadata, SearchQuery, SearchResponse};
pub use errors::SearchError;
pub use filter::filter_by_window;
pub use normalize::{normalize, post_id};
pub use value_objects::{parse_publish_date, ProviderKind};
