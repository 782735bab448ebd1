//! Service Ports
//!
//! External-collaborator interfaces: search backends, page content
//! extraction, and debug artifact storage.

pub mod content_extractor;
pub mod debug_store;
pub mod search_backend;

pub use content_extractor::{ContentExtractor, ExtractedContent};
pub use debug_store::DebugArtifactStore;
pub use search_backend::SearchBackend;
