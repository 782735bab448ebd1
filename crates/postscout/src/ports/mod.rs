//! Ports - Abstract Interfaces
//!
//! Traits implemented by the infrastructure layer in `postscout-server`.

pub mod services;

pub use services::{ContentExtractor, DebugArtifactStore, ExtractedContent, SearchBackend};
