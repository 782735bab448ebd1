//! Postscout API Routes
//!
//! - /api/linkedin/search - post search
//! - /api/linkedin/debug/:filename - debug artifact retrieval

pub mod debug;
pub mod search;
pub mod swagger;
