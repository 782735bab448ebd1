//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use postscout::{CanonicalPost, ProviderKind, SearchMetadata, SearchResponse};

use crate::models::SearchRequest;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::search::search_posts,
        super::debug::get_debug_artifact,
    ),
    info(
        title = "Postscout API",
        version = "0.1.0",
        description = "LinkedIn post search and extraction service.\n\nThree pluggable search backends (crawl, keyword, semantic) feed a shared normalization and content-extraction pipeline.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Search", description = "LinkedIn post search across pluggable backends"),
        (name = "Debug", description = "Raw-HTML artifacts captured during extraction"),
    ),
    components(
        schemas(
            SearchRequest,
            SearchResponse,
            SearchMetadata,
            CanonicalPost,
            ProviderKind,
        )
    )
)]
pub struct ApiDoc;
