//! Search route

use axum::{extract::State, routing::post, Json, Router};

use postscout::{SearchError, SearchQuery, SearchResponse};

use crate::models::SearchRequest;
use crate::AppState;

/// Search LinkedIn posts with the given keywords and parameters.
#[utoipa::path(
    post,
    path = "/api/linkedin/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Search completed; zero posts is a valid outcome", body = SearchResponse),
        (status = 400, description = "Malformed query (empty keywords, inverted date window, unknown provider)"),
        (status = 422, description = "Missing credential for the selected provider"),
        (status = 502, description = "The selected search backend failed")
    ),
    tag = "Search"
)]
pub async fn search_posts(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (axum::http::StatusCode, String)> {
    let query: SearchQuery = payload.into();
    let response = state.search_service.run(query).await.map_err(error_status)?;

    tracing::info!(
        total = response.total_posts,
        provider = %response.search_metadata.provider,
        "search completed"
    );
    Ok(Json(response))
}

/// Map domain errors onto HTTP statuses. Per-hit extraction failures
/// are recovered inside the orchestrator and should never reach here.
fn error_status(err: SearchError) -> (axum::http::StatusCode, String) {
    use axum::http::StatusCode;

    let status = match &err {
        SearchError::Validation(_) => StatusCode::BAD_REQUEST,
        SearchError::Configuration { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SearchError::Provider { .. } => StatusCode::BAD_GATEWAY,
        SearchError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/linkedin/search", post(search_posts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use postscout::ProviderKind;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        let (status, _) = error_status(SearchError::validation("empty"));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, message) =
            error_status(SearchError::missing_credential("EXA_API_KEY", ProviderKind::Semantic));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(message.contains("EXA_API_KEY"));

        let (status, _) = error_status(SearchError::provider(ProviderKind::Crawl, "boom"));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
