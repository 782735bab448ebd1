//! Debug artifact route

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};

use postscout::SearchError;

use crate::AppState;

/// Retrieve a raw-HTML debug artifact written during a `debug_html` search.
#[utoipa::path(
    get,
    path = "/api/linkedin/debug/{filename}",
    params(
        ("filename" = String, Path, description = "Artifact name as returned in a post's debug_reference")
    ),
    responses(
        (status = 200, description = "Artifact contents"),
        (status = 400, description = "Invalid artifact name"),
        (status = 404, description = "No artifact with this name"),
        (status = 500, description = "Artifact could not be read")
    ),
    tag = "Debug"
)]
pub async fn get_debug_artifact(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let contents = state
        .debug_store
        .open(&filename)
        .await
        .map_err(open_error_status)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                format!("No debug artifact named '{}'", filename),
            )
        })?;

    Ok(([(header::CONTENT_TYPE, content_type(&filename))], contents))
}

/// A rejected artifact name is the caller's fault; a failed disk read
/// is ours.
fn open_error_status(err: SearchError) -> (StatusCode, String) {
    let status = match &err {
        SearchError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

fn content_type(filename: &str) -> &'static str {
    if filename.ends_with(".html") {
        "text/html; charset=utf-8"
    } else if filename.ends_with(".json") {
        "application/json"
    } else {
        "text/plain; charset=utf-8"
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/linkedin/debug/:filename", get(get_debug_artifact))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_follows_the_extension() {
        assert_eq!(content_type("p-1_raw.html"), "text/html; charset=utf-8");
        assert_eq!(content_type("payload.json"), "application/json");
        assert_eq!(content_type("notes.txt"), "text/plain; charset=utf-8");
    }

    #[test]
    fn bad_names_are_client_errors_read_failures_are_server_errors() {
        let (status, _) = open_error_status(SearchError::validation("invalid artifact name: .."));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) =
            open_error_status(SearchError::extraction("read of x failed: permission denied"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
