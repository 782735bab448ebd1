use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod http;
mod models;
mod routes;
mod services;

use adapters::{CrawlSearchBackend, KeywordSearchBackend, SemanticSearchBackend};
use application::SearchService;
use config::AppConfig;
use postscout::{DebugArtifactStore, SearchBackend};
use services::debug_store::FileDebugStore;
use services::fetcher::PageFetcher;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<SearchService>,
    pub debug_store: Arc<dyn DebugArtifactStore>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Postscout API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postscout_server=info,postscout=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("🔎 Postscout API initializing...");

    let config = AppConfig::from_env()?;

    if config.together_api_key.is_none() {
        tracing::warn!("⚠️  No TOGETHER_API_KEY set - crawl provider disabled");
    }
    if config.exa_api_key.is_none() {
        tracing::warn!("⚠️  No EXA_API_KEY set - semantic provider disabled");
    }

    let crawl = CrawlSearchBackend::new(
        config.together_api_key.clone(),
        config.default_llm_model.clone(),
        config.fetch_timeout,
        config.max_results,
    );
    let keyword = KeywordSearchBackend::new(config.fetch_timeout, config.max_results);
    let semantic = SemanticSearchBackend::new(
        config.exa_api_key.clone(),
        config.fetch_timeout,
        config.max_results,
    );

    let backends: Vec<Arc<dyn SearchBackend>> =
        vec![Arc::new(crawl), Arc::new(keyword), Arc::new(semantic)];

    let extractor = Arc::new(PageFetcher::new(config.fetch_timeout));
    let debug_store: Arc<dyn DebugArtifactStore> =
        Arc::new(FileDebugStore::new(config.debug_dir.clone()));

    let search_service = Arc::new(SearchService::new(
        backends,
        extractor,
        debug_store.clone(),
        config.fetch_timeout,
    ));

    let state = AppState {
        search_service,
        debug_store,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::search::router())
        .merge(routes::debug::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Postscout API listening on {}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
