//! Router assembly.

use super::handlers;
use super::state::AppState;
use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Build the API router with all endpoints under `/api/`.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/reconstruct", post(handlers::reconstruct::reconstruct))
        .route("/restore", post(handlers::restore::restore))
        .route("/stats", get(handlers::stats::summary))
        .route("/words-refined", get(handlers::stats::words_refined))
        .route("/health", get(handlers::health::check))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
}

/// CORS for browser clients; an empty list allows any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
