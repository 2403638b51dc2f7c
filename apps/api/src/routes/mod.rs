pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/parse",
            post(handlers::handle_parse_resume),
        )
        .with_state(state)
}

/// Any origin, with credentials, all methods and headers.
/// Development policy: narrow this before exposing the service publicly.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
