use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::get;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use super::groups::RouteGroups;
use super::health;
use super::AppState;
use crate::error::AppError;
use crate::middleware_impls::{cors_gate, request_id_middleware};

/// Maximum accepted request body size
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Fallback for any path no route group claims
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// Create application router
pub fn create_router(state: Arc<AppState>, groups: RouteGroups) -> axum::Router {
    let health_routes = axum::Router::new().route("/api/health", get(health::health_check));

    // Layers run bottom-up: request id, trace, CORS gate, then body limit
    groups
        .mount(health_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn_with_state(state, cors_gate))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}
