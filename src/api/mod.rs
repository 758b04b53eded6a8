//! API Routes for the mobile workspace server.
//!
//! This module combines all routes into a single router and applies the
//! shared middleware stack.

pub mod mobile;
pub mod status;

use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::track_requests;
use crate::AppState;

/// Build the route tree.
///
/// Route structure:
/// - {mobile_path}, {mobile_path}/ - Mobile workspace page
/// - /health, /health/ready, /health/live, /metrics - Health checks (public)
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(status::routes())
        .merge(mobile::routes(&state.config.server.mobile_path))
}

/// Build the complete application with middleware and state applied.
pub fn router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    routes(&state)
        .layer(axum::middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
