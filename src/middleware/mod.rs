//! Middleware for the mobile workspace server.
//!
//! - `track_requests` - Request and server-error counters read by `/metrics`

use std::sync::atomic::{AtomicU64, Ordering};

use axum::{extract::Request, middleware::Next, response::Response};

// Global metrics (simple counters)
static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

/// Total requests seen since start.
pub fn request_count() -> u64 {
    REQUEST_COUNT.load(Ordering::Relaxed)
}

/// Total 5xx responses since start.
pub fn error_count() -> u64 {
    ERROR_COUNT.load(Ordering::Relaxed)
}

/// Count every request, and every response with a server-error status.
pub async fn track_requests(request: Request, next: Next) -> Response {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);

    let response = next.run(request).await;
    if response.status().is_server_error() {
        ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
    }

    response
}
