//! Common test utilities and helpers.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use mobile_workspace::config::Config;
use mobile_workspace::{api, AppState};

/// Build the full application router with default configuration.
pub fn test_app() -> Router {
    api::router(AppState::new(Config::default()))
}

/// Build the full application router with the workspace mounted at `path`.
pub fn test_app_at(path: &str) -> Router {
    let config = Config::from_lookup(|key| (key == "MOBILE_PATH").then(|| path.to_string()))
        .expect("Failed to build test config");
    api::router(AppState::new(config))
}

/// Extract the body of a response as a UTF-8 string
pub async fn extract_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

/// Create a bodyless request
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Create a request with a content type and body
pub fn request_with_body(method: &str, uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}
