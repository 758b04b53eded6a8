//! Integration tests for the mobile workspace route.
//!
//! Drives the real router with `tower::ServiceExt::oneshot`.

mod common;

use axum::http::{header, StatusCode};
use common::{extract_text, request, request_with_body, test_app, test_app_at};
use mobile_workspace::templates::{self, MobileWorkspaceTemplate};
use rstest::rstest;
use tower::ServiceExt;

/// Body produced by rendering the template directly, without HTTP.
fn expected_body() -> String {
    templates::render(&MobileWorkspaceTemplate).unwrap().0
}

#[tokio::test]
async fn test_get_renders_workspace() {
    let response = test_app()
        .oneshot(request("GET", "/mobile"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {}", content_type);

    let body = extract_text(response).await;
    assert_eq!(body, expected_body());
    assert!(body.contains("id=\"mobile-workspace\""));
}

#[tokio::test]
async fn test_trailing_slash_renders_workspace() {
    let response = test_app()
        .oneshot(request("GET", "/mobile/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_text(response).await, expected_body());
}

#[rstest]
#[case::plain_get(request("GET", "/mobile"))]
#[case::query_string(request("GET", "/mobile?folder=tech&page=3&theme=dark"))]
#[case::form_post(request_with_body(
    "POST",
    "/mobile/",
    "application/x-www-form-urlencoded",
    "feed_id=42&story_id=abc"
))]
#[case::json_post(request_with_body(
    "POST",
    "/mobile",
    "application/json",
    r#"{"username":"reader","folders":["news"]}"#
))]
#[case::put(request_with_body("PUT", "/mobile", "text/plain", "ignored"))]
#[tokio::test]
async fn test_request_payload_does_not_affect_output(
    #[case] req: axum::http::Request<axum::body::Body>,
) {
    let response = test_app().oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_text(response).await, expected_body());
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let app = test_app();
    let mut bodies = Vec::new();

    for _ in 0..3 {
        let response = app.clone().oneshot(request("GET", "/mobile")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(extract_text(response).await);
    }

    assert!(bodies.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_custom_mount_path() {
    let app = test_app_at("m/");

    let response = app.clone().oneshot(request("GET", "/m")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_text(response).await, expected_body());

    let response = app.oneshot(request("GET", "/mobile")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_mount_path() {
    let response = test_app_at("/")
        .oneshot(request("GET", "/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_text(response).await, expected_body());
}

#[tokio::test]
async fn test_unmapped_path_is_not_found() {
    let response = test_app()
        .oneshot(request("GET", "/mobile/feeds"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
