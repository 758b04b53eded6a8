//! Status Routes
//!
//! Health checks and metrics.
//!
//! Routes:
//! - GET /health - Basic health check
//! - GET /health/ready - Readiness check (templates render)
//! - GET /health/live - Liveness check (server responding)
//! - GET /metrics - Prometheus metrics endpoint

use std::time::Instant;

use askama::Template;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::middleware::{error_count, request_count};
use crate::templates::{self, MobileWorkspaceTemplate};
use crate::AppState;

/// Build status routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .route("/health/live", get(liveness_check))
        .route("/metrics", get(prometheus_metrics))
}

// ============================================================================
// Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: Vec<DependencyCheck>,
}

#[derive(Debug, Serialize)]
pub struct DependencyCheck {
    pub name: String,
    pub status: HealthStatus,
    pub latency_ms: Option<u64>,
    pub message: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").into(),
        timestamp: Utc::now(),
    })
}

async fn readiness_check() -> impl IntoResponse {
    readiness(vec![check_template(
        templates::MOBILE_WORKSPACE,
        &MobileWorkspaceTemplate,
    )])
}

async fn liveness_check() -> StatusCode {
    StatusCode::OK
}

/// Prometheus metrics endpoint.
///
/// GET /metrics
async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    let metrics = format!(
        r#"# HELP mobile_workspace_requests_total Total number of HTTP requests
# TYPE mobile_workspace_requests_total counter
mobile_workspace_requests_total {}

# HELP mobile_workspace_errors_total Total number of server errors
# TYPE mobile_workspace_errors_total counter
mobile_workspace_errors_total {}

# HELP mobile_workspace_uptime_seconds Seconds since server start
# TYPE mobile_workspace_uptime_seconds gauge
mobile_workspace_uptime_seconds {}

# HELP mobile_workspace_up Whether the service is up
# TYPE mobile_workspace_up gauge
mobile_workspace_up 1
"#,
        request_count(),
        error_count(),
        state.uptime_seconds()
    );

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Ready only when every check is healthy.
fn readiness(checks: Vec<DependencyCheck>) -> (StatusCode, Json<ReadinessResponse>) {
    let ready = checks.iter().all(|c| c.status == HealthStatus::Healthy);

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadinessResponse { ready, checks }))
}

/// Check that a template renders.
fn check_template<T: Template>(path: &str, template: &T) -> DependencyCheck {
    let start = Instant::now();
    let result = templates::render(template);
    let latency_ms = Some(start.elapsed().as_millis() as u64);

    match result {
        Ok(_) => DependencyCheck {
            name: "templates".into(),
            status: HealthStatus::Healthy,
            latency_ms,
            message: Some(path.into()),
        },
        Err(e) => {
            tracing::warn!(template = path, error = %e, "Template readiness check failed");
            DependencyCheck {
                name: "templates".into(),
                status: HealthStatus::Unhealthy,
                latency_ms,
                message: Some(e.to_string()),
            }
        }
    }
}
