//! Mobile Routes
//!
//! Entry point for the mobile client.
//!
//! Routes:
//! - ANY {mobile_path} - Mobile workspace page
//! - ANY {mobile_path}/ - Same page

use axum::{extract::Request, response::Html, routing::any, Router};

use crate::templates::{self, MobileWorkspaceTemplate};
use crate::{AppState, Result};

/// Build mobile routes mounted at `mobile_path`.
pub fn routes(mobile_path: &str) -> Router<AppState> {
    let router = Router::new().route(mobile_path, any(index));
    if mobile_path == "/" {
        router
    } else {
        router.route(&format!("{}/", mobile_path), any(index))
    }
}

/// Render the mobile workspace.
///
/// The request is accepted but never inspected; every request gets the same page.
pub async fn index(_request: Request) -> Result<Html<String>> {
    tracing::debug!(template = templates::MOBILE_WORKSPACE, "Rendering mobile workspace");
    templates::render(&MobileWorkspaceTemplate)
}
