//! Template rendering.
//!
//! Templates are compiled into the binary by askama from the `templates/`
//! directory, so a missing template is a build failure rather than a
//! request failure.

use askama::Template;
use axum::response::Html;

use crate::Result;

/// Path of the mobile workspace template, relative to `templates/`.
pub const MOBILE_WORKSPACE: &str = "mobile/mobile_workspace.xhtml";

/// The mobile workspace page. Rendered with an empty context.
#[derive(Debug, Default, Clone, Copy, Template)]
#[template(path = "mobile/mobile_workspace.xhtml", escape = "html")]
pub struct MobileWorkspaceTemplate;

/// Render a template into an HTML response body.
///
/// Handlers return this instead of the template itself (askama_axum style)
/// so that render failures go through the crate `Error` and come back as a
/// JSON error body.
pub fn render<T: Template>(template: &T) -> Result<Html<String>> {
    let body = template.render()?;
    Ok(Html(body))
}
