//! Mobile Workspace
//!
//! Serves the mobile client entry point of the feed reader web application.
//! Library exports for testing and the server binary.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;
pub mod telemetry;
pub mod templates;

pub use error::{Error, Result};
pub use state::AppState;
