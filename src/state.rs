//! Application state for the mobile workspace server.
//!
//! Contains the shared state that is passed to all handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<Config>,
    /// Instant the state was created, used for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the server started.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
