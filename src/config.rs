//! Configuration management for the mobile workspace server.
//!
//! Loads configuration from environment variables (and `.env` when present).

use std::env;
use std::sync::OnceLock;

use crate::{Error, Result};

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "mobile_workspace=debug,tower_http=debug";

/// Paths owned by the status routes.
const RESERVED_PATHS: &[&str] = &["/health", "/metrics"];

/// Initialize configuration from the environment (call once at startup)
pub fn init() -> Result<&'static Config> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = Config::from_env()?;
    Ok(CONFIG.get_or_init(|| config))
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Mount path of the workspace page, e.g. `/mobile`
    pub mobile_path: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8000,
                mobile_path: "/mobile".into(),
                request_timeout_secs: 30,
            },
            logging: LoggingConfig {
                filter: DEFAULT_LOG_FILTER.into(),
                format: LogFormat::Pretty,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = get("PORT", &defaults.server.port.to_string())
            .parse::<u16>()
            .map_err(|e| Error::Config(format!("Invalid PORT: {}", e)))?;

        let request_timeout_secs = get(
            "REQUEST_TIMEOUT_SECS",
            &defaults.server.request_timeout_secs.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| Error::Config(format!("Invalid REQUEST_TIMEOUT_SECS: {}", e)))?;

        let format = get("LOG_FORMAT", "pretty")
            .parse::<LogFormat>()
            .map_err(Error::Config)?;

        Ok(Self {
            server: ServerConfig {
                host: get("HOST", &defaults.server.host),
                port,
                mobile_path: validate_mount_path(normalize_path(&get(
                    "MOBILE_PATH",
                    &defaults.server.mobile_path,
                )))?,
                request_timeout_secs,
            },
            logging: LoggingConfig {
                filter: get("RUST_LOG", DEFAULT_LOG_FILTER),
                format,
            },
        })
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// One leading slash, no trailing slash. An empty path maps to `/`.
fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Reject mount paths axum would treat as route syntax, that can never match,
/// or that would collide with the status routes.
fn validate_mount_path(path: String) -> Result<String> {
    if path.contains([':', '*']) {
        return Err(Error::Config(format!(
            "Invalid MOBILE_PATH {:?}: captures and wildcards are not allowed",
            path
        )));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(Error::Config(format!(
            "Invalid MOBILE_PATH {:?}: whitespace is not allowed",
            path
        )));
    }
    let reserved = RESERVED_PATHS
        .iter()
        .any(|r| path == *r || path.starts_with(&format!("{}/", r)));
    if reserved {
        return Err(Error::Config(format!(
            "Invalid MOBILE_PATH {:?}: reserved for status routes",
            path
        )));
    }
    Ok(path)
}
