//! Client Configuration
//!
//! Baked in at build time (`TODO_API_URL=... trunk build`), since a static
//! WASM bundle has no process environment to read at runtime.

use std::time::Duration;

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "http://localhost:4000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
/// The single well-known key the session token is persisted under
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Service root, without trailing slash
    pub api_base: String,
    pub token_key: String,
    pub request_timeout: Duration,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token_key: TOKEN_KEY.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Read the values captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_vars(
            option_env!("TODO_API_URL"),
            option_env!("TODO_REQUEST_TIMEOUT_SECS"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    /// Unset or unparseable values keep their defaults.
    pub fn from_vars(api_base: Option<&str>, timeout_secs: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }

        if let Some(raw) = timeout_secs {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => log::warn!("Ignoring invalid TODO_REQUEST_TIMEOUT_SECS={:?}", raw),
            }
        }

        if let Some(raw) = log_level {
            match raw.trim().parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("Ignoring invalid TODO_LOG_LEVEL={:?}", raw),
            }
        }

        config
    }
}
