// ABOUTME: Environment-driven configuration for the store backend and screen defaults
// ABOUTME: Reads HARDCASE_* variables with validated fallbacks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};
use url::Url;

use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Which query executor the store factory should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackendKind {
    /// In-memory store, the default for demos and tests.
    #[default]
    Memory,
    /// REST store speaking the PostgREST-style query dialect.
    Http,
}

impl FromStr for StoreBackendKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "http" => Ok(Self::Http),
            other => Err(AppError::config(format!(
                "unknown store backend '{other}', expected memory or http"
            ))),
        }
    }
}

impl fmt::Display for StoreBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Http => write!(f, "http"),
        }
    }
}

/// Store connection settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backend to build.
    pub backend: StoreBackendKind,
    /// Base URL of the REST store; required for the http backend.
    pub base_url: Option<Url>,
    /// API key sent as both `apikey` and bearer token, when set.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackendKind::Memory,
            base_url: None,
            api_key: None,
            request_timeout_secs: limits::REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: limits::CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Store connection settings.
    pub store: StoreConfig,
    /// How many upcoming workouts a dashboard load fetches.
    pub upcoming_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            upcoming_limit: limits::UPCOMING_WORKOUTS,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; set-but-invalid values are
    /// configuration errors rather than silent fallbacks.
    ///
    /// # Errors
    ///
    /// Returns a config error when a variable holds an unparseable value
    /// or the http backend is selected without a store URL.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {e}");
        }

        let backend = match env::var("HARDCASE_STORE_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => StoreBackendKind::default(),
        };
        let base_url = match env::var("HARDCASE_STORE_URL") {
            Ok(raw) => Some(Url::parse(&raw).map_err(|e| {
                AppError::config(format!("invalid HARDCASE_STORE_URL '{raw}': {e}"))
            })?),
            Err(_) => None,
        };
        let config = Self {
            store: StoreConfig {
                backend,
                base_url,
                api_key: env::var("HARDCASE_STORE_API_KEY").ok(),
                request_timeout_secs: env_parsed(
                    "HARDCASE_STORE_TIMEOUT_SECS",
                    limits::REQUEST_TIMEOUT_SECS,
                )?,
                connect_timeout_secs: env_parsed(
                    "HARDCASE_STORE_CONNECT_TIMEOUT_SECS",
                    limits::CONNECT_TIMEOUT_SECS,
                )?,
            },
            upcoming_limit: env_parsed("HARDCASE_UPCOMING_LIMIT", limits::UPCOMING_WORKOUTS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns a config error when the http backend has no store URL or a
    /// limit is zero.
    pub fn validate(&self) -> AppResult<()> {
        if self.store.backend == StoreBackendKind::Http && self.store.base_url.is_none() {
            return Err(AppError::config(
                "HARDCASE_STORE_URL is required for the http store backend",
            ));
        }
        if self.upcoming_limit == 0 {
            return Err(AppError::config("HARDCASE_UPCOMING_LIMIT must be at least 1"));
        }
        if self.store.request_timeout_secs == 0 || self.store.connect_timeout_secs == 0 {
            return Err(AppError::config("store timeouts must be at least 1 second"));
        }
        Ok(())
    }
}

/// Parse an environment variable, falling back to `default` when unset.
fn env_parsed<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("invalid {key} value '{raw}'"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, StoreBackendKind, StoreConfig};

    #[test]
    fn backend_kind_parses_case_insensitively() {
        assert_eq!("HTTP".parse::<StoreBackendKind>().ok(), Some(StoreBackendKind::Http));
        assert_eq!(
            " memory ".parse::<StoreBackendKind>().ok(),
            Some(StoreBackendKind::Memory)
        );
        assert!("postgres".parse::<StoreBackendKind>().is_err());
    }

    #[test]
    fn default_config_validates() {
        let config = AppConfig {
            store: StoreConfig::default(),
            upcoming_limit: 5,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn http_backend_requires_a_url() {
        let config = AppConfig {
            store: StoreConfig {
                backend: StoreBackendKind::Http,
                ..StoreConfig::default()
            },
            upcoming_limit: 5,
        };
        assert!(config.validate().is_err());
    }
}
