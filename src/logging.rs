// ABOUTME: Structured logging setup over tracing with env-driven level and format
// ABOUTME: Quiets transport crates and tags startup output with the service identity
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

//! Structured logging configuration built on `tracing`.

use std::env;
use std::io;

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::service;

/// Subscriber settings applied once at startup
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Base level (trace, debug, info, warn, error)
    pub level: String,
    /// Output rendering (json, pretty, compact)
    pub format: LogFormat,
}

/// How emitted log lines are rendered
#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    /// Machine-readable `JSON` lines for production
    Json,
    /// Multi-line human-readable output for development
    Pretty,
    /// Single-line output for space-constrained terminals
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Read the level from `RUST_LOG` and the format from `LOG_FORMAT`
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self { level, format }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the tracing subscriber fails to initialize
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().with_target(true).with_writer(io::stdout).json())
                .init(),
            LogFormat::Pretty => registry
                .with(fmt::layer().with_target(true).with_writer(io::stdout))
                .init(),
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_target(false).with_writer(io::stdout))
                .init(),
        }

        info!(
            service = service::NAME,
            version = env!("CARGO_PKG_VERSION"),
            level = %self.level,
            format = ?self.format,
            "Logging initialized"
        );

        Ok(())
    }

    // Keep transport noise down even when RUST_LOG widens the base level
    fn env_filter(&self) -> EnvFilter {
        env::var("RUST_LOG")
            .map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new)
            .add_directive("hyper=warn".parse().unwrap_or_else(|_| Level::WARN.into()))
            .add_directive(
                "reqwest=warn"
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into()),
            )
            .add_directive(
                format!("hardcase_core={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| Level::INFO.into()),
            )
    }
}
