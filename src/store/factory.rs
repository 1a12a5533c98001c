// ABOUTME: Backend factory selecting between the HTTP and memory executors
// ABOUTME: Enum dispatch keeps the gateway monomorphic over one concrete backend type
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

use super::{HttpExecutor, MemoryExecutor, QueryExecutor, StoreResult};
use crate::config::{StoreBackendKind, StoreConfig};
use crate::errors::{AppError, AppResult};
use crate::store::query::QuerySpec;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// The configured store backend.
///
/// Enum dispatch rather than trait objects, so call sites stay free of
/// dynamic casts and the compiler sees every implementation.
#[derive(Debug)]
pub enum StoreBackend {
    /// Remote PostgREST-style endpoint
    Http(HttpExecutor),
    /// In-process collections for development, tests, and demos
    Memory(MemoryExecutor),
}

impl StoreBackend {
    /// Build the backend the configuration names.
    ///
    /// # Errors
    ///
    /// Returns a config error when the http backend is selected without a
    /// base URL.
    pub fn from_config(config: &StoreConfig) -> AppResult<Self> {
        match config.backend {
            StoreBackendKind::Memory => Ok(Self::Memory(MemoryExecutor::new())),
            StoreBackendKind::Http => {
                let base_url = config.base_url.clone().ok_or_else(|| {
                    AppError::config("HARDCASE_STORE_URL is required for the http store backend")
                })?;
                Ok(Self::Http(HttpExecutor::with_timeouts(
                    base_url,
                    config.api_key.clone(),
                    Duration::from_secs(config.request_timeout_secs),
                    Duration::from_secs(config.connect_timeout_secs),
                )))
            }
        }
    }

    /// Short backend name for startup logging
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl QueryExecutor for StoreBackend {
    async fn fetch(&self, spec: &QuerySpec) -> StoreResult<Vec<Value>> {
        match self {
            Self::Http(executor) => executor.fetch(spec).await,
            Self::Memory(executor) => executor.fetch(spec).await,
        }
    }
}

impl From<MemoryExecutor> for StoreBackend {
    fn from(executor: MemoryExecutor) -> Self {
        Self::Memory(executor)
    }
}

impl From<HttpExecutor> for StoreBackend {
    fn from(executor: HttpExecutor) -> Self {
        Self::Http(executor)
    }
}
