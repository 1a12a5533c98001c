// ABOUTME: Query gateway to the remote persistence service
// ABOUTME: Executor trait, normalized store failures, and the typed operation layer
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

//! # Query Gateway
//!
//! Two layers:
//!
//! - [`QueryExecutor`]: the leaf contract. Executes one [`QuerySpec`] against
//!   a backend and returns raw JSON rows or a normalized [`StoreError`].
//!   Exactly one attempt per call; retries are the caller's policy decision.
//! - [`QueryGateway`]: the typed operation layer screens consume. Builds
//!   specs, runs the executor, and validates rows into the record shapes of
//!   [`rows`], quarantining shape violations.

pub mod factory;
pub mod http;
pub mod memory;
pub mod query;
pub mod rows;

pub use factory::StoreBackend;
pub use http::HttpExecutor;
pub use memory::{MemoryExecutor, MemorySeed};
pub use query::{Filter, FilterOp, Order, QuerySpec};
pub use rows::{ClientProfileRow, ExerciseRefRow, ParsedRows, ProgramExerciseRow, ProgramRow, SetRow};

use crate::constants::{collections, limits};
use crate::dashboard;
use crate::errors::{AppError, ErrorCode};
use crate::models::{ClientProfile, ExerciseDefinition, Workout};
use async_trait::async_trait;
use chrono::{DateTime, Local, SecondsFormat, Utc};
use rows::{parse_rows, IdRow};
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::instrument;

/// Normalized failure kinds surfaced by every backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The requested record (or collection) does not exist
    NotFound,
    /// The store could not be reached or timed out
    Connection,
    /// Anything else
    Unknown,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Connection => write!(f, "connection"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A failed store interaction.
///
/// Carries the normalized kind for policy decisions plus the store's raw
/// error code (HTTP status, store error code) for diagnostics.
#[derive(Debug, Error)]
pub struct StoreError {
    /// Normalized failure kind
    pub kind: FailureKind,
    /// Raw error code reported by the store, when one exists
    pub raw_code: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl StoreError {
    /// Create a store error of the given kind
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            raw_code: None,
            message: message.into(),
        }
    }

    /// Attach the store's raw error code
    #[must_use]
    pub fn with_raw_code(mut self, raw_code: impl Into<String>) -> Self {
        self.raw_code = Some(raw_code.into());
        self
    }

    /// A record lookup that matched nothing
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(FailureKind::NotFound, format!("{} not found", what.into()))
            .with_raw_code("no_rows")
    }

    /// The store could not be reached
    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Connection, message)
    }

    /// Catch-all failure
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Unknown, message)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw_code {
            Some(code) => write!(
                f,
                "store error ({}, code {code}): {}",
                self.kind, self.message
            ),
            None => write!(f, "store error ({}): {}", self.kind, self.message),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let code = match err.kind {
            FailureKind::NotFound => ErrorCode::NotFound,
            FailureKind::Connection => ErrorCode::ConnectionError,
            FailureKind::Unknown => ErrorCode::UnknownError,
        };
        Self::new(code, err.message.clone()).with_source(err)
    }
}

/// Result type for store interactions
pub type StoreResult<T> = Result<T, StoreError>;

/// Executes structured read queries against one store backend.
///
/// Implementations must be `Send + Sync` so one executor can serve every
/// screen's concurrent fetches.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Execute one query and return its raw rows.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] with the normalized failure kind; never
    /// retries automatically.
    async fn fetch(&self, spec: &QuerySpec) -> StoreResult<Vec<Value>>;
}

/// Render a UTC instant the way the store renders timestamps.
///
/// Uniform rendering (second precision, `Z` suffix) keeps lexicographic
/// range comparisons in the memory backend exact.
pub(crate) fn store_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Typed operation layer over a [`StoreBackend`].
///
/// One gateway instance is shared by every screen; ops for independent data
/// may run concurrently and complete in any order.
pub struct QueryGateway {
    backend: StoreBackend,
}

impl QueryGateway {
    /// Wrap a configured backend
    #[must_use]
    pub const fn new(backend: StoreBackend) -> Self {
        Self { backend }
    }

    /// Execute a raw query spec, bypassing the typed ops.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`StoreError`] untouched.
    pub async fn fetch(&self, spec: &QuerySpec) -> StoreResult<Vec<Value>> {
        self.backend.fetch(spec).await
    }

    /// Resolve the client record id for an authenticated user.
    ///
    /// # Errors
    ///
    /// `NotFound` when no client record maps to the user; other kinds
    /// propagate from the backend.
    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn client_id_for_user(&self, user_id: &str) -> StoreResult<String> {
        let spec = QuerySpec::new(collections::CLIENT_PROFILES)
            .filter_eq("user_id", user_id)
            .limit(1);
        let rows = self.backend.fetch(&spec).await?;
        let parsed: ParsedRows<IdRow> = parse_rows(collections::CLIENT_PROFILES, rows);
        parsed
            .records
            .into_iter()
            .next()
            .map(|row| row.id)
            .ok_or_else(|| StoreError::not_found(format!("client for user {user_id}")))
    }

    /// Fetch a client's scheduled workouts starting at or after `from`,
    /// ascending by start time.
    ///
    /// # Errors
    ///
    /// Propagates backend failures; rows failing shape validation are
    /// quarantined, not errors.
    #[instrument(skip_all, fields(client_id = %client_id, limit))]
    pub async fn upcoming_workouts(
        &self,
        client_id: &str,
        from: DateTime<Utc>,
        limit: u32,
    ) -> StoreResult<Vec<Workout>> {
        let spec = QuerySpec::new(collections::WORKOUTS)
            .filter_eq("client_id", client_id)
            .filter_gte("start_time", store_timestamp(from))
            .order_asc("start_time")
            .limit(limit);
        let rows = self.backend.fetch(&spec).await?;
        Ok(parse_rows(collections::WORKOUTS, rows).records)
    }

    /// Count a client's workouts inside the current local month window.
    ///
    /// Fetches the window's rows through the generic query path and derives
    /// the count with the pure month predicate, so the figure always agrees
    /// with what the dashboard would render from the same rows.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    #[instrument(skip_all, fields(client_id = %client_id))]
    pub async fn monthly_workout_count(
        &self,
        client_id: &str,
        month_start: DateTime<Local>,
        now: DateTime<Local>,
    ) -> StoreResult<u64> {
        let spec = QuerySpec::new(collections::WORKOUTS)
            .filter_eq("client_id", client_id)
            .filter_gte("start_time", store_timestamp(month_start.with_timezone(&Utc)))
            .filter_lte("start_time", store_timestamp(now.with_timezone(&Utc)))
            .limit(limits::MAX_ROWS);
        let rows = self.backend.fetch(&spec).await?;
        let workouts: Vec<Workout> = parse_rows(collections::WORKOUTS, rows).records;
        Ok(dashboard::workouts_this_month(&workouts, now))
    }

    /// Fetch a client's assigned program rows, nested exercises included.
    ///
    /// # Errors
    ///
    /// Propagates backend failures; malformed program rows are quarantined.
    #[instrument(skip_all, fields(client_id = %client_id))]
    pub async fn client_programs(&self, client_id: &str) -> StoreResult<Vec<ProgramRow>> {
        let spec = QuerySpec::new(collections::CLIENT_PROGRAMS).filter_eq("client_id", client_id);
        let rows = self.backend.fetch(&spec).await?;
        Ok(parse_rows(collections::CLIENT_PROGRAMS, rows).records)
    }

    /// Fetch one client record with its nested program tree.
    ///
    /// # Errors
    ///
    /// `NotFound` when the id matches nothing (single-record semantics);
    /// `Unknown` with raw code `invalid_record` when the row fails shape
    /// validation.
    #[instrument(skip_all, fields(client_id = %client_id))]
    pub async fn client_profile(&self, client_id: &str) -> StoreResult<ClientProfileRow> {
        let spec = QuerySpec::new(collections::CLIENT_PROFILES)
            .filter_eq("id", client_id)
            .limit(1);
        let rows = self.backend.fetch(&spec).await?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::not_found(format!("client {client_id}")))?;
        serde_json::from_value(row).map_err(|err| {
            StoreError::unknown(format!("client profile row failed shape validation: {err}"))
                .with_raw_code("invalid_record")
        })
    }

    /// Fetch the trainer-facing client roster, ordered by family name.
    ///
    /// # Errors
    ///
    /// Propagates backend failures; malformed rows are quarantined.
    #[instrument(skip_all)]
    pub async fn clients(&self) -> StoreResult<Vec<ClientProfile>> {
        let spec = QuerySpec::new(collections::CLIENT_PROFILES)
            .order_asc("last_name")
            .limit(limits::MAX_ROWS);
        let rows = self.backend.fetch(&spec).await?;
        let parsed: ParsedRows<ClientProfileRow> = parse_rows(collections::CLIENT_PROFILES, rows);
        Ok(parsed
            .records
            .iter()
            .map(ClientProfileRow::to_profile)
            .collect())
    }

    /// Fetch the exercise catalog, ordered by name.
    ///
    /// # Errors
    ///
    /// Propagates backend failures; malformed rows are quarantined.
    #[instrument(skip_all)]
    pub async fn exercise_catalog(&self) -> StoreResult<Vec<ExerciseDefinition>> {
        let spec = QuerySpec::new(collections::EXERCISES)
            .order_asc("name")
            .limit(limits::MAX_ROWS);
        let rows = self.backend.fetch(&spec).await?;
        Ok(parse_rows(collections::EXERCISES, rows).records)
    }
}
