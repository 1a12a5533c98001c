// ABOUTME: Unified error taxonomy for gateway failures and ambient concerns
// ABOUTME: Defines error codes, the AppError type, and user-facing descriptions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

//! # Unified Error Handling
//!
//! Every fallible path in the crate funnels into [`AppError`]. Store failures
//! arrive already normalized ([`crate::store::StoreError`]) and map onto the
//! three user-visible codes; ambient concerns (configuration, record
//! validation) get their own codes so logs stay searchable.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A requested record does not exist in the store
    #[serde(rename = "NOT_FOUND")]
    NotFound,
    /// The store could not be reached or timed out
    #[serde(rename = "CONNECTION_ERROR")]
    ConnectionError,
    /// Any failure that fits no other code
    #[serde(rename = "UNKNOWN_ERROR")]
    UnknownError,
    /// A fetched row did not match its expected record shape
    #[serde(rename = "INVALID_RECORD")]
    InvalidRecord,
    /// Configuration is missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NotFound => "The requested record was not found",
            Self::ConnectionError => "The data store could not be reached",
            Self::UnknownError => "An unexpected error occurred",
            Self::InvalidRecord => "A fetched record did not match its expected shape",
            Self::ConfigError => "Configuration error encountered",
        }
    }

    /// Short text suitable for a non-blocking user notice
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound => "Profile not found",
            Self::ConnectionError => "Connection problem. Check your network and try again",
            Self::UnknownError | Self::InvalidRecord | Self::ConfigError => {
                "Something went wrong. Please try again"
            }
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Identifier of the record or collection involved, when known
    pub resource: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource: None,
            source: None,
        }
    }

    /// Attach the identifier of the record or collection involved
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Record not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::new(ErrorCode::NotFound, format!("{resource} not found")).with_resource(resource)
    }

    /// Store unreachable
    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConnectionError, message)
    }

    /// Catch-all failure
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnknownError, message)
    }

    /// Row failed shape validation
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRecord, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

/// Conversion from `anyhow::Error` for binary and test edges
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(ErrorCode::UnknownError, error.to_string())
    }
}
