// ABOUTME: Non-blocking user notices surfaced for toast rendering
// ABOUTME: Maps normalized failures to short user-facing text, raw details stay in logs
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

use crate::errors::{AppError, ErrorCode};
use crate::store::{FailureKind, StoreError};
use serde::{Deserialize, Serialize};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Something failed; shown in the error style
    Error,
    /// Informational; shown in the neutral style
    Info,
}

/// One toast-sized message for the notification collaborator.
///
/// Screens queue notices during loads; the shell drains and renders them.
/// Notices never block rendering of data that did resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// User-facing text
    pub message: String,
}

impl Notice {
    /// An error-level notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// An info-level notice
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// User-facing notice for an application error.
    ///
    /// Uses the code's generic wording; the precise message stays in logs.
    #[must_use]
    pub fn from_app_error(err: &AppError) -> Self {
        Self::error(err.code.user_message())
    }

    /// User-facing notice for a normalized store failure
    #[must_use]
    pub fn from_store_error(err: &StoreError) -> Self {
        let code = match err.kind {
            FailureKind::NotFound => ErrorCode::NotFound,
            FailureKind::Connection => ErrorCode::ConnectionError,
            FailureKind::Unknown => ErrorCode::UnknownError,
        };
        Self::error(code.user_message())
    }
}
