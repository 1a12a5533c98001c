// ABOUTME: Role-gated screen access over externally issued sessions
// ABOUTME: Session retrieval trait, the authorize check, and the gate lifecycle
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

//! # Role Gate
//!
//! Session issuance lives outside this crate; the gate only consumes
//! [`Session`] values fetched through [`SessionProvider`] at screen entry.
//! The check is fail-closed: a missing session, a role mismatch, and a
//! retrieval failure all redirect to the login route, silently. There is no
//! forbidden page and no error notice for denied access.
//!
//! A protected screen resolves its gate before issuing any data fetch; while
//! the gate is [`GateState::Pending`] the shell renders a neutral loading
//! state.

use crate::errors::{AppError, AppResult};
use crate::navigation::Route;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use tracing::{debug, warn};

/// The two account roles the router distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A coached client
    Client,
    /// A coach managing clients
    Trainer,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Trainer => write!(f, "trainer"),
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "trainer" => Ok(Self::Trainer),
            other => Err(AppError::config(format!(
                "unknown role '{other}', expected client or trainer"
            ))),
        }
    }
}

/// An authenticated principal, valid for one screen entry.
///
/// Threaded explicitly through gate and screen calls; never ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Auth user identifier (not the client record id)
    pub user_id: String,
    /// Role granted at sign-in
    pub role: Role,
}

impl Session {
    /// Create a session value
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }
}

/// Result of the pure access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAccess {
    /// Render the protected screen
    Allow,
    /// Leave for the given route instead
    Redirect(Route),
}

/// Decide access for a protected screen.
///
/// Fail-closed: no session and a session with the wrong role are treated
/// identically.
#[must_use]
pub fn authorize(session: Option<&Session>, required: Role) -> ScreenAccess {
    match session {
        Some(session) if session.role == required => ScreenAccess::Allow,
        Some(session) => {
            debug!(role = %session.role, required = %required, "role mismatch, redirecting to login");
            ScreenAccess::Redirect(Route::Login)
        }
        None => {
            debug!(required = %required, "no session, redirecting to login");
            ScreenAccess::Redirect(Route::Login)
        }
    }
}

/// Lifecycle of a screen's gate check
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    /// Check not resolved yet; render a neutral loading state
    #[default]
    Pending,
    /// Access granted; data fetches may begin
    Allowed,
    /// Access denied; dispatch the redirect
    Redirect(Route),
}

impl GateState {
    /// Whether data fetches may begin
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Whether the check is still unresolved
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Source of the current session, implemented by the auth collaborator
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Fetch the current session, `None` when signed out.
    ///
    /// # Errors
    ///
    /// Implementations may fail on transport problems; the gate treats any
    /// failure as signed out.
    async fn current_session(&self) -> AppResult<Option<Session>>;
}

/// Resolve a screen's gate by fetching the session and applying
/// [`authorize`]. Retrieval failures are logged and treated as signed out.
pub async fn resolve_gate(provider: &dyn SessionProvider, required: Role) -> GateState {
    match provider.current_session().await {
        Ok(session) => match authorize(session.as_ref(), required) {
            ScreenAccess::Allow => GateState::Allowed,
            ScreenAccess::Redirect(route) => GateState::Redirect(route),
        },
        Err(err) => {
            warn!(error = %err, "session retrieval failed, treating as signed out");
            GateState::Redirect(Route::Login)
        }
    }
}

/// Session provider returning a fixed value; used by the demo binary and
/// anywhere a real auth collaborator is not wired up
#[derive(Debug, Clone, Default)]
pub struct StaticSessionProvider {
    session: Option<Session>,
}

impl StaticSessionProvider {
    /// Provider that always reports this session
    #[must_use]
    pub const fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// Provider that always reports signed out
    #[must_use]
    pub const fn signed_out() -> Self {
        Self { session: None }
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn current_session(&self) -> AppResult<Option<Session>> {
        Ok(self.session.clone())
    }
}
