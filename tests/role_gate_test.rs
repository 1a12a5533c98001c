// ABOUTME: Unit tests for the role gate
// ABOUTME: Validates fail-closed authorization for missing, wrong-role, and failing sessions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use hardcase_core::auth::{
    authorize, resolve_gate, GateState, Role, ScreenAccess, Session, SessionProvider,
    StaticSessionProvider,
};
use hardcase_core::errors::{AppError, AppResult};
use hardcase_core::navigation::Route;

/// Provider whose session lookup always fails, as a dropped backend would
struct FailingProvider;

#[async_trait]
impl SessionProvider for FailingProvider {
    async fn current_session(&self) -> AppResult<Option<Session>> {
        Err(AppError::connection("session backend unreachable"))
    }
}

#[test]
fn test_matching_role_is_allowed() {
    let session = Session::new("user-1", Role::Client);
    assert_eq!(authorize(Some(&session), Role::Client), ScreenAccess::Allow);

    let trainer = Session::new("user-2", Role::Trainer);
    assert_eq!(authorize(Some(&trainer), Role::Trainer), ScreenAccess::Allow);
}

#[test]
fn test_role_mismatch_redirects_to_login() {
    let session = Session::new("user-1", Role::Trainer);
    assert_eq!(
        authorize(Some(&session), Role::Client),
        ScreenAccess::Redirect(Route::Login)
    );

    let client = Session::new("user-3", Role::Client);
    assert_eq!(
        authorize(Some(&client), Role::Trainer),
        ScreenAccess::Redirect(Route::Login)
    );
}

#[test]
fn test_missing_session_redirects_to_login() {
    assert_eq!(
        authorize(None, Role::Client),
        ScreenAccess::Redirect(Route::Login)
    );
    assert_eq!(
        authorize(None, Role::Trainer),
        ScreenAccess::Redirect(Route::Login)
    );
}

#[tokio::test]
async fn test_gate_allows_matching_session() {
    common::init_test_logging();
    let provider = StaticSessionProvider::signed_in(Session::new("user-1", Role::Client));

    let gate = resolve_gate(&provider, Role::Client).await;
    assert!(gate.is_allowed());
}

#[tokio::test]
async fn test_gate_redirects_signed_out_sessions() {
    common::init_test_logging();
    let provider = StaticSessionProvider::signed_out();

    let gate = resolve_gate(&provider, Role::Client).await;
    assert_eq!(gate, GateState::Redirect(Route::Login));
}

#[tokio::test]
async fn test_gate_redirects_wrong_role() {
    common::init_test_logging();
    let provider = StaticSessionProvider::signed_in(Session::new("user-1", Role::Client));

    let gate = resolve_gate(&provider, Role::Trainer).await;
    assert_eq!(gate, GateState::Redirect(Route::Login));
}

#[tokio::test]
async fn test_gate_fails_closed_when_session_lookup_fails() {
    common::init_test_logging();
    let gate = resolve_gate(&FailingProvider, Role::Client).await;
    assert_eq!(gate, GateState::Redirect(Route::Login));
}

#[test]
fn test_gate_state_defaults_to_pending() {
    let state = GateState::default();
    assert!(state.is_pending());
    assert!(!state.is_allowed());
}
