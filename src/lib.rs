// ABOUTME: Library entry point for the HARDCASE coaching front-end core
// ABOUTME: Exposes the store gateway, screen state machines, and shared models
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

#![deny(unsafe_code)]

//! # HARDCASE core
//!
//! Data and state layer for the HARDCASE coaching app: a typed gateway over
//! the backing record store, pure aggregation logic for dashboards, and the
//! state machines behind the client and trainer screens.
//!
//! ## Features
//!
//! - **Typed store gateway**: validated reads over a REST or in-memory backend
//! - **Program tree assembly**: nested program/exercise/set resolution with
//!   quarantine for malformed rows
//! - **Dashboard derivations**: next-workout and calendar-month aggregation
//! - **Role-gated screens**: fail-closed access checks and pure navigation
//!   transitions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hardcase_core::config::AppConfig;
//! use hardcase_core::errors::AppResult;
//! use hardcase_core::store::{QueryGateway, StoreBackend};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let gateway = QueryGateway::new(StoreBackend::from_config(&config.store)?);
//!
//!     let roster = gateway.clients().await?;
//!     println!("coaching {} clients", roster.len());
//!     Ok(())
//! }
//! ```

/// Program tree assembly from raw store rows
pub mod assembler;

/// Sessions, roles, and the screen access gate
pub mod auth;

/// Environment-driven configuration
pub mod config;

/// Application constants and query defaults
pub mod constants;

/// Pure dashboard derivations (next workout, monthly totals)
pub mod dashboard;

/// Unified error handling with stable error codes
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Shared domain models
pub mod models;

/// Navigation state machines and effects
pub mod navigation;

/// User-facing notice queue entries
pub mod notices;

/// Screen state machines for client and trainer surfaces
pub mod screens;

/// Record store access: executors, query specs, and the typed gateway
pub mod store;
