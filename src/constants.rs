// ABOUTME: Route paths, store collection names, and query limits shared across modules
// ABOUTME: Provides named constants to eliminate magic strings in gateway and navigation code
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

/// Route paths served by the external router.
pub mod routes {
    /// Login screen, also the target of every role-gate redirect
    pub const LOGIN: &str = "/login";

    /// Client home dashboard
    pub const CLIENT_HOME: &str = "/client";

    /// Trainer home dashboard
    pub const TRAINER_HOME: &str = "/trainer";

    /// Trainer dashboard opened on the clients view
    pub const TRAINER_CLIENTS: &str = "/trainer/clients";

    /// Trainer dashboard opened on the calendar view
    pub const TRAINER_CALENDAR: &str = "/trainer/calendar";

    /// Exercise catalog browser
    pub const TRAINER_EXERCISES: &str = "/trainer/exercises";
}

/// Store collection names the query gateway targets.
pub mod collections {
    /// Client records with nested program trees (store-side view)
    pub const CLIENT_PROFILES: &str = "client_profiles";

    /// Per-client assigned program rows with nested exercises and sets
    pub const CLIENT_PROGRAMS: &str = "client_programs";

    /// Scheduled workout rows
    pub const WORKOUTS: &str = "workouts";

    /// Exercise catalog reference data
    pub const EXERCISES: &str = "exercises";
}

/// Service identity used in logs and diagnostics.
pub mod service {
    /// Canonical service name
    pub const NAME: &str = "hardcase-core";
}

/// Query limits and defaults.
pub mod limits {
    /// Upcoming workouts fetched per dashboard load
    pub const UPCOMING_WORKOUTS: u32 = 5;

    /// Upper bound applied to unbounded list queries
    pub const MAX_ROWS: u32 = 500;

    /// Default store request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Default store connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}
