// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup and a standard seeded roster
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
#![allow(missing_docs)]
//! Shared test utilities for `hardcase_core`
//!
//! Common fixture builders so the integration tests seed consistent
//! rosters without repeating row construction.

use std::sync::Once;

use chrono::{DateTime, Duration, Utc};
use hardcase_core::models::{
    AssignedProgram, AssignmentStatus, ClientProfile, ExerciseDefinition, PlannedExercise,
    SetPrescription, SubscriptionStatus, Workout,
};
use hardcase_core::store::{MemoryExecutor, MemorySeed, QueryGateway, StoreBackend};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Auth user id the standard roster links to the first client
pub const MARIA_USER_ID: &str = "user-maria";
/// First seeded client id
pub const MARIA_ID: &str = "client-maria";
/// Second seeded client id (no linked auth user)
pub const IVAN_ID: &str = "client-ivan";

pub fn sample_client(id: &str, first: &str, last: &str) -> ClientProfile {
    ClientProfile {
        id: id.to_owned(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: format!("{first}@example.com").to_lowercase(),
        phone: None,
        subscription: SubscriptionStatus::Active,
    }
}

pub fn sample_workout(id: &str, client_id: &str, start_time: DateTime<Utc>) -> Workout {
    Workout::new(id, client_id, format!("Session {id}"), start_time)
}

pub fn sample_set(set_number: u32, reps: &str, weight: Option<&str>) -> SetPrescription {
    SetPrescription {
        set_number,
        reps: reps.to_owned(),
        weight: weight.map(ToOwned::to_owned),
    }
}

pub fn sample_exercise(id: &str, order: i32, name: &str) -> PlannedExercise {
    PlannedExercise {
        id: id.to_owned(),
        exercise_id: format!("catalog-{id}"),
        name: name.to_owned(),
        description: format!("{name} cue sheet"),
        order,
        notes: None,
        sets: vec![sample_set(1, "10", None), sample_set(2, "8", Some("40kg"))],
    }
}

pub fn sample_program(id: &str, title: &str, status: AssignmentStatus) -> AssignedProgram {
    AssignedProgram {
        id: id.to_owned(),
        title: title.to_owned(),
        description: format!("{title} block"),
        created_at: Utc::now() - Duration::days(14),
        status,
        exercises: vec![sample_exercise("e1", 1, "Back squat")],
    }
}

pub fn sample_catalog_exercise(id: &str, name: &str) -> ExerciseDefinition {
    ExerciseDefinition {
        id: id.to_owned(),
        name: name.to_owned(),
        description: format!("{name} technique notes"),
        muscle_groups: vec!["quads".to_owned()],
        equipment: vec!["barbell".to_owned()],
        difficulty: "intermediate".to_owned(),
        video_url: None,
    }
}

/// Standard two-client roster: Maria (linked to an auth user, one active
/// program, workouts around now) and Ivan (no auth user, no data).
pub fn standard_roster() -> MemorySeed {
    let now = Utc::now();
    MemorySeed::new()
        .with_client(
            Some(MARIA_USER_ID),
            sample_client(MARIA_ID, "Maria", "Petrova"),
        )
        .with_client(None, sample_client(IVAN_ID, "Ivan", "Orlov"))
        .with_program(
            MARIA_ID,
            sample_program("prog-1", "Strength base", AssignmentStatus::Active),
        )
        .with_workout(sample_workout("w-past", MARIA_ID, now - Duration::days(2)))
        .with_workout(sample_workout("w-soon", MARIA_ID, now + Duration::hours(3)))
        .with_workout(sample_workout("w-later", MARIA_ID, now + Duration::days(2)))
        .with_exercise(sample_catalog_exercise("catalog-e1", "Back squat"))
}

/// Wrap an executor in the typed gateway
pub fn gateway_over(executor: MemoryExecutor) -> QueryGateway {
    QueryGateway::new(StoreBackend::from(executor))
}

/// Gateway over the standard roster
pub fn seeded_gateway() -> QueryGateway {
    init_test_logging();
    gateway_over(standard_roster().build())
}
