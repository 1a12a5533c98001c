// ABOUTME: Integration tests for the client dashboard screen
// ABOUTME: Validates concurrent slot loading, partial failure, and stale-result handling
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Local, Utc};
use hardcase_core::auth::{Role, Session};
use hardcase_core::config::AppConfig;
use hardcase_core::constants::collections;
use hardcase_core::dashboard::local_month_start;
use hardcase_core::screens::{
    ClientDashboardScreen, DashboardLoad, DashboardSlots, DashboardView,
};
use hardcase_core::store::{FailureKind, MemorySeed, StoreError};

use common::{
    gateway_over, sample_client, sample_workout, seeded_gateway, standard_roster, MARIA_ID,
    MARIA_USER_ID,
};

fn maria_session() -> Session {
    Session::new(MARIA_USER_ID, Role::Client)
}

#[tokio::test]
async fn test_load_fills_all_slots() {
    let gateway = seeded_gateway();
    let mut screen = ClientDashboardScreen::mount();
    assert!(screen.is_loading());

    screen.load(&gateway, &maria_session()).await;

    assert!(!screen.is_loading());
    assert_eq!(screen.client_id(), Some(MARIA_ID));
    // Past workouts never surface as upcoming
    assert!(screen.upcoming().iter().all(|w| w.id != "w-past"));
    assert_eq!(screen.next_workout(Utc::now()).unwrap().id, "w-soon");
    assert!(screen.monthly_count().is_some());
    assert_eq!(screen.tree().programs.len(), 1);
    assert!(screen.notices().is_empty());

    assert!(matches!(
        screen.view(Utc::now()),
        DashboardView::Ready { .. }
    ));
}

#[tokio::test]
async fn test_configured_upcoming_limit_caps_the_fetch() {
    common::init_test_logging();
    let config = AppConfig {
        upcoming_limit: 1,
        ..AppConfig::default()
    };
    assert!(config.validate().is_ok());

    let seed = standard_roster().with_workout(sample_workout(
        "w-next-week",
        MARIA_ID,
        Utc::now() + Duration::days(6),
    ));
    let gateway = gateway_over(seed.build());

    let mut screen = ClientDashboardScreen::mount_with_limit(config.upcoming_limit);
    screen.load(&gateway, &maria_session()).await;

    // Three future workouts seeded; the configured cap keeps only the soonest
    assert_eq!(screen.upcoming().len(), 1);
    assert_eq!(screen.upcoming()[0].id, "w-soon");
    assert!(screen.notices().is_empty());
}

#[tokio::test]
async fn test_monthly_count_over_exact_boundary_rows() {
    common::init_test_logging();
    let month_start = local_month_start(Local::now()).unwrap();
    let seed = MemorySeed::new()
        .with_client(
            Some(MARIA_USER_ID),
            sample_client(MARIA_ID, "Maria", "Petrova"),
        )
        // At the boundary instant: inside the month, already started
        .with_workout(sample_workout(
            "at-boundary",
            MARIA_ID,
            month_start.with_timezone(&Utc),
        ))
        // One second earlier: previous month
        .with_workout(sample_workout(
            "previous-month",
            MARIA_ID,
            (month_start - Duration::seconds(1)).with_timezone(&Utc),
        ));
    let gateway = gateway_over(seed.build());

    let mut screen = ClientDashboardScreen::mount();
    screen.load(&gateway, &maria_session()).await;

    assert_eq!(screen.monthly_count(), Some(1));
}

#[tokio::test]
async fn test_workout_collection_failure_leaves_other_slots_filled() {
    common::init_test_logging();
    let executor = standard_roster().build();
    executor
        .fail_collection(collections::WORKOUTS, FailureKind::Connection)
        .unwrap();
    let gateway = gateway_over(executor);

    let mut screen = ClientDashboardScreen::mount();
    screen.load(&gateway, &maria_session()).await;

    // Both workout-backed slots failed with the same message; programs survived
    assert!(!screen.is_loading());
    assert!(screen.upcoming().is_empty());
    assert!(screen.monthly_count().is_none());
    assert_eq!(screen.tree().programs.len(), 1);
    assert_eq!(screen.notices().len(), 1);

    let DashboardView::Ready {
        next_workout,
        monthly_count,
        programs,
    } = screen.view(Utc::now())
    else {
        panic!("partial failure must still unblock the view");
    };
    assert!(next_workout.is_none());
    assert!(monthly_count.is_none());
    assert_eq!(programs.programs.len(), 1);
}

#[tokio::test]
async fn test_monthly_slot_failure_alone_keeps_upcoming() {
    common::init_test_logging();
    let mut screen = ClientDashboardScreen::mount();
    let ticket = screen.begin_load();

    let soon = Utc::now() + Duration::hours(2);
    screen.apply(
        ticket,
        DashboardLoad::Resolved {
            client_id: MARIA_ID.to_owned(),
            slots: DashboardSlots {
                upcoming: Ok(vec![sample_workout("w-soon", MARIA_ID, soon)]),
                monthly_count: Err(StoreError::connection("window query timed out")),
                programs: Ok(Vec::new()),
            },
        },
    );

    assert!(!screen.is_loading());
    assert_eq!(screen.next_workout(Utc::now()).unwrap().id, "w-soon");
    assert!(screen.monthly_count().is_none());
    assert_eq!(screen.notices().len(), 1);
}

#[tokio::test]
async fn test_unresolved_session_user_settles_with_notice() {
    common::init_test_logging();
    let gateway = seeded_gateway();
    let mut screen = ClientDashboardScreen::mount();
    let stranger = Session::new("user-unknown", Role::Client);

    screen.load(&gateway, &stranger).await;

    assert!(!screen.is_loading());
    assert!(screen.client_id().is_none());
    assert!(screen.upcoming().is_empty());
    assert!(screen.monthly_count().is_none());
    assert_eq!(screen.notices().len(), 1);
}

#[tokio::test]
async fn test_result_arriving_after_unmount_is_dropped() {
    let mut screen = ClientDashboardScreen::mount();
    let ticket = screen.begin_load();
    screen.unmount();

    screen.apply(
        ticket,
        DashboardLoad::Unresolved(StoreError::unknown("late result")),
    );

    assert!(screen.is_loading());
    assert!(screen.notices().is_empty());
}

#[tokio::test]
async fn test_duplicate_failure_messages_collapse_into_one_notice() {
    common::init_test_logging();
    let mut screen = ClientDashboardScreen::mount();
    let ticket = screen.begin_load();

    screen.apply(
        ticket,
        DashboardLoad::Resolved {
            client_id: MARIA_ID.to_owned(),
            slots: DashboardSlots {
                upcoming: Err(StoreError::connection("store unreachable")),
                monthly_count: Err(StoreError::connection("store unreachable")),
                programs: Err(StoreError::connection("store unreachable")),
            },
        },
    );

    assert_eq!(screen.notices().len(), 1);
}
