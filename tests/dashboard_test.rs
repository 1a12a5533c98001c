// ABOUTME: Unit tests for dashboard derivations
// ABOUTME: Validates next-workout selection and local-month counting at boundaries
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Timelike, Utc};
use hardcase_core::dashboard::{local_month_start, next_workout, workouts_this_month};
use hardcase_core::models::Workout;

use common::sample_workout;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
}

#[test]
fn test_next_workout_picks_soonest_future() {
    let now = base_time();
    let workouts = vec![
        sample_workout("two-days-ago", "c1", now - Duration::days(2)),
        sample_workout("an-hour-ago", "c1", now - Duration::hours(1)),
        sample_workout("in-three-hours", "c1", now + Duration::hours(3)),
        sample_workout("in-two-days", "c1", now + Duration::days(2)),
    ];

    let next = next_workout(&workouts, now).unwrap();
    assert_eq!(next.id, "in-three-hours");
}

#[test]
fn test_next_workout_absent_when_nothing_upcoming() {
    let now = base_time();
    let workouts = vec![
        sample_workout("w1", "c1", now - Duration::days(3)),
        sample_workout("w2", "c1", now - Duration::minutes(5)),
    ];

    assert!(next_workout(&workouts, now).is_none());
    assert!(next_workout(&[], now).is_none());
}

#[test]
fn test_next_workout_starting_exactly_now_counts() {
    let now = base_time();
    let workouts = vec![sample_workout("right-now", "c1", now)];

    assert_eq!(next_workout(&workouts, now).unwrap().id, "right-now");
}

#[test]
fn test_next_workout_keeps_first_on_equal_start_times() {
    let now = base_time();
    let start = now + Duration::hours(6);
    let workouts = vec![
        sample_workout("first-seen", "c1", start),
        sample_workout("second-seen", "c1", start),
    ];

    assert_eq!(next_workout(&workouts, now).unwrap().id, "first-seen");
}

#[test]
fn test_local_month_start_is_first_midnight() {
    let now = Local.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
    let start = local_month_start(now).unwrap();

    assert_eq!(start.day(), 1);
    assert_eq!(start.month(), now.month());
    assert_eq!(start.year(), now.year());
    assert_eq!((start.hour(), start.minute(), start.second()), (0, 0, 0));
}

#[test]
fn test_month_count_includes_boundary_and_excludes_earlier() {
    let now = Local.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
    let month_start = local_month_start(now).unwrap();

    let workouts = vec![
        // Exactly at the local month boundary: counts
        sample_workout("at-boundary", "c1", month_start.with_timezone(&Utc)),
        // One second before the boundary: previous month
        sample_workout(
            "before-boundary",
            "c1",
            (month_start - Duration::seconds(1)).with_timezone(&Utc),
        ),
        // Mid-month, before now: counts
        sample_workout(
            "mid-month",
            "c1",
            (now - Duration::days(3)).with_timezone(&Utc),
        ),
        // Later this month but after now: not yet countable
        sample_workout(
            "later-this-month",
            "c1",
            (now + Duration::days(4)).with_timezone(&Utc),
        ),
    ];

    assert_eq!(workouts_this_month(&workouts, now), 2);
}

#[test]
fn test_month_count_zero_without_workouts() {
    let now = Local.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
    let empty: Vec<Workout> = Vec::new();
    assert_eq!(workouts_this_month(&empty, now), 0);
}
