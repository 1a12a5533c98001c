// ABOUTME: Pure dashboard derivations over fetched workout rows
// ABOUTME: Next upcoming workout and local-calendar-month counting, no caching
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

//! # Dashboard Aggregation
//!
//! Both figures are pure functions of the rows fetched for the current
//! screen; nothing here caches or refreshes. Month bucketing follows the
//! client's local wall clock, not UTC: a workout on March 1st local time
//! belongs to March even where that instant is still February in UTC.

use crate::errors::{AppError, AppResult};
use crate::models::Workout;
use chrono::{DateTime, Datelike, Local, Utc};

/// The workout with the minimum start time at or after `now`.
///
/// Absence (no scheduled sessions ahead) is a valid state rendered as the
/// booking affordance, never an error. First-seen wins on equal start times,
/// so store row order breaks ties.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use hardcase_core::dashboard::next_workout;
/// use hardcase_core::models::Workout;
///
/// let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
/// let workouts = vec![
///     Workout::new("w1", "c1", "Push", Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()),
///     Workout::new("w2", "c1", "Pull", Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap()),
/// ];
/// assert_eq!(next_workout(&workouts, now).map(|w| w.id.as_str()), Some("w2"));
/// ```
#[must_use]
pub fn next_workout(workouts: &[Workout], now: DateTime<Utc>) -> Option<&Workout> {
    let mut best: Option<&Workout> = None;
    for workout in workouts {
        if workout.start_time < now {
            continue;
        }
        match best {
            Some(current) if current.start_time <= workout.start_time => {}
            _ => best = Some(workout),
        }
    }
    best
}

/// First instant of the current calendar month on the local wall clock.
///
/// This is the lower bound of the monthly-count window and the `month_start`
/// argument of the gateway's counting op.
///
/// # Errors
///
/// Returns an error when the local calendar cannot represent the month-start
/// instant (never in practice outside a DST gap at month-start midnight).
pub fn local_month_start(now: DateTime<Local>) -> AppResult<DateTime<Local>> {
    let naive = now
        .date_naive()
        .with_day(1)
        .ok_or_else(|| AppError::unknown("failed to set month start day"))?
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::unknown("failed to create month start time"))?;
    naive
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::unknown("month start falls in a skipped local hour"))
}

/// Count workouts inside `[first instant of the current local month, now]`,
/// inclusive at both ends.
#[must_use]
pub fn workouts_this_month(workouts: &[Workout], now: DateTime<Local>) -> u64 {
    workouts
        .iter()
        .filter(|workout| falls_in_current_month(workout.start_time, now))
        .count() as u64
}

fn falls_in_current_month(start_time: DateTime<Utc>, now: DateTime<Local>) -> bool {
    let local = start_time.with_timezone(&Local);
    local.year() == now.year() && local.month() == now.month() && local <= now
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn equal_start_times_keep_first_seen() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let t = Utc.with_ymd_and_hms(2025, 3, 11, 9, 0, 0).unwrap();
        let workouts = vec![
            Workout::new("first", "c1", "A", t),
            Workout::new("second", "c1", "B", t),
        ];
        assert_eq!(
            next_workout(&workouts, now).map(|w| w.id.as_str()),
            Some("first")
        );
    }

    #[test]
    fn workout_starting_exactly_now_counts_as_upcoming() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let workouts = vec![Workout::new("w1", "c1", "A", now)];
        assert!(next_workout(&workouts, now).is_some());
    }

    #[test]
    fn month_start_is_first_midnight_of_current_month() {
        let now = Local.with_ymd_and_hms(2025, 3, 15, 12, 30, 0).unwrap();
        let start = local_month_start(now).unwrap();
        assert_eq!(start.year(), 2025);
        assert_eq!(start.month(), 3);
        assert_eq!(start.day(), 1);
        assert_eq!(start.time(), chrono::NaiveTime::MIN);
    }
}
