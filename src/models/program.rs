// ABOUTME: Assigned training program tree models
// ABOUTME: AssignedProgram, PlannedExercise, and SetPrescription with per-client status
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Per-client status of a program assignment.
///
/// Lives on the client/program link, not on the program itself: the same
/// program can be active for one client and completed for another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    /// Currently being trained
    Active,
    /// Finished or retired for this client
    #[default]
    Completed,
}

impl AssignmentStatus {
    /// Map a raw store status string; anything but "active" renders completed
    #[must_use]
    pub fn from_store(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("active") {
            Self::Active
        } else {
            Self::Completed
        }
    }

    /// Whether this assignment renders in the active style
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Display for AssignmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A program assigned to a client, with its exercises in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedProgram {
    /// Opaque stable identifier
    pub id: String,
    /// Program title
    pub title: String,
    /// Program description
    pub description: String,
    /// When the program was created
    pub created_at: DateTime<Utc>,
    /// Per-client link status
    pub status: AssignmentStatus,
    /// Exercises sorted ascending by display order
    pub exercises: Vec<PlannedExercise>,
}

/// One exercise slot inside an assigned program.
///
/// Carries the projection of the referenced catalog entry (name, description)
/// rather than the full [`crate::models::ExerciseDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedExercise {
    /// Identifier of the program/exercise assignment row
    pub id: String,
    /// Identifier of the referenced catalog exercise
    pub exercise_id: String,
    /// Catalog exercise name
    pub name: String,
    /// Catalog exercise description
    pub description: String,
    /// Display position within the program, ascending
    pub order: i32,
    /// Trainer notes for this slot, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Prescribed sets sorted ascending by set number
    pub sets: Vec<SetPrescription>,
}

/// One prescribed unit of work within an exercise slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPrescription {
    /// Position within the exercise, ascending from 1
    pub set_number: u32,
    /// Prescribed repetitions; free-form, may be a range like "8-12"
    pub reps: String,
    /// Prescribed weight; absent means bodyweight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl SetPrescription {
    /// Whether this set is performed without added weight
    #[must_use]
    pub const fn is_bodyweight(&self) -> bool {
        self.weight.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_link_status_renders_completed() {
        assert_eq!(
            AssignmentStatus::from_store("paused"),
            AssignmentStatus::Completed
        );
        assert!(AssignmentStatus::from_store("active").is_active());
    }

    #[test]
    fn absent_weight_means_bodyweight() {
        let set = SetPrescription {
            set_number: 1,
            reps: "12".into(),
            weight: None,
        };
        assert!(set.is_bodyweight());

        let json = serde_json::to_value(&set).unwrap();
        assert!(json.get("weight").is_none());
    }
}
