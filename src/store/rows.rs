// ABOUTME: Validated record shapes returned by the store, separate from domain models
// ABOUTME: Quarantine parsing skips rows that fail shape validation and counts them
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

//! Record shapes (v1) for the collections the gateway reads.
//!
//! Deserialization is the validation boundary: a row missing a required field
//! is quarantined here and never reaches the assembler. Optional fields stay
//! optional (`notes`, `weight`, embedded `exercise`) so downstream policy can
//! decide what absence means.

use crate::models::{ClientProfile, SubscriptionStatus};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Client record as stored, with the nested program tree the profile view returns
#[derive(Debug, Clone, Deserialize)]
pub struct ClientProfileRow {
    /// Client identifier
    pub id: String,
    /// Identifier of the auth user this client belongs to
    #[serde(default)]
    pub user_id: Option<String>,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    #[serde(default)]
    pub phone: Option<String>,
    /// Raw subscription status string
    pub subscription_status: String,
    /// Nested assigned-program rows; empty for roster reads
    #[serde(default)]
    pub programs: Vec<ProgramRow>,
}

impl ClientProfileRow {
    /// Project the flat client fields into the display model
    #[must_use]
    pub fn to_profile(&self) -> ClientProfile {
        ClientProfile {
            id: self.id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            subscription: SubscriptionStatus::from_store(&self.subscription_status),
        }
    }
}

/// Assigned-program record with nested exercise slots
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramRow {
    /// Program identifier
    pub id: String,
    /// Program title
    pub title: String,
    /// Program description
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Raw client/program link status string
    pub status: String,
    /// Nested exercise slots, in store order
    #[serde(default)]
    pub exercises: Vec<ProgramExerciseRow>,
}

/// One exercise slot row inside a program
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramExerciseRow {
    /// Assignment row identifier
    pub id: String,
    /// Display position within the program
    pub exercise_order: i32,
    /// Trainer notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Embedded catalog reference; absent when the referenced exercise
    /// no longer resolves
    #[serde(default)]
    pub exercise: Option<ExerciseRefRow>,
    /// Prescribed sets, in store order
    #[serde(default)]
    pub sets: Vec<SetRow>,
}

/// Display fields of the referenced catalog exercise
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseRefRow {
    /// Catalog exercise identifier
    pub id: String,
    /// Exercise name
    pub name: String,
    /// Exercise description
    pub description: String,
}

/// One prescribed set row
#[derive(Debug, Clone, Deserialize)]
pub struct SetRow {
    /// Position within the exercise
    pub set_number: u32,
    /// Prescribed repetitions
    pub reps: String,
    /// Prescribed weight; absent means bodyweight
    #[serde(default)]
    pub weight: Option<String>,
}

/// Minimal shape for id-only lookups
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct IdRow {
    pub id: String,
}

/// Outcome of validating a batch of raw rows
#[derive(Debug)]
pub struct ParsedRows<T> {
    /// Rows that matched the record shape
    pub records: Vec<T>,
    /// Count of rows quarantined for shape violations
    pub quarantined: usize,
}

/// Validate raw rows against a record shape, quarantining violations.
///
/// Each quarantined row is logged with its index and the shape error; row
/// contents are never logged.
pub fn parse_rows<T: DeserializeOwned>(collection: &str, rows: Vec<Value>) -> ParsedRows<T> {
    let mut records = Vec::with_capacity(rows.len());
    let mut quarantined = 0;
    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<T>(row) {
            Ok(record) => records.push(record),
            Err(err) => {
                quarantined += 1;
                warn!(collection, index, error = %err, "quarantined row with invalid shape");
            }
        }
    }
    if quarantined > 0 {
        warn!(collection, quarantined, "dropped rows failing shape validation");
    }
    ParsedRows {
        records,
        quarantined,
    }
}
