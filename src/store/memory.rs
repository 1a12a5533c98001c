// ABOUTME: In-process store backend for development, tests, and the demo binary
// ABOUTME: RwLock-guarded collections with full filter, order, and limit evaluation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

//! Memory-backed [`QueryExecutor`] plus a seed builder.
//!
//! Collections hold the same JSON rows the HTTP backend would return, so the
//! gateway's validation and the assembler see identical shapes either way.
//! Timestamps must be rendered uniformly (second precision, `Z` suffix, as
//! [`MemorySeed`] does) for lexicographic range filters to be exact.
//!
//! All data access is protected by `RwLock`; poisoning converts to an
//! `Unknown` store error.

use super::{FailureKind, QueryExecutor, StoreError, StoreResult};
use crate::constants::collections;
use crate::models::{AssignedProgram, ClientProfile, ExerciseDefinition, Workout};
use crate::store::query::QuerySpec;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-process query backend.
///
/// Ships with the known collections pre-created (empty), the way a migrated
/// schema would look before seeding.
#[derive(Debug, Default)]
pub struct MemoryExecutor {
    collections: RwLock<HashMap<String, Vec<Value>>>,
    failures: RwLock<HashMap<String, FailureKind>>,
}

impl MemoryExecutor {
    /// Create an executor with the known collections empty
    #[must_use]
    pub fn new() -> Self {
        let mut map = HashMap::new();
        for name in [
            collections::CLIENT_PROFILES,
            collections::CLIENT_PROGRAMS,
            collections::WORKOUTS,
            collections::EXERCISES,
        ] {
            map.insert(name.to_owned(), Vec::new());
        }
        Self::from_collections(map)
    }

    fn from_collections(map: HashMap<String, Vec<Value>>) -> Self {
        Self {
            collections: RwLock::new(map),
            failures: RwLock::new(HashMap::new()),
        }
    }

    /// Append a raw row to a collection, creating the collection if needed.
    ///
    /// # Errors
    ///
    /// Returns an `Unknown` store error if the collections lock is poisoned.
    pub fn insert_row(&self, collection: &str, row: Value) -> StoreResult<()> {
        let mut guard = self
            .collections
            .write()
            .map_err(|_| StoreError::unknown("RwLock poisoned: collections lock"))?;
        guard.entry(collection.to_owned()).or_default().push(row);
        Ok(())
    }

    /// Make every subsequent fetch of `collection` fail with the given kind,
    /// until [`Self::clear_failure`] is called. Test and demo hook.
    ///
    /// # Errors
    ///
    /// Returns an `Unknown` store error if the failures lock is poisoned.
    pub fn fail_collection(&self, collection: &str, kind: FailureKind) -> StoreResult<()> {
        let mut guard = self
            .failures
            .write()
            .map_err(|_| StoreError::unknown("RwLock poisoned: failures lock"))?;
        guard.insert(collection.to_owned(), kind);
        Ok(())
    }

    /// Remove an injected failure
    ///
    /// # Errors
    ///
    /// Returns an `Unknown` store error if the failures lock is poisoned.
    pub fn clear_failure(&self, collection: &str) -> StoreResult<()> {
        let mut guard = self
            .failures
            .write()
            .map_err(|_| StoreError::unknown("RwLock poisoned: failures lock"))?;
        guard.remove(collection);
        Ok(())
    }

    fn injected_failure(&self, collection: &str) -> StoreResult<Option<FailureKind>> {
        let guard = self
            .failures
            .read()
            .map_err(|_| StoreError::unknown("RwLock poisoned: failures lock"))?;
        Ok(guard.get(collection).copied())
    }
}

#[async_trait]
impl QueryExecutor for MemoryExecutor {
    async fn fetch(&self, spec: &QuerySpec) -> StoreResult<Vec<Value>> {
        if let Some(kind) = self.injected_failure(&spec.collection)? {
            return Err(StoreError::new(
                kind,
                format!("injected failure for collection {}", spec.collection),
            )
            .with_raw_code("injected"));
        }

        let mut rows = {
            let guard = self
                .collections
                .read()
                .map_err(|_| StoreError::unknown("RwLock poisoned: collections lock"))?;
            guard
                .get(&spec.collection)
                .cloned()
                .ok_or_else(|| {
                    StoreError::not_found(format!("collection {}", spec.collection))
                        .with_raw_code("missing_collection")
                })?
        };

        rows.retain(|row| spec.filters.iter().all(|filter| filter.matches(row)));
        if let Some(order) = &spec.order {
            // sort_by is stable, so ties keep insertion order
            rows.sort_by(|a, b| order.compare(a, b));
        }
        if let Some(limit) = spec.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }
}

/// Builder assembling the collection rows one logical dataset implies.
///
/// Domain models go in; the nested and flat row shapes the store-side views
/// would return come out.
#[derive(Debug, Default)]
pub struct MemorySeed {
    clients: Vec<(Option<String>, ClientProfile)>,
    programs: Vec<(String, AssignedProgram)>,
    workouts: Vec<Workout>,
    exercises: Vec<ExerciseDefinition>,
}

impl MemorySeed {
    /// Start an empty dataset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a client record, optionally linked to an auth user id
    #[must_use]
    pub fn with_client(mut self, user_id: Option<&str>, profile: ClientProfile) -> Self {
        self.clients
            .push((user_id.map(ToOwned::to_owned), profile));
        self
    }

    /// Assign a program to a client
    #[must_use]
    pub fn with_program(mut self, client_id: &str, program: AssignedProgram) -> Self {
        self.programs.push((client_id.to_owned(), program));
        self
    }

    /// Schedule a workout
    #[must_use]
    pub fn with_workout(mut self, workout: Workout) -> Self {
        self.workouts.push(workout);
        self
    }

    /// Add a catalog exercise
    #[must_use]
    pub fn with_exercise(mut self, exercise: ExerciseDefinition) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Materialize the dataset into a ready executor
    #[must_use]
    pub fn build(self) -> MemoryExecutor {
        let program_rows: Vec<(String, Value)> = self
            .programs
            .iter()
            .map(|(client_id, program)| (client_id.clone(), program_row(client_id, program)))
            .collect();

        let profiles: Vec<Value> = self
            .clients
            .iter()
            .map(|(user_id, profile)| {
                let nested: Vec<Value> = program_rows
                    .iter()
                    .filter(|(client_id, _)| client_id == &profile.id)
                    .map(|(_, row)| row.clone())
                    .collect();
                json!({
                    "id": profile.id,
                    "user_id": user_id,
                    "first_name": profile.first_name,
                    "last_name": profile.last_name,
                    "email": profile.email,
                    "phone": profile.phone,
                    "subscription_status": profile.subscription.to_string(),
                    "programs": nested,
                })
            })
            .collect();
        let workouts: Vec<Value> = self
            .workouts
            .iter()
            .map(|workout| {
                json!({
                    "id": workout.id,
                    "client_id": workout.client_id,
                    "title": workout.title,
                    "start_time": super::store_timestamp(workout.start_time),
                })
            })
            .collect();
        let exercises: Vec<Value> = self
            .exercises
            .iter()
            .map(|exercise| {
                json!({
                    "id": exercise.id,
                    "name": exercise.name,
                    "description": exercise.description,
                    "muscle_groups": exercise.muscle_groups,
                    "equipment": exercise.equipment,
                    "difficulty": exercise.difficulty,
                    "video_url": exercise.video_url,
                })
            })
            .collect();

        let mut map = HashMap::new();
        map.insert(collections::CLIENT_PROFILES.to_owned(), profiles);
        map.insert(
            collections::CLIENT_PROGRAMS.to_owned(),
            program_rows.into_iter().map(|(_, row)| row).collect(),
        );
        map.insert(collections::WORKOUTS.to_owned(), workouts);
        map.insert(collections::EXERCISES.to_owned(), exercises);
        MemoryExecutor::from_collections(map)
    }
}

fn program_row(client_id: &str, program: &AssignedProgram) -> Value {
    let exercises: Vec<Value> = program
        .exercises
        .iter()
        .map(|exercise| {
            let sets: Vec<Value> = exercise
                .sets
                .iter()
                .map(|set| {
                    json!({
                        "set_number": set.set_number,
                        "reps": set.reps,
                        "weight": set.weight,
                    })
                })
                .collect();
            json!({
                "id": exercise.id,
                "exercise_order": exercise.order,
                "notes": exercise.notes,
                "exercise": {
                    "id": exercise.exercise_id,
                    "name": exercise.name,
                    "description": exercise.description,
                },
                "sets": sets,
            })
        })
        .collect();
    json!({
        "id": program.id,
        "client_id": client_id,
        "title": program.title,
        "description": program.description,
        "created_at": super::store_timestamp(program.created_at),
        "status": program.status.to_string(),
        "exercises": exercises,
    })
}
