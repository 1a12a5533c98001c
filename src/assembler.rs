// ABOUTME: Reshapes validated program rows into the ordered tree the UI renders
// ABOUTME: Groups by program id, projects catalog references, and applies stable ordering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

//! # Program Tree Assembly
//!
//! Pure reshaping of gateway rows into [`AssignedProgram`] trees:
//!
//! 1. Group rows by program id in store order, tolerating duplicated program
//!    fields across rows (first row's header wins, exercises merge).
//! 2. Project each exercise entry, attaching the referenced catalog entry's
//!    display fields and the client/program link status.
//! 3. Sort exercises ascending by display order, sets ascending by set
//!    number; both sorts are stable so equal or sparse keys keep store order.
//!
//! Entries whose catalog reference no longer resolves are dropped, counted,
//! and logged; the rest of the tree still renders.

use crate::models::{AssignedProgram, AssignmentStatus, PlannedExercise, SetPrescription};
use crate::store::rows::{ProgramExerciseRow, ProgramRow, SetRow};
use std::collections::HashMap;
use tracing::warn;

/// The assembled, display-ready program tree
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProgramTree {
    /// Programs in store order, each with ordered exercises and sets
    pub programs: Vec<AssignedProgram>,
    /// Exercise entries dropped for unresolvable catalog references
    pub dropped_exercises: usize,
}

impl ProgramTree {
    /// An empty tree, the state before any rows have arrived
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            programs: Vec::new(),
            dropped_exercises: 0,
        }
    }

    /// Whether the tree holds no programs at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl Default for ProgramTree {
    fn default() -> Self {
        Self::empty()
    }
}

/// Assemble validated program rows into the display tree.
///
/// Pure apart from structured warnings; call once per fetched row set.
#[must_use]
pub fn assemble_programs(rows: Vec<ProgramRow>) -> ProgramTree {
    let mut programs: Vec<AssignedProgram> = Vec::with_capacity(rows.len());
    let mut index_by_id: HashMap<String, usize> = HashMap::new();
    let mut dropped_exercises = 0;

    for row in rows {
        let (exercises, dropped) = project_exercises(&row.id, row.exercises);
        dropped_exercises += dropped;

        if let Some(&at) = index_by_id.get(&row.id) {
            warn!(program_id = %row.id, "merged duplicate program row");
            programs[at].exercises.extend(exercises);
        } else {
            index_by_id.insert(row.id.clone(), programs.len());
            programs.push(AssignedProgram {
                id: row.id,
                title: row.title,
                description: row.description,
                created_at: row.created_at,
                status: AssignmentStatus::from_store(&row.status),
                exercises,
            });
        }
    }

    for program in &mut programs {
        // sort_by_key is stable; ties keep store row order
        program.exercises.sort_by_key(|exercise| exercise.order);
    }

    ProgramTree {
        programs,
        dropped_exercises,
    }
}

fn project_exercises(
    program_id: &str,
    rows: Vec<ProgramExerciseRow>,
) -> (Vec<PlannedExercise>, usize) {
    let mut exercises = Vec::with_capacity(rows.len());
    let mut dropped = 0;

    for row in rows {
        let Some(reference) = row.exercise else {
            dropped += 1;
            warn!(
                program_id,
                entry_id = %row.id,
                "dropped exercise entry with unresolved catalog reference"
            );
            continue;
        };
        let mut sets: Vec<SetPrescription> = row.sets.into_iter().map(project_set).collect();
        sets.sort_by_key(|set| set.set_number);
        exercises.push(PlannedExercise {
            id: row.id,
            exercise_id: reference.id,
            name: reference.name,
            description: reference.description,
            order: row.exercise_order,
            notes: row.notes,
            sets,
        });
    }

    (exercises, dropped)
}

fn project_set(row: SetRow) -> SetPrescription {
    SetPrescription {
        set_number: row.set_number,
        reps: row.reps,
        weight: row.weight,
    }
}
