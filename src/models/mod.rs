// ABOUTME: Domain records for the coaching front end
// ABOUTME: Client profiles, assigned program trees, exercise catalog entries, and workouts
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

//! # Data Models
//!
//! Assembled, display-ready shapes rendered by the UI shells. Raw store rows
//! live in [`crate::store::rows`] and are reshaped into these types by
//! [`crate::assembler`].
//!
//! ## Design Principles
//!
//! - **Store Agnostic**: models never leak store column names or row nesting
//! - **Serializable**: all models support JSON serialization for the shells
//! - **Absence over placeholders**: optional fields stay `None`, never `""`

pub mod client;
pub mod exercise;
pub mod program;
pub mod workout;

pub use client::{ClientProfile, SubscriptionStatus};
pub use exercise::ExerciseDefinition;
pub use program::{AssignedProgram, AssignmentStatus, PlannedExercise, SetPrescription};
pub use workout::Workout;
