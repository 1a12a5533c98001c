// ABOUTME: Exercise catalog entry model
// ABOUTME: Shared read-only reference data; programs point at these by id
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

use serde::{Deserialize, Serialize};

/// A catalog exercise trainers assign into programs.
///
/// Catalog entries are immutable from this crate's perspective; the assembler
/// only projects display fields out of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    /// Opaque stable identifier
    pub id: String,
    /// Exercise name
    pub name: String,
    /// How to perform it
    pub description: String,
    /// Muscle groups worked
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    /// Equipment required
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Free-form difficulty label from the catalog
    pub difficulty: String,
    /// Demonstration video, if one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}
