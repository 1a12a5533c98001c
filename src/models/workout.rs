// ABOUTME: Scheduled workout model consumed by dashboard derivations
// ABOUTME: Start times are UTC instants; month bucketing happens in local wall-clock time
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled training session for one client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Opaque stable identifier
    pub id: String,
    /// Client this session belongs to
    pub client_id: String,
    /// Session title shown on the dashboard
    pub title: String,
    /// Scheduled start instant
    pub start_time: DateTime<Utc>,
}

impl Workout {
    /// Create a new workout record
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        client_id: impl Into<String>,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            client_id: client_id.into(),
            title: title.into(),
            start_time,
        }
    }
}
