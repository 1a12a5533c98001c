// ABOUTME: Client profile model and subscription status
// ABOUTME: Display projections (full name, initials) used by profile headers and rosters
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A coached client as rendered in rosters and profile headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Opaque stable identifier
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone, if the client provided one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Current subscription state
    pub subscription: SubscriptionStatus,
}

impl ClientProfile {
    /// Full display name, tolerating a missing name part
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }

    /// Uppercase initials for the avatar badge
    #[must_use]
    pub fn initials(&self) -> String {
        let mut initials = String::new();
        if let Some(c) = self.first_name.chars().next() {
            initials.extend(c.to_uppercase());
        }
        if let Some(c) = self.last_name.chars().next() {
            initials.extend(c.to_uppercase());
        }
        initials
    }
}

/// Subscription state of a client account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Paid up and training
    Active,
    /// Lapsed or paused
    #[default]
    Inactive,
}

impl SubscriptionStatus {
    /// Map a raw store status string; anything but "active" renders inactive
    #[must_use]
    pub fn from_store(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("active") {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// Whether the badge renders in the active style
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Display for SubscriptionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClientProfile {
        ClientProfile {
            id: "client-1".into(),
            first_name: "Anna".into(),
            last_name: "Petrova".into(),
            email: "anna@example.com".into(),
            phone: None,
            subscription: SubscriptionStatus::Active,
        }
    }

    #[test]
    fn full_name_trims_missing_parts() {
        let mut client = sample();
        client.last_name = String::new();
        assert_eq!(client.full_name(), "Anna");
    }

    #[test]
    fn initials_are_uppercased() {
        let mut client = sample();
        client.first_name = "anna".into();
        assert_eq!(client.initials(), "AP");
    }

    #[test]
    fn unknown_store_status_is_inactive() {
        assert_eq!(
            SubscriptionStatus::from_store("trialing"),
            SubscriptionStatus::Inactive
        );
        assert_eq!(
            SubscriptionStatus::from_store("ACTIVE"),
            SubscriptionStatus::Active
        );
    }
}
