// ABOUTME: Screen state machines for the client and trainer surfaces
// ABOUTME: Holds mount lifecycle plumbing shared by every screen
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

//! Screen state machines.
//!
//! Each screen owns its fetched data, its transient view state, and a
//! queue of user-facing [`Notice`](crate::notices::Notice) values. Async
//! loads are tied to the mount that started them through a
//! [`LoadTicket`]: results arriving after an unmount are ignored instead
//! of mutating a dead screen.

pub mod client_dashboard;
pub mod client_profile;
pub mod trainer_dashboard;

pub use client_dashboard::{ClientDashboardScreen, DashboardLoad, DashboardSlots, DashboardView};
pub use client_profile::{BuilderState, ClientProfileScreen, ProfileBody, ProfileView, ProgramCard};
pub use trainer_dashboard::{TrainerDashboardScreen, TrainerPane, TrainerView};

/// Ties an in-flight load to the mount generation that issued it.
///
/// Obtained from a screen's `begin_load` and handed back to `apply`
/// together with the fetched outcome. A ticket issued before an unmount
/// no longer matches afterwards, so late results are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

/// Tracks whether a screen is mounted and which load generation is live.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MountGuard {
    epoch: u64,
    mounted: bool,
}

impl MountGuard {
    pub(crate) const fn new() -> Self {
        Self {
            epoch: 0,
            mounted: true,
        }
    }

    /// Issues a ticket for the current mount generation.
    pub(crate) const fn issue(&self) -> LoadTicket {
        LoadTicket { epoch: self.epoch }
    }

    /// Whether a result carrying `ticket` may still be applied.
    pub(crate) const fn accepts(&self, ticket: LoadTicket) -> bool {
        self.mounted && ticket.epoch == self.epoch
    }

    /// Marks the screen unmounted and invalidates outstanding tickets.
    pub(crate) fn unmount(&mut self) {
        self.mounted = false;
        self.epoch = self.epoch.wrapping_add(1);
    }
}
