// ABOUTME: Ephemeral navigation state machines and the effects they hand the dispatcher
// ABOUTME: Sidebar, profile tabs, program accordion, and the floating action menu
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

//! # Navigation State
//!
//! Four independent machines, transitioning only on discrete UI events and
//! never on fetch results, so they stay responsive while loads are in
//! flight. Transitions are pure state changes; anything that must leave the
//! screen is returned as a [`NavEffect`] for the external dispatcher to
//! execute. State is reset on remount and never persisted.

use crate::constants::routes;
use std::fmt::{self, Display, Formatter};

/// Routes served by the external router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Sign-in screen; target of every gate redirect
    Login,
    /// Client home dashboard
    ClientHome,
    /// Trainer home dashboard
    TrainerHome,
    /// Trainer dashboard, clients view
    TrainerClients,
    /// Trainer dashboard, calendar view
    TrainerCalendar,
    /// One client's profile, trainer-side
    TrainerClientProfile(String),
    /// Exercise catalog browser
    TrainerExercises,
}

impl Route {
    /// Path the router dispatches on
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => routes::LOGIN.to_owned(),
            Self::ClientHome => routes::CLIENT_HOME.to_owned(),
            Self::TrainerHome => routes::TRAINER_HOME.to_owned(),
            Self::TrainerClients => routes::TRAINER_CLIENTS.to_owned(),
            Self::TrainerCalendar => routes::TRAINER_CALENDAR.to_owned(),
            Self::TrainerClientProfile(client_id) => {
                format!("{}/{client_id}", routes::TRAINER_CLIENTS)
            }
            Self::TrainerExercises => routes::TRAINER_EXERCISES.to_owned(),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Side effect a transition hands to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEffect {
    /// Stay put; the entry is a placeholder destination
    None,
    /// Route to the given screen
    Navigate(Route),
    /// Clear the session, then route to login
    SignOutThenLogin,
}

/// Viewport class the layout collaborator reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// Narrow layout; the sidebar overlays and can hide
    Mobile,
    /// Wide layout; the sidebar is always rendered
    Desktop,
}

/// One selectable entry of the sidebar menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEntry {
    /// Regular destination
    Navigate(Route),
    /// Back entry shown on nested screens
    Back(Route),
    /// Sign out of the app
    Logout,
    /// Destination whose subsystem is not built yet
    Placeholder,
}

/// Mobile sidebar open/closed state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    /// Hidden on mobile
    #[default]
    Closed,
    /// Overlaid on mobile
    Open,
}

impl SidebarState {
    /// Flip open/closed; wired to the menu button
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    /// Force closed; every navigation action does this
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Whether the overlay is open on mobile
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether the sidebar renders for the given viewport.
    ///
    /// Desktop always renders it, regardless of the open/closed state the
    /// mobile overlay tracks.
    #[must_use]
    pub const fn is_visible(&self, viewport: Viewport) -> bool {
        matches!(viewport, Viewport::Desktop) || self.is_open()
    }

    /// Select a menu entry: closes the sidebar and yields the entry's effect
    pub fn select(&mut self, entry: &SidebarEntry) -> NavEffect {
        self.close();
        match entry {
            SidebarEntry::Navigate(route) | SidebarEntry::Back(route) => {
                NavEffect::Navigate(route.clone())
            }
            SidebarEntry::Logout => NavEffect::SignOutThenLogin,
            SidebarEntry::Placeholder => NavEffect::None,
        }
    }
}

/// Tabs of the client profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    /// Assigned training programs; the landing tab
    #[default]
    Program,
    /// Nutrition subsystem (placeholder)
    Nutrition,
    /// Activity subsystem (placeholder)
    Activity,
    /// Metrics subsystem (placeholder)
    Metrics,
    /// Analysis subsystem (placeholder)
    Analysis,
    /// Body measurements subsystem (placeholder)
    Measurements,
}

impl ProfileTab {
    /// Every tab in display order
    pub const ALL: [Self; 6] = [
        Self::Program,
        Self::Nutrition,
        Self::Activity,
        Self::Metrics,
        Self::Analysis,
        Self::Measurements,
    ];

    /// Tab caption
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::Nutrition => "Nutrition",
            Self::Activity => "Activity",
            Self::Metrics => "Metrics",
            Self::Analysis => "Analysis",
            Self::Measurements => "Measurements",
        }
    }

    /// Whether this tab renders real content rather than the
    /// under-construction placeholder
    #[must_use]
    pub const fn is_built(&self) -> bool {
        matches!(self, Self::Program)
    }
}

/// At-most-one expanded program in the profile's program list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgramAccordion {
    expanded: Option<String>,
}

impl ProgramAccordion {
    /// Start with nothing expanded
    #[must_use]
    pub const fn new() -> Self {
        Self { expanded: None }
    }

    /// Select a program: expanding the expanded one collapses it, any other
    /// selection replaces the expansion
    pub fn toggle(&mut self, program_id: &str) {
        if self.expanded.as_deref() == Some(program_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(program_id.to_owned());
        }
    }

    /// Currently expanded program id, if any
    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Whether the given program renders expanded
    #[must_use]
    pub fn is_expanded(&self, program_id: &str) -> bool {
        self.expanded.as_deref() == Some(program_id)
    }
}

/// Sub-actions of the trainer dashboard's floating action button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    /// Register a new client
    AddClient,
    /// Put a session on the calendar
    ScheduleSession,
    /// Open the exercise catalog
    BrowseCatalog,
}

impl QuickAction {
    /// Where the action leads
    #[must_use]
    pub const fn destination(&self) -> Route {
        match self {
            Self::AddClient => Route::TrainerClients,
            Self::ScheduleSession => Route::TrainerCalendar,
            Self::BrowseCatalog => Route::TrainerExercises,
        }
    }
}

/// Floating action menu open/closed state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionMenu {
    /// Collapsed to the trigger button
    #[default]
    Closed,
    /// Sub-actions fanned out
    Open,
}

impl ActionMenu {
    /// Flip open/closed; wired to the trigger button
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    /// Whether the sub-actions are showing
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Choose a sub-action: forces the menu closed and yields the
    /// navigation effect
    pub fn choose(&mut self, action: QuickAction) -> NavEffect {
        *self = Self::Closed;
        NavEffect::Navigate(action.destination())
    }
}
