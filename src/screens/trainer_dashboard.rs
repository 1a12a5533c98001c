// ABOUTME: Trainer dashboard hosting the calendar placeholder and the client roster
// ABOUTME: Maps routes to a default pane and turns roster picks into navigation effects
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

use tracing::{debug, warn};

use crate::models::ClientProfile;
use crate::navigation::{ActionMenu, NavEffect, QuickAction, Route, SidebarEntry, SidebarState};
use crate::notices::Notice;
use crate::screens::{LoadTicket, MountGuard};
use crate::store::{QueryGateway, StoreResult};

/// Pane selector for the trainer dashboard, supplied by the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrainerPane {
    /// Scheduling calendar; an explicit placeholder for now.
    #[default]
    Calendar,
    /// The client roster.
    Clients,
}

impl TrainerPane {
    /// Default pane for a trainer route, `None` for non-trainer routes.
    #[must_use]
    pub const fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::TrainerHome | Route::TrainerCalendar => Some(Self::Calendar),
            Route::TrainerClients => Some(Self::Clients),
            _ => None,
        }
    }
}

/// Render projection of the trainer dashboard.
#[derive(Debug)]
pub enum TrainerView<'a> {
    /// Calendar pane; deliberately empty until scheduling lands.
    CalendarPlaceholder,
    /// Clients pane while the roster query is in flight.
    RosterLoading,
    /// Clients pane with the fetched roster, ordered by last name.
    Roster(&'a [ClientProfile]),
}

/// State machine for the trainer dashboard.
#[derive(Debug)]
pub struct TrainerDashboardScreen {
    guard: MountGuard,
    loading: bool,
    pane: TrainerPane,
    roster: Vec<ClientProfile>,
    sidebar: SidebarState,
    menu: ActionMenu,
    notices: Vec<Notice>,
}

impl TrainerDashboardScreen {
    /// Mounts the dashboard on `pane` with the roster load pending.
    #[must_use]
    pub fn mount(pane: TrainerPane) -> Self {
        Self {
            guard: MountGuard::new(),
            loading: true,
            pane,
            roster: Vec::new(),
            sidebar: SidebarState::default(),
            menu: ActionMenu::default(),
            notices: Vec::new(),
        }
    }

    /// True until the roster query has settled.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Currently active pane.
    #[must_use]
    pub const fn pane(&self) -> TrainerPane {
        self.pane
    }

    /// Switches panes. Pure; the roster is fetched once per mount.
    pub fn select_pane(&mut self, pane: TrainerPane) {
        self.pane = pane;
    }

    /// The fetched roster (empty until loaded).
    #[must_use]
    pub fn roster(&self) -> &[ClientProfile] {
        &self.roster
    }

    /// Issues a ticket for a load started under the current mount.
    #[must_use]
    pub const fn begin_load(&self) -> LoadTicket {
        self.guard.issue()
    }

    /// Fetches the roster and applies the outcome to this screen.
    pub async fn load(&mut self, gateway: &QueryGateway) {
        let ticket = self.begin_load();
        let outcome = gateway.clients().await;
        self.apply(ticket, outcome);
    }

    /// Applies a roster outcome, unless the ticket went stale.
    pub fn apply(&mut self, ticket: LoadTicket, outcome: StoreResult<Vec<ClientProfile>>) {
        if !self.guard.accepts(ticket) {
            debug!("ignoring stale roster load result");
            return;
        }
        match outcome {
            Ok(roster) => self.roster = roster,
            Err(err) => {
                warn!(error = %err, "client roster query failed");
                self.notices.push(Notice::from_store_error(&err));
            }
        }
        self.loading = false;
    }

    /// Invalidates outstanding tickets; late results will be dropped.
    pub fn unmount(&mut self) {
        self.guard.unmount();
    }

    /// Picks a roster entry: closes the drawer and navigates to the
    /// client's profile.
    pub fn select_client(&mut self, client_id: impl Into<String>) -> NavEffect {
        self.sidebar.close();
        NavEffect::Navigate(Route::TrainerClientProfile(client_id.into()))
    }

    /// Toggles the sidebar drawer.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    /// Current sidebar drawer state.
    #[must_use]
    pub const fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    /// Activates a sidebar entry, closing the drawer first.
    pub fn select_sidebar_entry(&mut self, entry: &SidebarEntry) -> NavEffect {
        self.sidebar.select(entry)
    }

    /// Toggles the floating action menu.
    pub fn toggle_action_menu(&mut self) {
        self.menu.toggle();
    }

    /// Current action menu state.
    #[must_use]
    pub const fn action_menu(&self) -> ActionMenu {
        self.menu
    }

    /// Picks a quick action: the menu snaps shut and the action's
    /// destination comes back as a navigation effect.
    pub fn choose_action(&mut self, action: QuickAction) -> NavEffect {
        self.menu.choose(action)
    }

    /// Queued user-facing notices, most recent last.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drains queued notices for the shell to display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Projects the current state into a renderable view.
    #[must_use]
    pub fn view(&self) -> TrainerView<'_> {
        match self.pane {
            TrainerPane::Calendar => TrainerView::CalendarPlaceholder,
            TrainerPane::Clients if self.loading => TrainerView::RosterLoading,
            TrainerPane::Clients => TrainerView::Roster(&self.roster),
        }
    }
}
