// ABOUTME: Client home dashboard combining next workout, monthly count, and programs
// ABOUTME: Runs the three slot queries concurrently and tolerates partial failure
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

use chrono::{DateTime, Local, Utc};
use tracing::{debug, warn};

use crate::assembler::{assemble_programs, ProgramTree};
use crate::auth::Session;
use crate::constants::limits;
use crate::dashboard::{local_month_start, next_workout};
use crate::models::Workout;
use crate::navigation::{NavEffect, SidebarEntry, SidebarState};
use crate::notices::Notice;
use crate::screens::{LoadTicket, MountGuard};
use crate::store::{ProgramRow, QueryGateway, StoreError, StoreResult};

/// Outcomes of the three concurrent dashboard queries.
///
/// Each slot settles independently; `apply` fills whatever succeeded
/// and queues a notice per failure.
#[derive(Debug)]
pub struct DashboardSlots {
    /// Upcoming workouts, soonest first.
    pub upcoming: StoreResult<Vec<Workout>>,
    /// Count of workouts falling in the current local month.
    pub monthly_count: StoreResult<u64>,
    /// Raw program rows for tree assembly.
    pub programs: StoreResult<Vec<ProgramRow>>,
}

/// Result of a full dashboard load for one session.
#[derive(Debug)]
pub enum DashboardLoad {
    /// The session user maps to a client; slot outcomes follow.
    Resolved {
        /// Client id resolved from the session user.
        client_id: String,
        /// Per-slot query outcomes.
        slots: DashboardSlots,
    },
    /// The session user could not be mapped to a client at all.
    Unresolved(StoreError),
}

/// Render projection of the client dashboard.
#[derive(Debug)]
pub enum DashboardView<'a> {
    /// Queries still in flight.
    Loading,
    /// All queries settled; slots may be empty after failures.
    Ready {
        /// Soonest future workout, when one exists. Absence renders
        /// the book-a-session affordance.
        next_workout: Option<&'a Workout>,
        /// Workouts completed or scheduled this month, when the slot
        /// resolved.
        monthly_count: Option<u64>,
        /// Assembled program tree (empty when the slot failed).
        programs: &'a ProgramTree,
    },
}

/// State machine for the client home dashboard.
#[derive(Debug)]
pub struct ClientDashboardScreen {
    guard: MountGuard,
    loading: bool,
    upcoming_limit: u32,
    client_id: Option<String>,
    upcoming: Vec<Workout>,
    monthly_count: Option<u64>,
    tree: ProgramTree,
    sidebar: SidebarState,
    notices: Vec<Notice>,
}

impl Default for ClientDashboardScreen {
    fn default() -> Self {
        Self::mount()
    }
}

impl ClientDashboardScreen {
    /// Mounts the dashboard in its loading state with the default
    /// upcoming-workouts window.
    #[must_use]
    pub fn mount() -> Self {
        Self::mount_with_limit(limits::UPCOMING_WORKOUTS)
    }

    /// Mounts the dashboard fetching at most `upcoming_limit` upcoming
    /// workouts per load, usually [`AppConfig::upcoming_limit`].
    ///
    /// [`AppConfig::upcoming_limit`]: crate::config::AppConfig::upcoming_limit
    #[must_use]
    pub fn mount_with_limit(upcoming_limit: u32) -> Self {
        Self {
            guard: MountGuard::new(),
            loading: true,
            upcoming_limit,
            client_id: None,
            upcoming: Vec::new(),
            monthly_count: None,
            tree: ProgramTree::empty(),
            sidebar: SidebarState::default(),
            notices: Vec::new(),
        }
    }

    /// True until every slot query has settled.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Client id resolved for the current session, once known.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Upcoming workouts fetched for the dashboard, soonest first.
    #[must_use]
    pub fn upcoming(&self) -> &[Workout] {
        &self.upcoming
    }

    /// Monthly workout count, when that slot resolved.
    #[must_use]
    pub const fn monthly_count(&self) -> Option<u64> {
        self.monthly_count
    }

    /// Assembled program tree (empty until loaded).
    #[must_use]
    pub const fn tree(&self) -> &ProgramTree {
        &self.tree
    }

    /// Soonest workout at or after `now`, derived from the fetched rows.
    #[must_use]
    pub fn next_workout(&self, now: DateTime<Utc>) -> Option<&Workout> {
        next_workout(&self.upcoming, now)
    }

    /// Issues a ticket for a load started under the current mount.
    #[must_use]
    pub const fn begin_load(&self) -> LoadTicket {
        self.guard.issue()
    }

    /// Resolves the client id for `session` and runs the slot queries
    /// concurrently, fetching at most `upcoming_limit` upcoming workouts.
    /// Pure fetch; state changes happen in `apply`.
    pub async fn fetch(
        gateway: &QueryGateway,
        session: &Session,
        upcoming_limit: u32,
    ) -> DashboardLoad {
        let client_id = match gateway.client_id_for_user(&session.user_id).await {
            Ok(client_id) => client_id,
            Err(err) => return DashboardLoad::Unresolved(err),
        };
        let now = Utc::now();
        let (upcoming, monthly_count, programs) = tokio::join!(
            gateway.upcoming_workouts(&client_id, now, upcoming_limit),
            Self::fetch_monthly(gateway, &client_id),
            gateway.client_programs(&client_id),
        );
        DashboardLoad::Resolved {
            client_id,
            slots: DashboardSlots {
                upcoming,
                monthly_count,
                programs,
            },
        }
    }

    async fn fetch_monthly(gateway: &QueryGateway, client_id: &str) -> StoreResult<u64> {
        let now = Local::now();
        let month_start =
            local_month_start(now).map_err(|err| StoreError::unknown(err.message))?;
        gateway.monthly_workout_count(client_id, month_start, now).await
    }

    /// Fetches everything for `session` and applies the outcome.
    pub async fn load(&mut self, gateway: &QueryGateway, session: &Session) {
        let ticket = self.begin_load();
        let load = Self::fetch(gateway, session, self.upcoming_limit).await;
        self.apply(ticket, load);
    }

    /// Applies a load outcome, unless the ticket went stale.
    ///
    /// Failed slots stay empty and queue one notice each (duplicate
    /// messages are collapsed); `loading` flips false regardless.
    pub fn apply(&mut self, ticket: LoadTicket, load: DashboardLoad) {
        if !self.guard.accepts(ticket) {
            debug!("ignoring stale dashboard load result");
            return;
        }
        match load {
            DashboardLoad::Unresolved(err) => {
                warn!(error = %err, "could not resolve a client for the session user");
                self.push_notice(Notice::from_store_error(&err));
            }
            DashboardLoad::Resolved { client_id, slots } => {
                self.client_id = Some(client_id);
                match slots.upcoming {
                    Ok(workouts) => self.upcoming = workouts,
                    Err(err) => {
                        warn!(error = %err, "upcoming workouts query failed");
                        self.push_notice(Notice::from_store_error(&err));
                    }
                }
                match slots.monthly_count {
                    Ok(count) => self.monthly_count = Some(count),
                    Err(err) => {
                        warn!(error = %err, "monthly workout count query failed");
                        self.push_notice(Notice::from_store_error(&err));
                    }
                }
                match slots.programs {
                    Ok(rows) => self.tree = assemble_programs(rows),
                    Err(err) => {
                        warn!(error = %err, "program rows query failed");
                        self.push_notice(Notice::from_store_error(&err));
                    }
                }
            }
        }
        self.loading = false;
    }

    /// Invalidates outstanding tickets; late results will be dropped.
    pub fn unmount(&mut self) {
        self.guard.unmount();
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
    pub fn view(&self, now: DateTime<Utc>) -> DashboardView<'_> {
        if self.loading {
            return DashboardView::Loading;
        }
        DashboardView::Ready {
            next_workout: self.next_workout(now),
            monthly_count: self.monthly_count,
            programs: &self.tree,
        }
    }

    fn push_notice(&mut self, notice: Notice) {
        if !self.notices.contains(&notice) {
            self.notices.push(notice);
        }
    }
}
