// ABOUTME: Client profile screen shown to trainers for a single client
// ABOUTME: Owns the profile fetch, assembled program tree, tabs, and builder entry state
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

use tracing::{debug, warn};

use crate::assembler::{assemble_programs, ProgramTree};
use crate::models::{AssignedProgram, ClientProfile};
use crate::navigation::{NavEffect, ProfileTab, ProgramAccordion, SidebarEntry, SidebarState};
use crate::notices::Notice;
use crate::screens::{LoadTicket, MountGuard};
use crate::store::{ClientProfileRow, FailureKind, QueryGateway, StoreResult};

/// Program-builder entry state on the program tab.
///
/// The builder replaces the profile body while open. Edits are not
/// persisted through the read-only gateway, so closing is a pure
/// transition back to the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BuilderState {
    /// Builder closed, program tree visible.
    #[default]
    Hidden,
    /// Building a new program from scratch.
    Creating,
    /// Editing the assigned program with the given id.
    Editing(String),
}

impl BuilderState {
    /// Whether the builder currently replaces the profile body.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// One program row in the program tab, with its accordion flag.
#[derive(Debug, Clone, Copy)]
pub struct ProgramCard<'a> {
    /// The assigned program backing this card.
    pub program: &'a AssignedProgram,
    /// Whether the accordion currently expands this card.
    pub expanded: bool,
}

/// Body of the profile content area, decided by the active tab.
#[derive(Debug)]
pub enum ProfileBody<'a> {
    /// Program tab: the assembled tree with expansion flags.
    Programs(Vec<ProgramCard<'a>>),
    /// Any not-yet-built tab renders an under-construction placeholder.
    UnderConstruction(ProfileTab),
}

/// Render projection of the profile screen.
#[derive(Debug)]
pub enum ProfileView<'a> {
    /// Initial fetch has not settled yet.
    Loading,
    /// Fetch settled without a usable profile.
    NotFound,
    /// Program builder is open and replaces the profile body.
    Builder(&'a BuilderState),
    /// Profile resolved; render header, tab bar, and body.
    Ready {
        /// The resolved client profile.
        client: &'a ClientProfile,
        /// Currently selected tab.
        tab: ProfileTab,
        /// Content under the tab bar.
        body: ProfileBody<'a>,
    },
}

/// State machine for the per-client profile screen.
#[derive(Debug)]
pub struct ClientProfileScreen {
    client_id: String,
    guard: MountGuard,
    loading: bool,
    client: Option<ClientProfile>,
    tree: ProgramTree,
    tab: ProfileTab,
    accordion: ProgramAccordion,
    sidebar: SidebarState,
    builder: BuilderState,
    notices: Vec<Notice>,
}

impl ClientProfileScreen {
    /// Mounts the screen for `client_id` in its loading state.
    #[must_use]
    pub fn mount(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            guard: MountGuard::new(),
            loading: true,
            client: None,
            tree: ProgramTree::empty(),
            tab: ProfileTab::default(),
            accordion: ProgramAccordion::new(),
            sidebar: SidebarState::default(),
            builder: BuilderState::default(),
            notices: Vec::new(),
        }
    }

    /// Id of the client this screen was mounted for.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// True until the initial fetch has settled.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The resolved profile, if the fetch produced one.
    #[must_use]
    pub const fn client(&self) -> Option<&ClientProfile> {
        self.client.as_ref()
    }

    /// The assembled program tree (empty until loaded).
    #[must_use]
    pub const fn tree(&self) -> &ProgramTree {
        &self.tree
    }

    /// Currently selected tab.
    #[must_use]
    pub const fn tab(&self) -> ProfileTab {
        self.tab
    }

    /// Issues a ticket for a load started under the current mount.
    #[must_use]
    pub const fn begin_load(&self) -> LoadTicket {
        self.guard.issue()
    }

    /// Fetches the profile and applies the outcome to this screen.
    pub async fn load(&mut self, gateway: &QueryGateway) {
        let ticket = self.begin_load();
        let outcome = gateway.client_profile(&self.client_id).await;
        self.apply(ticket, outcome);
    }

    /// Applies a fetch outcome, unless the ticket went stale.
    ///
    /// A missing profile settles into the not-found state without a
    /// notice; transport and store failures additionally queue one.
    pub fn apply(&mut self, ticket: LoadTicket, outcome: StoreResult<ClientProfileRow>) {
        if !self.guard.accepts(ticket) {
            debug!(client_id = %self.client_id, "ignoring stale profile load result");
            return;
        }
        match outcome {
            Ok(row) => {
                self.client = Some(row.to_profile());
                self.tree = assemble_programs(row.programs);
            }
            Err(err) => {
                warn!(client_id = %self.client_id, error = %err, "client profile load failed");
                if err.kind != FailureKind::NotFound {
                    self.notices.push(Notice::from_store_error(&err));
                }
                self.client = None;
                self.tree = ProgramTree::empty();
            }
        }
        self.loading = false;
    }

    /// Invalidates outstanding tickets; late results will be dropped.
    pub fn unmount(&mut self) {
        self.guard.unmount();
    }

    /// Selects a tab. Selecting the active tab is a no-op.
    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
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

    /// Toggles accordion expansion for one program.
    pub fn toggle_program(&mut self, program_id: &str) {
        self.accordion.toggle(program_id);
    }

    /// Id of the currently expanded program, if any.
    #[must_use]
    pub fn expanded_program(&self) -> Option<&str> {
        self.accordion.expanded()
    }

    /// Opens the builder for a new program.
    pub fn open_builder(&mut self) {
        self.builder = BuilderState::Creating;
    }

    /// Opens the builder on an existing assigned program.
    pub fn edit_program(&mut self, program_id: impl Into<String>) {
        self.builder = BuilderState::Editing(program_id.into());
    }

    /// Closes the builder and returns to the profile body.
    pub fn close_builder(&mut self) {
        self.builder = BuilderState::Hidden;
    }

    /// Current builder entry state.
    #[must_use]
    pub const fn builder(&self) -> &BuilderState {
        &self.builder
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
    pub fn view(&self) -> ProfileView<'_> {
        if self.loading {
            return ProfileView::Loading;
        }
        let Some(client) = self.client.as_ref() else {
            return ProfileView::NotFound;
        };
        if self.builder.is_open() {
            return ProfileView::Builder(&self.builder);
        }
        let body = if self.tab.is_built() {
            ProfileBody::Programs(
                self.tree
                    .programs
                    .iter()
                    .map(|program| ProgramCard {
                        program,
                        expanded: self.accordion.is_expanded(&program.id),
                    })
                    .collect(),
            )
        } else {
            ProfileBody::UnderConstruction(self.tab)
        };
        ProfileView::Ready {
            client,
            tab: self.tab,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BuilderState, ClientProfileScreen, ProfileView};
    use crate::navigation::ProfileTab;

    #[test]
    fn mounts_in_loading_state() {
        let screen = ClientProfileScreen::mount("client-1");
        assert!(screen.is_loading());
        assert!(matches!(screen.view(), ProfileView::Loading));
    }

    #[test]
    fn builder_transitions_are_pure() {
        let mut screen = ClientProfileScreen::mount("client-1");
        screen.open_builder();
        assert_eq!(*screen.builder(), BuilderState::Creating);
        screen.edit_program("prog-9");
        assert_eq!(*screen.builder(), BuilderState::Editing("prog-9".to_owned()));
        screen.close_builder();
        assert!(!screen.builder().is_open());
    }

    #[test]
    fn tab_selection_is_idempotent() {
        let mut screen = ClientProfileScreen::mount("client-1");
        screen.select_tab(ProfileTab::Nutrition);
        screen.select_tab(ProfileTab::Nutrition);
        assert_eq!(screen.tab(), ProfileTab::Nutrition);
    }
}
