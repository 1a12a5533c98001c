// ABOUTME: Unit tests for navigation state machines
// ABOUTME: Validates accordion, sidebar, action menu, and route transitions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use hardcase_core::navigation::{
    ActionMenu, NavEffect, ProfileTab, ProgramAccordion, QuickAction, Route, SidebarEntry,
    SidebarState, Viewport,
};

#[test]
fn test_accordion_toggle_same_program_collapses() {
    let mut accordion = ProgramAccordion::new();
    accordion.toggle("prog-a");
    assert_eq!(accordion.expanded(), Some("prog-a"));

    accordion.toggle("prog-a");
    assert!(accordion.expanded().is_none());
}

#[test]
fn test_accordion_toggle_other_program_switches() {
    let mut accordion = ProgramAccordion::new();
    accordion.toggle("prog-a");
    accordion.toggle("prog-b");

    assert_eq!(accordion.expanded(), Some("prog-b"));
    assert!(accordion.is_expanded("prog-b"));
    assert!(!accordion.is_expanded("prog-a"));
}

#[test]
fn test_sidebar_toggle_and_close() {
    let mut sidebar = SidebarState::default();
    assert!(!sidebar.is_open());

    sidebar.toggle();
    assert!(sidebar.is_open());

    sidebar.toggle();
    assert!(!sidebar.is_open());

    sidebar.toggle();
    sidebar.close();
    assert!(!sidebar.is_open());
}

#[test]
fn test_sidebar_always_visible_on_desktop() {
    let sidebar = SidebarState::default();
    assert!(sidebar.is_visible(Viewport::Desktop));
    assert!(!sidebar.is_visible(Viewport::Mobile));

    let mut open = SidebarState::default();
    open.toggle();
    assert!(open.is_visible(Viewport::Mobile));
}

#[test]
fn test_sidebar_selection_closes_before_navigating() {
    let mut sidebar = SidebarState::default();
    sidebar.toggle();

    let effect = sidebar.select(&SidebarEntry::Navigate(Route::TrainerCalendar));
    assert!(!sidebar.is_open());
    assert_eq!(effect, NavEffect::Navigate(Route::TrainerCalendar));
}

#[test]
fn test_sidebar_logout_entry_signs_out() {
    let mut sidebar = SidebarState::default();
    sidebar.toggle();

    assert_eq!(
        sidebar.select(&SidebarEntry::Logout),
        NavEffect::SignOutThenLogin
    );
    assert!(!sidebar.is_open());
}

#[test]
fn test_sidebar_placeholder_entry_only_closes() {
    let mut sidebar = SidebarState::default();
    sidebar.toggle();

    assert_eq!(sidebar.select(&SidebarEntry::Placeholder), NavEffect::None);
    assert!(!sidebar.is_open());
}

#[test]
fn test_sidebar_back_entry_navigates() {
    let mut sidebar = SidebarState::default();
    assert_eq!(
        sidebar.select(&SidebarEntry::Back(Route::TrainerClients)),
        NavEffect::Navigate(Route::TrainerClients)
    );
}

#[test]
fn test_action_menu_choose_forces_closed() {
    let mut menu = ActionMenu::default();
    menu.toggle();
    assert!(menu.is_open());

    let effect = menu.choose(QuickAction::ScheduleSession);
    assert!(!menu.is_open());
    assert_eq!(effect, NavEffect::Navigate(Route::TrainerCalendar));
}

#[test]
fn test_quick_action_destinations() {
    assert_eq!(QuickAction::AddClient.destination(), Route::TrainerClients);
    assert_eq!(
        QuickAction::ScheduleSession.destination(),
        Route::TrainerCalendar
    );
    assert_eq!(
        QuickAction::BrowseCatalog.destination(),
        Route::TrainerExercises
    );
}

#[test]
fn test_route_paths() {
    assert_eq!(Route::Login.path(), "/login");
    assert_eq!(Route::ClientHome.path(), "/client");
    assert_eq!(Route::TrainerHome.path(), "/trainer");
    assert_eq!(Route::TrainerClients.path(), "/trainer/clients");
    assert_eq!(Route::TrainerCalendar.path(), "/trainer/calendar");
    assert_eq!(
        Route::TrainerClientProfile("c-9".to_owned()).path(),
        "/trainer/clients/c-9"
    );
    assert_eq!(Route::TrainerExercises.path(), "/trainer/exercises");
}

#[test]
fn test_only_the_program_tab_is_built() {
    assert!(ProfileTab::Program.is_built());
    let placeholders = ProfileTab::ALL
        .iter()
        .filter(|tab| !tab.is_built())
        .count();
    assert_eq!(placeholders, ProfileTab::ALL.len() - 1);
    assert_eq!(ProfileTab::default(), ProfileTab::Program);
}
