//! Group selection and bulk mutation flows.

use chrono::{TimeZone, Utc};

use society_desk_core::{AdminId, AdminStatus};
use society_desk_integration_tests::init_tracing;
use society_desk_roster::Roster;
use society_desk_roster::collab::{AutoConfirm, FixedClock, NeverConfirm};
use society_desk_roster::query::{SortField, StatusFilter};
use society_desk_roster::selection::SelectAllState;

fn clock() -> Box<FixedClock> {
    Box::new(FixedClock(
        Utc.with_ymd_and_hms(2025, 1, 26, 12, 0, 0).unwrap(),
    ))
}

fn seeded_roster() -> Roster {
    init_tracing();
    Roster::seeded_with(clock(), Box::new(AutoConfirm)).expect("seed dataset loads")
}

// =============================================================================
// Selection Scope
// =============================================================================

#[test]
fn test_select_all_then_filter_change_empties_selection() {
    let mut roster = seeded_roster();
    roster.select_all_on_page();
    assert_eq!(roster.bulk_selected().len(), 12);

    roster.set_status_filter(StatusFilter::Only(AdminStatus::Active));
    assert!(roster.bulk_selected().is_empty());
}

#[test]
fn test_search_sort_and_page_changes_empty_the_selection() {
    let mut roster = seeded_roster();

    roster.select_all_on_page();
    roster.set_search_term("an");
    assert!(roster.bulk_selected().is_empty());

    roster.set_search_term("");
    roster.select_all_on_page();
    roster.set_sort_field(Some(SortField::Name));
    assert!(roster.bulk_selected().is_empty());

    roster.select_all_on_page();
    roster.set_page(2);
    assert!(roster.bulk_selected().is_empty());
}

#[test]
fn test_selection_is_always_within_the_current_page() {
    let mut roster = seeded_roster();
    roster.select_all_on_page();
    let page_ids = roster.page().ids();
    for id in roster.bulk_selected() {
        assert!(page_ids.contains(&id));
    }

    // Ids from other pages are refused.
    roster.clear_bulk_selection();
    assert!(!roster.toggle_bulk_select(AdminId::new(20)));
    assert!(roster.bulk_selected().is_empty());
}

#[test]
fn test_select_all_tri_state_over_seed_page() {
    let mut roster = seeded_roster();
    assert_eq!(roster.select_all_state(), SelectAllState::None);

    assert!(roster.toggle_bulk_select(AdminId::new(1)));
    assert_eq!(roster.select_all_state(), SelectAllState::Indeterminate);

    roster.select_all_on_page();
    assert_eq!(roster.select_all_state(), SelectAllState::All);

    assert!(!roster.toggle_bulk_select(AdminId::new(1)));
    assert_eq!(roster.select_all_state(), SelectAllState::Indeterminate);
}

// =============================================================================
// Bulk Status Change
// =============================================================================

#[test]
fn test_bulk_enable_all_pending_admins() {
    let mut roster = seeded_roster();
    roster.set_status_filter(StatusFilter::Only(AdminStatus::Pending));
    roster.select_all_on_page();
    assert_eq!(roster.bulk_selected().len(), 4);

    let updated = roster.bulk_set_status(AdminStatus::Active);
    assert_eq!(updated, 4);
    assert!(roster.bulk_selected().is_empty());

    let stats = roster.stats();
    assert_eq!(stats.pending, 0);
    assert_eq!(stats.active, 16);

    // The still-applied pending filter now matches nothing.
    assert_eq!(roster.page().total_matches, 0);
    assert_eq!(roster.page().total_pages, 0);
}

#[test]
fn test_bulk_disable_selected_admins() {
    let mut roster = seeded_roster();
    roster.toggle_bulk_select(AdminId::new(1));
    roster.toggle_bulk_select(AdminId::new(2));
    let updated = roster.bulk_set_status(AdminStatus::Inactive);
    assert_eq!(updated, 2);
    assert_eq!(roster.get(AdminId::new(1)).expect("exists").status, AdminStatus::Inactive);
    assert_eq!(roster.get(AdminId::new(2)).expect("exists").status, AdminStatus::Inactive);
}

// =============================================================================
// Bulk Delete
// =============================================================================

#[test]
fn test_bulk_delete_requires_confirmation() {
    let mut roster =
        Roster::seeded_with(clock(), Box::new(NeverConfirm)).expect("seed dataset loads");
    roster.select_all_on_page();

    let deleted = roster.bulk_delete();
    assert_eq!(deleted, 0);
    assert_eq!(roster.admins().len(), 20);
    // The declined action keeps the selection for a retry.
    assert_eq!(roster.bulk_selected().len(), 12);
}

#[test]
fn test_confirmed_bulk_delete_removes_selection_and_clamps_page() {
    let mut roster = seeded_roster();
    roster.set_page(2);
    roster.select_all_on_page();
    assert_eq!(roster.bulk_selected().len(), 8);

    let deleted = roster.bulk_delete();
    assert_eq!(deleted, 8);
    assert_eq!(roster.admins().len(), 12);
    assert!(roster.bulk_selected().is_empty());

    // Twelve admins fit on one page; the stored page was corrected down.
    assert_eq!(roster.current_page(), 1);
    assert_eq!(roster.page().total_pages, 1);
    assert_eq!(roster.page().items.len(), 12);
}

#[test]
fn test_bulk_delete_clears_a_deleted_detail_selection() {
    let mut roster = seeded_roster();
    roster.set_detail(Some(AdminId::new(3))).expect("admin 3 exists");
    roster.toggle_bulk_select(AdminId::new(3));
    let deleted = roster.bulk_delete();
    assert_eq!(deleted, 1);
    assert!(roster.detail().is_none());
}

#[test]
fn test_bulk_delete_with_empty_selection_is_a_no_op() {
    let mut roster = seeded_roster();
    assert_eq!(roster.bulk_delete(), 0);
    assert_eq!(roster.admins().len(), 20);
}
