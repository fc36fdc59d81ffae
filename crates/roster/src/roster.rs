//! The roster façade.
//!
//! [`Roster`] is the single object a presentation layer talks to. It owns
//! the record store, the read-only society directory, the view inputs
//! (search term, status filter, sort state, page), the zero-or-one detail
//! selection, and the page-scoped bulk selection.
//!
//! The derived view is an explicit recomputation: after every store
//! mutation or view-input change the façade re-runs the pure query
//! pipeline. The result is memoized behind a key of (store revision, search
//! term, status filter, sort field, sort order), so an unchanged tuple is
//! never recomputed and any changed component invalidates the memo by
//! construction. Recomputation also clamps the current page down when the
//! result set shrank - a silent correction, not an error path.

use tracing::{debug, info, instrument, warn};

use society_desk_core::{AdminId, AdminStatus};

use crate::collab::{AutoConfirm, Clock, ConfirmationPrompt, SystemClock};
use crate::error::RosterError;
use crate::models::{Admin, AdminDraft, AdminPatch, SocietyDirectory};
use crate::pagination::{self, Page, RosterStats};
use crate::query::{self, SortField, SortOrder, StatusFilter};
use crate::seed::{self, SeedError};
use crate::selection::{BulkSelection, SelectAllState};
use crate::store::RecordStore;
use crate::validate;

/// Cache key for the derived view: the full tuple of inputs the query
/// pipeline depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    revision: u64,
    search_term: String,
    status_filter: StatusFilter,
    sort_field: Option<SortField>,
    sort_order: SortOrder,
}

#[derive(Debug)]
struct DerivedView {
    key: ViewKey,
    ordered: Vec<Admin>,
}

/// The admin roster engine: authoritative store plus derived view state.
///
/// Exactly one `Roster` mutator is expected per process instance; every
/// operation is synchronous and runs to completion before the next is
/// observed.
pub struct Roster {
    store: RecordStore,
    directory: SocietyDirectory,
    clock: Box<dyn Clock>,
    prompt: Box<dyn ConfirmationPrompt>,

    search_term: String,
    status_filter: StatusFilter,
    sort_field: Option<SortField>,
    sort_order: SortOrder,
    current_page: usize,

    detail: Option<AdminId>,
    bulk: BulkSelection,

    derived: Option<DerivedView>,
}

impl Roster {
    /// Create an empty roster with the system clock and an auto-confirming
    /// prompt.
    ///
    /// Embedders that want an interactive confirmation before bulk deletes
    /// should use [`Roster::with_collaborators`].
    #[must_use]
    pub fn new(directory: SocietyDirectory) -> Self {
        Self::with_collaborators(directory, Box::new(SystemClock), Box::new(AutoConfirm))
    }

    /// Create an empty roster with explicit clock and confirmation-prompt
    /// collaborators.
    #[must_use]
    pub fn with_collaborators(
        directory: SocietyDirectory,
        clock: Box<dyn Clock>,
        prompt: Box<dyn ConfirmationPrompt>,
    ) -> Self {
        Self::from_store(RecordStore::new(), directory, clock, prompt)
    }

    fn from_store(
        store: RecordStore,
        directory: SocietyDirectory,
        clock: Box<dyn Clock>,
        prompt: Box<dyn ConfirmationPrompt>,
    ) -> Self {
        let mut roster = Self {
            store,
            directory,
            clock,
            prompt,
            search_term: String::new(),
            status_filter: StatusFilter::All,
            sort_field: None,
            sort_order: SortOrder::Asc,
            current_page: 1,
            detail: None,
            bulk: BulkSelection::new(),
            derived: None,
        };
        roster.refresh();
        roster
    }

    /// Create a roster pre-populated from the embedded seed dataset, with
    /// the system clock and an auto-confirming prompt.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the embedded dataset fails to load.
    pub fn seeded() -> Result<Self, SeedError> {
        Self::seeded_with(Box::new(SystemClock), Box::new(AutoConfirm))
    }

    /// Create a seeded roster with explicit collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the embedded dataset fails to load.
    pub fn seeded_with(
        clock: Box<dyn Clock>,
        prompt: Box<dyn ConfirmationPrompt>,
    ) -> Result<Self, SeedError> {
        let seed = seed::load()?;
        let store = RecordStore::with_admins(seed.admins)?;
        Ok(Self::from_store(store, seed.directory, clock, prompt))
    }

    // =========================================================================
    // Derived view plumbing
    // =========================================================================

    fn view_key(&self) -> ViewKey {
        ViewKey {
            revision: self.store.revision(),
            search_term: self.search_term.clone(),
            status_filter: self.status_filter,
            sort_field: self.sort_field,
            sort_order: self.sort_order,
        }
    }

    /// Recompute the derived view if any input changed, then clamp the
    /// current page into the valid range for the (possibly shrunken) result
    /// set.
    fn refresh(&mut self) {
        let key = self.view_key();
        let stale = match &self.derived {
            Some(view) => view.key != key,
            None => true,
        };
        if stale {
            let ordered = query::apply(
                self.store.list(),
                &self.search_term,
                self.status_filter,
                self.sort_field,
                self.sort_order,
            );
            debug!(matches = ordered.len(), "recomputed derived view");
            self.derived = Some(DerivedView { key, ordered });
        }

        let total_pages = self.ordered().len().div_ceil(pagination::PAGE_SIZE);
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    fn ordered(&self) -> &[Admin] {
        self.derived.as_ref().map_or(&[], |view| &view.ordered)
    }

    /// Inputs that change the result set reset the page and invalidate the
    /// page-scoped bulk selection.
    fn reset_view_scope(&mut self) {
        self.current_page = 1;
        self.bulk.clear();
    }

    fn current_page_ids(&self) -> Vec<AdminId> {
        pagination::paginate(self.ordered(), self.current_page).ids()
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// The full, unfiltered admin list in insertion order.
    #[must_use]
    pub fn admins(&self) -> &[Admin] {
        self.store.list()
    }

    /// Look up one admin by id.
    #[must_use]
    pub fn get(&self, id: AdminId) -> Option<&Admin> {
        self.store.get(id)
    }

    /// The read-only society directory.
    #[must_use]
    pub fn directory(&self) -> &SocietyDirectory {
        &self.directory
    }

    /// The current derived page: filtered, sorted, clamped, and sliced.
    #[must_use]
    pub fn page(&self) -> Page {
        pagination::paginate(self.ordered(), self.current_page)
    }

    /// Roster-wide statistics, independent of the current filters.
    #[must_use]
    pub fn stats(&self) -> RosterStats {
        pagination::stats(self.store.list())
    }

    /// The admin currently shown in the detail view, if any.
    ///
    /// Resolved against the store on every read, so a freshly patched
    /// record is never observed stale.
    #[must_use]
    pub fn detail(&self) -> Option<&Admin> {
        self.detail.and_then(|id| self.store.get(id))
    }

    /// The bulk-selected ids in ascending order.
    #[must_use]
    pub fn bulk_selected(&self) -> Vec<AdminId> {
        self.bulk.ids()
    }

    /// Whether one id is bulk-selected.
    #[must_use]
    pub fn is_bulk_selected(&self, id: AdminId) -> bool {
        self.bulk.contains(id)
    }

    /// Tri-state of the select-all checkbox for the current page.
    #[must_use]
    pub fn select_all_state(&self) -> SelectAllState {
        self.bulk.select_all_state(&self.current_page_ids())
    }

    /// The current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The current status filter.
    #[must_use]
    pub const fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// The current sort field, if any.
    #[must_use]
    pub const fn sort_field(&self) -> Option<SortField> {
        self.sort_field
    }

    /// The current sort direction.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The current (clamped) page number.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    // =========================================================================
    // Record commands
    // =========================================================================

    /// Validate and create an admin record, returning its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Validation`] when the draft fails validation;
    /// the write is blocked entirely.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub fn create(&mut self, draft: AdminDraft) -> Result<AdminId, RosterError> {
        let report = validate::validate(&draft);
        if !report.is_valid() {
            return Err(RosterError::Validation(report));
        }

        let created_at = self.clock.now();
        let id = self.store.create(draft, created_at)?.id;
        info!(id = %id, "admin created");
        self.refresh();
        Ok(id)
    }

    /// Validate and merge a partial update onto an existing record.
    ///
    /// If the patched record is the current detail selection, the detail
    /// view reflects the merge immediately (the selection is a handle, not
    /// a copy).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Validation`] when a patched field fails
    /// validation and [`RosterError::NotFound`] when the id is absent.
    #[instrument(skip(self, patch))]
    pub fn update(&mut self, id: AdminId, patch: AdminPatch) -> Result<(), RosterError> {
        let report = validate::validate_patch(&patch);
        if !report.is_valid() {
            return Err(RosterError::Validation(report));
        }

        self.store.update(id, patch)?;
        info!(id = %id, "admin updated");
        self.refresh();
        Ok(())
    }

    /// Hard-delete a record. Deleting the current detail selection clears
    /// that selection.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when the id is absent.
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: AdminId) -> Result<Admin, RosterError> {
        let removed = self.store.delete(id)?;
        if self.detail == Some(id) {
            self.detail = None;
        }
        self.bulk.remove(id);
        info!(id = %id, "admin deleted");
        self.refresh();
        Ok(removed)
    }

    /// Flip one admin between enabled and disabled: active becomes
    /// inactive, anything else becomes active. Returns the new status.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when the id is absent.
    #[instrument(skip(self))]
    pub fn toggle_status(&mut self, id: AdminId) -> Result<AdminStatus, RosterError> {
        let current = self
            .store
            .get(id)
            .ok_or(RosterError::NotFound { id })?
            .status;
        let next = if current == AdminStatus::Active {
            AdminStatus::Inactive
        } else {
            AdminStatus::Active
        };
        self.update(id, AdminPatch::status(next))?;
        Ok(next)
    }

    // =========================================================================
    // View-state commands
    // =========================================================================

    /// Choose the admin for the detail view, or `None` to close it.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when the id is absent.
    pub fn set_detail(&mut self, id: Option<AdminId>) -> Result<(), RosterError> {
        if let Some(id) = id
            && !self.store.contains(id)
        {
            return Err(RosterError::NotFound { id });
        }
        self.detail = id;
        Ok(())
    }

    /// Set the search term. A changed term resets the page to 1 and clears
    /// the bulk selection.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.reset_view_scope();
        self.refresh();
    }

    /// Set the status filter. A changed filter resets the page to 1 and
    /// clears the bulk selection.
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        if filter == self.status_filter {
            return;
        }
        self.status_filter = filter;
        self.reset_view_scope();
        self.refresh();
    }

    /// Set (or toggle) the sort field.
    ///
    /// Selecting the field that is already active flips the direction;
    /// selecting a different field (or clearing with `None`) resets the
    /// direction to ascending. Any call resets the page to 1 and clears the
    /// bulk selection.
    pub fn set_sort_field(&mut self, field: Option<SortField>) {
        match field {
            Some(field) if self.sort_field == Some(field) => {
                self.sort_order = self.sort_order.toggled();
            }
            Some(field) => {
                self.sort_field = Some(field);
                self.sort_order = SortOrder::Asc;
            }
            None => {
                self.sort_field = None;
                self.sort_order = SortOrder::Asc;
            }
        }
        self.reset_view_scope();
        self.refresh();
    }

    /// Request a page. The effective page is clamped into the valid range;
    /// changing page clears the page-scoped bulk selection.
    pub fn set_page(&mut self, page: usize) {
        if page == self.current_page {
            return;
        }
        self.current_page = page;
        self.bulk.clear();
        self.refresh();
    }

    // =========================================================================
    // Bulk selection commands
    // =========================================================================

    /// Flip one visible row in or out of the bulk selection. Ids not on the
    /// current page are ignored (the selection is page-scoped). Returns
    /// whether the id is selected afterwards.
    pub fn toggle_bulk_select(&mut self, id: AdminId) -> bool {
        if !self.current_page_ids().contains(&id) {
            warn!(id = %id, "ignoring bulk-select toggle for id not on the current page");
            return false;
        }
        self.bulk.toggle(id)
    }

    /// Select every row on the current page.
    pub fn select_all_on_page(&mut self) {
        self.bulk.select_exact(self.current_page_ids());
    }

    /// Empty the bulk selection.
    pub fn clear_bulk_selection(&mut self) {
        self.bulk.clear();
    }

    /// Apply a status to every bulk-selected admin, then clear the
    /// selection. Returns how many records were updated.
    #[instrument(skip(self))]
    pub fn bulk_set_status(&mut self, status: AdminStatus) -> usize {
        let ids = self.bulk.ids();
        let mut updated = 0;
        for id in ids {
            match self.store.update(id, AdminPatch::status(status)) {
                Ok(_) => updated += 1,
                // The selection is always a subset of the visible page, so a
                // missing id is an internal inconsistency, not a caller error.
                Err(e) => warn!(id = %id, error = %e, "skipping bulk status change"),
            }
        }
        self.bulk.clear();
        info!(updated, status = %status, "bulk status change applied");
        self.refresh();
        updated
    }

    /// Delete every bulk-selected admin after a confirmation, then clear
    /// the selection. Declining the confirmation aborts with zero store
    /// mutations. Returns how many records were deleted.
    #[instrument(skip(self))]
    pub fn bulk_delete(&mut self) -> usize {
        let ids = self.bulk.ids();
        if ids.is_empty() {
            return 0;
        }

        let message = format!("Are you sure you want to delete {} admin(s)?", ids.len());
        if !self.prompt.confirm(&message) {
            info!(requested = ids.len(), "bulk delete declined");
            return 0;
        }

        let mut deleted = 0;
        for id in ids {
            match self.store.delete(id) {
                Ok(_) => {
                    if self.detail == Some(id) {
                        self.detail = None;
                    }
                    deleted += 1;
                }
                Err(e) => warn!(id = %id, error = %e, "skipping bulk delete"),
            }
        }
        self.bulk.clear();
        info!(deleted, "bulk delete applied");
        self.refresh();
        deleted
    }
}
