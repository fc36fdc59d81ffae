//! Page slicing, clamping, and roster-wide statistics.

use serde::Serialize;

use society_desk_core::{AdminId, AdminStatus};

use crate::models::Admin;

/// Fixed number of admins per page.
pub const PAGE_SIZE: usize = 12;

/// One page of the derived roster view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// The effective (clamped) 1-based page number.
    pub page: usize,
    /// Total pages for the current result set; 0 when there are no matches.
    pub total_pages: usize,
    /// Total number of matches across all pages.
    pub total_matches: usize,
    /// The admins on this page, in display order.
    pub items: Vec<Admin>,
}

impl Page {
    /// The ids on this page, in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<AdminId> {
        self.items.iter().map(|a| a.id).collect()
    }

    /// The 1-based "showing X to Y of Z" range; `(0, 0)` when empty.
    #[must_use]
    pub fn display_range(&self) -> (usize, usize) {
        if self.total_matches == 0 {
            return (0, 0);
        }
        let start = (self.page - 1) * PAGE_SIZE + 1;
        let end = (self.page * PAGE_SIZE).min(self.total_matches);
        (start.min(self.total_matches), end)
    }
}

/// Slice one page out of an ordered result set.
///
/// The requested page is clamped into `[1, max(total_pages, 1)]`, so a
/// stored page number that became too large after the result set shrank is
/// silently corrected down; callers never see an empty page while earlier
/// pages still have content.
#[must_use]
pub fn paginate(ordered: &[Admin], requested_page: usize) -> Page {
    let total_matches = ordered.len();
    let total_pages = total_matches.div_ceil(PAGE_SIZE);
    let page = requested_page.clamp(1, total_pages.max(1));
    let start = (page - 1) * PAGE_SIZE;
    let items = ordered.iter().skip(start).take(PAGE_SIZE).cloned().collect();
    Page {
        page,
        total_pages,
        total_matches,
        items,
    }
}

/// Dashboard statistics over the **unfiltered** store.
///
/// These are independent of the current search/filter inputs; the stat
/// cards always describe the whole roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RosterStats {
    /// Number of active admins.
    pub active: usize,
    /// Number of inactive admins.
    pub inactive: usize,
    /// Number of admins pending approval.
    pub pending: usize,
    /// Total society assignments across every admin.
    pub total_assignments: usize,
}

/// Compute the roster statistics from a full store snapshot.
#[must_use]
pub fn stats(admins: &[Admin]) -> RosterStats {
    let mut out = RosterStats::default();
    for admin in admins {
        match admin.status {
            AdminStatus::Active => out.active += 1,
            AdminStatus::Inactive => out.inactive += 1,
            AdminStatus::Pending => out.pending += 1,
        }
        out.total_assignments += admin.society_count();
    }
    out
}
