//! The pure query pipeline: search filter → status filter → sort.
//!
//! Every stage is a standalone function over owned snapshots so each can be
//! exercised (and reasoned about) independently; [`apply`] composes them in
//! pipeline order. Nothing here touches the store - callers pass a snapshot
//! in and get an ordered result out, recomputed from scratch on every input
//! change.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use society_desk_core::AdminStatus;

use crate::models::Admin;

/// Sortable columns of the roster view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Case-insensitive sort by display name.
    Name,
    /// Sort by last-activity timestamp; "never" sorts lowest.
    LastActivity,
    /// Sort by number of assigned societies.
    SocietyCount,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::LastActivity => write!(f, "last_activity"),
            Self::SocietyCount => write!(f, "society_count"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "last_activity" => Ok(Self::LastActivity),
            "society_count" => Ok(Self::SocietyCount),
            _ => Err(format!("invalid sort field: {s}")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending order; the default whenever a new sort field is chosen.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Status filter applied to the roster view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    /// Every status matches.
    #[default]
    All,
    /// Only the given status matches.
    Only(AdminStatus),
}

impl StatusFilter {
    /// Whether an admin passes this filter.
    #[must_use]
    pub fn matches(self, admin: &Admin) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => admin.status == status,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<AdminStatus>().map(Self::Only)
    }
}

/// Whether an admin matches a search term: case-insensitive substring match
/// against name OR email. The empty term matches everything.
#[must_use]
pub fn matches_search(admin: &Admin, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    admin.name.to_lowercase().contains(&needle)
        || admin.email.as_str().to_lowercase().contains(&needle)
}

/// Stage 1: filter by search term.
#[must_use]
pub fn search_stage(admins: Vec<Admin>, term: &str) -> Vec<Admin> {
    if term.is_empty() {
        return admins;
    }
    admins
        .into_iter()
        .filter(|a| matches_search(a, term))
        .collect()
}

/// Stage 2: filter by status.
#[must_use]
pub fn status_stage(admins: Vec<Admin>, filter: StatusFilter) -> Vec<Admin> {
    if filter == StatusFilter::All {
        return admins;
    }
    admins.into_iter().filter(|a| filter.matches(a)).collect()
}

/// The timestamp an admin sorts by: "never" sorts as the Unix epoch, below
/// every real activity.
fn activity_sort_key(admin: &Admin) -> DateTime<Utc> {
    admin.last_activity.unwrap_or(DateTime::UNIX_EPOCH)
}

fn compare(a: &Admin, b: &Admin, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::LastActivity => activity_sort_key(a).cmp(&activity_sort_key(b)),
        SortField::SocietyCount => a.society_count().cmp(&b.society_count()),
    }
}

/// Stage 3: sort, only when a field is set.
///
/// The sort is stable, so equal keys keep the relative order the previous
/// stage produced. `Desc` reverses the comparator, not the result, which
/// keeps tie order stable in both directions.
#[must_use]
pub fn sort_stage(
    mut admins: Vec<Admin>,
    field: Option<SortField>,
    order: SortOrder,
) -> Vec<Admin> {
    let Some(field) = field else {
        return admins;
    };
    admins.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    admins
}

/// The full pipeline over a store snapshot, in stage order.
#[must_use]
pub fn apply(
    admins: &[Admin],
    term: &str,
    filter: StatusFilter,
    field: Option<SortField>,
    order: SortOrder,
) -> Vec<Admin> {
    let snapshot = admins.to_vec();
    sort_stage(
        status_stage(search_stage(snapshot, term), filter),
        field,
        order,
    )
}
