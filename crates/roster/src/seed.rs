//! Embedded bootstrap dataset.
//!
//! The platform ships a static roster used for demos and for the acceptance
//! suite: 15 societies, 25 activity entries, and 20 admins. The data lives
//! in `seed/dataset.json` next to this module and is deserialized through
//! the model types; admins reference societies and activities by id and are
//! resolved here against the parsed tables.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use society_desk_core::{ActivityId, AdminId, AdminStatus, Email, SocietyId};

use crate::models::admin::never_sentinel;
use crate::models::{Activity, Admin, Society, SocietyDirectory};

const DATASET: &str = include_str!("seed/dataset.json");

/// Errors raised while loading the embedded dataset.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The embedded JSON failed to parse.
    #[error("seed dataset is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    /// An admin references a society id missing from the society table.
    #[error("seed admin {admin} references unknown society {society}")]
    UnknownSociety {
        /// The referencing admin.
        admin: AdminId,
        /// The dangling society id.
        society: SocietyId,
    },

    /// An admin references an activity id missing from the activity table.
    #[error("seed admin {admin} references unknown activity {activity}")]
    UnknownActivity {
        /// The referencing admin.
        admin: AdminId,
        /// The dangling activity id.
        activity: ActivityId,
    },

    /// The resolved dataset violates a store invariant (duplicate admin id).
    #[error(transparent)]
    Invalid(#[from] crate::error::RosterError),
}

/// Admin row as stored in the dataset: references by id, resolved on load.
#[derive(Debug, Deserialize)]
struct RawAdmin {
    id: AdminId,
    name: String,
    email: Email,
    phone: String,
    status: AdminStatus,
    society_ids: Vec<SocietyId>,
    #[serde(with = "never_sentinel", default)]
    last_activity: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    login_count: u32,
    tickets_resolved: u32,
    activity_ids: Vec<ActivityId>,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    societies: Vec<Society>,
    activities: Vec<Activity>,
    admins: Vec<RawAdmin>,
}

/// The fully resolved bootstrap dataset.
#[derive(Debug, Clone)]
pub struct SeedData {
    /// The read-only society directory.
    pub directory: SocietyDirectory,
    /// The initial admin roster.
    pub admins: Vec<Admin>,
}

/// Parse and resolve the embedded dataset.
///
/// # Errors
///
/// Returns [`SeedError`] if the JSON is malformed or an admin references a
/// society or activity id that is not in the dataset.
pub fn load() -> Result<SeedData, SeedError> {
    let raw: RawDataset = serde_json::from_str(DATASET)?;
    let directory = SocietyDirectory::new(raw.societies);

    let mut admins = Vec::with_capacity(raw.admins.len());
    for row in raw.admins {
        let mut assigned_societies = Vec::with_capacity(row.society_ids.len());
        for society_id in row.society_ids {
            let society = directory
                .get(society_id)
                .ok_or(SeedError::UnknownSociety {
                    admin: row.id,
                    society: society_id,
                })?
                .clone();
            assigned_societies.push(society);
        }

        let mut recent_activities = Vec::with_capacity(row.activity_ids.len());
        for activity_id in row.activity_ids {
            let activity = raw
                .activities
                .iter()
                .find(|a| a.id == activity_id)
                .ok_or(SeedError::UnknownActivity {
                    admin: row.id,
                    activity: activity_id,
                })?
                .clone();
            recent_activities.push(activity);
        }

        admins.push(Admin {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            status: row.status,
            assigned_societies,
            last_activity: row.last_activity,
            created_at: row.created_at,
            login_count: row.login_count,
            tickets_resolved: row.tickets_resolved,
            recent_activities,
        });
    }

    debug!(
        societies = directory.len(),
        admins = admins.len(),
        "loaded seed dataset"
    );
    Ok(SeedData { directory, admins })
}

/// Just the society directory from the embedded dataset.
///
/// # Errors
///
/// Returns [`SeedError`] if the embedded JSON is malformed.
pub fn society_directory() -> Result<SocietyDirectory, SeedError> {
    let raw: RawDataset = serde_json::from_str(DATASET)?;
    Ok(SocietyDirectory::new(raw.societies))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_parses_and_resolves() {
        let seed = load().unwrap();
        assert_eq!(seed.directory.len(), 15);
        assert_eq!(seed.admins.len(), 20);
    }

    #[test]
    fn test_dataset_contains_michael_chen() {
        let seed = load().unwrap();
        let chen = seed
            .admins
            .iter()
            .find(|a| a.name == "Michael Chen")
            .unwrap();
        assert_eq!(chen.id, AdminId::new(2));
        assert_eq!(chen.status, AdminStatus::Active);
        assert_eq!(chen.society_count(), 2);
        assert_eq!(chen.recent_activities.len(), 3);
    }

    #[test]
    fn test_pending_admins_have_never_been_active() {
        let seed = load().unwrap();
        for admin in seed
            .admins
            .iter()
            .filter(|a| a.status == AdminStatus::Pending)
        {
            assert!(admin.last_activity.is_none(), "{} should be never-active", admin.name);
            assert_eq!(admin.login_count, 0);
            assert!(admin.recent_activities.is_empty());
        }
    }

    #[test]
    fn test_activity_logs_are_most_recent_first() {
        let seed = load().unwrap();
        let sarah = seed.admins.first().unwrap();
        assert_eq!(sarah.recent_activities.len(), 5);
        assert_eq!(
            sarah.recent_activities.first().unwrap().action,
            "Approved resident registration"
        );
    }

    #[test]
    fn test_society_assignments_resolve_by_value() {
        let seed = load().unwrap();
        let sarah = seed.admins.first().unwrap();
        let names: Vec<&str> = sarah
            .assigned_societies
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Green Valley Residency", "Sunshine Apartments", "Palm Grove Society"]
        );
        assert_eq!(sarah.total_units(), 245 + 180 + 320);
    }
}
