//! Admin record types: the stored entity, the create draft, and the
//! partial-update patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use society_desk_core::{AdminId, AdminStatus, Email};

use super::{Activity, Society};

/// Serde helper mapping the upstream "never" sentinel to `Option`.
///
/// The wire shape uses an empty string for "this admin has never been
/// active"; in memory that is `None`.
pub(crate) mod never_sentinel {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<DateTime<Utc>>()
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

/// A managed platform administrator record, the primary entity of the
/// roster.
///
/// `created_at` and `recent_activities` are set exactly once when the record
/// is created; they are deliberately absent from [`AdminPatch`] so the update
/// surface cannot touch them. `assigned_societies` never contains two
/// societies with the same id (the store deduplicates on every write).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// Unique admin ID, assigned by the store.
    pub id: AdminId,
    /// Admin's display name.
    pub name: String,
    /// Admin's email address.
    pub email: Email,
    /// Admin's contact phone number.
    pub phone: String,
    /// Lifecycle status.
    pub status: AdminStatus,
    /// Societies this admin manages, in assignment order, no duplicate ids.
    pub assigned_societies: Vec<Society>,
    /// When the admin was last active; `None` means never.
    #[serde(with = "never_sentinel")]
    pub last_activity: Option<DateTime<Utc>>,
    /// When the record was created. Immutable.
    pub created_at: DateTime<Utc>,
    /// Number of sign-ins recorded for this admin.
    pub login_count: u32,
    /// Number of resident tickets this admin has resolved.
    pub tickets_resolved: u32,
    /// Most-recent-first activity log. Immutable after creation.
    pub recent_activities: Vec<Activity>,
}

impl Admin {
    /// Number of societies assigned to this admin.
    #[must_use]
    pub fn society_count(&self) -> usize {
        self.assigned_societies.len()
    }

    /// Total residential units across all assigned societies.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.assigned_societies.iter().map(|s| s.unit_count).sum()
    }
}

/// Payload for creating a new admin record.
///
/// Excludes `id`, `created_at`, and `recent_activities`: the store assigns
/// the id, stamps the creation time from the clock collaborator, and starts
/// the activity log empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDraft {
    /// Display name.
    pub name: String,
    /// Email address as entered; validated before the write is accepted.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Initial lifecycle status.
    #[serde(default)]
    pub status: AdminStatus,
    /// Societies to assign, copied by value.
    #[serde(default)]
    pub assigned_societies: Vec<Society>,
    /// Last-active timestamp carried over when re-creating a record;
    /// `None` for a fresh admin.
    #[serde(with = "never_sentinel", default)]
    pub last_activity: Option<DateTime<Utc>>,
    /// Carried-over sign-in count; 0 for a fresh admin.
    #[serde(default)]
    pub login_count: u32,
    /// Carried-over resolved-ticket count; 0 for a fresh admin.
    #[serde(default)]
    pub tickets_resolved: u32,
}

impl AdminDraft {
    /// A blank draft the way the create form starts out: pending status,
    /// no assignments, zeroed counters.
    #[must_use]
    pub fn blank(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            status: AdminStatus::default(),
            assigned_societies: Vec::new(),
            last_activity: None,
            login_count: 0,
            tickets_resolved: 0,
        }
    }

    /// Set the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: AdminStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the initial society assignments.
    #[must_use]
    pub fn with_societies(mut self, societies: Vec<Society>) -> Self {
        self.assigned_societies = societies;
        self
    }
}

/// A partial update merged field-by-field onto an existing admin.
///
/// Fields left as `None` keep the stored value. There is intentionally no
/// way to patch `created_at` or `recent_activities`.
#[derive(Debug, Clone, Default)]
pub struct AdminPatch {
    /// New display name.
    pub name: Option<String>,
    /// New email address; validated before the merge is applied.
    pub email: Option<String>,
    /// New contact phone number.
    pub phone: Option<String>,
    /// New lifecycle status.
    pub status: Option<AdminStatus>,
    /// Replacement society assignments (full replacement, not a diff).
    pub assigned_societies: Option<Vec<Society>>,
    /// Replacement last-active timestamp; `Some(None)` resets to "never".
    pub last_activity: Option<Option<DateTime<Utc>>>,
    /// New sign-in count.
    pub login_count: Option<u32>,
    /// New resolved-ticket count.
    pub tickets_resolved: Option<u32>,
}

impl AdminPatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch only the status. This is the shape the bulk status change and
    /// the enable/disable toggle use.
    #[must_use]
    pub fn status(status: AdminStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Set the name field.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email field.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the phone field.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the status field.
    #[must_use]
    pub const fn with_status(mut self, status: AdminStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replace the society assignments.
    #[must_use]
    pub fn with_societies(mut self, societies: Vec<Society>) -> Self {
        self.assigned_societies = Some(societies);
        self
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.status.is_none()
            && self.assigned_societies.is_none()
            && self.last_activity.is_none()
            && self.login_count.is_none()
            && self.tickets_resolved.is_none()
    }
}
