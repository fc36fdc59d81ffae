//! The authoritative in-memory admin record store.
//!
//! The store owns the ordered collection of [`Admin`] records and is the
//! single source of truth every derived view is computed from. Insertion
//! order is preserved for iteration but is not the display order; display
//! order comes from the query pipeline.
//!
//! The store assumes exactly one mutating actor per process instance. Id
//! assignment is `max(existing ids) + 1`, which is only safe under that
//! assumption; a design with concurrent writers would need a monotonic
//! atomic counter instead.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use society_desk_core::{AdminId, Email, SocietyId};

use crate::error::RosterError;
use crate::models::{Admin, AdminDraft, AdminPatch, Society};
use crate::validate;

/// Drop later duplicates (by society id), preserving first-occurrence order.
fn dedup_societies(societies: Vec<Society>) -> Vec<Society> {
    let mut seen: HashSet<SocietyId> = HashSet::new();
    societies.into_iter().filter(|s| seen.insert(s.id)).collect()
}

/// Parse a draft email, converting a failure into the same field-scoped
/// validation error the form layer produces.
fn parse_email(raw: &str) -> Result<Email, RosterError> {
    Email::parse(raw).map_err(|_| {
        let patch = AdminPatch::new().with_email(raw);
        RosterError::Validation(validate::validate_patch(&patch))
    })
}

/// The authoritative, ordered collection of admin records.
#[derive(Debug, Default)]
pub struct RecordStore {
    admins: Vec<Admin>,
    revision: u64,
}

impl RecordStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            admins: Vec::new(),
            revision: 0,
        }
    }

    /// Create a store pre-populated with existing records (e.g., the seed
    /// dataset).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateId`] if two records share an id.
    pub fn with_admins(admins: Vec<Admin>) -> Result<Self, RosterError> {
        let mut seen: HashSet<AdminId> = HashSet::new();
        for admin in &admins {
            if !seen.insert(admin.id) {
                return Err(RosterError::DuplicateId { id: admin.id });
            }
        }
        let admins = admins
            .into_iter()
            .map(|mut admin| {
                admin.assigned_societies = dedup_societies(admin.assigned_societies);
                admin
            })
            .collect();
        Ok(Self { admins, revision: 0 })
    }

    /// The full, unfiltered collection in insertion order.
    ///
    /// The returned slice is a read-only snapshot; the store is the only
    /// place records are ever mutated.
    #[must_use]
    pub fn list(&self) -> &[Admin] {
        &self.admins
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: AdminId) -> Option<&Admin> {
        self.admins.iter().find(|a| a.id == id)
    }

    /// Whether a record with this id exists.
    #[must_use]
    pub fn contains(&self, id: AdminId) -> bool {
        self.get(id).is_some()
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.admins.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }

    /// Monotonic mutation counter.
    ///
    /// Bumped on every successful create/update/delete; derived views use it
    /// as the store component of their cache key.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn next_id(&self) -> AdminId {
        let max = self.admins.iter().map(|a| a.id.as_i32()).max().unwrap_or(0);
        AdminId::new(max + 1)
    }

    /// Create a record from a draft, assigning the next id and stamping the
    /// creation time. The new record is appended to the end of the
    /// collection; its activity log starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Validation`] if the draft email does not parse,
    /// and [`RosterError::DuplicateId`] if the computed id already exists
    /// (impossible with a single writer, rejected rather than corrupting the
    /// store).
    pub fn create(
        &mut self,
        draft: AdminDraft,
        created_at: DateTime<Utc>,
    ) -> Result<&Admin, RosterError> {
        let id = self.next_id();
        if self.contains(id) {
            return Err(RosterError::DuplicateId { id });
        }

        let email = parse_email(&draft.email)?;
        let admin = Admin {
            id,
            name: draft.name,
            email,
            phone: draft.phone,
            status: draft.status,
            assigned_societies: dedup_societies(draft.assigned_societies),
            last_activity: draft.last_activity,
            created_at,
            login_count: draft.login_count,
            tickets_resolved: draft.tickets_resolved,
            recent_activities: Vec::new(),
        };

        self.admins.push(admin);
        self.revision += 1;
        debug!(id = %id, revision = self.revision, "created admin record");

        self.get(id).ok_or(RosterError::NotFound { id })
    }

    /// Merge a patch onto an existing record, field by field.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] if no record has this id, and
    /// [`RosterError::Validation`] if a patched email does not parse. On
    /// error nothing is applied.
    pub fn update(&mut self, id: AdminId, patch: AdminPatch) -> Result<&Admin, RosterError> {
        // Parse up front so a bad email leaves the record untouched.
        let email = match &patch.email {
            Some(raw) => Some(parse_email(raw)?),
            None => None,
        };

        let index = self
            .admins
            .iter()
            .position(|a| a.id == id)
            .ok_or(RosterError::NotFound { id })?;

        let admin = self
            .admins
            .get_mut(index)
            .ok_or(RosterError::NotFound { id })?;

        if let Some(name) = patch.name {
            admin.name = name;
        }
        if let Some(email) = email {
            admin.email = email;
        }
        if let Some(phone) = patch.phone {
            admin.phone = phone;
        }
        if let Some(status) = patch.status {
            admin.status = status;
        }
        if let Some(societies) = patch.assigned_societies {
            admin.assigned_societies = dedup_societies(societies);
        }
        if let Some(last_activity) = patch.last_activity {
            admin.last_activity = last_activity;
        }
        if let Some(login_count) = patch.login_count {
            admin.login_count = login_count;
        }
        if let Some(tickets_resolved) = patch.tickets_resolved {
            admin.tickets_resolved = tickets_resolved;
        }

        self.revision += 1;
        debug!(id = %id, revision = self.revision, "updated admin record");

        self.get(id).ok_or(RosterError::NotFound { id })
    }

    /// Hard-remove a record, returning it. There is no tombstone.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] if no record has this id.
    pub fn delete(&mut self, id: AdminId) -> Result<Admin, RosterError> {
        let index = self
            .admins
            .iter()
            .position(|a| a.id == id)
            .ok_or(RosterError::NotFound { id })?;

        let removed = self.admins.remove(index);
        self.revision += 1;
        debug!(id = %id, revision = self.revision, "deleted admin record");
        Ok(removed)
    }
}
