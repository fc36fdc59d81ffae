//! Society reference data.

use serde::{Deserialize, Serialize};

use society_desk_core::SocietyId;

/// An organizational unit an admin can be assigned to manage.
///
/// Societies are immutable reference data: the engine copies them by value
/// into admin records and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Society {
    /// Unique society ID.
    pub id: SocietyId,
    /// Display name of the society.
    pub name: String,
    /// Number of residential units the society contains.
    pub unit_count: u32,
}

/// The process-wide, read-only directory of societies.
///
/// Supplied once at engine construction; the engine only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct SocietyDirectory {
    societies: Vec<Society>,
}

impl SocietyDirectory {
    /// Create a directory from a list of societies.
    ///
    /// Later entries with an id already seen are discarded, preserving the
    /// first occurrence and the supplied order.
    #[must_use]
    pub fn new(societies: Vec<Society>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let societies = societies
            .into_iter()
            .filter(|s| seen.insert(s.id))
            .collect();
        Self { societies }
    }

    /// All societies in directory order.
    #[must_use]
    pub fn all(&self) -> &[Society] {
        &self.societies
    }

    /// Look up a society by id.
    #[must_use]
    pub fn get(&self, id: SocietyId) -> Option<&Society> {
        self.societies.iter().find(|s| s.id == id)
    }

    /// Case-insensitive substring search over society names.
    ///
    /// An empty term matches every society. This backs the assignment
    /// picker's search box.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Society> {
        let needle = term.to_lowercase();
        self.societies
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of societies in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.societies.len()
    }

    /// Whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.societies.is_empty()
    }
}
