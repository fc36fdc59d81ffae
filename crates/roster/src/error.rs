//! Unified error handling for the roster engine.

use thiserror::Error;

use society_desk_core::AdminId;

use crate::validate::ValidationReport;

/// Engine-level error type for roster operations.
///
/// Validation failures are carried as data (the field-scoped report) so a
/// caller can render inline messages; they are never panics. Referencing an
/// id that is not in the store is surfaced rather than silently ignored so
/// caller bugs cannot hide behind a no-op.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A draft or patch failed validation; the write was blocked entirely.
    #[error("validation failed: {0}")]
    Validation(ValidationReport),

    /// The referenced admin is not in the store.
    #[error("admin {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: AdminId,
    },

    /// An insert would have produced a second record with the same id.
    ///
    /// Unreachable under the single-writer assumption; kept as a store
    /// integrity check so a duplicate is rejected instead of corrupting
    /// the collection.
    #[error("admin id {id} already exists")]
    DuplicateId {
        /// The conflicting id.
        id: AdminId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RosterError::NotFound {
            id: AdminId::new(42),
        };
        assert_eq!(err.to_string(), "admin 42 not found");

        let err = RosterError::DuplicateId {
            id: AdminId::new(3),
        };
        assert_eq!(err.to_string(), "admin id 3 already exists");
    }
}
