//! Activity history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use society_desk_core::{ActivityId, ActivityKind};

/// An immutable historical event entry attached to an admin.
///
/// Activities are captured when the owning admin record is created and are
/// never mutated or appended to afterwards; the engine treats them as an
/// opaque, most-recent-first log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity ID.
    pub id: ActivityId,
    /// Human-readable description of what happened.
    pub action: String,
    /// Name of the society the action concerned; empty for platform-level
    /// events such as sign-ins.
    #[serde(default)]
    pub society: String,
    /// When the activity happened.
    pub timestamp: DateTime<Utc>,
    /// Category of the activity.
    pub kind: ActivityKind,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_deserializes_with_empty_society() {
        let json = r#"{
            "id": 5,
            "action": "Logged into system",
            "society": "",
            "timestamp": "2025-01-24T08:00:00Z",
            "kind": "login"
        }"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.id, ActivityId::new(5));
        assert!(activity.society.is_empty());
        assert_eq!(activity.kind, ActivityKind::Login);
    }
}
