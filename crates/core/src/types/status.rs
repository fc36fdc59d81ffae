//! Status enums for roster entities.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an admin record.
///
/// New records created from a blank form start as `Pending` until they are
/// approved onto the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdminStatus {
    /// The admin can sign in and manage assigned societies.
    Active,
    /// The admin is disabled and cannot sign in.
    Inactive,
    /// The admin is awaiting approval.
    #[default]
    Pending,
}

impl std::fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

impl std::str::FromStr for AdminStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            _ => Err(format!("invalid admin status: {s}")),
        }
    }
}

/// Category of a historical activity entry attached to an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// An approval granted by the admin (registrations, requests).
    Approval,
    /// An edit the admin made to society data.
    Edit,
    /// A sign-in event.
    Login,
    /// A resolved resident ticket.
    Ticket,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approval => write!(f, "approval"),
            Self::Edit => write!(f, "edit"),
            Self::Login => write!(f, "login"),
            Self::Ticket => write!(f, "ticket"),
        }
    }
}

impl std::str::FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approval" => Ok(Self::Approval),
            "edit" => Ok(Self::Edit),
            "login" => Ok(Self::Login),
            "ticket" => Ok(Self::Ticket),
            _ => Err(format!("invalid activity kind: {s}")),
        }
    }
}
