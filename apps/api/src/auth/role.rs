//! Roles and the fixed demo user behind each one.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::auth::session::Session;

/// A signed-in user's role. The kebab-case slug doubles as the
/// `/dashboard/{role}` URL segment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Role {
    Admin,
    Recruiter,
    HiringManager,
    Candidate,
}

impl Role {
    /// Human-readable label for the login picker.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Recruiter => "Recruiter",
            Role::HiringManager => "Hiring Manager",
            Role::Candidate => "Candidate",
        }
    }

    /// Roles allowed to create and edit job postings.
    pub fn can_manage_jobs(&self) -> bool {
        matches!(self, Role::Admin | Role::Recruiter)
    }

    /// Roles allowed to move candidates through the pipeline.
    pub fn can_manage_candidates(&self) -> bool {
        matches!(self, Role::Admin | Role::Recruiter | Role::HiringManager)
    }

    /// The fixed demo account signed in when this role is picked.
    pub fn demo_user(&self) -> Session {
        let (id, name, email) = match self {
            Role::Admin => (0x01, "Avery Chen", "avery.chen@talentdesk.dev"),
            Role::Recruiter => (0x02, "Riley Morgan", "riley.morgan@talentdesk.dev"),
            Role::HiringManager => (0x03, "Jordan Patel", "jordan.patel@talentdesk.dev"),
            Role::Candidate => (0x04, "Sam Okafor", "sam.okafor@example.com"),
        };

        Session {
            id: Uuid::from_u128(0x7a1e_0000_0000_4000_8000_0000_0000_0000 | id),
            name: name.to_string(),
            email: email.to_string(),
            role: *self,
            avatar: format!("https://i.pravatar.cc/150?u={email}"),
        }
    }
}
