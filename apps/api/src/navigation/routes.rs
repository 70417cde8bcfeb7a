//! Routing table: every page the app can navigate to, keyed by enums
//! instead of interpolated path strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::auth::role::Role;

pub const LOGIN_PATH: &str = "/login";
pub const JOBS_PATH: &str = "/jobs";
pub const DASHBOARD_PREFIX: &str = "/dashboard";

/// A page within a role's dashboard.
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
pub enum DashboardSection {
    Overview,
    Jobs,
    Postings,
    Candidates,
    Screening,
    Interviews,
    Users,
    Settings,
    Applications,
    Practice,
    Profile,
}

/// A navigable page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Jobs,
    Job(String),
    Dashboard {
        role: Role,
        section: DashboardSection,
    },
}

impl AppRoute {
    /// Landing page for a role after sign-in.
    pub fn dashboard(role: Role) -> Self {
        AppRoute::Dashboard {
            role,
            section: DashboardSection::Overview,
        }
    }

    pub fn path(&self) -> String {
        self.to_string()
    }

    /// Parses a request path (query string ignored, trailing slash tolerated).
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["login"] => Some(AppRoute::Login),
            ["jobs"] => Some(AppRoute::Jobs),
            ["jobs", id] => Some(AppRoute::Job((*id).to_string())),
            ["dashboard", role, section] => Some(AppRoute::Dashboard {
                role: Role::from_str(role).ok()?,
                section: DashboardSection::from_str(section).ok()?,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppRoute::Login => f.write_str(LOGIN_PATH),
            AppRoute::Jobs => f.write_str(JOBS_PATH),
            AppRoute::Job(id) => write!(f, "{JOBS_PATH}/{id}"),
            AppRoute::Dashboard { role, section } => {
                write!(f, "{DASHBOARD_PREFIX}/{role}/{section}")
            }
        }
    }
}

impl Serialize for AppRoute {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Whether a path sits behind sign-in.
pub fn is_protected_path(path: &str) -> bool {
    path == DASHBOARD_PREFIX || path.starts_with("/dashboard/")
}

pub fn is_login_path(path: &str) -> bool {
    path.trim_end_matches('/') == LOGIN_PATH
}

/// The raw `{role}` segment of a `/dashboard/{role}/...` path.
pub fn role_segment(path: &str) -> Option<&str> {
    path.strip_prefix("/dashboard/")?
        .split(['/', '?'])
        .next()
        .filter(|s| !s.is_empty())
}
