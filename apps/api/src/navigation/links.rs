//! Static navigation config shared by the sidebar and the guided tour.

use serde::Serialize;

use crate::auth::role::Role;
use crate::navigation::routes::{AppRoute, DashboardSection};

/// Marks a nav entry as a guided-tour stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourAnchor {
    pub step_id: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub section: DashboardSection,
    pub label: &'static str,
    pub icon: &'static str,
    pub roles: &'static [Role],
    pub sub_links: &'static [NavLink],
    pub tour: Option<TourAnchor>,
}

impl NavLink {
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_tour_step(&self) -> bool {
        self.tour.is_some()
    }
}

/// A nav entry with its href resolved for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNavLink {
    pub href: AppRoute,
    pub label: &'static str,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_links: Vec<ResolvedNavLink>,
    pub is_tour_step: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour_step_id: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour_text: Option<&'static str>,
}

const ALL: &[Role] = &[
    Role::Admin,
    Role::Recruiter,
    Role::HiringManager,
    Role::Candidate,
];
const STAFF: &[Role] = &[Role::Admin, Role::Recruiter, Role::HiringManager];
const JOB_EDITORS: &[Role] = &[Role::Admin, Role::Recruiter];

const JOB_SUB_LINKS: &[NavLink] = &[NavLink {
    section: DashboardSection::Postings,
    label: "Posting Studio",
    icon: "sparkles",
    roles: JOB_EDITORS,
    sub_links: &[],
    tour: Some(TourAnchor {
        step_id: "postings",
        text: "Draft a complete job posting from a few requirements with AI assistance.",
    }),
}];

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        section: DashboardSection::Overview,
        label: "Dashboard",
        icon: "layout-dashboard",
        roles: ALL,
        sub_links: &[],
        tour: Some(TourAnchor {
            step_id: "overview",
            text: "Your home base: key numbers and recent activity at a glance.",
        }),
    },
    NavLink {
        section: DashboardSection::Jobs,
        label: "Jobs",
        icon: "briefcase",
        roles: STAFF,
        sub_links: JOB_SUB_LINKS,
        tour: Some(TourAnchor {
            step_id: "jobs",
            text: "Every open and closed requisition lives here.",
        }),
    },
    NavLink {
        section: DashboardSection::Candidates,
        label: "Candidates",
        icon: "users",
        roles: STAFF,
        sub_links: &[],
        tour: Some(TourAnchor {
            step_id: "candidates",
            text: "Track applicants and move them through the hiring pipeline.",
        }),
    },
    NavLink {
        section: DashboardSection::Screening,
        label: "Resume Screening",
        icon: "scan-search",
        roles: &[Role::Recruiter],
        sub_links: &[],
        tour: Some(TourAnchor {
            step_id: "screening",
            text: "Paste a resume and get an AI match score against any job.",
        }),
    },
    NavLink {
        section: DashboardSection::Interviews,
        label: "Interviews",
        icon: "calendar",
        roles: &[Role::Recruiter, Role::HiringManager],
        sub_links: &[],
        tour: None,
    },
    NavLink {
        section: DashboardSection::Users,
        label: "Team",
        icon: "shield",
        roles: &[Role::Admin],
        sub_links: &[],
        tour: Some(TourAnchor {
            step_id: "users",
            text: "Manage who on your team can access the workspace.",
        }),
    },
    NavLink {
        section: DashboardSection::Settings,
        label: "Settings",
        icon: "settings",
        roles: &[Role::Admin],
        sub_links: &[],
        tour: None,
    },
    NavLink {
        section: DashboardSection::Applications,
        label: "My Applications",
        icon: "file-text",
        roles: &[Role::Candidate],
        sub_links: &[],
        tour: Some(TourAnchor {
            step_id: "applications",
            text: "Follow the status of every job you applied to.",
        }),
    },
    NavLink {
        section: DashboardSection::Practice,
        label: "Interview Practice",
        icon: "message-circle",
        roles: &[Role::Candidate],
        sub_links: &[],
        tour: Some(TourAnchor {
            step_id: "practice",
            text: "Rehearse with an AI interviewer tailored to the role you want.",
        }),
    },
    NavLink {
        section: DashboardSection::Profile,
        label: "Profile",
        icon: "user",
        roles: &[Role::Candidate],
        sub_links: &[],
        tour: Some(TourAnchor {
            step_id: "profile",
            text: "Let AI polish your headline and suggest skills to add.",
        }),
    },
];

fn resolve(link: &NavLink, role: Role) -> ResolvedNavLink {
    ResolvedNavLink {
        href: AppRoute::Dashboard {
            role,
            section: link.section,
        },
        label: link.label,
        icon: link.icon,
        sub_links: link
            .sub_links
            .iter()
            .filter(|sub| sub.allows(role))
            .map(|sub| resolve(sub, role))
            .collect(),
        is_tour_step: link.is_tour_step(),
        tour_step_id: link.tour.map(|t| t.step_id),
        tour_text: link.tour.map(|t| t.text),
    }
}

/// Sidebar entries visible to `role`, sub-links filtered the same way.
pub fn get_nav_links_for_role(role: Role) -> Vec<ResolvedNavLink> {
    NAV_LINKS
        .iter()
        .filter(|link| link.allows(role))
        .map(|link| resolve(link, role))
        .collect()
}

/// Whether `role` has a nav entry (top-level or nested) for `section`.
pub fn role_has_section(role: Role, section: DashboardSection) -> bool {
    NAV_LINKS
        .iter()
        .flat_map(|link| std::iter::once(link).chain(link.sub_links.iter()))
        .any(|link| link.section == section && link.allows(role))
}

/// Tour-flagged entries for `role` in list order, each parent before its
/// sub-links.
pub fn tour_links_for_role(role: Role) -> Vec<ResolvedNavLink> {
    NAV_LINKS
        .iter()
        .filter(|link| link.allows(role))
        .flat_map(|link| {
            std::iter::once(link).chain(link.sub_links.iter().filter(move |s| s.allows(role)))
        })
        .filter(|link| link.is_tour_step())
        .map(|link| {
            let mut resolved = resolve(link, role);
            resolved.sub_links.clear();
            resolved
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn find(section: DashboardSection) -> &'static NavLink {
        NAV_LINKS
            .iter()
            .flat_map(|l| std::iter::once(l).chain(l.sub_links.iter()))
            .find(|l| l.section == section)
            .unwrap()
    }

    #[test]
    fn test_nav_links_only_include_role_members() {
        for role in Role::iter() {
            for link in get_nav_links_for_role(role) {
                let AppRoute::Dashboard { role: href_role, section } = link.href else {
                    panic!("nav href must be a dashboard route");
                };
                assert_eq!(href_role, role);
                assert!(find(section).allows(role), "{section} leaked to {role}");
                for sub in &link.sub_links {
                    let AppRoute::Dashboard { section, .. } = sub.href else {
                        panic!("sub-link href must be a dashboard route");
                    };
                    assert!(find(section).allows(role));
                }
            }
        }
    }

    #[test]
    fn test_every_role_has_an_overview() {
        for role in Role::iter() {
            assert!(role_has_section(role, DashboardSection::Overview));
        }
    }

    #[test]
    fn test_hiring_manager_does_not_see_posting_studio() {
        let links = get_nav_links_for_role(Role::HiringManager);
        let jobs = links.iter().find(|l| l.label == "Jobs").unwrap();
        assert!(jobs.sub_links.is_empty());
        assert!(!role_has_section(Role::HiringManager, DashboardSection::Postings));
        assert!(role_has_section(Role::Recruiter, DashboardSection::Postings));
    }

    #[test]
    fn test_tour_links_follow_list_order_with_sub_links_after_parent() {
        let ids: Vec<_> = tour_links_for_role(Role::Recruiter)
            .into_iter()
            .filter_map(|l| l.tour_step_id)
            .collect();
        assert_eq!(ids, vec!["overview", "jobs", "postings", "candidates", "screening"]);
    }

    #[test]
    fn test_tour_step_ids_are_unique() {
        let mut seen = HashSet::new();
        for link in NAV_LINKS
            .iter()
            .flat_map(|l| std::iter::once(l).chain(l.sub_links.iter()))
        {
            if let Some(tour) = link.tour {
                assert!(seen.insert(tour.step_id), "duplicate step id {}", tour.step_id);
            }
        }
    }

    #[test]
    fn test_untoured_links_are_excluded_from_tour() {
        let tour = tour_links_for_role(Role::Admin);
        assert!(tour.iter().all(|l| l.is_tour_step));
        assert!(!tour.iter().any(|l| l.label == "Settings"));
    }
}
