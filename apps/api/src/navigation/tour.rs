//! Guided tour: a linear walk through the current role's tour-flagged nav
//! entries.
//!
//! Inactive → start → Active(0) → next … → Active(n-1) → next → Inactive.
//! Finishing or ending the tour sets a per-role completion flag that keeps it
//! from starting again. Highlighting is derived from state, never applied by
//! mutating the page.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::role::Role;
use crate::auth::storage::{KeyValueStore, StorageError};
use crate::navigation::links::{tour_links_for_role, ResolvedNavLink};
use crate::navigation::routes::AppRoute;

/// Local-storage key of a role's completion flag.
pub fn tour_completed_key(role: Role) -> String {
    format!("talentdesk_tour_completed_{role}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourStep {
    #[serde(flatten)]
    pub link: ResolvedNavLink,
    /// Anchor id of the element to highlight.
    pub target_id: String,
}

impl TourStep {
    fn from_link(link: ResolvedNavLink) -> Option<Self> {
        let target_id = link.tour_step_id?.to_string();
        Some(Self { link, target_id })
    }

    pub fn route(&self) -> &AppRoute {
        &self.link.href
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TourState {
    Inactive,
    Active { step_index: usize },
}

/// Inline style applied to the highlighted anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightStyle {
    pub target_id: String,
    pub outline: &'static str,
    pub outline_offset: &'static str,
    /// Full-page dimming drawn around the target.
    pub box_shadow: &'static str,
    pub position: &'static str,
    pub z_index: u32,
    pub scroll_into_view: bool,
}

impl HighlightStyle {
    fn for_target(target_id: &str) -> Self {
        Self {
            target_id: target_id.to_string(),
            outline: "2px solid #6366f1",
            outline_offset: "4px",
            box_shadow: "0 0 0 9999px rgba(15, 23, 42, 0.55)",
            position: "relative",
            z_index: 1000,
            scroll_into_view: true,
        }
    }
}

pub struct TourEngine {
    storage: Arc<dyn KeyValueStore>,
    role: Option<Role>,
    steps: Vec<TourStep>,
    state: TourState,
}

impl TourEngine {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            role: None,
            steps: Vec::new(),
            state: TourState::Inactive,
        }
    }

    pub fn for_role(storage: Arc<dyn KeyValueStore>, role: Role) -> Self {
        let mut engine = Self::new(storage);
        engine.set_role(Some(role));
        engine
    }

    /// Recomputes the step list. A tour in progress for another role is
    /// abandoned without marking it completed.
    pub fn set_role(&mut self, role: Option<Role>) {
        if self.role == role {
            return;
        }
        if self.is_active() {
            debug!("Role changed mid-tour; abandoning tour for {:?}", self.role);
        }
        self.role = role;
        self.steps = role
            .map(|r| {
                tour_links_for_role(r)
                    .into_iter()
                    .filter_map(TourStep::from_link)
                    .collect()
            })
            .unwrap_or_default();
        self.state = TourState::Inactive;
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn steps(&self) -> &[TourStep] {
        &self.steps
    }

    pub fn state(&self) -> TourState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TourState::Active { .. })
    }

    pub fn current_step(&self) -> Option<&TourStep> {
        match self.state {
            TourState::Active { step_index } => self.steps.get(step_index),
            TourState::Inactive => None,
        }
    }

    pub fn is_completed(&self) -> Result<bool, StorageError> {
        match self.role {
            Some(role) => Ok(self
                .storage
                .get(&tour_completed_key(role))?
                .is_some_and(|v| v == "true")),
            None => Ok(false),
        }
    }

    /// Starts from step 0 when the role has steps and has not finished the
    /// tour before. Returns the page to navigate to, or `None` for a no-op.
    pub fn start(&mut self) -> Result<Option<AppRoute>, StorageError> {
        if self.steps.is_empty() || self.is_completed()? {
            return Ok(None);
        }
        Ok(self.go_to(0))
    }

    /// Advances one step; from the last step, finishes the tour.
    pub fn next(&mut self) -> Result<Option<AppRoute>, StorageError> {
        let TourState::Active { step_index } = self.state else {
            return Ok(None);
        };

        if step_index + 1 >= self.steps.len() {
            self.finish()?;
            return Ok(None);
        }
        Ok(self.go_to(step_index + 1))
    }

    /// Steps back one; a no-op on the first step.
    pub fn prev(&mut self) -> Option<AppRoute> {
        match self.state {
            TourState::Active { step_index } if step_index > 0 => self.go_to(step_index - 1),
            _ => None,
        }
    }

    /// Stops the tour wherever it is and marks it completed.
    pub fn end(&mut self) -> Result<(), StorageError> {
        self.finish()
    }

    /// Style for an anchor given the current step. Only the current target is
    /// ever highlighted, so the previous target reverts on every transition.
    pub fn style_for(&self, anchor_id: &str) -> Option<HighlightStyle> {
        self.current_step()
            .filter(|step| step.target_id == anchor_id)
            .map(|step| HighlightStyle::for_target(&step.target_id))
    }

    pub fn highlight(&self) -> Option<HighlightStyle> {
        self.current_step()
            .map(|step| HighlightStyle::for_target(&step.target_id))
    }

    /// Highlight for the current step if its anchor is on the page. A missing
    /// anchor yields no highlight but leaves the step current.
    pub fn resolve_highlight<'a, I>(&self, present_anchors: I) -> Option<HighlightStyle>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let step = self.current_step()?;
        if present_anchors.into_iter().any(|id| id == step.target_id) {
            Some(HighlightStyle::for_target(&step.target_id))
        } else {
            warn!("Tour anchor '{}' not found on page", step.target_id);
            None
        }
    }

    fn go_to(&mut self, step_index: usize) -> Option<AppRoute> {
        let route = self.steps.get(step_index)?.route().clone();
        self.state = TourState::Active { step_index };
        Some(route)
    }

    fn finish(&mut self) -> Result<(), StorageError> {
        self.state = TourState::Inactive;
        if let Some(role) = self.role {
            self.storage.set(&tour_completed_key(role), "true")?;
            debug!("Tour completed for {role}");
        }
        Ok(())
    }
}
