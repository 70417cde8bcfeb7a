//! Nav and guided-tour endpoints. Tour engines are kept per visit.

use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::guard::{CurrentSession, CurrentVisit};
use crate::auth::session::Session;
use crate::errors::AppError;
use crate::navigation::links::{get_nav_links_for_role, ResolvedNavLink};
use crate::navigation::routes::AppRoute;
use crate::navigation::tour::{HighlightStyle, TourEngine, TourState, TourStep};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TourView {
    #[serde(flatten)]
    pub state: TourState,
    pub total_steps: usize,
    pub completed: bool,
    pub step: Option<TourStep>,
    pub highlight: Option<HighlightStyle>,
    /// Page the client should navigate to after this transition.
    pub navigate_to: Option<AppRoute>,
}

impl TourView {
    fn from_engine(engine: &TourEngine, navigate_to: Option<AppRoute>) -> Result<Self, AppError> {
        Ok(Self {
            state: engine.state(),
            total_steps: engine.steps().len(),
            completed: engine.is_completed()?,
            step: engine.current_step().cloned(),
            highlight: engine.highlight(),
            navigate_to,
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum TourAction {
    Show,
    Start,
    Next,
    Prev,
    End,
}

async fn with_tour(
    state: &AppState,
    session: &Session,
    visit: Uuid,
    action: TourAction,
) -> Result<Json<TourView>, AppError> {
    let mut tours = state.tours.write().await;
    // Only issued visits have tour state.
    let engine = tours.engine_mut(&visit).ok_or(AppError::Unauthorized)?;
    engine.set_role(Some(session.role));

    let navigate_to = match action {
        TourAction::Show => None,
        TourAction::Start => engine.start()?,
        TourAction::Next => engine.next()?,
        TourAction::Prev => engine.prev(),
        TourAction::End => {
            engine.end()?;
            None
        }
    };

    Ok(Json(TourView::from_engine(engine, navigate_to)?))
}

/// GET /api/v1/nav
pub async fn handle_get_nav(CurrentSession(session): CurrentSession) -> Json<Vec<ResolvedNavLink>> {
    Json(get_nav_links_for_role(session.role))
}

/// GET /api/v1/tour
pub async fn handle_get_tour(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    CurrentVisit(visit): CurrentVisit,
) -> Result<Json<TourView>, AppError> {
    with_tour(&state, &session, visit, TourAction::Show).await
}

/// POST /api/v1/tour/start
pub async fn handle_tour_start(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    CurrentVisit(visit): CurrentVisit,
) -> Result<Json<TourView>, AppError> {
    with_tour(&state, &session, visit, TourAction::Start).await
}

/// POST /api/v1/tour/next
pub async fn handle_tour_next(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    CurrentVisit(visit): CurrentVisit,
) -> Result<Json<TourView>, AppError> {
    with_tour(&state, &session, visit, TourAction::Next).await
}

/// POST /api/v1/tour/prev
pub async fn handle_tour_prev(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    CurrentVisit(visit): CurrentVisit,
) -> Result<Json<TourView>, AppError> {
    with_tour(&state, &session, visit, TourAction::Prev).await
}

/// POST /api/v1/tour/end
pub async fn handle_tour_end(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    CurrentVisit(visit): CurrentVisit,
) -> Result<Json<TourView>, AppError> {
    with_tour(&state, &session, visit, TourAction::End).await
}
