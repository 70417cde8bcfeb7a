//! Page and CRUD handlers for the dashboards and the public job board.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::IntoEnumIterator;

use crate::auth::guard::{client_redirect, CurrentSession};
use crate::auth::role::Role;
use crate::auth::session::Session;
use crate::dashboard::board::NewJob;
use crate::dashboard::mock::{Candidate, Job, JobStatus, PipelineStage};
use crate::errors::AppError;
use crate::navigation::links::{get_nav_links_for_role, role_has_section, ResolvedNavLink};
use crate::navigation::routes::{AppRoute, DashboardSection};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Page models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RoleOption {
    pub role: Role,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginPage {
    pub roles: Vec<RoleOption>,
}

#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub user: Session,
    pub section: DashboardSection,
    pub nav: Vec<ResolvedNavLink>,
    pub data: Value,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: JobStatus,
}

#[derive(Debug, Deserialize)]
pub struct StageUpdate {
    pub stage: PipelineStage,
}

// ────────────────────────────────────────────────────────────────────────────
// Pages
// ────────────────────────────────────────────────────────────────────────────

/// GET /login
pub async fn handle_login_page() -> Json<LoginPage> {
    Json(LoginPage {
        roles: Role::iter()
            .map(|role| RoleOption {
                role,
                label: role.label(),
            })
            .collect(),
    })
}

/// GET /jobs
pub async fn handle_public_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.board.open_jobs().await)
}

/// GET /jobs/:id
pub async fn handle_public_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    state
        .board
        .open_job(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// GET /dashboard/:role/:section
///
/// Sends the user to their own dashboard when the role segment is not theirs,
/// and 404s sections their role has no nav entry for.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path((role, section)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let path = format!("/dashboard/{role}/{section}");
    if let Some(target) = client_redirect(&path, &session) {
        return Ok(Redirect::to(&target.path()).into_response());
    }

    let section = DashboardSection::from_str(&section)
        .ok()
        .filter(|s| role_has_section(session.role, *s))
        .ok_or_else(|| AppError::NotFound(format!("No {section} page for {}", session.role)))?;

    let data = state.board.section_data(&session, section).await;
    let nav = get_nav_links_for_role(session.role);

    Ok(Json(DashboardPage {
        user: session,
        section,
        nav,
        data,
    })
    .into_response())
}

/// GET /dashboard: the signed-in user's landing page.
pub async fn handle_dashboard_root(CurrentSession(session): CurrentSession) -> Redirect {
    Redirect::to(&AppRoute::dashboard(session.role).path())
}

// ────────────────────────────────────────────────────────────────────────────
// CRUD
// ────────────────────────────────────────────────────────────────────────────

fn require_job_editor(session: &Session) -> Result<(), AppError> {
    if session.role.can_manage_jobs() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(new_job): Json<NewJob>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    require_job_editor(&session)?;
    let job = state.board.create_job(new_job, &session.name).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PATCH /api/v1/jobs/:id/status
pub async fn handle_update_job_status(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<Job>, AppError> {
    require_job_editor(&session)?;
    Ok(Json(state.board.set_job_status(&id, update.status).await?))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    require_job_editor(&session)?;
    state.board.delete_job(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/candidates/:id/stage
pub async fn handle_move_candidate(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<String>,
    Json(update): Json<StageUpdate>,
) -> Result<Json<Candidate>, AppError> {
    if !session.role.can_manage_candidates() {
        return Err(AppError::Forbidden);
    }
    Ok(Json(state.board.move_candidate(&id, update.stage).await?))
}
