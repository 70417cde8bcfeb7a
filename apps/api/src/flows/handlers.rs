//! Axum route handlers wiring dashboard forms to the prompt flows.

use axum::{extract::State, Json};

use crate::auth::guard::CurrentSession;
use crate::errors::AppError;
use crate::flows::enrichment::{EnrichmentInput, ProfileEnrichment, ProfileEnrichmentFlow};
use crate::flows::interview::{InterviewInput, InterviewReply, InterviewSimulation};
use crate::flows::job_posting::{JobPosting, JobPostingGeneration, JobPostingInput};
use crate::flows::screening::{ResumeScreening, ScreeningInput, ScreeningResult};
use crate::flows::{run_flow, FlowOutcome};
use crate::state::AppState;

/// POST /api/v1/flows/screen-resume
pub async fn handle_screen_resume(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(input): Json<ScreeningInput>,
) -> Result<Json<FlowOutcome<ScreeningResult>>, AppError> {
    if !session.role.can_manage_candidates() {
        return Err(AppError::Forbidden);
    }
    Ok(Json(run_flow::<ResumeScreening>(state.llm.as_ref(), &input).await?))
}

/// POST /api/v1/flows/simulate-interview
pub async fn handle_simulate_interview(
    State(state): State<AppState>,
    CurrentSession(_session): CurrentSession,
    Json(input): Json<InterviewInput>,
) -> Result<Json<FlowOutcome<InterviewReply>>, AppError> {
    Ok(Json(run_flow::<InterviewSimulation>(state.llm.as_ref(), &input).await?))
}

/// POST /api/v1/flows/generate-job-posting
pub async fn handle_generate_job_posting(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(input): Json<JobPostingInput>,
) -> Result<Json<FlowOutcome<JobPosting>>, AppError> {
    if !session.role.can_manage_jobs() {
        return Err(AppError::Forbidden);
    }
    Ok(Json(run_flow::<JobPostingGeneration>(state.llm.as_ref(), &input).await?))
}

/// POST /api/v1/flows/enrich-profile
pub async fn handle_enrich_profile(
    State(state): State<AppState>,
    CurrentSession(_session): CurrentSession,
    Json(input): Json<EnrichmentInput>,
) -> Result<Json<FlowOutcome<ProfileEnrichment>>, AppError> {
    Ok(Json(run_flow::<ProfileEnrichmentFlow>(state.llm.as_ref(), &input).await?))
}
