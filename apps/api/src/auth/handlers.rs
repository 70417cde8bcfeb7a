use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::guard::{CurrentSession, CurrentVisit};
use crate::auth::role::Role;
use crate::auth::service::{sign_in, sign_out};
use crate::auth::session::{
    read_cookie, session_clear_cookie, session_set_cookie, visit_set_cookie, Session, VISIT_KEY,
};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub role: Role,
}

fn with_cookie(mut response: Response, cookie: &str) -> Result<Response, AppError> {
    let value = HeaderValue::from_str(cookie)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid Set-Cookie value: {e}")))?;
    response.headers_mut().append(header::SET_COOKIE, value);
    Ok(response)
}

/// POST /login
///
/// Signs in as the demo user for the chosen role and redirects to that role's
/// dashboard. The browser keeps its visit id when it already has an issued
/// one, otherwise it gets a new one.
pub async fn handle_login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let (session, route) = sign_in(form.role);
    let cookie_value = session
        .to_cookie_value()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode session: {e}")))?;

    let known_visit = read_cookie(&headers, VISIT_KEY).and_then(|raw| Uuid::parse_str(raw).ok());
    let visit = state.tours.write().await.begin(known_visit)?;

    let secure = state.config.secure_cookies;
    let response = with_cookie(
        Redirect::to(&route.path()).into_response(),
        &session_set_cookie(&cookie_value, secure),
    )?;
    with_cookie(response, &visit_set_cookie(visit, secure))
}

/// POST /logout
pub async fn handle_logout(
    State(state): State<AppState>,
    session: Option<CurrentSession>,
    visit: Option<CurrentVisit>,
) -> Result<Response, AppError> {
    let route = sign_out(session.as_ref().map(|CurrentSession(session)| session));
    if let Some(CurrentVisit(id)) = visit {
        state.tours.write().await.reset(&id);
    }

    with_cookie(
        Redirect::to(&route.path()).into_response(),
        &session_clear_cookie(),
    )
}

/// GET /api/v1/session
pub async fn handle_get_session(CurrentSession(session): CurrentSession) -> Json<Session> {
    Json(session)
}
