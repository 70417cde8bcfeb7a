//! Route guards.
//!
//! The edge guard runs as middleware in front of every page and only looks at
//! the session cookie. The client check compares the `/dashboard/{role}`
//! segment against the signed-in role, covering navigations the edge layer
//! never sees.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;
use uuid::Uuid;

use crate::auth::session::{read_cookie, session_clear_cookie, Session, SESSION_KEY, VISIT_KEY};
use crate::errors::AppError;
use crate::navigation::routes::{is_login_path, is_protected_path, role_segment, AppRoute};

/// What the edge guard decided for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDecision {
    pub redirect: Option<AppRoute>,
    /// The cookie was present but unreadable and must be expired.
    pub clear_cookie: bool,
}

/// Decides whether a request may proceed, given its path and raw session cookie.
pub fn evaluate_edge(path: &str, cookie: Option<&str>) -> EdgeDecision {
    let session = cookie.and_then(Session::from_cookie_value);
    let clear_cookie = cookie.is_some() && session.is_none();

    let redirect = match session {
        None if is_protected_path(path) => Some(AppRoute::Login),
        Some(session) if is_login_path(path) => Some(AppRoute::dashboard(session.role)),
        _ => None,
    };

    EdgeDecision {
        redirect,
        clear_cookie,
    }
}

/// Client-side check: a dashboard path for another role sends the user to
/// their own dashboard.
pub fn client_redirect(path: &str, session: &Session) -> Option<AppRoute> {
    let segment = role_segment(path)?;
    let own: &str = session.role.as_ref();
    if segment == own {
        None
    } else {
        Some(AppRoute::dashboard(session.role))
    }
}

/// Axum middleware applying `evaluate_edge` to page requests.
pub async fn edge_guard(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let decision = evaluate_edge(&path, read_cookie(request.headers(), SESSION_KEY));

    let mut response = match &decision.redirect {
        Some(target) => {
            debug!("Edge guard redirecting {path} -> {target}");
            Redirect::to(&target.path()).into_response()
        }
        None => next.run(request).await,
    };

    if decision.clear_cookie {
        if let Ok(value) = HeaderValue::from_str(&session_clear_cookie()) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

/// Extractor for handlers that need the signed-in session.
/// Rejects with 401 when the cookie is missing or unreadable.
pub struct CurrentSession(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        read_cookie(&parts.headers, SESSION_KEY)
            .and_then(Session::from_cookie_value)
            .map(CurrentSession)
            .ok_or(AppError::Unauthorized)
    }
}

/// Extractor for the browser's visit id. Rejects with 401 when the cookie is
/// missing or not a UUID; whether the id was ever issued is for the caller.
pub struct CurrentVisit(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentVisit
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        read_cookie(&parts.headers, VISIT_KEY)
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .map(CurrentVisit)
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::role::Role;

    fn cookie_for(role: Role) -> String {
        role.demo_user().to_cookie_value().unwrap()
    }

    #[test]
    fn test_protected_path_without_cookie_redirects_to_login() {
        let decision = evaluate_edge("/dashboard/admin/overview", None);
        assert_eq!(decision.redirect, Some(AppRoute::Login));
        assert!(!decision.clear_cookie);
    }

    #[test]
    fn test_protected_path_with_cookie_passes() {
        let cookie = cookie_for(Role::Admin);
        let decision = evaluate_edge("/dashboard/admin/users", Some(&cookie));
        assert_eq!(decision.redirect, None);
    }

    #[test]
    fn test_login_with_cookie_redirects_to_dashboard() {
        let cookie = cookie_for(Role::Candidate);
        let decision = evaluate_edge("/login", Some(&cookie));
        assert_eq!(decision.redirect, Some(AppRoute::dashboard(Role::Candidate)));
    }

    #[test]
    fn test_malformed_cookie_is_treated_as_absent_and_cleared() {
        let decision = evaluate_edge("/dashboard/admin/overview", Some("%7B%22id%22"));
        assert_eq!(decision.redirect, Some(AppRoute::Login));
        assert!(decision.clear_cookie);

        let on_login = evaluate_edge("/login", Some("garbage"));
        assert_eq!(on_login.redirect, None);
        assert!(on_login.clear_cookie);
    }

    #[test]
    fn test_cookie_for_unknown_user_is_cleared() {
        let mut forged = Role::Admin.demo_user();
        forged.email = "intruder@example.com".to_string();
        let cookie = forged.to_cookie_value().unwrap();

        let decision = evaluate_edge("/dashboard/admin/overview", Some(&cookie));
        assert_eq!(decision.redirect, Some(AppRoute::Login));
        assert!(decision.clear_cookie);
    }

    #[test]
    fn test_public_paths_always_pass() {
        assert_eq!(evaluate_edge("/jobs", None).redirect, None);
        assert_eq!(evaluate_edge("/jobs/job-101", None).redirect, None);
    }

    #[test]
    fn test_client_redirect_on_role_mismatch() {
        let session = Role::Recruiter.demo_user();
        assert_eq!(
            client_redirect("/dashboard/admin/users", &session),
            Some(AppRoute::dashboard(Role::Recruiter))
        );
        assert_eq!(
            client_redirect("/dashboard/nobody/overview", &session),
            Some(AppRoute::dashboard(Role::Recruiter))
        );
    }

    #[test]
    fn test_client_redirect_ignores_matching_and_public_paths() {
        let session = Role::HiringManager.demo_user();
        assert_eq!(client_redirect("/dashboard/hiring-manager/jobs", &session), None);
        assert_eq!(client_redirect("/jobs", &session), None);
    }
}
