pub mod health;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::auth::guard::edge_guard;
use crate::auth::handlers as auth;
use crate::dashboard::handlers as dashboard;
use crate::flows::handlers as flows;
use crate::navigation::handlers as navigation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Pages sit behind the edge guard; the API answers 401 instead of redirecting.
    let pages = Router::new()
        .route(
            "/login",
            get(dashboard::handle_login_page).post(auth::handle_login),
        )
        .route("/logout", post(auth::handle_logout))
        .route("/jobs", get(dashboard::handle_public_jobs))
        .route("/jobs/:id", get(dashboard::handle_public_job))
        .route("/dashboard", get(dashboard::handle_dashboard_root))
        .route(
            "/dashboard/:role/:section",
            get(dashboard::handle_dashboard),
        )
        .layer(middleware::from_fn(edge_guard));

    let api = Router::new()
        .route("/api/v1/session", get(auth::handle_get_session))
        .route("/api/v1/nav", get(navigation::handle_get_nav))
        // Guided tour
        .route("/api/v1/tour", get(navigation::handle_get_tour))
        .route("/api/v1/tour/start", post(navigation::handle_tour_start))
        .route("/api/v1/tour/next", post(navigation::handle_tour_next))
        .route("/api/v1/tour/prev", post(navigation::handle_tour_prev))
        .route("/api/v1/tour/end", post(navigation::handle_tour_end))
        // Prompt flows
        .route(
            "/api/v1/flows/screen-resume",
            post(flows::handle_screen_resume),
        )
        .route(
            "/api/v1/flows/simulate-interview",
            post(flows::handle_simulate_interview),
        )
        .route(
            "/api/v1/flows/generate-job-posting",
            post(flows::handle_generate_job_posting),
        )
        .route(
            "/api/v1/flows/enrich-profile",
            post(flows::handle_enrich_profile),
        )
        // Dashboard edits
        .route("/api/v1/jobs", post(dashboard::handle_create_job))
        .route(
            "/api/v1/jobs/:id",
            axum::routing::delete(dashboard::handle_delete_job),
        )
        .route(
            "/api/v1/jobs/:id/status",
            patch(dashboard::handle_update_job_status),
        )
        .route(
            "/api/v1/candidates/:id/stage",
            patch(dashboard::handle_move_candidate),
        );

    Router::new()
        .route("/health", get(health::health_handler))
        .merge(pages)
        .merge(api)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::role::Role;
    use crate::auth::session::{SESSION_KEY, VISIT_KEY};
    use crate::auth::storage::MemoryStorage;
    use crate::config::Config;
    use crate::llm_client::testing::ScriptedModel;

    fn state_with(model: Arc<ScriptedModel>) -> AppState {
        let config = Config {
            anthropic_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            storage_path: None,
            secure_cookies: false,
        };
        AppState::new(model, config, Arc::new(MemoryStorage::new()))
    }

    fn app_with(model: Arc<ScriptedModel>) -> Router {
        build_router(state_with(model))
    }

    fn app() -> Router {
        app_with(Arc::new(ScriptedModel::silent()))
    }

    fn cookie(role: Role) -> String {
        format!(
            "{SESSION_KEY}={}",
            role.demo_user().to_cookie_value().unwrap()
        )
    }

    fn get_as(uri: &str, role: Option<Role>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(role) = role {
            builder = builder.header(header::COOKIE, cookie(role));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, role: Role, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::COOKIE, cookie(role))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_with_cookies(uri: &str, cookies: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::COOKIE, cookies)
            .body(Body::empty())
            .unwrap()
    }

    /// Signs in through `POST /login` and returns the cookies a browser would
    /// send back afterwards.
    async fn sign_in(app: &Router, role: Role) -> String {
        let request = Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("role={role}")))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|value| value.split(';').next())
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app().oneshot(get_as("/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_without_cookie_redirects_to_login() {
        let response = app()
            .oneshot(get_as("/dashboard/admin/overview", None))
            .await
            .unwrap();
        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    async fn test_malformed_cookie_redirects_and_is_cleared() {
        let request = Request::builder()
            .uri("/dashboard/admin/overview")
            .header(header::COOKIE, format!("{SESSION_KEY}=%7Bbroken"))
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(location(&response), "/login");
        let set_cookie = response.headers().get(header::SET_COOKIE).unwrap();
        assert!(set_cookie.to_str().unwrap().contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_login_page_with_session_redirects_to_dashboard() {
        let response = app()
            .oneshot(get_as("/login", Some(Role::Recruiter)))
            .await
            .unwrap();
        assert_eq!(location(&response), "/dashboard/recruiter/overview");
    }

    #[tokio::test]
    async fn test_login_sets_cookie_and_redirects() {
        let request = Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("role=hiring-manager"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(location(&response), "/dashboard/hiring-manager/overview");
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(set_cookie.starts_with(&format!("{SESSION_KEY}=")));
        assert!(response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .any(|value| value.to_str().unwrap().starts_with(&format!("{VISIT_KEY}="))));
    }

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let request = Request::builder()
            .method("POST")
            .uri("/logout")
            .header(header::COOKIE, cookie(Role::Admin))
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(location(&response), "/login");
        let set_cookie = response.headers().get(header::SET_COOKIE).unwrap();
        assert!(set_cookie.to_str().unwrap().contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_role_mismatch_redirects_to_own_dashboard() {
        let response = app()
            .oneshot(get_as("/dashboard/admin/users", Some(Role::Candidate)))
            .await
            .unwrap();
        assert_eq!(location(&response), "/dashboard/candidate/overview");
    }

    #[tokio::test]
    async fn test_dashboard_page_renders_nav_and_data() {
        let response = app()
            .oneshot(get_as("/dashboard/recruiter/candidates", Some(Role::Recruiter)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["section"], "candidates");
        assert_eq!(body["user"]["role"], "recruiter");
        assert!(body["data"]["candidates"].as_array().unwrap().len() >= 1);
        assert!(body["nav"]
            .as_array()
            .unwrap()
            .iter()
            .all(|link| link["href"].as_str().unwrap().starts_with("/dashboard/recruiter/")));
    }

    #[tokio::test]
    async fn test_section_outside_role_is_not_found() {
        let response = app()
            .oneshot(get_as("/dashboard/candidate/users", Some(Role::Candidate)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_public_jobs_need_no_session() {
        let response = app().oneshot(get_as("/jobs/job-101", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["title"], "Senior Backend Engineer");
    }

    #[tokio::test]
    async fn test_api_without_session_is_unauthorized() {
        let response = app().oneshot(get_as("/api/v1/nav", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_flow_input_is_rejected_without_model_call() {
        let model = Arc::new(ScriptedModel::replying("{}"));
        let response = app_with(model.clone())
            .oneshot(post_json(
                "/api/v1/flows/screen-resume",
                Role::Recruiter,
                json!({"job_title": "", "job_description": "x", "resume_text": "y"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_flow_fallback_is_flagged() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/flows/enrich-profile",
                Role::Candidate,
                json!({"name": "Sam Okafor", "bio": "Frontend developer.", "skills": ["React"]}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["fallback"], true);
        assert_eq!(body["result"]["seniority"], "mid");
    }

    #[tokio::test]
    async fn test_candidate_cannot_generate_postings() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/flows/generate-job-posting",
                Role::Candidate,
                json!({
                    "title": "x", "department": "y", "location": "z",
                    "employment_type": "full-time", "key_requirements": ["a"]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_tour_walkthrough_over_http() {
        let app = app();
        let cookies = sign_in(&app, Role::HiringManager).await;

        let start = app
            .clone()
            .oneshot(post_with_cookies("/api/v1/tour/start", &cookies))
            .await
            .unwrap();
        let body = json_body(start).await;
        assert_eq!(body["state"], "active");
        assert_eq!(body["step_index"], 0);
        assert_eq!(body["navigate_to"], "/dashboard/hiring-manager/overview");
        assert_eq!(body["highlight"]["target_id"], "overview");

        let end = app
            .clone()
            .oneshot(post_with_cookies("/api/v1/tour/end", &cookies))
            .await
            .unwrap();
        let body = json_body(end).await;
        assert_eq!(body["state"], "inactive");
        assert_eq!(body["completed"], true);

        let restart = app
            .oneshot(post_with_cookies("/api/v1/tour/start", &cookies))
            .await
            .unwrap();
        let body = json_body(restart).await;
        assert_eq!(body["state"], "inactive");
        assert!(body["navigate_to"].is_null());
    }

    #[tokio::test]
    async fn test_browsers_with_same_role_keep_separate_tours() {
        let app = app();
        let first = sign_in(&app, Role::Recruiter).await;
        let second = sign_in(&app, Role::Recruiter).await;

        let ended = app
            .clone()
            .oneshot(post_with_cookies("/api/v1/tour/end", &first))
            .await
            .unwrap();
        assert_eq!(json_body(ended).await["completed"], true);

        let started = app
            .clone()
            .oneshot(post_with_cookies("/api/v1/tour/start", &second))
            .await
            .unwrap();
        let body = json_body(started).await;
        assert_eq!(body["state"], "active");
        assert_eq!(body["completed"], false);

        // A third sign-in as the same role leaves the second browser's tour alone
        sign_in(&app, Role::Recruiter).await;
        let shown = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/tour")
                    .header(header::COOKIE, second.as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(shown).await;
        assert_eq!(body["state"], "active");
        assert_eq!(body["step_index"], 0);
    }

    #[tokio::test]
    async fn test_forged_session_cookie_is_rejected_without_tour_state() {
        let state = state_with(Arc::new(ScriptedModel::silent()));
        let app = build_router(state.clone());

        let mut forged = Role::Recruiter.demo_user();
        forged.id = uuid::Uuid::new_v4();
        let cookies = format!(
            "{SESSION_KEY}={}; {VISIT_KEY}={}",
            forged.to_cookie_value().unwrap(),
            uuid::Uuid::new_v4()
        );

        let response = app
            .clone()
            .oneshot(post_with_cookies("/api/v1/tour/start", &cookies))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(state.tours.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_unissued_visit_is_rejected_without_tour_state() {
        let state = state_with(Arc::new(ScriptedModel::silent()));
        let app = build_router(state.clone());

        for _ in 0..50 {
            let cookies = format!("{}; {VISIT_KEY}={}", cookie(Role::Admin), uuid::Uuid::new_v4());
            let response = app
                .clone()
                .oneshot(post_with_cookies("/api/v1/tour/start", &cookies))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
        assert!(state.tours.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_recruiter_can_create_and_publish_job() {
        let app = app();
        let created = app
            .clone()
            .oneshot(post_json(
                "/api/v1/jobs",
                Role::Recruiter,
                json!({
                    "title": "QA Engineer",
                    "department": "Engineering",
                    "location": "Remote",
                    "employment_type": "contract",
                    "description": "Own our test automation."
                }),
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let id = json_body(created).await["id"].as_str().unwrap().to_string();

        let publish = Request::builder()
            .method("PATCH")
            .uri(format!("/api/v1/jobs/{id}/status"))
            .header(header::COOKIE, cookie(Role::Recruiter))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"status": "open"}"#))
            .unwrap();
        assert_eq!(app.clone().oneshot(publish).await.unwrap().status(), StatusCode::OK);

        let public = app.oneshot(get_as(&format!("/jobs/{id}"), None)).await.unwrap();
        assert_eq!(public.status(), StatusCode::OK);
    }
}
