//! REST endpoints exposing the progress engine to UIs and routing guards.
//!
//! Read-only: nothing here persists user data.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::debug;

use super::model::MilestoneDefinition;
use super::progress::ProgressCalculator;
use super::snapshot::UserSnapshot;

/// Shared state for progress routes.
#[derive(Clone, Default)]
pub struct ProgressRouteState {
    pub calculator: ProgressCalculator,
}

/// Build the progress REST routes.
pub fn progress_routes(state: ProgressRouteState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/onboarding/milestones", get(list_milestones))
        .route("/api/onboarding/milestones/{step}", get(milestone_by_step))
        .route("/api/onboarding/milestones/{step}/next", get(next_milestone))
        .route("/api/onboarding/progress", post(progress))
        .route("/api/onboarding/resume", post(resume))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "onboarding-progress"
    }))
}

// ── Registry ────────────────────────────────────────────────────────────

/// GET /api/onboarding/milestones
async fn list_milestones(State(state): State<ProgressRouteState>) -> impl IntoResponse {
    Json(state.calculator.registry().milestones())
}

/// GET /api/onboarding/milestones/{step}
///
/// 404 when no milestone sits at exactly that step (including negatives).
async fn milestone_by_step(
    State(state): State<ProgressRouteState>,
    Path(step): Path<i64>,
) -> Response {
    let found = u32::try_from(step)
        .ok()
        .and_then(|s| state.calculator.registry().get_milestone_by_step(s));
    milestone_or_404(found, step)
}

/// GET /api/onboarding/milestones/{step}/next
///
/// A negative step precedes every milestone, so the first one is next.
async fn next_milestone(
    State(state): State<ProgressRouteState>,
    Path(step): Path<i64>,
) -> Response {
    let registry = state.calculator.registry();
    let found = match u32::try_from(step) {
        Ok(s) => registry.get_next_milestone(s),
        Err(_) if step < 0 => registry.milestones().first(),
        Err(_) => None,
    };
    milestone_or_404(found, step)
}

fn milestone_or_404(found: Option<&MilestoneDefinition>, step: i64) -> Response {
    match found {
        Some(milestone) => Json(milestone).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("No milestone for step {step}") })),
        )
            .into_response(),
    }
}

// ── Progress ────────────────────────────────────────────────────────────

/// Parse a request body as a snapshot. Non-object JSON is an empty snapshot.
fn parse_snapshot(body: &str) -> Result<UserSnapshot, Response> {
    if body.trim().is_empty() {
        return Ok(UserSnapshot::new());
    }
    UserSnapshot::from_json_str(body).map_err(|e| {
        debug!(error = %e, "Rejected malformed progress snapshot");
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response()
    })
}

/// POST /api/onboarding/progress
///
/// Body: the user record as JSON. Returns the full progress report.
async fn progress(State(state): State<ProgressRouteState>, body: String) -> Response {
    match parse_snapshot(&body) {
        Ok(snapshot) => Json(state.calculator.calculate(&snapshot)).into_response(),
        Err(rejection) => rejection,
    }
}

/// POST /api/onboarding/resume
///
/// Body: the user record as JSON. Returns where a routing guard should
/// send the user next.
async fn resume(State(state): State<ProgressRouteState>, body: String) -> Response {
    match parse_snapshot(&body) {
        Ok(snapshot) => {
            let report = state.calculator.calculate(&snapshot);
            Json(json!({
                "route": report.resume_route(),
                "complete": report.is_complete(),
                "currentStep": report.current_step,
            }))
            .into_response()
        }
        Err(rejection) => rejection,
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    async fn call(request: Request<Body>) -> (StatusCode, Value) {
        let app = progress_routes(ProgressRouteState::default());
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, json) = call(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn lists_all_milestones_in_order() {
        let (status, json) = call(get("/api/onboarding/milestones")).await;
        assert_eq!(status, StatusCode::OK);
        let list = json.as_array().unwrap();
        assert_eq!(list.len(), 15);
        assert_eq!(list[0]["id"], "email_setup");
        assert_eq!(list[14]["id"], "review_complete");
    }

    #[tokio::test]
    async fn milestone_by_step_and_404() {
        let (status, json) = call(get("/api/onboarding/milestones/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], "investment_goal");

        let (status, _) = call(get("/api/onboarding/milestones/15")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = call(get("/api/onboarding/milestones/-1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn next_milestone_handles_edges() {
        let (_, json) = call(get("/api/onboarding/milestones/0/next")).await;
        assert_eq!(json["id"], "password_setup");

        let (_, json) = call(get("/api/onboarding/milestones/-5/next")).await;
        assert_eq!(json["id"], "email_setup");

        let (status, _) = call(get("/api/onboarding/milestones/14/next")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn progress_for_partial_record() {
        let (status, json) = call(post(
            "/api/onboarding/progress",
            r#"{"email": "a@b.com", "password": "x"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["currentStep"], 2);
        assert_eq!(json["phase"], "Investment Profile");
        assert_eq!(json["progressPercentage"], 13);
        assert_eq!(json["currentMilestone"]["id"], "investment_goal");
    }

    #[tokio::test]
    async fn progress_treats_non_objects_and_empty_body_as_empty() {
        for body in ["[1,2,3]", "null", ""] {
            let (status, json) = call(post("/api/onboarding/progress", body)).await;
            assert_eq!(status, StatusCode::OK, "body {body:?}");
            assert_eq!(json["currentStep"], 0);
        }
    }

    #[tokio::test]
    async fn progress_rejects_malformed_json() {
        let (status, json) = call(post("/api/onboarding/progress", "{email")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn resume_points_at_current_milestone_route() {
        let (status, json) = call(post("/api/onboarding/resume", r#"{"email": "a@b.com"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["route"], "/onboarding/password");
        assert_eq!(json["complete"], false);
    }
}
