//! Integration tests for the panel endpoints: health, AI feature validation,
//! and the JobTread demo-data path (no network involved).

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use crewboss_api::config::ApiConfig;
use crewboss_api::{AppState, router};

fn test_app() -> Router {
    router(AppState::new(ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        jwt_secret: "test-secret".into(),
    }))
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_reports_version() {
    let app = test_app();
    let req = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&bytes).expect("parse JSON");
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn ai_endpoints_require_an_api_key() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/api/chat",
        json!({ "messages": [{ "role": "user", "content": "hi" }] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Anthropic API key is required. Add it in Settings.");

    let (status, body) = post(&app, "/api/estimates", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Anthropic API key required");

    let (status, body) = post(&app, "/api/scheduler", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Anthropic API key required");
}

#[tokio::test]
async fn chat_requires_messages() {
    let app = test_app();
    let (status, body) = post(
        &app,
        "/api/chat",
        json!({ "anthropicApiKey": "sk-ant", "messages": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Messages are required");
}

#[tokio::test]
async fn jobtread_serves_demo_data_without_a_key() {
    let app = test_app();

    let (status, body) = post(&app, "/api/jobtread", json!({ "action": "getJobs" })).await;
    assert_eq!(status, StatusCode::OK);
    let jobs = body["jobs"].as_array().expect("jobs array");
    assert_eq!(jobs.len(), 5);
    assert_eq!(jobs[0]["customer"], "John Smith");

    let (status, body) = post(&app, "/api/jobtread", json!({ "action": "getFinancials" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["financials"]["grossProfit"], 69300.0);
}

#[tokio::test]
async fn dashboard_aggregates_all_sections() {
    let app = test_app();
    let (status, body) = post(&app, "/api/jobtread", json!({ "action": "getDashboard" })).await;
    assert_eq!(status, StatusCode::OK);
    for section in ["jobs", "leads", "schedule", "financials"] {
        assert!(!body[section].is_null(), "missing '{section}' section");
    }
    assert!(!body["schedule"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn jobtread_unknown_action_rejected() {
    let app = test_app();
    let (status, body) = post(&app, "/api/jobtread", json!({ "action": "deleteJobs" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid action");
}
