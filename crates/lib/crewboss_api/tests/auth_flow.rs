//! Integration tests — drive the auth endpoint through the router and check
//! the register/login/verify/update-keys lifecycle, including recovery from
//! loss of the in-memory store.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use crewboss_api::config::ApiConfig;
use crewboss_api::{AppState, router};

fn test_state() -> AppState {
    AppState::new(ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        jwt_secret: "test-secret".into(),
    })
}

async fn auth_call(app: &Router, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/auth")
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

fn register_body(email: &str) -> Value {
    json!({
        "action": "register",
        "email": email,
        "password": "hunter22",
        "name": "Nick",
        "company": "Better Boss"
    })
}

#[tokio::test]
async fn register_then_login_round_trip() {
    let app = router(test_state());

    let (status, registered) = auth_call(&app, register_body("nick@better-boss.ai")).await;
    assert_eq!(status, StatusCode::OK);
    let token = registered["token"].as_str().expect("token");
    assert!(!token.is_empty());
    assert_eq!(registered["user"]["email"], "nick@better-boss.ai");

    let (status, logged_in) = auth_call(
        &app,
        json!({ "action": "login", "email": "nick@better-boss.ai", "password": "hunter22" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logged_in["user"]["id"], registered["user"]["id"]);
    assert_eq!(logged_in["user"]["hasJobtreadKey"], false);
    assert_eq!(logged_in["user"]["hasAnthropicKey"], false);

    // The token's verify must yield the same public profile.
    let (status, verified) = auth_call(&app, json!({ "action": "verify", "token": token })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verified["user"], registered["user"]);
}

#[tokio::test]
async fn login_is_case_insensitive_on_email() {
    let app = router(test_state());
    auth_call(&app, register_body("Nick@Better-Boss.AI")).await;

    let (status, body) = auth_call(
        &app,
        json!({ "action": "login", "email": "nick@better-boss.ai", "password": "hunter22" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "nick@better-boss.ai");
}

#[tokio::test]
async fn missing_fields_rejected() {
    let app = router(test_state());
    let (status, body) = auth_call(
        &app,
        json!({ "action": "register", "email": "a@b.com", "password": "pw" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All fields are required");

    let (status, body) = auth_call(&app, json!({ "action": "login", "email": "a@b.com" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email and password are required");
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let app = router(test_state());
    auth_call(&app, register_body("a@b.com")).await;

    let (status, body) = auth_call(&app, register_body("A@B.com")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn wrong_password_always_invalid() {
    let app = router(test_state());
    auth_call(&app, register_body("a@b.com")).await;

    // No lockout: repeated attempts keep failing the same way.
    for _ in 0..2 {
        let (status, body) = auth_call(
            &app,
            json!({ "action": "login", "email": "a@b.com", "password": "wrong" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid password");
    }
}

#[tokio::test]
async fn login_requires_existing_account() {
    let app = router(test_state());
    let (status, body) = auth_call(
        &app,
        json!({ "action": "login", "email": "nobody@b.com", "password": "pw" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Account not found. Please create an account first.");
}

#[tokio::test]
async fn partial_key_updates_accumulate() {
    let app = router(test_state());
    let (_, registered) = auth_call(&app, register_body("a@b.com")).await;
    let token = registered["token"].as_str().unwrap();

    let (status, body) = auth_call(
        &app,
        json!({ "action": "update-keys", "token": token, "jobtreadApiKey": "jt-key" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hasJobtreadKey"], true);
    assert_eq!(body["hasAnthropicKey"], false);

    // Setting the other key must not clobber the first.
    let (status, body) = auth_call(
        &app,
        json!({ "action": "update-keys", "token": token, "anthropicApiKey": "sk-ant" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hasJobtreadKey"], true);
    assert_eq!(body["hasAnthropicKey"], true);

    // An explicit empty string clears a key.
    let (_, body) = auth_call(
        &app,
        json!({ "action": "update-keys", "token": token, "jobtreadApiKey": "" }),
    )
    .await;
    assert_eq!(body["hasJobtreadKey"], false);
    assert_eq!(body["hasAnthropicKey"], true);
}

#[tokio::test]
async fn token_survives_store_loss() {
    let app = router(test_state());
    let (_, registered) = auth_call(&app, register_body("a@b.com")).await;
    let token = registered["token"].as_str().unwrap().to_string();
    let original_id = registered["user"]["id"].clone();

    // Simulate a process restart: fresh store, same signing secret.
    let restarted = router(test_state());

    // verify reconciles the record; the caller can't tell it was ever lost.
    let (status, verified) =
        auth_call(&restarted, json!({ "action": "verify", "token": token })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verified["user"]["id"], original_id);

    // update-keys works against the reconciled record.
    let (status, body) = auth_call(
        &restarted,
        json!({ "action": "update-keys", "token": token, "anthropicApiKey": "sk-ant" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hasAnthropicKey"], true);

    // But password login cannot: the reconciled record has no hash.
    let (status, body) = auth_call(
        &restarted,
        json!({ "action": "login", "email": "a@b.com", "password": "hunter22" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Session expired. Please create a new account.");

    // Re-registering upgrades the ghost record instead of conflicting,
    // keeping the original id.
    let (status, re_registered) = auth_call(&restarted, register_body("a@b.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(re_registered["user"]["id"], original_id);

    let (status, _) = auth_call(
        &restarted,
        json!({ "action": "login", "email": "a@b.com", "password": "hunter22" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn invalid_tokens_rejected() {
    let app = router(test_state());

    let (status, body) =
        auth_call(&app, json!({ "action": "verify", "token": "not-a-token" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");

    let (status, body) = auth_call(
        &app,
        json!({ "action": "update-keys", "token": "not-a-token", "jobtreadApiKey": "jt" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn tokens_from_another_secret_rejected() {
    let app = router(test_state());
    let (_, registered) = auth_call(&app, register_body("a@b.com")).await;
    let token = registered["token"].as_str().unwrap().to_string();

    // Restart with a different secret: all outstanding tokens die.
    let other = router(AppState::new(ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        jwt_secret: "another-secret".into(),
    }));
    let (status, _) = auth_call(&other, json!({ "action": "verify", "token": token })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_action_rejected() {
    let app = router(test_state());
    let (status, body) = auth_call(&app, json!({ "action": "logout" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid action");
}
