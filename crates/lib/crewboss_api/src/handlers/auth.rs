//! Authentication request handler.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::AuthRequest;
use crate::services::auth;

/// `POST /api/auth` — action-dispatched register/login/verify/update-keys.
pub async fn auth_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    // Decode into the action enum by hand so an unknown or missing action
    // yields the endpoint's own 400 body instead of an extractor rejection.
    let request: AuthRequest =
        serde_json::from_value(body).map_err(|_| AppError::Validation("Invalid action".into()))?;

    let store = &state.store;
    let secret = state.config.jwt_secret.as_bytes();

    match request {
        AuthRequest::Register {
            email,
            password,
            name,
            company,
        } => {
            let resp = auth::register(store, secret, &email, &password, &name, &company)?;
            Ok(Json(resp).into_response())
        }
        AuthRequest::Login { email, password } => {
            let resp = auth::login(store, secret, &email, &password)?;
            Ok(Json(resp).into_response())
        }
        AuthRequest::Verify { token } => {
            let resp = auth::verify(store, secret, &token)?;
            Ok(Json(resp).into_response())
        }
        AuthRequest::UpdateKeys {
            token,
            jobtread_api_key,
            anthropic_api_key,
        } => {
            let resp = auth::update_keys(store, secret, &token, jobtread_api_key, anthropic_api_key)?;
            Ok(Json(resp).into_response())
        }
    }
}
