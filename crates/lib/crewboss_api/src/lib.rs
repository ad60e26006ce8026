//! # crewboss_api
//!
//! HTTP API library for Crewboss.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crewboss_core::auth::store::CredentialStore;

use crate::config::ApiConfig;
use crate::handlers::{auth, chat, estimates, health, jobtread, scheduler};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory credential store; lifetime equals the process lifetime.
    pub store: Arc<CredentialStore>,
    /// API configuration.
    pub config: ApiConfig,
    /// Shared HTTP client for upstream calls.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            store: Arc::new(CredentialStore::new()),
            config,
            http: reqwest::Client::new(),
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    // The sidebar runs in the browser against whatever origin hosts it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/auth", post(auth::auth_handler))
        .route("/api/chat", post(chat::chat_handler))
        .route("/api/estimates", post(estimates::estimate_handler))
        .route("/api/scheduler", post(scheduler::scheduler_handler))
        .route("/api/jobtread", post(jobtread::jobtread_handler))
        .layer(cors)
        .with_state(state)
}
