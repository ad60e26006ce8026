//! AI assistant chat handler.

use axum::Json;
use axum::extract::State;

use crewboss_core::anthropic::AnthropicClient;
use crewboss_core::prompts;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatRequest, ChatResponse};

/// `POST /api/chat` — send a conversation to the assistant.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let api_key = body
        .anthropic_api_key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            AppError::Validation("Anthropic API key is required. Add it in Settings.".into())
        })?;

    if body.messages.is_empty() {
        return Err(AppError::Validation("Messages are required".into()));
    }

    let client = AnthropicClient::new(api_key, state.http.clone());
    let system = prompts::chat_system_prompt(body.job_context.as_ref());
    let completion = client.complete(&system, &body.messages).await?;

    Ok(Json(ChatResponse {
        reply: completion.text,
        usage: completion.usage,
    }))
}
