//! AI schedule generation handler.
//!
//! The optimization itself happens inside the model; this handler only
//! assembles the parameters and enforces the JSON output discipline.

use axum::Json;
use axum::extract::State;
use serde_json::json;

use crewboss_core::anthropic::{AnthropicClient, ChatMessage};
use crewboss_core::prompts;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{SchedulerRequest, SchedulerResponse};

const DEFAULT_CREW: [&str; 6] = [
    "Carlos M.", "James R.", "Luis P.", "Marco T.", "Kevin W.", "Andre J.",
];

/// `POST /api/scheduler` — generate an optimized crew schedule.
pub async fn scheduler_handler(
    State(state): State<AppState>,
    Json(body): Json<SchedulerRequest>,
) -> AppResult<Json<SchedulerResponse>> {
    let api_key = body
        .anthropic_api_key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| AppError::Validation("Anthropic API key required".into()))?;

    let jobs = body.jobs.unwrap_or_else(|| json!([]));
    let crew = body.crew_members.unwrap_or_else(|| json!(DEFAULT_CREW));
    let date_range = body
        .date_range
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Next 5 business days starting from today".into());
    let constraints = body.constraints.filter(|s| !s.is_empty()).unwrap_or_else(|| {
        "Standard 7AM-4PM work hours. Prioritize jobs by deadline. Account for DFW Texas weather."
            .into()
    });

    let user_prompt = format!(
        "Generate an optimized schedule with these parameters:\n\n\
         Active Jobs:\n{}\n\n\
         Available Crew Members:\n{}\n\n\
         Date Range: {date_range}\n\n\
         Constraints:\n{constraints}\n\n\
         Generate a detailed, optimized schedule that maximizes crew utilization and minimizes travel.",
        serde_json::to_string_pretty(&jobs).unwrap_or_default(),
        serde_json::to_string_pretty(&crew).unwrap_or_default(),
    );

    let client = AnthropicClient::new(api_key, state.http.clone());
    let messages = [ChatMessage {
        role: "user".into(),
        content: user_prompt,
    }];
    let schedule = client
        .complete_json(&prompts::scheduler_system_prompt(), &messages)
        .await?;

    Ok(Json(SchedulerResponse { schedule }))
}
