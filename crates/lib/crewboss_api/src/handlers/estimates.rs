//! AI estimate generation handler.

use axum::Json;
use axum::extract::State;

use crewboss_core::anthropic::{AnthropicClient, ChatMessage};
use crewboss_core::prompts;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{EstimateRequest, EstimateResponse};

fn param<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().filter(|s| !s.is_empty()).unwrap_or(default)
}

/// `POST /api/estimates` — generate a structured construction estimate.
pub async fn estimate_handler(
    State(state): State<AppState>,
    Json(body): Json<EstimateRequest>,
) -> AppResult<Json<EstimateResponse>> {
    let api_key = body
        .anthropic_api_key
        .clone()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| AppError::Validation("Anthropic API key required".into()))?;

    let user_prompt = format!(
        "Generate a detailed estimate with these parameters:\n\
         - Trade Type: {}\n\
         - Project Name: {}\n\
         - Customer: {}\n\
         - Measurements: {}\n\
         - Material Grade: {}\n\
         - Labor Market: {}\n\
         - Target Profit Margin: {}\n\
         - Location: {}\n\n\
         Generate a complete, accurate estimate ready to present to the customer.",
        param(&body.trade_type, "Roofing - Shingle"),
        param(&body.project_name, "Residential Reroof"),
        param(&body.customer_name, "Homeowner"),
        param(&body.measurements, "2,000 sq ft roof, standard pitch 6/12"),
        param(&body.material_grade, "Mid-range (30-year architectural shingles)"),
        param(&body.labor_market, "DFW Texas metro - current rates"),
        param(&body.profit_margin, "35%"),
        param(&body.location, "Dallas-Fort Worth, TX"),
    );

    let client = AnthropicClient::new(api_key, state.http.clone());
    let messages = [ChatMessage {
        role: "user".into(),
        content: user_prompt,
    }];
    let estimate = client
        .complete_json(&prompts::estimate_system_prompt(), &messages)
        .await?;

    Ok(Json(EstimateResponse { estimate }))
}
