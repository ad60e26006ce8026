//! Wire models for the API surface.
//!
//! Requests arriving as action-dispatched JSON are modeled as internally
//! tagged enums (one variant per action) so dispatch is exhaustive at
//! compile time. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crewboss_core::anthropic::ChatMessage;
use crewboss_core::models::auth::UserPayload;
use crewboss_core::models::jobtread::{FinancialSummary, Job, Lead, ScheduleEvent};

/// Error body shared by every failure response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Auth endpoint
// ---------------------------------------------------------------------------

/// `POST /api/auth` request, dispatched on the `action` field.
///
/// String fields default to empty so that a missing field and an explicitly
/// empty one fail validation the same way; the two optional key fields on
/// `update-keys` distinguish "omitted" from "explicitly cleared".
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum AuthRequest {
    Register {
        #[serde(default)]
        email: String,
        #[serde(default)]
        password: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        company: String,
    },
    Login {
        #[serde(default)]
        email: String,
        #[serde(default)]
        password: String,
    },
    Verify {
        #[serde(default)]
        token: String,
    },
    #[serde(rename_all = "camelCase")]
    UpdateKeys {
        #[serde(default)]
        token: String,
        #[serde(default)]
        jobtread_api_key: Option<String>,
        #[serde(default)]
        anthropic_api_key: Option<String>,
    },
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub token: String,
    pub user: UserPayload,
}

/// Login profile with API-key presence flags (keys themselves are never
/// echoed back).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub company: String,
    pub has_jobtread_key: bool,
    pub has_anthropic_key: bool,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub user: UserPayload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKeysResponse {
    pub success: bool,
    pub has_jobtread_key: bool,
    pub has_anthropic_key: bool,
}

// ---------------------------------------------------------------------------
// AI features
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub anthropic_api_key: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub job_context: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstimateRequest {
    pub anthropic_api_key: Option<String>,
    pub trade_type: Option<String>,
    pub project_name: Option<String>,
    pub customer_name: Option<String>,
    pub measurements: Option<String>,
    pub material_grade: Option<String>,
    pub labor_market: Option<String>,
    pub profit_margin: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub estimate: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerRequest {
    pub anthropic_api_key: Option<String>,
    pub jobs: Option<Value>,
    pub crew_members: Option<Value>,
    pub date_range: Option<String>,
    pub constraints: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SchedulerResponse {
    pub schedule: Value,
}

// ---------------------------------------------------------------------------
// JobTread endpoint
// ---------------------------------------------------------------------------

/// `POST /api/jobtread` request, dispatched on the `action` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum JobTreadRequest {
    #[serde(rename_all = "camelCase")]
    GetJobs {
        #[serde(default)]
        jobtread_api_key: Option<String>,
        #[serde(default)]
        params: JobTreadParams,
    },
    #[serde(rename_all = "camelCase")]
    GetLeads {
        #[serde(default)]
        jobtread_api_key: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    GetSchedule {
        #[serde(default)]
        jobtread_api_key: Option<String>,
        #[serde(default)]
        params: JobTreadParams,
    },
    #[serde(rename_all = "camelCase")]
    GetFinancials {
        #[serde(default)]
        jobtread_api_key: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    GetDashboard {
        #[serde(default)]
        jobtread_api_key: Option<String>,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobTreadParams {
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Serialize)]
pub struct LeadsResponse {
    pub leads: Vec<Lead>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub schedule: Vec<ScheduleEvent>,
}

#[derive(Debug, Serialize)]
pub struct FinancialsResponse {
    pub financials: FinancialSummary,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub jobs: Vec<Job>,
    pub leads: Vec<Lead>,
    pub schedule: Vec<ScheduleEvent>,
    pub financials: FinancialSummary,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
