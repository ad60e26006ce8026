//! JobTread data handler.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use chrono::{Days, Utc};
use serde_json::Value;

use crewboss_core::jobtread::JobTreadClient;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{
    DashboardResponse, FinancialsResponse, JobTreadParams, JobTreadRequest, JobsResponse,
    LeadsResponse, ScheduleResponse,
};

fn today() -> String {
    Utc::now().date_naive().to_string()
}

fn week_from_today() -> String {
    let today = Utc::now().date_naive();
    today
        .checked_add_days(Days::new(7))
        .unwrap_or(today)
        .to_string()
}

/// Schedule window from params, defaulting to today .. today+7d.
fn schedule_window(params: &JobTreadParams) -> (String, String) {
    let start = params
        .start_date
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(today);
    let end = params
        .end_date
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(week_from_today);
    (start, end)
}

/// `POST /api/jobtread` — action-dispatched project-management queries.
///
/// Without an API key every action serves demo data.
pub async fn jobtread_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let request: JobTreadRequest =
        serde_json::from_value(body).map_err(|_| AppError::Validation("Invalid action".into()))?;

    match request {
        JobTreadRequest::GetJobs {
            jobtread_api_key,
            params,
        } => {
            let client = JobTreadClient::new(jobtread_api_key, state.http.clone());
            let jobs = client.get_jobs(params.status.as_deref()).await?;
            Ok(Json(JobsResponse { jobs }).into_response())
        }
        JobTreadRequest::GetLeads { jobtread_api_key } => {
            let client = JobTreadClient::new(jobtread_api_key, state.http.clone());
            let leads = client.get_leads().await?;
            Ok(Json(LeadsResponse { leads }).into_response())
        }
        JobTreadRequest::GetSchedule {
            jobtread_api_key,
            params,
        } => {
            let client = JobTreadClient::new(jobtread_api_key, state.http.clone());
            let (start, end) = schedule_window(&params);
            let schedule = client.get_schedule(&start, &end).await?;
            Ok(Json(ScheduleResponse { schedule }).into_response())
        }
        JobTreadRequest::GetFinancials { jobtread_api_key } => {
            let client = JobTreadClient::new(jobtread_api_key, state.http.clone());
            let financials = client.get_financial_summary().await?;
            Ok(Json(FinancialsResponse { financials }).into_response())
        }
        JobTreadRequest::GetDashboard { jobtread_api_key } => {
            let client = JobTreadClient::new(jobtread_api_key, state.http.clone());
            let (start, end) = schedule_window(&JobTreadParams::default());
            let (jobs, leads, schedule, financials) = tokio::join!(
                client.get_jobs(None),
                client.get_leads(),
                client.get_schedule(&start, &end),
                client.get_financial_summary(),
            );
            Ok(Json(DashboardResponse {
                jobs: jobs?,
                leads: leads?,
                schedule: schedule?,
                financials: financials?,
            })
            .into_response())
        }
    }
}
