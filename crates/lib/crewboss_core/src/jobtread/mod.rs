//! JobTread GraphQL client.
//!
//! Wraps the JobTread API behind typed queries for jobs, leads, schedule and
//! financials. With no API key configured every query serves static demo
//! data, so the sidebar works out of the box; with a key, authentication
//! failures (401/403) surface distinctly from other upstream errors.

pub mod demo;

use serde_json::{Value, json};
use thiserror::Error;
use tracing::debug;

use crate::models::jobtread::{FinancialSummary, Job, Lead, ScheduleEvent};

const GRAPHQL_URL: &str = "https://app.jobtread.com/graphql";

/// JobTread API errors.
#[derive(Debug, Error)]
pub enum JobTreadError {
    #[error("Invalid JobTread API key. Check your key in Settings.")]
    InvalidKey,

    #[error("Could not connect to JobTread: {0}. Check your API key and network connection.")]
    Transport(String),

    #[error("JobTread API error: {0}")]
    Api(String),
}

/// JobTread GraphQL client.
///
/// `api_key = None` puts the client in demo mode.
pub struct JobTreadClient {
    api_key: Option<String>,
    http: reqwest::Client,
}

impl JobTreadClient {
    /// An empty key is treated the same as no key at all.
    pub fn new(api_key: Option<String>, http: reqwest::Client) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            http,
        }
    }

    /// Whether the client talks to the live API rather than demo data.
    pub fn is_live(&self) -> bool {
        self.api_key.is_some()
    }

    async fn query(&self, query: &str, variables: Option<Value>) -> Result<Value, JobTreadError> {
        // Callers check `is_live` first; demo mode never reaches here.
        let api_key = self.api_key.as_deref().unwrap_or_default();

        let mut body = json!({ "query": query });
        if let Some(vars) = variables {
            body["variables"] = vars;
        }

        let response = self
            .http
            .post(GRAPHQL_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| JobTreadError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(JobTreadError::InvalidKey);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!(%status, "jobtread request failed");
            return Err(JobTreadError::Api(format!("{status}: {text}")));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| JobTreadError::Api(format!("unreadable response: {e}")))?;

        if let Some(errors) = payload.get("errors").and_then(Value::as_array) {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .collect();
            return Err(JobTreadError::Api(messages.join(", ")));
        }

        Ok(payload.get("data").cloned().unwrap_or(Value::Null))
    }

    /// Jobs, optionally filtered by status.
    pub async fn get_jobs(&self, status: Option<&str>) -> Result<Vec<Job>, JobTreadError> {
        if !self.is_live() {
            return Ok(demo::demo_jobs());
        }

        let filter = match status {
            Some(status) => format!(r#"(filter: {{ status: "{status}" }}, first: 50)"#),
            None => "(first: 50)".to_string(),
        };
        let query = format!(
            r#"query {{
                jobs{filter} {{
                    edges {{
                        node {{
                            id
                            name
                            status
                            customer {{ name }}
                            location {{ formattedAddress }}
                            estimatedRevenue
                            actualRevenue
                            estimatedCost
                            actualCost
                            startDate
                            endDate
                        }}
                    }}
                }}
            }}"#
        );

        let data = self.query(&query, None).await?;
        Ok(map_jobs(&data))
    }

    /// Leads — customers at an early pipeline stage.
    pub async fn get_leads(&self) -> Result<Vec<Lead>, JobTreadError> {
        if !self.is_live() {
            return Ok(demo::demo_leads());
        }

        let query = r#"query {
            customers(first: 20) {
                edges {
                    node {
                        id
                        name
                        contacts(first: 1) { edges { node { email phone } } }
                        jobs(first: 1) { edges { node { status estimatedRevenue } } }
                        createdAt
                    }
                }
            }
        }"#;

        let data = self.query(query, None).await?;
        Ok(map_leads(&data))
    }

    /// Scheduled tasks inside a date range (inclusive, YYYY-MM-DD).
    pub async fn get_schedule(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<ScheduleEvent>, JobTreadError> {
        if !self.is_live() {
            return Ok(demo::demo_schedule());
        }

        let query = r#"query($startDate: String!, $endDate: String!) {
            tasks(filter: { startDate: { gte: $startDate }, endDate: { lte: $endDate } }, first: 50) {
                edges {
                    node {
                        id
                        name
                        job { name }
                        assignees { name }
                        startDate
                        endDate
                        status
                        type
                    }
                }
            }
        }"#;

        let variables = json!({ "startDate": start_date, "endDate": end_date });
        let data = self.query(query, Some(variables)).await?;
        Ok(map_schedule(&data))
    }

    /// Aggregated financials, computed from job-level data plus invoices.
    ///
    /// Falls back to a jobs-only aggregate when the invoice query is
    /// rejected by the schema.
    pub async fn get_financial_summary(&self) -> Result<FinancialSummary, JobTreadError> {
        if !self.is_live() {
            return Ok(demo::demo_financials());
        }

        const JOBS_FRAGMENT: &str = r#"jobs(first: 100) {
            edges {
                node {
                    estimatedRevenue
                    actualRevenue
                    estimatedCost
                    actualCost
                }
            }
        }"#;

        let combined = format!(
            r#"query {{
                {JOBS_FRAGMENT}
                documents(filter: {{ type: "invoice" }}, first: 100) {{
                    edges {{
                        node {{
                            status
                            total
                            dueDate
                        }}
                    }}
                }}
            }}"#
        );

        match self.query(&combined, None).await {
            Ok(data) => Ok(summarize_financials(&data)),
            Err(JobTreadError::Api(_)) => {
                let query = format!("query {{ {JOBS_FRAGMENT} }}");
                let data = self.query(&query, None).await?;
                Ok(summarize_jobs_only(&data))
            }
            Err(e) => Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Edge mapping
// ---------------------------------------------------------------------------

fn edges<'a>(data: &'a Value, collection: &str) -> impl Iterator<Item = &'a Value> {
    data[collection]["edges"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .map(|edge| &edge["node"])
}

fn text(node: &Value, field: &str, default: &str) -> String {
    node[field]
        .as_str()
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn num(node: &Value, field: &str) -> f64 {
    node[field].as_f64().unwrap_or(0.0)
}

fn map_jobs(data: &Value) -> Vec<Job> {
    edges(data, "jobs")
        .map(|node| Job {
            id: text(node, "id", ""),
            name: text(node, "name", "Untitled Job"),
            status: text(node, "status", "Unknown"),
            customer: text(&node["customer"], "name", "Unknown"),
            address: text(&node["location"], "formattedAddress", ""),
            estimated_revenue: num(node, "estimatedRevenue"),
            actual_revenue: num(node, "actualRevenue"),
            estimated_cost: num(node, "estimatedCost"),
            actual_cost: num(node, "actualCost"),
            start_date: text(node, "startDate", ""),
            end_date: text(node, "endDate", ""),
            progress: 0,
        })
        .collect()
}

fn map_leads(data: &Value) -> Vec<Lead> {
    edges(data, "customers")
        .map(|node| {
            let contact = &node["contacts"]["edges"][0]["node"];
            let job = &node["jobs"]["edges"][0]["node"];
            Lead {
                id: text(node, "id", ""),
                name: text(node, "name", "Unknown"),
                email: text(contact, "email", ""),
                phone: text(contact, "phone", ""),
                source: "Direct".to_string(),
                status: text(job, "status", "New"),
                estimated_value: num(job, "estimatedRevenue"),
                created_at: text(node, "createdAt", ""),
                last_contact: text(node, "createdAt", ""),
            }
        })
        .collect()
}

fn map_schedule(data: &Value) -> Vec<ScheduleEvent> {
    edges(data, "tasks")
        .map(|node| ScheduleEvent {
            id: text(node, "id", ""),
            title: text(node, "name", "Untitled Task"),
            job_name: text(&node["job"], "name", ""),
            crew_members: node["assignees"]
                .as_array()
                .map(Vec::as_slice)
                .unwrap_or_default()
                .iter()
                .filter_map(|a| a["name"].as_str())
                .map(String::from)
                .collect(),
            start_date: text(node, "startDate", ""),
            end_date: text(node, "endDate", ""),
            status: text(node, "status", "scheduled"),
            event_type: text(node, "type", "task"),
        })
        .collect()
}

/// Revenue and cost for one job node; actuals win when non-zero.
fn job_totals(node: &Value) -> (f64, f64) {
    let revenue = match num(node, "actualRevenue") {
        r if r > 0.0 => r,
        _ => num(node, "estimatedRevenue"),
    };
    let cost = match num(node, "actualCost") {
        c if c > 0.0 => c,
        _ => num(node, "estimatedCost"),
    };
    (revenue, cost)
}

fn summarize_financials(data: &Value) -> FinancialSummary {
    let mut summary = summarize_jobs_only(data);

    let mut open_invoices = 0;
    let mut overdue_invoices = 0;
    let mut cash_in_flow = 0.0;
    let today = chrono::Utc::now().date_naive().to_string();

    for node in edges(data, "documents") {
        match node["status"].as_str() {
            Some("paid") => cash_in_flow += num(node, "total"),
            Some("sent") | Some("open") => {
                open_invoices += 1;
                if node["dueDate"].as_str().is_some_and(|due| due < today.as_str()) {
                    overdue_invoices += 1;
                }
            }
            _ => {}
        }
    }

    summary.open_invoices = open_invoices;
    summary.overdue_invoices = overdue_invoices;
    summary.cash_in_flow = cash_in_flow;
    summary
}

fn summarize_jobs_only(data: &Value) -> FinancialSummary {
    let mut total_revenue = 0.0;
    let mut total_costs = 0.0;
    for node in edges(data, "jobs") {
        let (revenue, cost) = job_totals(node);
        total_revenue += revenue;
        total_costs += cost;
    }

    let gross_profit = total_revenue - total_costs;
    let gross_margin = if total_revenue > 0.0 {
        gross_profit / total_revenue * 100.0
    } else {
        0.0
    };

    FinancialSummary {
        total_revenue,
        total_costs,
        gross_profit,
        gross_margin,
        open_invoices: 0,
        overdue_invoices: 0,
        cash_in_flow: total_revenue,
        cash_out_flow: total_costs,
    }
}
