//! JobTread domain models.
//!
//! Wire shapes use camelCase to match the sidebar client.

use serde::{Deserialize, Serialize};

/// A construction job with estimated vs actual financials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub name: String,
    pub status: String,
    pub customer: String,
    pub address: String,
    pub estimated_revenue: f64,
    pub actual_revenue: f64,
    pub estimated_cost: f64,
    pub actual_cost: f64,
    pub start_date: String,
    pub end_date: String,
    /// Completion percentage (0–100).
    pub progress: u8,
}

/// A sales lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: String,
    pub status: String,
    pub estimated_value: f64,
    pub created_at: String,
    pub last_contact: String,
}

/// A scheduled task, inspection, or delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: String,
    pub title: String,
    pub job_name: String,
    pub crew_members: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    #[serde(rename = "type")]
    pub event_type: String,
}

/// Aggregated financial picture across all jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_revenue: f64,
    pub total_costs: f64,
    pub gross_profit: f64,
    pub gross_margin: f64,
    pub open_invoices: u32,
    pub overdue_invoices: u32,
    pub cash_in_flow: f64,
    pub cash_out_flow: f64,
}
