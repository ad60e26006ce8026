//! Static demonstration data, served whenever no JobTread key is configured.

use chrono::{Days, Utc};

use crate::models::jobtread::{FinancialSummary, Job, Lead, ScheduleEvent};

fn job(
    id: &str,
    name: &str,
    status: &str,
    customer: &str,
    address: &str,
    financials: (f64, f64, f64, f64),
    dates: (&str, &str),
    progress: u8,
) -> Job {
    let (estimated_revenue, actual_revenue, estimated_cost, actual_cost) = financials;
    Job {
        id: id.into(),
        name: name.into(),
        status: status.into(),
        customer: customer.into(),
        address: address.into(),
        estimated_revenue,
        actual_revenue,
        estimated_cost,
        actual_cost,
        start_date: dates.0.into(),
        end_date: dates.1.into(),
        progress,
    }
}

pub fn demo_jobs() -> Vec<Job> {
    vec![
        job(
            "job-001",
            "Smith Residence - Full Reroof",
            "In Progress",
            "John Smith",
            "1234 Oak Lane, Dallas TX",
            (18500.0, 9250.0, 11200.0, 5800.0),
            ("2026-02-03", "2026-02-07"),
            65,
        ),
        job(
            "job-002",
            "Johnson Commercial - TPO Flat Roof",
            "In Progress",
            "Johnson Properties LLC",
            "5678 Business Pkwy, Fort Worth TX",
            (42000.0, 21000.0, 28500.0, 14200.0),
            ("2026-02-01", "2026-02-14"),
            45,
        ),
        job(
            "job-003",
            "Garcia Home - Storm Damage Repair",
            "Scheduled",
            "Maria Garcia",
            "910 Elm St, Arlington TX",
            (8900.0, 0.0, 5200.0, 0.0),
            ("2026-02-10", "2026-02-11"),
            0,
        ),
        job(
            "job-004",
            "Williams Estate - Premium Metal Roof",
            "Estimating",
            "Robert Williams",
            "2468 Maple Dr, Plano TX",
            (35000.0, 0.0, 22000.0, 0.0),
            ("", ""),
            0,
        ),
        job(
            "job-005",
            "Davis Office Park - Maintenance",
            "Completed",
            "Davis Corp",
            "1357 Corporate Blvd, Irving TX",
            (6500.0, 6500.0, 3800.0, 3650.0),
            ("2026-01-28", "2026-01-30"),
            100,
        ),
    ]
}

fn lead(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    source: &str,
    status: &str,
    estimated_value: f64,
    dates: (&str, &str),
) -> Lead {
    Lead {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        source: source.into(),
        status: status.into(),
        estimated_value,
        created_at: dates.0.into(),
        last_contact: dates.1.into(),
    }
}

pub fn demo_leads() -> Vec<Lead> {
    vec![
        lead(
            "lead-001",
            "Sarah Thompson",
            "sarah@email.com",
            "(214) 555-0123",
            "Google Ads",
            "New",
            12000.0,
            ("2026-02-05", "2026-02-05"),
        ),
        lead(
            "lead-002",
            "Mike Chen",
            "mike@email.com",
            "(817) 555-0456",
            "Referral",
            "Contacted",
            28000.0,
            ("2026-02-04", "2026-02-05"),
        ),
        lead(
            "lead-003",
            "Amanda Brooks",
            "amanda@email.com",
            "(972) 555-0789",
            "Website",
            "Proposal Sent",
            15000.0,
            ("2026-02-02", "2026-02-04"),
        ),
        lead(
            "lead-004",
            "David Park",
            "david@email.com",
            "(469) 555-0321",
            "Angi",
            "New",
            9500.0,
            ("2026-02-06", "2026-02-06"),
        ),
    ]
}

fn event(
    id: &str,
    title: &str,
    job_name: &str,
    crew: &[&str],
    days: (String, String),
    status: &str,
    kind: &str,
) -> ScheduleEvent {
    ScheduleEvent {
        id: id.into(),
        title: title.into(),
        job_name: job_name.into(),
        crew_members: crew.iter().map(|c| c.to_string()).collect(),
        start_date: days.0,
        end_date: days.1,
        status: status.into(),
        event_type: kind.into(),
    }
}

pub fn demo_schedule() -> Vec<ScheduleEvent> {
    let today = Utc::now().date_naive();
    let day = |offset: u64| {
        today
            .checked_add_days(Days::new(offset))
            .unwrap_or(today)
            .to_string()
    };
    vec![
        event(
            "evt-001",
            "Tear-off & Deck Inspection",
            "Smith Residence",
            &["Carlos M.", "James R.", "Luis P."],
            (day(0), day(0)),
            "in_progress",
            "task",
        ),
        event(
            "evt-002",
            "Underlayment & Flashing",
            "Smith Residence",
            &["Carlos M.", "James R."],
            (day(1), day(1)),
            "scheduled",
            "task",
        ),
        event(
            "evt-003",
            "TPO Membrane Installation",
            "Johnson Commercial",
            &["Team B - Marco", "Team B - Kevin", "Team B - Andre"],
            (day(0), day(2)),
            "in_progress",
            "task",
        ),
        event(
            "evt-004",
            "Inspection - City of Arlington",
            "Garcia Home",
            &[],
            (day(4), day(4)),
            "scheduled",
            "inspection",
        ),
        event(
            "evt-005",
            "Material Delivery - ABC Supply",
            "Garcia Home",
            &[],
            (day(3), day(3)),
            "scheduled",
            "delivery",
        ),
        event(
            "evt-006",
            "Measurement & Scope",
            "Williams Estate",
            &["Nick P."],
            (day(2), day(2)),
            "scheduled",
            "estimate",
        ),
    ]
}

pub fn demo_financials() -> FinancialSummary {
    FinancialSummary {
        total_revenue: 187500.0,
        total_costs: 118200.0,
        gross_profit: 69300.0,
        gross_margin: 36.9,
        open_invoices: 12,
        overdue_invoices: 2,
        cash_in_flow: 45200.0,
        cash_out_flow: 32100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_jobs_have_unique_ids() {
        let jobs = demo_jobs();
        let mut ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn demo_financials_are_internally_consistent() {
        let f = demo_financials();
        assert_eq!(f.gross_profit, f.total_revenue - f.total_costs);
    }

    #[test]
    fn demo_schedule_dates_are_ordered() {
        for event in demo_schedule() {
            assert!(event.start_date <= event.end_date);
        }
    }
}
