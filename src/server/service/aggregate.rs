//! Aggregation engine for the dashboard statistics.
//!
//! Every function here is pure: it takes records freshly read by a service and computes the
//! summary from scratch. Nothing is cached between calls, so identical inputs always give
//! identical outputs.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::Datelike;

use crate::server::model::{
    department::{Department, DepartmentSummary},
    employee::Employee,
    invoice::{Invoice, InvoiceStatus},
    request::{Request, RequestStatus},
    stats::{EmployeeStats, FinanceStats, RequestStats},
};

/// Departments reported when no department records exist.
pub const DEFAULT_DEPARTMENTS: [(&str, f64); 5] = [
    ("Development", 720_000.0),
    ("Design", 336_000.0),
    ("Administration", 300_000.0),
    ("Quality", 240_000.0),
    ("Sales", 350_000.0),
];

/// Computes headcount, salary totals over active employees and the per-department breakdown.
///
/// The breakdown counts active employees only and is ordered by count descending, then by
/// department name.
pub fn employee_stats(employees: &[Employee]) -> EmployeeStats {
    let active: Vec<&Employee> = employees.iter().filter(|e| e.is_active()).collect();

    let total_salaries: f64 = active.iter().map(|e| e.salary).sum();
    let avg_salary = if active.is_empty() {
        0.0
    } else {
        total_salaries / active.len() as f64
    };

    let mut counts: HashMap<&str, u64> = HashMap::new();
    for employee in &active {
        *counts.entry(employee.department.as_str()).or_default() += 1;
    }

    let mut department_counts: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(department, count)| (department.to_string(), count))
        .collect();
    department_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    EmployeeStats {
        total_employees: employees.len() as u64,
        active_employees: active.len() as u64,
        total_salaries,
        avg_salary,
        department_counts,
    }
}

/// Joins departments with the number of active employees carrying each department's name.
///
/// Falls back to [`DEFAULT_DEPARTMENTS`] when `departments` is empty. Stored departments are
/// returned in the order given.
pub fn department_stats(
    departments: &[Department],
    employees: &[Employee],
) -> Vec<DepartmentSummary> {
    let mut headcount: HashMap<&str, u64> = HashMap::new();
    for employee in employees.iter().filter(|e| e.is_active()) {
        *headcount.entry(employee.department.as_str()).or_default() += 1;
    }

    let count_for = |name: &str| headcount.get(name).copied().unwrap_or(0);

    if departments.is_empty() {
        return DEFAULT_DEPARTMENTS
            .iter()
            .map(|(name, budget)| DepartmentSummary {
                name: name.to_string(),
                budget: *budget,
                employee_count: count_for(name),
            })
            .collect();
    }

    departments
        .iter()
        .map(|department| DepartmentSummary {
            name: department.name.clone(),
            budget: department.budget,
            employee_count: count_for(&department.name),
        })
        .collect()
}

/// Computes revenue totals, revenue by service and month buckets for `year`.
///
/// Only paid invoices feed the service and monthly breakdowns. Months without revenue are
/// omitted.
pub fn finance_stats(invoices: &[Invoice], year: i32) -> FinanceStats {
    let total_for = |status: InvoiceStatus| -> f64 {
        invoices
            .iter()
            .filter(|invoice| invoice.status == status)
            .map(|invoice| invoice.amount)
            .sum()
    };

    let mut by_service: BTreeMap<&str, f64> = BTreeMap::new();
    let mut by_month: BTreeMap<u32, f64> = BTreeMap::new();

    for invoice in invoices
        .iter()
        .filter(|invoice| invoice.status == InvoiceStatus::Paid)
    {
        *by_service.entry(invoice.service.as_str()).or_default() += invoice.amount;

        if invoice.date.year() == year {
            *by_month.entry(invoice.date.month()).or_default() += invoice.amount;
        }
    }

    FinanceStats {
        total_revenue: invoices.iter().map(|invoice| invoice.amount).sum(),
        pending_amount: total_for(InvoiceStatus::Pending),
        overdue_amount: total_for(InvoiceStatus::Overdue),
        revenue_by_service: by_service
            .into_iter()
            .map(|(service, value)| (service.to_string(), value))
            .collect(),
        monthly_revenue: by_month.into_iter().collect(),
    }
}

/// Computes request counts, acquisition sources and the average response time.
///
/// `active_clients` counts distinct submitter emails across all requests, which approximates
/// the number of clients rather than counting client records. Response time is the mean of
/// `updated_at - created_at` over requests in `Contacted`, in milliseconds.
pub fn request_stats(requests: &[Request]) -> RequestStats {
    let mut by_service: BTreeMap<&str, u64> = BTreeMap::new();
    let mut by_source: BTreeMap<Option<&str>, u64> = BTreeMap::new();
    let mut emails: HashSet<&str> = HashSet::new();

    for request in requests {
        *by_service.entry(request.service.as_str()).or_default() += 1;
        *by_source.entry(request.found_us.as_deref()).or_default() += 1;
        emails.insert(request.email.as_str());
    }

    let response_times: Vec<i64> = requests
        .iter()
        .filter(|request| request.status == RequestStatus::Contacted)
        .map(|request| (request.updated_at - request.created_at).num_milliseconds())
        .collect();

    let avg_response_time_ms = if response_times.is_empty() {
        0.0
    } else {
        response_times.iter().sum::<i64>() as f64 / response_times.len() as f64
    };

    RequestStats {
        total_requests: requests.len() as u64,
        service_breakdown: by_service
            .into_iter()
            .map(|(service, count)| (service.to_string(), count))
            .collect(),
        source_breakdown: by_source
            .into_iter()
            .map(|(source, count)| (source.map(str::to_string), count))
            .collect(),
        active_clients: emails.len() as u64,
        avg_response_time_ms,
    }
}
