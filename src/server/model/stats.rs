//! Domain models produced by the aggregation engine.
//!
//! Every figure defaults to zero and every breakdown to an empty list when no rows match.

use crate::model::{
    employee::{DepartmentCountDto, EmployeeStatsDto, SalaryStatsDto},
    invoice::{FinanceStatsDto, MonthlyRevenueDto, ServiceRevenueDto},
    request::{RequestStatsDto, ServiceCountDto, SourceCountDto},
};

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeStats {
    pub total_employees: u64,
    pub active_employees: u64,
    /// Salary sum over active employees.
    pub total_salaries: f64,
    /// Salary mean over active employees; 0 when there are none.
    pub avg_salary: f64,
    /// Active employees per department label, descending by count.
    pub department_counts: Vec<(String, u64)>,
}

impl EmployeeStats {
    pub fn into_dto(self) -> EmployeeStatsDto {
        EmployeeStatsDto {
            total_employees: self.total_employees,
            active_employees: self.active_employees,
            salary_stats: SalaryStatsDto {
                total_salaries: self.total_salaries,
                avg_salary: self.avg_salary,
            },
            department_stats: self
                .department_counts
                .into_iter()
                .map(|(department, count)| DepartmentCountDto { department, count })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinanceStats {
    pub total_revenue: f64,
    pub pending_amount: f64,
    pub overdue_amount: f64,
    /// Paid amount per service, ascending by service name.
    pub revenue_by_service: Vec<(String, f64)>,
    /// Paid amount per calendar month (1-12) of the reporting year, ascending by month.
    pub monthly_revenue: Vec<(u32, f64)>,
}

impl FinanceStats {
    pub fn into_dto(self) -> FinanceStatsDto {
        FinanceStatsDto {
            total_revenue: self.total_revenue,
            pending_amount: self.pending_amount,
            overdue_amount: self.overdue_amount,
            revenue_by_service: self
                .revenue_by_service
                .into_iter()
                .map(|(service, value)| ServiceRevenueDto { service, value })
                .collect(),
            monthly_revenue: self
                .monthly_revenue
                .into_iter()
                .map(|(month, revenue)| MonthlyRevenueDto { month, revenue })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestStats {
    pub total_requests: u64,
    pub service_breakdown: Vec<(String, u64)>,
    pub source_breakdown: Vec<(Option<String>, u64)>,
    /// Distinct requester emails across all requests.
    ///
    /// This approximates active clients by conflating requesters with clients; it is kept
    /// as-is pending product clarification.
    pub active_clients: u64,
    /// Mean (updated_at - created_at) of contacted requests in milliseconds.
    pub avg_response_time_ms: f64,
}

impl RequestStats {
    pub fn into_dto(self) -> RequestStatsDto {
        RequestStatsDto {
            total_requests: self.total_requests,
            service_breakdown: self
                .service_breakdown
                .into_iter()
                .map(|(service, count)| ServiceCountDto { service, count })
                .collect(),
            source_breakdown: self
                .source_breakdown
                .into_iter()
                .map(|(source, count)| SourceCountDto { source, count })
                .collect(),
            active_clients: self.active_clients,
            avg_response_time: self.avg_response_time_ms,
        }
    }
}
