use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    pub id: i32,
    pub client: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: String,
    pub service: String,
    pub client_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an invoice. Dates accept RFC 3339 or `YYYY-MM-DD`.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceDto {
    pub client: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub service: Option<String>,
    pub client_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceDto {
    pub client: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub service: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRevenueDto {
    pub service: String,
    pub value: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenueDto {
    /// Calendar month, 1 = January.
    pub month: u32,
    pub revenue: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinanceStatsDto {
    pub total_revenue: f64,
    pub pending_amount: f64,
    pub overdue_amount: f64,
    pub revenue_by_service: Vec<ServiceRevenueDto>,
    pub monthly_revenue: Vec<MonthlyRevenueDto>,
}
