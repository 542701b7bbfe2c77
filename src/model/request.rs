use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub description: String,
    pub status: String,
    pub found_us: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projection returned by the filtered request listing.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestListItemDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub description: String,
    pub status: String,
    pub date: DateTime<Utc>,
}

/// Projection returned by the recent-requests dashboard query.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentRequestDto {
    pub id: i32,
    pub name: String,
    pub service: String,
    pub phone: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub status: String,
}

/// Public contact-form submission.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub found_us: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatedRequestDto {
    pub message: String,
    pub request: RequestDto,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct UpdateRequestStatusDto {
    pub status: Option<String>,
}

/// Query parameters for the request listing. `all` disables the status/service filters.
#[derive(Serialize, Deserialize, Default, Clone, Debug, IntoParams)]
pub struct RequestQueryDto {
    pub status: Option<String>,
    pub service: Option<String>,
    pub search: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCountDto {
    pub service: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceCountDto {
    /// Acquisition source; `null` groups requests that did not say.
    pub source: Option<String>,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestStatsDto {
    pub total_requests: u64,
    pub service_breakdown: Vec<ServiceCountDto>,
    pub source_breakdown: Vec<SourceCountDto>,
    pub active_clients: u64,
    /// Mean (updated - created) over contacted requests, in milliseconds.
    pub avg_response_time: f64,
}
