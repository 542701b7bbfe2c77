//! Domain & parameter models for service requests.
//!
//! Defines the request domain model, the lifecycle status vocabulary and the normalized filter
//! used by the request listing.

use chrono::{DateTime, Utc};

use crate::{
    model::request::{
        CreateRequestDto, RecentRequestDto, RequestDto, RequestListItemDto, RequestQueryDto,
    },
    server::error::{internal::InternalError, AppError},
};

/// Lifecycle status of a service request.
///
/// The intended flow is New → Contacted → In Progress → Completed, with Cancelled reachable
/// from any non-terminal state. Transitions are not ordered; see `service::lifecycle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestStatus {
    #[default]
    New,
    Contacted,
    InProgress,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 5] = [
        Self::New,
        Self::Contacted,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Exact, case-sensitive match against the display labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == label)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// The service request domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub description: String,
    pub status: RequestStatus,
    pub found_us: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Request {
    /// Converts an entity model to the request domain model
    ///
    /// # Returns
    /// - `Ok(Request)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownStoredStatus))` - Stored status is not in the vocabulary
    pub fn from_entity(entity: entity::request::Model) -> Result<Self, AppError> {
        let status =
            RequestStatus::from_label(&entity.status).ok_or(InternalError::UnknownStoredStatus {
                kind: "request",
                id: entity.id,
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            service: entity.service,
            description: entity.description,
            status,
            found_us: entity.found_us,
            date: entity.date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> RequestDto {
        RequestDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            service: self.service,
            description: self.description,
            status: self.status.as_str().to_string(),
            found_us: self.found_us,
            date: self.date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_list_item_dto(self) -> RequestListItemDto {
        RequestListItemDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            service: self.service,
            description: self.description,
            status: self.status.as_str().to_string(),
            date: self.date,
        }
    }

    pub fn into_recent_dto(self) -> RecentRequestDto {
        RecentRequestDto {
            id: self.id,
            name: self.name,
            service: self.service,
            phone: self.phone,
            description: self.description,
            date: self.date,
            status: self.status.as_str().to_string(),
        }
    }
}

/// Parameters for creating a new service request. Only built after validation passes.
#[derive(Debug, Clone)]
pub struct CreateRequestParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub description: String,
    pub status: RequestStatus,
    pub found_us: Option<String>,
}

impl CreateRequestParams {
    /// Builds params from a validated DTO with an already-resolved initial status.
    pub fn from_dto(dto: CreateRequestDto, status: RequestStatus) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            service: dto.service.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            status,
            found_us: dto.found_us.filter(|source| !source.trim().is_empty()),
        }
    }
}

/// Value that disables the status or service filter.
const MATCH_ALL: &str = "all";

/// Normalized request listing filter.
///
/// `None` means the dimension is unrestricted. `search` is matched case-insensitively as a
/// substring of name, email or service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub status: Option<String>,
    pub service: Option<String>,
    pub search: Option<String>,
}

impl RequestFilter {
    /// Normalizes raw query parameters: blank values and `all` become `None`.
    pub fn from_query(query: RequestQueryDto) -> Self {
        Self {
            status: exact_filter(query.status),
            service: exact_filter(query.service),
            search: query
                .search
                .map(|term| term.trim().to_string())
                .filter(|term| !term.is_empty()),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.status.is_none() && self.service.is_none() && self.search.is_none()
    }
}

fn exact_filter(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != MATCH_ALL)
}
