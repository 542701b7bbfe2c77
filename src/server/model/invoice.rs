//! Domain & parameter models for invoices.
//!
//! `client` is a free-text name and `client_id` a weak reference to a client record; neither is
//! resolved, and deleting a client leaves its invoices untouched.

use chrono::{DateTime, Utc};

use crate::{
    model::invoice::{CreateInvoiceDto, InvoiceDto, UpdateInvoiceDto},
    server::{
        error::{internal::InternalError, AppError},
        service::validation::parse_date,
    },
};

/// Invoice payment status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub const LABELS: &'static [&'static str] = &["Pending", "Paid", "Overdue"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Pending" => Some(Self::Pending),
            "Paid" => Some(Self::Paid),
            "Overdue" => Some(Self::Overdue),
            _ => None,
        }
    }
}

/// The invoice domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: i32,
    pub client: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: InvoiceStatus,
    pub service: String,
    pub client_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Converts an entity model to the invoice domain model
    ///
    /// # Returns
    /// - `Ok(Invoice)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownStoredStatus))` - Stored status is not in the vocabulary
    pub fn from_entity(entity: entity::invoice::Model) -> Result<Self, AppError> {
        let status =
            InvoiceStatus::from_label(&entity.status).ok_or(InternalError::UnknownStoredStatus {
                kind: "invoice",
                id: entity.id,
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            client: entity.client,
            amount: entity.amount,
            date: entity.date,
            due_date: entity.due_date,
            status,
            service: entity.service,
            client_id: entity.client_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> InvoiceDto {
        InvoiceDto {
            id: self.id,
            client: self.client,
            amount: self.amount,
            date: self.date,
            due_date: self.due_date,
            status: self.status.as_str().to_string(),
            service: self.service,
            client_id: self.client_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Applies a partial update, replacing only the fields present in `patch`.
    pub fn apply(&mut self, patch: InvoicePatch) {
        if let Some(client) = patch.client {
            self.client = client;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(service) = patch.service {
            self.service = service;
        }
    }
}

/// Parameters for creating a new invoice. Only built after validation passes.
#[derive(Debug, Clone)]
pub struct CreateInvoiceParams {
    pub client: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: InvoiceStatus,
    pub service: String,
    pub client_id: Option<i32>,
}

impl CreateInvoiceParams {
    /// Builds params from a validated DTO. Status defaults to `Pending`.
    pub fn from_dto(dto: CreateInvoiceDto) -> Self {
        let date = dto
            .date
            .as_deref()
            .and_then(parse_date)
            .unwrap_or_else(Utc::now);

        Self {
            client: dto.client.unwrap_or_default(),
            amount: dto.amount.unwrap_or_default(),
            date,
            due_date: dto.due_date.as_deref().and_then(parse_date).unwrap_or(date),
            status: dto
                .status
                .as_deref()
                .and_then(InvoiceStatus::from_label)
                .unwrap_or_default(),
            service: dto.service.unwrap_or_default(),
            client_id: dto.client_id,
        }
    }
}

/// Caller-supplied invoice fields for a partial update.
#[derive(Debug, Clone, Default)]
pub struct InvoicePatch {
    pub client: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<InvoiceStatus>,
    pub service: Option<String>,
}

impl InvoicePatch {
    /// Builds a patch from a validated DTO.
    pub fn from_dto(dto: UpdateInvoiceDto) -> Self {
        Self {
            client: dto.client,
            amount: dto.amount,
            date: dto.date.as_deref().and_then(parse_date),
            due_date: dto.due_date.as_deref().and_then(parse_date),
            status: dto.status.as_deref().and_then(InvoiceStatus::from_label),
            service: dto.service,
        }
    }
}
