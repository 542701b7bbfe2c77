//! Domain & parameter models for clients.

use chrono::{DateTime, Utc};

use crate::model::client::{ClientDto, CreateClientDto, UpdateClientDto};

/// Status assigned to every newly created client.
pub const DEFAULT_CLIENT_STATUS: &str = "Active";

/// The client domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Converts an entity model to the client domain model
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            company: entity.company,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Applies a partial update, replacing only the fields present in `patch`.
    pub fn apply(&mut self, patch: ClientPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Parameters for creating a new client. Only built after validation passes.
#[derive(Debug, Clone)]
pub struct CreateClientParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl CreateClientParams {
    /// Builds params from a validated DTO; absent fields become empty strings.
    pub fn from_dto(dto: CreateClientDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            company: dto.company.unwrap_or_default(),
        }
    }
}

/// Caller-supplied client fields for a partial update.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: Option<String>,
}

impl From<UpdateClientDto> for ClientPatch {
    fn from(dto: UpdateClientDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            company: dto.company,
            status: dto.status,
        }
    }
}
