use sea_orm::DatabaseConnection;

use crate::{
    model::client::{CreateClientDto, UpdateClientDto},
    server::{
        data::client::ClientRepository,
        error::AppError,
        model::client::{Client, ClientPatch, CreateClientParams},
        service::validation::{Rule, Validator},
    },
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new client
    pub async fn create(&self, dto: CreateClientDto) -> Result<Client, AppError> {
        Validator::new()
            .text("name", dto.name.as_deref(), &[Rule::Required])
            .text("email", dto.email.as_deref(), &[Rule::Required, Rule::Email])
            .text("phone", dto.phone.as_deref(), &[Rule::Required])
            .text("company", dto.company.as_deref(), &[Rule::Required])
            .finish()?;

        let repo = ClientRepository::new(self.db);

        repo.create(CreateClientParams::from_dto(dto)).await
    }

    pub async fn get_all(&self) -> Result<Vec<Client>, AppError> {
        ClientRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Client>, AppError> {
        ClientRepository::new(self.db).find_by_id(id).await
    }

    /// Merges the supplied fields into an existing client
    /// Returns None if the client doesn't exist
    pub async fn update(&self, id: i32, dto: UpdateClientDto) -> Result<Option<Client>, AppError> {
        Validator::new()
            .text("name", dto.name.as_deref(), &[Rule::NotBlank])
            .text("email", dto.email.as_deref(), &[Rule::NotBlank, Rule::Email])
            .text("phone", dto.phone.as_deref(), &[Rule::NotBlank])
            .text("company", dto.company.as_deref(), &[Rule::NotBlank])
            .text("status", dto.status.as_deref(), &[Rule::NotBlank])
            .finish()?;

        let repo = ClientRepository::new(self.db);

        let Some(mut client) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        client.apply(ClientPatch::from(dto));

        repo.save(client).await
    }

    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = ClientRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!("Deleted client {}", id);
        }

        Ok(deleted)
    }
}
