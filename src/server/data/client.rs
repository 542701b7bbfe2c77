//! Client data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    data::updated_row,
    error::AppError,
    model::client::{Client, CreateClientParams, DEFAULT_CLIENT_STATUS},
};

pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new client with the default status.
    ///
    /// # Returns
    /// - `Ok(Client)` - The stored client
    /// - `Err(AppError::DuplicateKey)` - Another client already uses the email
    pub async fn create(&self, params: CreateClientParams) -> Result<Client, AppError> {
        let now = Utc::now();

        let entity = entity::client::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            company: ActiveValue::Set(params.company),
            status: ActiveValue::Set(DEFAULT_CLIENT_STATUS.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Client::from_entity(entity))
    }

    /// Gets all clients in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Client>, AppError> {
        let entities = entity::prelude::Client::find()
            .order_by_asc(entity::client::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Client::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Client>, AppError> {
        let entity = entity::prelude::Client::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Client::from_entity))
    }

    /// Writes every field of `client` back to its row and refreshes `updated_at`.
    ///
    /// Returns `None` when the row was deleted after it was loaded.
    pub async fn save(&self, client: Client) -> Result<Option<Client>, AppError> {
        let entity = entity::client::ActiveModel {
            id: ActiveValue::Unchanged(client.id),
            name: ActiveValue::Set(client.name),
            email: ActiveValue::Set(client.email),
            phone: ActiveValue::Set(client.phone),
            company: ActiveValue::Set(client.company),
            status: ActiveValue::Set(client.status),
            created_at: ActiveValue::Unchanged(client.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await;

        Ok(updated_row(entity)?.map(Client::from_entity))
    }

    /// Deletes a client. Invoices referencing it are left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No client with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Client::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
