//! Invoice data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    data::updated_row,
    error::AppError,
    model::invoice::{CreateInvoiceParams, Invoice},
};

pub struct InvoiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateInvoiceParams) -> Result<Invoice, AppError> {
        let now = Utc::now();

        let entity = entity::invoice::ActiveModel {
            client: ActiveValue::Set(params.client),
            amount: ActiveValue::Set(params.amount),
            date: ActiveValue::Set(params.date),
            due_date: ActiveValue::Set(params.due_date),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            service: ActiveValue::Set(params.service),
            client_id: ActiveValue::Set(params.client_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Invoice::from_entity(entity)
    }

    /// Gets all invoices, newest invoice date first.
    pub async fn get_all(&self) -> Result<Vec<Invoice>, AppError> {
        entity::prelude::Invoice::find()
            .order_by_desc(entity::invoice::Column::Date)
            .order_by_desc(entity::invoice::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Invoice::from_entity)
            .collect()
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, AppError> {
        entity::prelude::Invoice::find_by_id(id)
            .one(self.db)
            .await?
            .map(Invoice::from_entity)
            .transpose()
    }

    /// Writes every field of `invoice` back to its row and refreshes `updated_at`.
    ///
    /// Returns `None` when the row was deleted after it was loaded.
    pub async fn save(&self, invoice: Invoice) -> Result<Option<Invoice>, AppError> {
        let entity = entity::invoice::ActiveModel {
            id: ActiveValue::Unchanged(invoice.id),
            client: ActiveValue::Set(invoice.client),
            amount: ActiveValue::Set(invoice.amount),
            date: ActiveValue::Set(invoice.date),
            due_date: ActiveValue::Set(invoice.due_date),
            status: ActiveValue::Set(invoice.status.as_str().to_string()),
            service: ActiveValue::Set(invoice.service),
            client_id: ActiveValue::Set(invoice.client_id),
            created_at: ActiveValue::Unchanged(invoice.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await;

        updated_row(entity)?.map(Invoice::from_entity).transpose()
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Invoice::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
