//! Invoice factory for creating test invoice records.

use crate::factory::helpers::utc_date;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test invoices with customizable fields.
pub struct InvoiceFactory<'a> {
    db: &'a DatabaseConnection,
    client: String,
    amount: f64,
    date: DateTime<Utc>,
    status: String,
    service: String,
    client_id: Option<i32>,
}

impl<'a> InvoiceFactory<'a> {
    /// Creates a new InvoiceFactory with default values.
    ///
    /// Defaults:
    /// - client: `"Acme"`
    /// - amount: `100.0`
    /// - date: `2024-01-15`
    /// - status: `"Pending"`
    /// - service: `"Consulting"`
    /// - client_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            client: "Acme".to_string(),
            amount: 100.0,
            date: utc_date(2024, 1, 15),
            status: "Pending".to_string(),
            service: "Consulting".to_string(),
            client_id: None,
        }
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn client_id(mut self, client_id: i32) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Builds and inserts the invoice record. The due date is 30 days after `date`.
    pub async fn build(self) -> Result<entity::invoice::Model, DbErr> {
        let now = Utc::now();
        entity::invoice::ActiveModel {
            client: ActiveValue::Set(self.client),
            amount: ActiveValue::Set(self.amount),
            date: ActiveValue::Set(self.date),
            due_date: ActiveValue::Set(self.date + Duration::days(30)),
            status: ActiveValue::Set(self.status),
            service: ActiveValue::Set(self.service),
            client_id: ActiveValue::Set(self.client_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending invoice with default values.
pub async fn create_invoice(db: &DatabaseConnection) -> Result<entity::invoice::Model, DbErr> {
    InvoiceFactory::new(db).build().await
}
