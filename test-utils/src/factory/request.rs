//! Service request factory for creating test request records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test service requests with customizable fields.
///
/// `created_at`, `updated_at` and `date` all default to the current time; override them to
/// control ordering and response-time statistics.
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    service: String,
    status: String,
    found_us: Option<String>,
    date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a> RequestFactory<'a> {
    /// Creates a new RequestFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Requester {id}"`
    /// - email: `"requester{id}@example.com"`
    /// - service: `"Consulting"`
    /// - status: `"New"`
    /// - found_us: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            name: format!("Requester {}", id),
            email: format!("requester{}@example.com", id),
            service: "Consulting".to_string(),
            status: "New".to_string(),
            found_us: None,
            date: now,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn found_us(mut self, found_us: impl Into<String>) -> Self {
        self.found_us = Some(found_us.into());
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the creation and last-update timestamps.
    pub fn timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the request record.
    pub async fn build(self) -> Result<entity::request::Model, DbErr> {
        entity::request::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set("555-0102".to_string()),
            service: ActiveValue::Set(self.service),
            description: ActiveValue::Set("Needs a quote".to_string()),
            status: ActiveValue::Set(self.status),
            found_us: ActiveValue::Set(self.found_us),
            date: ActiveValue::Set(self.date),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a new-status request with default values.
pub async fn create_request(db: &DatabaseConnection) -> Result<entity::request::Model, DbErr> {
    RequestFactory::new(db).build().await
}
