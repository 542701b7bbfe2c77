//! Department factory for creating test department records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test departments.
pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    budget: f64,
}

impl<'a> DepartmentFactory<'a> {
    /// Creates a new DepartmentFactory with defaults `"Department {id}"` and a budget of 0.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Department {}", next_id()),
            budget: 0.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    /// Builds and inserts the department record.
    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        let now = Utc::now();
        entity::department::ActiveModel {
            name: ActiveValue::Set(self.name),
            budget: ActiveValue::Set(self.budget),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a department with the given name and budget.
pub async fn create_department(
    db: &DatabaseConnection,
    name: &str,
    budget: f64,
) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db).name(name).budget(budget).build().await
}
