//! Employee factory for creating test employee records.

use crate::factory::helpers::{next_id, utc_date};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let employee = EmployeeFactory::new(&db)
///     .department("Design")
///     .salary(4200.0)
///     .status("Inactive")
///     .build()
///     .await?;
/// ```
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    department: String,
    position: String,
    salary: f64,
    status: String,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Employee {id}"`
    /// - email: `"employee{id}@example.com"`
    /// - department: `"Development"`
    /// - position: `"Engineer"`
    /// - salary: `3000.0`
    /// - status: `"Active"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Employee {}", id),
            email: format!("employee{}@example.com", id),
            department: "Development".to_string(),
            position: "Engineer".to_string(),
            salary: 3000.0,
            status: "Active".to_string(),
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

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn salary(mut self, salary: f64) -> Self {
        self.salary = salary;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the employee record.
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        let now = Utc::now();
        entity::employee::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set("555-0101".to_string()),
            position: ActiveValue::Set(self.position),
            department: ActiveValue::Set(self.department),
            hire_date: ActiveValue::Set(utc_date(2023, 1, 9)),
            salary: ActiveValue::Set(self.salary),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active employee with default values.
pub async fn create_employee(db: &DatabaseConnection) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).build().await
}
