//! Employee data repository.
//!
//! Status labels are parsed into `EmployeeStatus` when rows are read, so every method that
//! returns employees can fail with an internal error on an unknown stored status.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    data::updated_row,
    error::AppError,
    model::employee::{CreateEmployeeParams, Employee},
};

pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new employee.
    ///
    /// # Returns
    /// - `Ok(Employee)` - The stored employee
    /// - `Err(AppError::DuplicateKey)` - Another employee already uses the email
    pub async fn create(&self, params: CreateEmployeeParams) -> Result<Employee, AppError> {
        let now = Utc::now();

        let entity = entity::employee::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            position: ActiveValue::Set(params.position),
            department: ActiveValue::Set(params.department),
            hire_date: ActiveValue::Set(params.hire_date),
            salary: ActiveValue::Set(params.salary),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Employee::from_entity(entity)
    }

    /// Gets all employees sorted by name.
    pub async fn get_all(&self) -> Result<Vec<Employee>, AppError> {
        entity::prelude::Employee::find()
            .order_by_asc(entity::employee::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Employee::from_entity)
            .collect()
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        entity::prelude::Employee::find_by_id(id)
            .one(self.db)
            .await?
            .map(Employee::from_entity)
            .transpose()
    }

    /// Writes every field of `employee` back to its row and refreshes `updated_at`.
    ///
    /// Returns `None` when the row was deleted after it was loaded.
    pub async fn save(&self, employee: Employee) -> Result<Option<Employee>, AppError> {
        let entity = entity::employee::ActiveModel {
            id: ActiveValue::Unchanged(employee.id),
            name: ActiveValue::Set(employee.name),
            email: ActiveValue::Set(employee.email),
            phone: ActiveValue::Set(employee.phone),
            position: ActiveValue::Set(employee.position),
            department: ActiveValue::Set(employee.department),
            hire_date: ActiveValue::Set(employee.hire_date),
            salary: ActiveValue::Set(employee.salary),
            status: ActiveValue::Set(employee.status.as_str().to_string()),
            created_at: ActiveValue::Unchanged(employee.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await;

        updated_row(entity)?.map(Employee::from_entity).transpose()
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Employee::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
