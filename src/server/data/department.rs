//! Department data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    data::updated_row,
    error::AppError,
    model::department::{CreateDepartmentParams, Department},
};

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateDepartmentParams) -> Result<Department, AppError> {
        let now = Utc::now();

        let entity = entity::department::ActiveModel {
            name: ActiveValue::Set(params.name),
            budget: ActiveValue::Set(params.budget),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Department::from_entity(entity))
    }

    /// Gets all departments sorted by name.
    pub async fn get_all(&self) -> Result<Vec<Department>, AppError> {
        let entities = entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Department::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Department>, AppError> {
        let entity = entity::prelude::Department::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Department::from_entity))
    }

    pub async fn save(&self, department: Department) -> Result<Option<Department>, AppError> {
        let entity = entity::department::ActiveModel {
            id: ActiveValue::Unchanged(department.id),
            name: ActiveValue::Set(department.name),
            budget: ActiveValue::Set(department.budget),
            created_at: ActiveValue::Unchanged(department.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await;

        Ok(updated_row(entity)?.map(Department::from_entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Department::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
