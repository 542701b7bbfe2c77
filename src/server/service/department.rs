use sea_orm::DatabaseConnection;

use crate::{
    model::department::{CreateDepartmentDto, UpdateDepartmentDto},
    server::{
        data::{department::DepartmentRepository, employee::EmployeeRepository},
        error::AppError,
        model::department::{
            CreateDepartmentParams, Department, DepartmentPatch, DepartmentSummary,
        },
        service::{
            aggregate,
            validation::{Rule, Validator},
        },
    },
};

pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateDepartmentDto) -> Result<Department, AppError> {
        Validator::new()
            .text("name", dto.name.as_deref(), &[Rule::Required])
            .number("budget", dto.budget, &[Rule::NonNegative])
            .finish()?;

        DepartmentRepository::new(self.db)
            .create(CreateDepartmentParams::from_dto(dto))
            .await
    }

    /// Merges the supplied fields into an existing department
    /// Returns None if the department doesn't exist
    pub async fn update(
        &self,
        id: i32,
        dto: UpdateDepartmentDto,
    ) -> Result<Option<Department>, AppError> {
        Validator::new()
            .text("name", dto.name.as_deref(), &[Rule::NotBlank])
            .number("budget", dto.budget, &[Rule::NonNegative])
            .finish()?;

        let repo = DepartmentRepository::new(self.db);

        let Some(mut department) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        department.apply(DepartmentPatch::from(dto));

        repo.save(department).await
    }

    /// Deletes a department. Employees keep their department label.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = DepartmentRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!("Deleted department {}", id);
        }

        Ok(deleted)
    }

    /// Lists departments with their active headcount, falling back to the default table
    /// when none are stored
    pub async fn summaries(&self) -> Result<Vec<DepartmentSummary>, AppError> {
        let departments = DepartmentRepository::new(self.db).get_all().await?;
        let employees = EmployeeRepository::new(self.db).get_all().await?;

        Ok(aggregate::department_stats(&departments, &employees))
    }
}
