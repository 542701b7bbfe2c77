use sea_orm::DatabaseConnection;

use crate::{
    model::employee::{CreateEmployeeDto, UpdateEmployeeDto},
    server::{
        data::employee::EmployeeRepository,
        error::AppError,
        model::{
            employee::{CreateEmployeeParams, Employee, EmployeePatch, EmployeeStatus},
            stats::EmployeeStats,
        },
        service::{
            aggregate,
            validation::{Rule, Validator},
        },
    },
};

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateEmployeeDto) -> Result<Employee, AppError> {
        Validator::new()
            .text("name", dto.name.as_deref(), &[Rule::Required])
            .text("email", dto.email.as_deref(), &[Rule::Required, Rule::Email])
            .text("phone", dto.phone.as_deref(), &[Rule::Required])
            .text("position", dto.position.as_deref(), &[Rule::Required])
            .text("department", dto.department.as_deref(), &[Rule::Required])
            .text("hireDate", dto.hire_date.as_deref(), &[Rule::Required, Rule::Date])
            .number("salary", dto.salary, &[Rule::Required, Rule::NonNegative])
            .text(
                "status",
                dto.status.as_deref(),
                &[Rule::OneOf(EmployeeStatus::LABELS)],
            )
            .finish()?;

        EmployeeRepository::new(self.db)
            .create(CreateEmployeeParams::from_dto(dto))
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<Employee>, AppError> {
        EmployeeRepository::new(self.db).get_all().await
    }

    /// Merges the supplied fields into an existing employee
    /// Returns None if the employee doesn't exist
    pub async fn update(
        &self,
        id: i32,
        dto: UpdateEmployeeDto,
    ) -> Result<Option<Employee>, AppError> {
        Validator::new()
            .text("name", dto.name.as_deref(), &[Rule::NotBlank])
            .text("email", dto.email.as_deref(), &[Rule::NotBlank, Rule::Email])
            .text("phone", dto.phone.as_deref(), &[Rule::NotBlank])
            .text("position", dto.position.as_deref(), &[Rule::NotBlank])
            .text("department", dto.department.as_deref(), &[Rule::NotBlank])
            .text("hireDate", dto.hire_date.as_deref(), &[Rule::Date])
            .number("salary", dto.salary, &[Rule::NonNegative])
            .text(
                "status",
                dto.status.as_deref(),
                &[Rule::OneOf(EmployeeStatus::LABELS)],
            )
            .finish()?;

        let repo = EmployeeRepository::new(self.db);

        let Some(mut employee) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        employee.apply(EmployeePatch::from_dto(dto));

        repo.save(employee).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = EmployeeRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!("Deleted employee {}", id);
        }

        Ok(deleted)
    }

    /// Computes headcount and salary statistics from a fresh read
    pub async fn stats(&self) -> Result<EmployeeStats, AppError> {
        let employees = EmployeeRepository::new(self.db).get_all().await?;

        Ok(aggregate::employee_stats(&employees))
    }
}
