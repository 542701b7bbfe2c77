//! Domain & parameter models for employees.
//!
//! The employee `department` is a denormalized label; it is matched against department names
//! by equality at aggregation time and never resolved to a department record.

use chrono::{DateTime, Utc};

use crate::{
    model::employee::{CreateEmployeeDto, EmployeeDto, UpdateEmployeeDto},
    server::{
        error::{internal::InternalError, AppError},
        service::validation::parse_date,
    },
};

/// Employment status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub const LABELS: &'static [&'static str] = &["Active", "Inactive"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Active" => Some(Self::Active),
            "Inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// The employee domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub hire_date: DateTime<Utc>,
    pub salary: f64,
    pub status: EmployeeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Converts an entity model to the employee domain model
    ///
    /// # Returns
    /// - `Ok(Employee)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownStoredStatus))` - Stored status is not in the vocabulary
    pub fn from_entity(entity: entity::employee::Model) -> Result<Self, AppError> {
        let status =
            EmployeeStatus::from_label(&entity.status).ok_or(InternalError::UnknownStoredStatus {
                kind: "employee",
                id: entity.id,
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            position: entity.position,
            department: entity.department,
            hire_date: entity.hire_date,
            salary: entity.salary,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> EmployeeDto {
        EmployeeDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            position: self.position,
            department: self.department,
            hire_date: self.hire_date,
            salary: self.salary,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Applies a partial update, replacing only the fields present in `patch`.
    pub fn apply(&mut self, patch: EmployeePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(hire_date) = patch.hire_date {
            self.hire_date = hire_date;
        }
        if let Some(salary) = patch.salary {
            self.salary = salary;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Parameters for creating a new employee. Only built after validation passes.
#[derive(Debug, Clone)]
pub struct CreateEmployeeParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub hire_date: DateTime<Utc>,
    pub salary: f64,
    pub status: EmployeeStatus,
}

impl CreateEmployeeParams {
    /// Builds params from a validated DTO. Status defaults to `Active`.
    pub fn from_dto(dto: CreateEmployeeDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            position: dto.position.unwrap_or_default(),
            department: dto.department.unwrap_or_default(),
            hire_date: dto
                .hire_date
                .as_deref()
                .and_then(parse_date)
                .unwrap_or_else(Utc::now),
            salary: dto.salary.unwrap_or_default(),
            status: dto
                .status
                .as_deref()
                .and_then(EmployeeStatus::from_label)
                .unwrap_or_default(),
        }
    }
}

/// Caller-supplied employee fields for a partial update.
#[derive(Debug, Clone, Default)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub hire_date: Option<DateTime<Utc>>,
    pub salary: Option<f64>,
    pub status: Option<EmployeeStatus>,
}

impl EmployeePatch {
    /// Builds a patch from a validated DTO.
    pub fn from_dto(dto: UpdateEmployeeDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            position: dto.position,
            department: dto.department,
            hire_date: dto.hire_date.as_deref().and_then(parse_date),
            salary: dto.salary,
            status: dto.status.as_deref().and_then(EmployeeStatus::from_label),
        }
    }
}
