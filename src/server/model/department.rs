//! Domain & parameter models for departments.

use chrono::{DateTime, Utc};

use crate::model::department::{
    CreateDepartmentDto, DepartmentDto, DepartmentSummaryDto, UpdateDepartmentDto,
};

/// The department domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub budget: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    pub fn from_entity(entity: entity::department::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            budget: entity.budget,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DepartmentDto {
        DepartmentDto {
            id: self.id,
            name: self.name,
            budget: self.budget,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Applies a partial update, replacing only the fields present in `patch`.
    pub fn apply(&mut self, patch: DepartmentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(budget) = patch.budget {
            self.budget = budget;
        }
    }
}

/// Department name and budget with the number of active employees carrying its label.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSummary {
    pub name: String,
    pub budget: f64,
    pub employee_count: u64,
}

impl DepartmentSummary {
    pub fn into_dto(self) -> DepartmentSummaryDto {
        DepartmentSummaryDto {
            name: self.name,
            budget: self.budget,
            employee_count: self.employee_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDepartmentParams {
    pub name: String,
    pub budget: f64,
}

impl CreateDepartmentParams {
    /// Builds params from a validated DTO; the budget defaults to 0.
    pub fn from_dto(dto: CreateDepartmentDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            budget: dto.budget.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DepartmentPatch {
    pub name: Option<String>,
    pub budget: Option<f64>,
}

impl From<UpdateDepartmentDto> for DepartmentPatch {
    fn from(dto: UpdateDepartmentDto) -> Self {
        Self {
            name: dto.name,
            budget: dto.budget,
        }
    }
}
