use crate::{
    model::department::{CreateDepartmentDto, UpdateDepartmentDto},
    server::{error::AppError, service::department::DepartmentService},
};
use test_utils::{builder::TestBuilder, factory, factory::employee::EmployeeFactory};

mod write;
