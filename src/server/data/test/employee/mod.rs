use crate::server::{
    data::employee::EmployeeRepository,
    error::{internal::InternalError, AppError},
    model::employee::{CreateEmployeeParams, EmployeePatch, EmployeeStatus},
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;
mod save;
