use crate::{
    model::employee::{CreateEmployeeDto, UpdateEmployeeDto},
    server::{
        error::AppError, model::employee::EmployeeStatus, service::employee::EmployeeService,
    },
};
use test_utils::{builder::TestBuilder, factory::employee::EmployeeFactory};

mod create;
mod stats;
mod update;
