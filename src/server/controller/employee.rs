use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        department::DepartmentSummaryDto,
        employee::{CreateEmployeeDto, EmployeeDto, EmployeeStatsDto, UpdateEmployeeDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{department::DepartmentService, employee::EmployeeService},
        state::AppState,
    },
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "employee";

/// List all employees sorted by name.
///
/// # Returns
/// - `200 OK` - Every stored employee
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully retrieved employees", body = Vec<EmployeeDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employees(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let employees = EmployeeService::new(&state.db).get_all().await?;

    Ok(Json(
        employees
            .into_iter()
            .map(|e| e.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Create an employee. The status defaults to `Active`.
///
/// # Returns
/// - `201 Created` - The stored employee
/// - `400 Bad Request` - Field validation failed
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `409 Conflict` - Email already used by another employee
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Successfully created employee", body = EmployeeDto),
        (status = 400, description = "Invalid employee data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let employee = EmployeeService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(employee.into_dto())))
}

/// Update the supplied fields of an employee.
///
/// # Returns
/// - `200 OK` - The updated employee
/// - `400 Bad Request` - Field validation failed
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No employee with that id
/// - `409 Conflict` - Email already used by another employee
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = UpdateEmployeeDto,
    responses(
        (status = 200, description = "Successfully updated employee", body = EmployeeDto),
        (status = 400, description = "Invalid employee data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let employee = EmployeeService::new(&state.db)
        .update(id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

    Ok(Json(employee.into_dto()))
}

/// Delete an employee.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No employee with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Successfully deleted employee", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    if !EmployeeService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    Ok(Json(MessageDto::new("Employee deleted")))
}

/// Headcount, salary totals over active employees and active headcount per department.
///
/// # Returns
/// - `200 OK` - Employee statistics
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/employees/stats",
    tag = EMPLOYEE_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully computed employee statistics", body = EmployeeStatsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let stats = EmployeeService::new(&state.db).stats().await?;

    Ok(Json(stats.into_dto()))
}

/// Departments with budgets and active headcount.
///
/// When no departments are stored, the five default departments are reported instead.
///
/// # Returns
/// - `200 OK` - Department summaries
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/employees/departments",
    tag = EMPLOYEE_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully computed department statistics", body = Vec<DepartmentSummaryDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_department_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let summaries = DepartmentService::new(&state.db).summaries().await?;

    Ok(Json(
        summaries
            .into_iter()
            .map(|s| s.into_dto())
            .collect::<Vec<_>>(),
    ))
}
